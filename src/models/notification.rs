use std::time::{Duration, Instant};

/// 通知级别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Success,
    Error,
}

/// 页面底部的临时通知
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Notification {
    pub visible: bool,
    pub message: String,
    pub severity: Severity,
    /// 显示时刻，用于自动隐藏
    pub raised_at: Option<Instant>,
}

impl Notification {
    pub fn new(message: impl Into<String>, severity: Severity, now: Instant) -> Self {
        Self {
            visible: true,
            message: message.into(),
            severity,
            raised_at: Some(now),
        }
    }

    /// 是否已经超过自动隐藏时长
    pub fn is_expired(&self, now: Instant, timeout: Duration) -> bool {
        match self.raised_at {
            Some(raised_at) => self.visible && now.saturating_duration_since(raised_at) >= timeout,
            None => false,
        }
    }
}
