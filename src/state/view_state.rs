//! 页面状态
//!
//! 所有状态变化都经过 `ViewState::reduce`，它是纯函数：
//! 不访问网络，不读时钟（时间由 `Action` 传入）。

use std::time::{Duration, Instant};

use crate::models::{DraftField, Notification, Question, QuestionDraft, Severity};

/// 状态变化
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// 打开"新建"对话框
    OpenAdd,
    /// 打开"编辑"对话框
    OpenEdit(Question),
    /// 关闭对话框（取消或提交成功）
    CloseDialog,
    /// 修改草稿的一个字段
    FieldChange(DraftField),
    /// 用后端返回的列表整体替换
    QuestionsLoaded(Vec<Question>),
    /// 显示通知
    Notify {
        message: String,
        severity: Severity,
        at: Instant,
    },
    /// 手动关闭通知
    CloseNotification,
    /// 时钟推进，过期的通知自动隐藏
    Tick { now: Instant, timeout: Duration },
}

/// 页面状态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    /// 题目列表，只由重新获取来替换
    pub questions: Vec<Question>,
    pub dialog_open: bool,
    /// 正在编辑的题目；为空表示新建
    pub selected: Option<Question>,
    pub draft: QuestionDraft,
    pub notification: Notification,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::OpenAdd => {
                self.selected = None;
                self.draft = QuestionDraft::default();
                self.dialog_open = true;
            }
            Action::OpenEdit(question) => {
                self.draft = question.to_draft();
                self.selected = Some(question);
                self.dialog_open = true;
            }
            Action::CloseDialog => {
                self.dialog_open = false;
                self.selected = None;
                self.draft = QuestionDraft::default();
            }
            Action::FieldChange(field) => field.apply_to(&mut self.draft),
            Action::QuestionsLoaded(questions) => self.questions = questions,
            Action::Notify {
                message,
                severity,
                at,
            } => self.notification = Notification::new(message, severity, at),
            Action::CloseNotification => self.notification.visible = false,
            Action::Tick { now, timeout } => {
                if self.notification.is_expired(now, timeout) {
                    self.notification.visible = false;
                }
            }
        }
        self
    }

    /// 原地应用一次状态变化
    pub fn dispatch(&mut self, action: Action) {
        *self = std::mem::take(self).reduce(action);
    }

    /// 当前是否为编辑模式
    pub fn is_editing(&self) -> bool {
        self.selected.is_some()
    }

    pub fn dialog_title(&self) -> &'static str {
        if self.is_editing() {
            "Edit Question"
        } else {
            "Add New Question"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_editing() {
            "Update"
        } else {
            "Create"
        }
    }
}
