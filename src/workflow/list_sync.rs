//! 列表同步
//!
//! 每次写操作成功后都从后端重新获取完整列表，不在本地修补。

use std::time::Instant;

use tracing::{debug, error};

use crate::clients::QuestionApi;
use crate::models::Severity;
use crate::state::{Action, ViewState};
use crate::workflow::messages;

/// 重新获取题目列表
///
/// 失败时列表保持不变，并显示错误通知。返回是否成功。
pub async fn refresh<C>(client: &C, state: &mut ViewState) -> bool
where
    C: QuestionApi + ?Sized,
{
    match client.list().await {
        Ok(questions) => {
            debug!("🔄 列表已刷新，共 {} 道题目", questions.len());
            state.dispatch(Action::QuestionsLoaded(questions));
            true
        }
        Err(e) => {
            error!("❌ 获取题目列表失败: {}", e);
            notify(state, messages::FETCH_FAILED, Severity::Error);
            false
        }
    }
}

/// 以当前时间显示通知
pub fn notify(state: &mut ViewState, message: &str, severity: Severity) {
    state.dispatch(Action::Notify {
        message: message.to_string(),
        severity,
        at: Instant::now(),
    });
}
