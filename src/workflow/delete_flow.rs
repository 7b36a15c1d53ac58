//! 删除流程
//!
//! 确认 → 删除 → 重新获取列表。确认是同步阻塞的，必须先得到同意才发请求。

use std::sync::Arc;

use tracing::{error, info};

use crate::clients::QuestionApi;
use crate::models::{QuestionId, Severity};
use crate::state::ViewState;
use crate::workflow::list_sync::{notify, refresh};
use crate::workflow::messages;

/// 用户确认能力
///
/// 终端里是 y/N 提示，测试里是一个闭包。
pub trait Confirm: Send + Sync {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// 删除结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// 用户取消，没有发请求
    Declined,
    Failed,
}

pub struct DeleteFlow {
    client: Arc<dyn QuestionApi>,
    confirm: Box<dyn Confirm>,
}

impl DeleteFlow {
    pub fn new(client: Arc<dyn QuestionApi>, confirm: Box<dyn Confirm>) -> Self {
        Self { client, confirm }
    }

    pub async fn run(&self, id: &QuestionId, state: &mut ViewState) -> DeleteOutcome {
        if !self.confirm.confirm(messages::CONFIRM_DELETE) {
            info!("🚫 取消删除题目 {}", id);
            return DeleteOutcome::Declined;
        }

        match self.client.delete(id).await {
            Ok(()) => {
                info!("🗑️ 已删除题目 {}", id);
                notify(state, messages::DELETED, Severity::Success);
                refresh(self.client.as_ref(), state).await;
                DeleteOutcome::Deleted
            }
            Err(e) => {
                error!("❌ 删除题目 {} 失败: {}", id, e);
                notify(state, messages::DELETE_FAILED, Severity::Error);
                DeleteOutcome::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::MemoryQuestionClient;
    use crate::error::Operation;
    use crate::models::QuestionDraft;
    use crate::state::Action;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn seeded() -> Arc<MemoryQuestionClient> {
        Arc::new(MemoryQuestionClient::seeded(vec![
            QuestionDraft {
                question_text: "A".to_string(),
                ..Default::default()
            },
            QuestionDraft {
                question_text: "B".to_string(),
                ..Default::default()
            },
        ]))
    }

    #[tokio::test]
    async fn test_declined_sends_nothing() {
        let client = seeded();
        let flow = DeleteFlow::new(client.clone(), Box::new(|_: &str| false));
        let mut state = ViewState::new().reduce(Action::QuestionsLoaded(client.snapshot()));
        let before = state.clone();

        let outcome = flow.run(&"q1".into(), &mut state).await;

        assert_eq!(outcome, DeleteOutcome::Declined);
        assert_eq!(client.count(Operation::Delete), 0);
        assert_eq!(state, before);
    }

    #[tokio::test]
    async fn test_confirm_sees_prompt_once() {
        let client = seeded();
        let asked = Arc::new(AtomicUsize::new(0));
        let counter = asked.clone();
        let flow = DeleteFlow::new(
            client.clone(),
            Box::new(move |message: &str| {
                assert_eq!(message, messages::CONFIRM_DELETE);
                counter.fetch_add(1, Ordering::SeqCst);
                true
            }),
        );
        let mut state = ViewState::new();

        let outcome = flow.run(&"q1".into(), &mut state).await;

        assert_eq!(outcome, DeleteOutcome::Deleted);
        assert_eq!(asked.load(Ordering::SeqCst), 1);
        assert_eq!(state.questions.len(), 1);
        assert_eq!(state.notification.message, messages::DELETED);
    }

    #[tokio::test]
    async fn test_failed_delete_keeps_list() {
        let client = seeded();
        client.fail_next(Operation::Delete);
        let flow = DeleteFlow::new(client.clone(), Box::new(|_: &str| true));
        let mut state = ViewState::new().reduce(Action::QuestionsLoaded(client.snapshot()));

        let outcome = flow.run(&"q2".into(), &mut state).await;

        assert_eq!(outcome, DeleteOutcome::Failed);
        assert_eq!(state.questions.len(), 2);
        assert_eq!(state.notification.message, messages::DELETE_FAILED);
        assert_eq!(state.notification.severity, Severity::Error);
        assert_eq!(client.count(Operation::List), 0);
    }
}
