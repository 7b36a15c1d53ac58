//! 表单提交流程
//!
//! 流程顺序：
//! 1. 根据是否选中题目决定 create / update
//! 2. 成功 → 通知 → 关闭对话框 → 重新获取列表
//! 3. 失败 → 错误通知，对话框和草稿保持不变

use std::sync::Arc;

use tracing::{error, info};

use crate::clients::QuestionApi;
use crate::models::{Question, QuestionId, Severity};
use crate::state::{Action, ViewState};
use crate::workflow::list_sync::{notify, refresh};
use crate::workflow::messages;

/// 提交模式，只由 `selected` 决定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitMode {
    Create,
    Update(QuestionId),
}

impl SubmitMode {
    pub fn of(state: &ViewState) -> Self {
        match &state.selected {
            Some(question) => SubmitMode::Update(question.id.clone()),
            None => SubmitMode::Create,
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            SubmitMode::Create => messages::CREATED,
            SubmitMode::Update(_) => messages::UPDATED,
        }
    }
}

/// 提交结果
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// 保存成功，返回后端的记录
    Saved(Question),
    /// 保存失败，草稿保留以便重试
    Failed,
}

/// 表单控制器
pub struct FormController {
    client: Arc<dyn QuestionApi>,
}

impl FormController {
    pub fn new(client: Arc<dyn QuestionApi>) -> Self {
        Self { client }
    }

    /// 提交当前草稿
    pub async fn submit(&self, state: &mut ViewState) -> SubmitOutcome {
        let mode = SubmitMode::of(state);
        let draft = state.draft.clone();

        let result = match &mode {
            SubmitMode::Update(id) => {
                info!("✏️ 更新题目 {}", id);
                self.client.update(id, &draft).await
            }
            SubmitMode::Create => {
                info!("➕ 新建题目");
                self.client.create(&draft).await
            }
        };

        match result {
            Ok(saved) => {
                info!("✅ {} (ID: {})", mode.success_message(), saved.id);
                notify(state, mode.success_message(), Severity::Success);
                state.dispatch(Action::CloseDialog);
                // 刷新失败时，错误通知会覆盖上面的成功通知
                refresh(self.client.as_ref(), state).await;
                SubmitOutcome::Saved(saved)
            }
            Err(e) => {
                error!("❌ 保存题目失败: {}", e);
                notify(state, messages::SUBMIT_FAILED, Severity::Error);
                SubmitOutcome::Failed
            }
        }
    }
}
