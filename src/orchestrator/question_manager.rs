//! 题目管理页
//!
//! 持有页面状态和远程客户端，把用户操作分发到对应流程。

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::clients::{HttpQuestionClient, MemoryQuestionClient, QuestionApi};
use crate::config::{Backend, Config};
use crate::models::{DraftField, Question, QuestionId};
use crate::state::{Action, ViewState};
use crate::workflow::list_sync::refresh;
use crate::workflow::{Confirm, DeleteFlow, DeleteOutcome, FormController, SubmitOutcome};

/// 题目管理页
pub struct QuestionManager {
    state: ViewState,
    client: Arc<dyn QuestionApi>,
    form: FormController,
    deleter: DeleteFlow,
    notification_timeout: Duration,
}

impl QuestionManager {
    pub fn new(client: Arc<dyn QuestionApi>, confirm: Box<dyn Confirm>, config: &Config) -> Self {
        Self {
            state: ViewState::new(),
            form: FormController::new(client.clone()),
            deleter: DeleteFlow::new(client.clone(), confirm),
            client,
            notification_timeout: config.notification_timeout(),
        }
    }

    /// 按配置选择后端
    pub fn from_config(config: &Config, confirm: Box<dyn Confirm>) -> Self {
        let client: Arc<dyn QuestionApi> = match config.backend {
            Backend::Http => {
                info!("🌐 使用 HTTP 后端: {}", config.questions_url());
                Arc::new(HttpQuestionClient::new(config))
            }
            Backend::Memory => {
                info!("🧪 使用内存后端");
                Arc::new(MemoryQuestionClient::new())
            }
        };
        Self::new(client, confirm, config)
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// 页面加载：获取一次列表
    pub async fn mount(&mut self) -> bool {
        debug!("页面加载");
        self.refresh().await
    }

    pub async fn refresh(&mut self) -> bool {
        refresh(self.client.as_ref(), &mut self.state).await
    }

    pub fn open_add(&mut self) {
        self.state.dispatch(Action::OpenAdd);
    }

    pub fn open_edit(&mut self, question: Question) {
        self.state.dispatch(Action::OpenEdit(question));
    }

    /// 按表格行号（从 0 开始）打开编辑，行号无效时返回 false
    pub fn open_edit_row(&mut self, row: usize) -> bool {
        match self.state.questions.get(row).cloned() {
            Some(question) => {
                self.open_edit(question);
                true
            }
            None => false,
        }
    }

    pub fn close_dialog(&mut self) {
        self.state.dispatch(Action::CloseDialog);
    }

    pub fn change_field(&mut self, field: DraftField) {
        self.state.dispatch(Action::FieldChange(field));
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        self.form.submit(&mut self.state).await
    }

    pub async fn delete(&mut self, id: &QuestionId) -> DeleteOutcome {
        self.deleter.run(id, &mut self.state).await
    }

    /// 按表格行号删除，行号无效时返回 None
    pub async fn delete_row(&mut self, row: usize) -> Option<DeleteOutcome> {
        let id = self.state.questions.get(row)?.id.clone();
        Some(self.delete(&id).await)
    }

    pub fn close_notification(&mut self) {
        self.state.dispatch(Action::CloseNotification);
    }

    /// 隐藏已过期的通知
    pub fn tick(&mut self, now: Instant) {
        self.state.dispatch(Action::Tick {
            now,
            timeout: self.notification_timeout,
        });
    }
}
