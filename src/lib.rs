//! # Question Manager
//!
//! 问卷题目管理页：通过 REST 接口对题目进行列表、新建、编辑、删除
//!
//! ## 架构设计
//!
//! ### ① 客户端层（Clients）
//! - `clients/` - `QuestionApi`：list / create / update / delete 四个远程操作
//! - `HttpQuestionClient` - 调用 `/api/questions`
//! - `MemoryQuestionClient` - 进程内集合，演示和测试用
//!
//! ### ② 状态层（State）
//! - `state/` - `ViewState` + `Action`，所有状态变化都经过纯函数 `reduce`
//!
//! ### ③ 流程层（Workflow）
//! - `FormController` - 根据是否选中题目决定 create / update
//! - `DeleteFlow` - 确认 → 删除 → 刷新
//! - `list_sync` - 写操作成功后重新获取完整列表
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator::QuestionManager` - 持有页面状态，分发用户操作
//!
//! ### ⑤ 界面（UI）
//! - `ui/` - 终端渲染和命令循环
//!
//! ## 错误处理
//!
//! 远程操作的失败只有一种：`ApiError::RequestFailed`。
//! 错误在每个流程内被捕获并转换为通知，不会继续向上传播。

pub mod clients;
pub mod config;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod state;
pub mod ui;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use clients::{HttpQuestionClient, MemoryQuestionClient, QuestionApi};
pub use config::{Backend, Config};
pub use error::{AppError, AppResult};
pub use models::{DraftField, Notification, Question, QuestionDraft, QuestionId, QuestionType, Severity};
pub use orchestrator::QuestionManager;
pub use state::{Action, ViewState};
pub use workflow::{Confirm, SubmitMode, SubmitOutcome};
