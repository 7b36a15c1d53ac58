//! 编排层（Orchestration Layer）
//!
//! ## 层次关系
//!
//! ```text
//! ui::App (终端输入输出)
//!     ↓
//! orchestrator::QuestionManager (持有 ViewState，分发用户操作)
//!     ↓
//! workflow (FormController / DeleteFlow / list_sync)
//!     ↓
//! clients (QuestionApi：HTTP / 内存)
//! ```
//!
//! 页面状态只在这一层被持有；workflow 通过 `&mut ViewState` 修改它，
//! 所有修改最终都经过 `ViewState::reduce`。

pub mod question_manager;

pub use question_manager::QuestionManager;
