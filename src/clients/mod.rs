//! 题目接口客户端
//!
//! `QuestionApi` 是页面唯一依赖的远程能力，HTTP 和内存两种实现都满足它。

pub mod http_client;
pub mod memory_client;

use async_trait::async_trait;

use crate::error::AppResult;
use crate::models::{Question, QuestionDraft, QuestionId};

pub use http_client::HttpQuestionClient;
pub use memory_client::{ApiCall, MemoryQuestionClient};

/// 题目集合的四个远程操作
///
/// 任何失败都返回 `ApiError::RequestFailed`，调用方不区分原因。
#[async_trait]
pub trait QuestionApi: Send + Sync {
    /// 获取全部题目（无分页）
    async fn list(&self) -> AppResult<Vec<Question>>;

    /// 新建题目，ID 由后端分配
    async fn create(&self, draft: &QuestionDraft) -> AppResult<Question>;

    /// 用草稿替换指定题目的字段
    async fn update(&self, id: &QuestionId, draft: &QuestionDraft) -> AppResult<Question>;

    /// 删除指定题目
    async fn delete(&self, id: &QuestionId) -> AppResult<()>;
}
