//! 内存题目集合
//!
//! 行为与后端一致：ID 由集合分配，找不到记录也只是 `RequestFailed`。
//! 额外记录每一次调用，并可以让下一次指定操作失败。

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::clients::QuestionApi;
use crate::error::{AppError, AppResult, Operation};
use crate::models::{Question, QuestionDraft, QuestionId};

/// 一次远程调用的记录
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    List,
    Create(QuestionDraft),
    Update(QuestionId, QuestionDraft),
    Delete(QuestionId),
}

impl ApiCall {
    pub fn operation(&self) -> Operation {
        match self {
            ApiCall::List => Operation::List,
            ApiCall::Create(_) => Operation::Create,
            ApiCall::Update(..) => Operation::Update,
            ApiCall::Delete(_) => Operation::Delete,
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    questions: Vec<Question>,
    next_id: u64,
    calls: Vec<ApiCall>,
    pending_failures: Vec<Operation>,
}

/// 进程内的题目集合
#[derive(Debug, Default)]
pub struct MemoryQuestionClient {
    inner: Mutex<Inner>,
}

impl MemoryQuestionClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// 用已有题目初始化，后续 ID 从 `q{n+1}` 开始
    pub fn with_questions(questions: Vec<Question>) -> Self {
        let next_id = questions.len() as u64;
        Self {
            inner: Mutex::new(Inner {
                questions,
                next_id,
                ..Default::default()
            }),
        }
    }

    /// 用草稿初始化
    pub fn seeded(drafts: Vec<QuestionDraft>) -> Self {
        let questions = drafts
            .into_iter()
            .enumerate()
            .map(|(i, draft)| Question::from_draft(QuestionId(format!("q{}", i + 1)), draft))
            .collect();
        Self::with_questions(questions)
    }

    /// 让下一次该操作返回失败
    pub fn fail_next(&self, operation: Operation) {
        self.lock().pending_failures.push(operation);
    }

    /// 到目前为止的全部调用
    pub fn calls(&self) -> Vec<ApiCall> {
        self.lock().calls.clone()
    }

    /// 指定操作被调用的次数
    pub fn count(&self, operation: Operation) -> usize {
        self.lock()
            .calls
            .iter()
            .filter(|call| call.operation() == operation)
            .count()
    }

    /// 当前集合内容
    pub fn snapshot(&self) -> Vec<Question> {
        self.lock().questions.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// 记录调用并检查是否需要模拟失败
    fn record(&self, call: ApiCall) -> AppResult<MutexGuard<'_, Inner>> {
        let operation = call.operation();
        let mut inner = self.lock();
        inner.calls.push(call);

        if let Some(pos) = inner.pending_failures.iter().position(|op| *op == operation) {
            inner.pending_failures.remove(pos);
            debug!("模拟 {} 失败", operation);
            return Err(failure(operation, "simulated failure"));
        }
        Ok(inner)
    }
}

fn failure(operation: Operation, reason: &str) -> AppError {
    AppError::request_failed(operation, std::io::Error::other(reason.to_string()))
}

#[async_trait]
impl QuestionApi for MemoryQuestionClient {
    async fn list(&self) -> AppResult<Vec<Question>> {
        let inner = self.record(ApiCall::List)?;
        Ok(inner.questions.clone())
    }

    async fn create(&self, draft: &QuestionDraft) -> AppResult<Question> {
        let mut inner = self.record(ApiCall::Create(draft.clone()))?;
        inner.next_id += 1;
        let id = QuestionId(format!("q{}", inner.next_id));
        let question = Question::from_draft(id, draft.clone());
        inner.questions.push(question.clone());
        Ok(question)
    }

    async fn update(&self, id: &QuestionId, draft: &QuestionDraft) -> AppResult<Question> {
        let mut inner = self.record(ApiCall::Update(id.clone(), draft.clone()))?;
        let slot = inner
            .questions
            .iter_mut()
            .find(|q| &q.id == id)
            .ok_or_else(|| failure(Operation::Update, "not found"))?;
        *slot = Question::from_draft(id.clone(), draft.clone());
        Ok(slot.clone())
    }

    async fn delete(&self, id: &QuestionId) -> AppResult<()> {
        let mut inner = self.record(ApiCall::Delete(id.clone()))?;
        let pos = inner
            .questions
            .iter()
            .position(|q| &q.id == id)
            .ok_or_else(|| failure(Operation::Delete, "not found"))?;
        inner.questions.remove(pos);
        Ok(())
    }
}
