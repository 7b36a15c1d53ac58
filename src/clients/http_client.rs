/// 题目 HTTP 客户端
///
/// 封装对 `/api/questions` 的四个调用
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::clients::QuestionApi;
use crate::config::Config;
use crate::error::{AppError, AppResult, Operation};
use crate::models::{Question, QuestionDraft, QuestionId};

/// 题目 HTTP 客户端
#[derive(Clone)]
pub struct HttpQuestionClient {
    client: Client,
    collection_url: String,
}

impl HttpQuestionClient {
    /// 创建新的客户端（超时使用 reqwest 默认值）
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            collection_url: config.questions_url(),
        }
    }

    pub fn collection_url(&self) -> &str {
        &self.collection_url
    }

    /// 单个题目的地址
    pub fn item_url(&self, id: &QuestionId) -> String {
        format!("{}/{}", self.collection_url, id)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        debug!("➡️ {} {}", method, url);
        self.client.request(method, url)
    }

    /// 发送请求，非 2xx 视为失败
    async fn send(&self, operation: Operation, request: RequestBuilder) -> AppResult<reqwest::Response> {
        request
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| {
                warn!("⚠️ {} 请求失败: {}", operation, e);
                AppError::request_failed(operation, e)
            })
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: RequestBuilder,
    ) -> AppResult<T> {
        let response = self.send(operation, request).await?;
        response.json::<T>().await.map_err(|e| {
            warn!("⚠️ {} 响应解析失败: {}", operation, e);
            AppError::request_failed(operation, e)
        })
    }
}

#[async_trait]
impl QuestionApi for HttpQuestionClient {
    async fn list(&self) -> AppResult<Vec<Question>> {
        let request = self.request(Method::GET, &self.collection_url);
        let questions: Vec<Question> = self.send_json(Operation::List, request).await?;
        debug!("获取到 {} 道题目", questions.len());
        Ok(questions)
    }

    async fn create(&self, draft: &QuestionDraft) -> AppResult<Question> {
        let request = self.request(Method::POST, &self.collection_url).json(draft);
        self.send_json(Operation::Create, request).await
    }

    async fn update(&self, id: &QuestionId, draft: &QuestionDraft) -> AppResult<Question> {
        let request = self.request(Method::PUT, &self.item_url(id)).json(draft);
        self.send_json(Operation::Update, request).await
    }

    async fn delete(&self, id: &QuestionId) -> AppResult<()> {
        // 响应体只是成功标记，不解析
        let request = self.request(Method::DELETE, &self.item_url(id));
        self.send(Operation::Delete, request).await?;
        Ok(())
    }
}
