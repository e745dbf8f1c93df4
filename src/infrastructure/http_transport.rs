//! HTTP 传输器 - 基础设施层
//!
//! 持有唯一的 HTTP 客户端，只暴露"发请求"的能力

use crate::error::{ApiError, AppError, AppResult};
use reqwest::multipart::Form;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// HTTP 传输器
///
/// 职责：
/// - 持有唯一的 reqwest::Client 资源
/// - 暴露 post 能力
/// - 不认识 Question / Submission
/// - 不处理业务流程
///
/// 注意：客户端不设置请求超时——挂起的请求只能等传输层自行了结，
/// 调用方的按钮状态在请求落定前保持禁用
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// 创建新的 HTTP 传输器
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// 获取 client 的引用（用于其他操作）
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// 发送 multipart 表单并返回 JSON 结果
    ///
    /// # 参数
    /// - `endpoint`: 完整的请求地址
    /// - `form`: multipart 表单
    ///
    /// # 返回
    /// 返回 JSON 值
    pub async fn post_multipart(&self, endpoint: &str, form: Form) -> AppResult<JsonValue> {
        let response = self
            .client
            .post(endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(|e| AppError::api_request_failed(endpoint, e))?;

        let json_value = response.json().await.map_err(|e| {
            AppError::Api(ApiError::JsonParseFailed {
                source: Box::new(e),
            })
        })?;

        Ok(json_value)
    }

    /// 发送 multipart 表单并反序列化为指定类型
    pub async fn post_multipart_as<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: Form,
    ) -> AppResult<T> {
        let json_value = self.post_multipart(endpoint, form).await?;
        let typed_value = serde_json::from_value(json_value)?;
        Ok(typed_value)
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}
