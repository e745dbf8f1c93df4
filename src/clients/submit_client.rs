/// 提交服务客户端
///
/// 封装首交和重交两个端点的调用逻辑
use crate::clients::file_part;
use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::infrastructure::HttpTransport;
use crate::models::{SelectedFile, Submission};
use reqwest::multipart::Form;
use serde::Deserialize;
use tracing::debug;

/// 提交端点的响应
///
/// 与 /extract 同一套信封：`{success, submission?, error?}`
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitResponse {
    pub success: bool,
    #[serde(default)]
    pub submission: Option<Submission>,
    #[serde(default)]
    pub error: Option<String>,
}

/// 提交客户端
pub struct SubmitClient {
    transport: HttpTransport,
    base_url: String,
}

impl SubmitClient {
    /// 创建新的提交客户端
    pub fn new(config: &Config, transport: HttpTransport) -> Self {
        Self {
            transport,
            base_url: config.submit_api_base_url.clone(),
        }
    }

    /// 首次提交答案
    ///
    /// # 参数
    /// - `question_id`: 题目ID
    /// - `answer`: 答案文字
    /// - `file`: 可选的原始答案文件
    ///
    /// # 返回
    /// 返回服务端创建的提交记录
    pub async fn submit(
        &self,
        question_id: u64,
        answer: &str,
        file: Option<&SelectedFile>,
    ) -> AppResult<Submission> {
        let endpoint = format!(
            "{}/submit/{}",
            self.base_url.trim_end_matches('/'),
            question_id
        );
        self.send(&endpoint, question_id, answer, file).await
    }

    /// 重交答案（在已有提交的基础上生成新版本）
    pub async fn resubmit(
        &self,
        question_id: u64,
        answer: &str,
        file: Option<&SelectedFile>,
    ) -> AppResult<Submission> {
        let endpoint = format!(
            "{}/resubmit/{}",
            self.base_url.trim_end_matches('/'),
            question_id
        );
        self.send(&endpoint, question_id, answer, file).await
    }

    async fn send(
        &self,
        endpoint: &str,
        question_id: u64,
        answer: &str,
        file: Option<&SelectedFile>,
    ) -> AppResult<Submission> {
        debug!("提交请求: 题目 {} -> {}", question_id, endpoint);

        let mut form = Form::new().text("answer", answer.to_string());
        if let Some(file) = file {
            form = form.part("file", file_part(file)?);
        }

        let response: SubmitResponse = self.transport.post_multipart_as(endpoint, form).await?;

        Self::into_submission(response, endpoint, question_id)
    }

    /// 解包响应：成功取提交记录，失败带上服务端的错误信息
    fn into_submission(
        response: SubmitResponse,
        endpoint: &str,
        question_id: u64,
    ) -> AppResult<Submission> {
        if !response.success {
            return Err(AppError::submission_rejected(question_id, response.error));
        }

        response.submission.ok_or_else(|| {
            AppError::Api(ApiError::EmptyResponse {
                endpoint: endpoint.to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_submit_response() {
        let response: SubmitResponse = serde_json::from_str(
            r#"{
                "success": true,
                "submission": {
                    "id": 22,
                    "question_id": 7,
                    "version": 3,
                    "total_marks": 9.0,
                    "is_best_submission": true
                }
            }"#,
        )
        .unwrap();

        let submission = SubmitClient::into_submission(response, "/submit/7", 7).unwrap();
        assert_eq!(submission.version, 3);
        assert!(submission.is_best_submission);
    }

    #[test]
    fn test_rejected_submission() {
        let response: SubmitResponse =
            serde_json::from_str(r#"{"success": false, "error": "deadline passed"}"#).unwrap();

        let err = SubmitClient::into_submission(response, "/resubmit/7", 7).unwrap_err();
        assert!(err.to_string().contains("deadline passed"));
    }

    #[test]
    fn test_success_without_submission_is_empty_response() {
        let response: SubmitResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(SubmitClient::into_submission(response, "/submit/7", 7).is_err());
    }
}
