/// 文字提取服务客户端
///
/// 封装所有与 /extract 端点相关的调用逻辑
use crate::clients::file_part;
use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult};
use crate::infrastructure::HttpTransport;
use crate::models::SelectedFile;
use reqwest::multipart::Form;
use serde::Deserialize;
use tracing::debug;

/// /extract 端点的响应
///
/// `{success: true, text}` 或 `{success: false, error}`
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractResponse {
    pub success: bool,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// 文字提取客户端
pub struct ExtractClient {
    transport: HttpTransport,
    base_url: String,
}

impl ExtractClient {
    /// 创建新的提取客户端
    pub fn new(config: &Config, transport: HttpTransport) -> Self {
        Self {
            transport,
            base_url: config.extract_api_base_url.clone(),
        }
    }

    /// 提取文件中的文字
    ///
    /// # 参数
    /// - `file`: 已选中的上传文件
    ///
    /// # 返回
    /// 返回提取出的原始文本；`success: false` 和网络异常都映射为错误
    pub async fn extract(&self, file: &SelectedFile) -> AppResult<String> {
        let endpoint = self.endpoint();

        debug!(
            "提取请求: {} ({} 字节) -> {}",
            file.file_name,
            file.size(),
            endpoint
        );

        let form = Form::new().part("file", file_part(file)?);

        let response: ExtractResponse = self.transport.post_multipart_as(&endpoint, form).await?;

        Self::into_text(response, &endpoint)
    }

    fn endpoint(&self) -> String {
        format!("{}/extract", self.base_url.trim_end_matches('/'))
    }

    /// 解包响应：成功取 text，失败带上服务端的错误信息
    fn into_text(response: ExtractResponse, endpoint: &str) -> AppResult<String> {
        if !response.success {
            return Err(AppError::api_bad_response(endpoint, response.error));
        }

        response.text.ok_or_else(|| {
            AppError::Api(ApiError::EmptyResponse {
                endpoint: endpoint.to_string(),
            })
        })
    }
}
