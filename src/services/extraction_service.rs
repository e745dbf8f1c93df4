//! 文字提取服务 - 业务能力层
//!
//! 只负责"提取文字"能力，不关心流程
//!
//! 核心约束：
//! - 未选择文件时直接拒绝，不发出任何网络请求
//! - 请求在途时按钮禁用并换文案，抑制并发的重复提取
//! - 无论成功、服务端失败还是网络异常，按钮最终都要复位

use crate::clients::ExtractClient;
use crate::config::Config;
use crate::error::{AppError, AppResult, IntakeError};
use crate::infrastructure::HttpTransport;
use crate::services::FileIntake;
use crate::utils::text::clean_text;
use tracing::debug;

/// 提取按钮的空闲文案
pub const TRIGGER_IDLE_LABEL: &str = "Extract Text";
/// 提取按钮的在途文案
pub const TRIGGER_BUSY_LABEL: &str = "Extracting...";

/// 提取触发按钮状态
///
/// 页面上的禁用标志和文案，建模为本地状态
#[derive(Debug, Clone)]
pub struct ExtractTrigger {
    disabled: bool,
    label: String,
}

impl ExtractTrigger {
    fn new() -> Self {
        Self {
            disabled: false,
            label: TRIGGER_IDLE_LABEL.to_string(),
        }
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// 进入在途状态
    fn engage(&mut self) {
        self.disabled = true;
        self.label = TRIGGER_BUSY_LABEL.to_string();
    }

    /// 复位到空闲状态
    fn reset(&mut self) {
        self.disabled = false;
        self.label = TRIGGER_IDLE_LABEL.to_string();
    }
}

/// 文字提取服务
///
/// 职责：
/// - 校验是否已选择文件
/// - 守护按钮状态（在途禁用 / 完成复位）
/// - 调用提取客户端并清洗返回的文本
/// - 不出现 Question / Submission
/// - 不关心流程顺序
pub struct ExtractionService {
    client: ExtractClient,
    trigger: ExtractTrigger,
}

impl ExtractionService {
    /// 创建新的提取服务
    pub fn new(config: &Config, transport: HttpTransport) -> Self {
        Self {
            client: ExtractClient::new(config, transport),
            trigger: ExtractTrigger::new(),
        }
    }

    /// 当前按钮状态
    pub fn trigger(&self) -> &ExtractTrigger {
        &self.trigger
    }

    /// 提取选中文件的文字
    ///
    /// # 参数
    /// - `intake`: 文件接收服务（提供当前选中的文件）
    ///
    /// # 返回
    /// 返回清洗后的文本；任何失败都不触碰已有的答案内容
    pub async fn extract(&mut self, intake: &FileIntake) -> AppResult<String> {
        // 未选文件：拒绝且不发请求，按钮保持空闲
        let Some(file) = intake.selected() else {
            return Err(AppError::Intake(IntakeError::NoFileSelected));
        };

        // 在途守护：按钮禁用期间拒绝再次触发
        if self.trigger.is_disabled() {
            return Err(AppError::Intake(IntakeError::TriggerBusy));
        }

        self.trigger.engage();
        debug!("🔍 开始提取: {}", file.file_name);

        let result = self.client.extract(file).await;

        // 所有出口路径都复位按钮
        self.trigger.reset();

        let text = result?;
        Ok(clean_text(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_with_base(base_url: &str) -> ExtractionService {
        let config = Config {
            extract_api_base_url: base_url.to_string(),
            ..Config::default()
        };
        ExtractionService::new(&config, HttpTransport::new())
    }

    fn intake_with_file() -> FileIntake {
        let mut intake = FileIntake::new(16 * 1024 * 1024);
        intake
            .select_via_picker(crate::models::SelectedFile::new("answer.pdf", vec![1, 2, 3]).unwrap())
            .unwrap();
        intake
    }

    #[test]
    fn test_trigger_state_transitions() {
        let mut trigger = ExtractTrigger::new();
        assert!(!trigger.is_disabled());
        assert_eq!(trigger.label(), TRIGGER_IDLE_LABEL);

        trigger.engage();
        assert!(trigger.is_disabled());
        assert_eq!(trigger.label(), TRIGGER_BUSY_LABEL);

        trigger.reset();
        assert!(!trigger.is_disabled());
        assert_eq!(trigger.label(), TRIGGER_IDLE_LABEL);
    }

    #[tokio::test]
    async fn test_no_file_selected_issues_no_request() {
        // 地址根本不可达——若真发了请求会得到网络错误而非提示文案
        let mut service = service_with_base("http://127.0.0.1:9");
        let intake = FileIntake::new(16 * 1024 * 1024);

        let err = service.extract(&intake).await.unwrap_err();
        assert_eq!(err.to_string(), "文件接收错误: Please select a file first");

        // 按钮全程未被触碰
        assert!(!service.trigger().is_disabled());
        assert_eq!(service.trigger().label(), TRIGGER_IDLE_LABEL);
    }

    #[tokio::test]
    async fn test_busy_trigger_rejects_reentry() {
        let mut service = service_with_base("http://127.0.0.1:9");
        let intake = intake_with_file();

        service.trigger.engage();
        let err = service.extract(&intake).await.unwrap_err();
        assert!(matches!(
            err,
            AppError::Intake(IntakeError::TriggerBusy)
        ));
    }

    #[tokio::test]
    async fn test_trigger_restored_after_transport_failure() {
        // 连接被拒也要把按钮复位
        let mut service = service_with_base("http://127.0.0.1:9");
        let intake = intake_with_file();

        let result = service.extract(&intake).await;
        assert!(result.is_err());

        assert!(!service.trigger().is_disabled());
        assert_eq!(service.trigger().label(), TRIGGER_IDLE_LABEL);
    }
}
