/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 同时处理的答卷任务数量
    pub max_concurrent_jobs: usize,
    /// 文字提取服务地址
    pub extract_api_base_url: String,
    /// 提交服务地址
    pub submit_api_base_url: String,
    /// TOML答卷任务存放目录
    pub jobs_folder: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 输出日志文件
    pub output_log_file: String,
    /// 上传文件大小上限（字节）
    pub max_file_size: usize,
    /// 提取结果是否自动确认写入答案
    pub auto_confirm_extraction: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_concurrent_jobs: 4,
            extract_api_base_url: "http://127.0.0.1:5000".to_string(),
            submit_api_base_url: "http://127.0.0.1:5000".to_string(),
            jobs_folder: "answer_jobs".to_string(),
            verbose_logging: false,
            output_log_file: "output.txt".to_string(),
            // 与服务端 MAX_CONTENT_LENGTH 保持一致
            max_file_size: 16 * 1024 * 1024,
            auto_confirm_extraction: true,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            max_concurrent_jobs: std::env::var("MAX_CONCURRENT_JOBS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_concurrent_jobs),
            extract_api_base_url: std::env::var("EXTRACT_API_BASE_URL").unwrap_or(default.extract_api_base_url),
            submit_api_base_url: std::env::var("SUBMIT_API_BASE_URL").unwrap_or(default.submit_api_base_url),
            jobs_folder: std::env::var("JOBS_FOLDER").unwrap_or(default.jobs_folder),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
            output_log_file: std::env::var("OUTPUT_LOG_FILE").unwrap_or(default.output_log_file),
            max_file_size: std::env::var("MAX_FILE_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(default.max_file_size),
            auto_confirm_extraction: std::env::var("AUTO_CONFIRM_EXTRACTION").ok().and_then(|v| v.parse().ok()).unwrap_or(default.auto_confirm_extraction),
        }
    }
}
