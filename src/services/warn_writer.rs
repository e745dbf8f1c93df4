//! 警告写入服务 - 业务能力层
//!
//! 只负责"写 warn.txt"能力，不关心流程

use anyhow::Result;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

/// 警告写入服务
///
/// 职责：
/// - 将无法完成的答卷任务写入 warn.txt
/// - 只处理单个任务的警告
/// - 不关心流程顺序
pub struct WarnWriter {
    warn_file_path: String,
}

impl WarnWriter {
    /// 创建新的警告写入服务
    pub fn new() -> Self {
        Self {
            warn_file_path: "warn.txt".to_string(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            warn_file_path: path.into(),
        }
    }

    /// 写入警告信息
    ///
    /// # 参数
    /// - `question_id`: 题目ID
    /// - `title`: 题目标题
    /// - `reason`: 未能完成的原因
    ///
    /// # 返回
    /// 返回是否成功写入
    pub async fn write(&self, question_id: u64, title: &str, reason: &str) -> Result<()> {
        debug!(
            "写入警告: 题目 {} | {} | 原因: {}",
            question_id, title, reason
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.warn_file_path)?;

        let warn_msg = format!("题目 {} | {} | 原因: {}\n", question_id, title, reason);

        file.write_all(warn_msg.as_bytes())?;

        Ok(())
    }
}

impl Default for WarnWriter {
    fn default() -> Self {
        Self::new()
    }
}
