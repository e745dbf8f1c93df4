//! 单个答卷处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责处理单个答卷任务，是任务级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **流程调度**：为任务创建 `SubmissionFlow` 并执行
//! 2. **文件清理**：删除已处理的 TOML 文件
//! 3. **结果归拢**：把成功/跳过/出错折算成任务级结果

use crate::config::Config;
use crate::infrastructure::HttpTransport;
use crate::models::AnswerJob;
use crate::workflow::{ProcessResult, SubmissionCtx, SubmissionFlow};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{error, info, warn};

/// 处理单个答卷任务
///
/// # 参数
/// - `transport`: HTTP 传输器（共享的客户端资源）
/// - `job`: 答卷任务数据
/// - `job_index`: 任务索引（用于日志）
/// - `config`: 配置
///
/// # 返回
/// 返回是否成功处理
pub async fn process_job(
    transport: &HttpTransport,
    job: AnswerJob,
    job_index: usize,
    config: &Config,
) -> Result<bool> {
    log_job_start(job_index, &job.question.title, job.question.id);

    let ctx = SubmissionCtx::new(job.question.id, job_index);

    // 每个任务独立一套流程对象（按钮状态互不串扰）
    let mut flow = SubmissionFlow::new(config, transport.clone());

    let ok = match flow.run(&job, &ctx).await {
        Ok(ProcessResult::Success) => true,
        Ok(ProcessResult::Skipped) => false,
        Err(e) => {
            error!("[任务 {}] 答卷处理失败: {}", job_index, e);
            false
        }
    };

    // 清理文件
    cleanup_file(job.file_path.as_deref(), job_index)?;

    log_job_complete(job_index, ok);

    Ok(ok)
}

/// 清理已处理的文件
fn cleanup_file(file_path: Option<&str>, job_index: usize) -> Result<()> {
    info!("[任务 {}] 🗑️ 清理已处理的文件...", job_index);

    if let Some(file_path) = file_path {
        if Path::new(file_path).exists() {
            fs::remove_file(file_path).with_context(|| format!("无法删除文件: {}", file_path))?;
            info!(
                "[任务 {}] ✓ 文件已删除: {}",
                job_index,
                Path::new(file_path)
                    .file_name()
                    .unwrap_or_default()
                    .to_string_lossy()
            );
        } else {
            warn!("[任务 {}] ⚠️ 文件不存在: {}", job_index, file_path);
        }
    } else {
        warn!("[任务 {}] ⚠️ 文件路径未设置", job_index);
    }

    Ok(())
}

// ========== 日志辅助函数 ==========

fn log_job_start(job_index: usize, title: &str, question_id: u64) {
    info!("\n[任务 {}] {}", job_index, "─".repeat(30));
    info!("[任务 {}] 开始处理", job_index);
    info!("[任务 {}] 标题: {}", job_index, title);
    info!("[任务 {}] 题目ID: {}", job_index, question_id);
}

fn log_job_complete(job_index: usize, ok: bool) {
    if ok {
        info!("\n[任务 {}] ✅ 答卷处理完成\n", job_index);
    } else {
        info!("\n[任务 {}] ⚠️ 答卷未完成，详见 warn.txt\n", job_index);
    }
}
