//! 批量答卷处理器 - 编排层
//!
//! 管理资源和并发：加载全部答卷任务，按批处理，输出统计

use crate::config::Config;
use crate::infrastructure::HttpTransport;
use crate::models::{load_all_toml_files, AnswerJob};
use crate::orchestrator::job_processor;
use crate::utils::logging;
use anyhow::Result;
use futures::future::join_all;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
    transport: HttpTransport,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        // 初始化日志文件
        logging::init_log_file(&config.output_log_file)?;

        logging::log_startup(config.max_concurrent_jobs);

        Ok(Self {
            config,
            transport: HttpTransport::new(),
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        // 加载所有待处理的答卷任务
        info!("\n📁 正在扫描待处理的答卷任务...");
        let all_jobs = load_all_toml_files(&self.config.jobs_folder).await?;

        if all_jobs.is_empty() {
            warn!("⚠️ 没有找到待处理的TOML文件，程序结束");
            return Ok(());
        }

        let total_jobs = all_jobs.len();
        logging::log_jobs_loaded(total_jobs, self.config.max_concurrent_jobs);

        // 处理所有任务
        let stats = self.process_all_jobs(all_jobs).await?;

        // 输出最终统计
        logging::print_final_stats(
            stats.success,
            stats.failed,
            stats.total,
            &self.config.output_log_file,
        );

        Ok(())
    }

    /// 处理所有答卷任务
    async fn process_all_jobs(&self, all_jobs: Vec<AnswerJob>) -> Result<ProcessingStats> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_jobs));
        let total_jobs = all_jobs.len();
        let mut stats = ProcessingStats {
            total: total_jobs,
            ..Default::default()
        };

        // 分批处理
        let batch_size = self.config.max_concurrent_jobs;
        for batch_start in (0..total_jobs).step_by(batch_size) {
            let batch_end = (batch_start + batch_size).min(total_jobs);
            let batch_jobs = &all_jobs[batch_start..batch_end];
            let batch_num = (batch_start / batch_size) + 1;
            let total_batches = (total_jobs + batch_size - 1) / batch_size;

            logging::log_batch_start(
                batch_num,
                total_batches,
                batch_start + 1,
                batch_end,
                total_jobs,
            );

            // 处理本批
            let batch_result = self
                .process_batch(batch_jobs, batch_start, semaphore.clone())
                .await?;

            stats.success += batch_result.success;
            stats.failed += batch_result.failed;

            logging::log_batch_complete(
                batch_num,
                batch_result.success,
                batch_result.success + batch_result.failed,
            );
        }

        Ok(stats)
    }

    /// 处理单个批次
    async fn process_batch(
        &self,
        batch_jobs: &[AnswerJob],
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> Result<BatchResult> {
        let mut batch_handles = Vec::new();

        // 为本批创建并发任务
        for (idx, job) in batch_jobs.iter().enumerate() {
            let job_index = batch_start + idx + 1;
            let permit = semaphore.clone().acquire_owned().await?;
            let transport = self.transport.clone();
            let job_clone: AnswerJob = job.clone();
            let config_clone = self.config.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;
                match job_processor::process_job(&transport, job_clone, job_index, &config_clone)
                    .await
                {
                    Ok(true) => Ok(true),
                    Ok(false) => Ok(false),
                    Err(e) => {
                        error!("[任务 {}] ❌ 处理过程中发生错误: {}", job_index, e);
                        Err(e)
                    }
                }
            });
            batch_handles.push((job_index, handle));
        }

        // 等待本批所有任务完成
        let (indices, handles): (Vec<_>, Vec<_>) = batch_handles.into_iter().unzip();
        let outcomes = join_all(handles).await;

        let mut result = BatchResult::default();

        for (job_index, outcome) in indices.into_iter().zip(outcomes) {
            match outcome {
                Ok(Ok(true)) => {
                    result.success += 1;
                }
                Ok(Ok(false)) | Ok(Err(_)) => {
                    result.failed += 1;
                }
                Err(e) => {
                    error!("[任务 {}] 任务执行失败: {}", job_index, e);
                    result.failed += 1;
                }
            }
        }

        Ok(result)
    }
}

/// 处理统计
#[derive(Debug, Default)]
struct ProcessingStats {
    success: usize,
    failed: usize,
    total: usize,
}

/// 批次处理结果
#[derive(Debug, Default)]
struct BatchResult {
    success: usize,
    failed: usize,
}
