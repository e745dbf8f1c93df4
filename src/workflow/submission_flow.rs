//! 答卷提交流程 - 流程层
//!
//! 核心职责：定义"一份答卷"的完整处理流程
//!
//! 流程顺序：
//! 1. 接收文件（拖拽/选择器收敛为一个文件）
//! 2. 提取文字 → 暂存 → 确认写入答案
//! 3. 首交或重交（由服务端下发的 submission 记录决定）
//! 4. warn.txt（兜底）

use anyhow::Result;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::infrastructure::HttpTransport;
use crate::models::{AnswerJob, Question, SelectedFile};
use crate::services::{ExtractionService, FileIntake, HistoryView, WarnWriter};
use crate::utils::logging::truncate_text;
use crate::workflow::form_controller::FormController;
use crate::workflow::submission_ctx::SubmissionCtx;

/// 答卷处理结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessResult {
    /// 处理成功
    Success,
    /// 跳过（无法完成，已写入 warn.txt）
    Skipped,
}

/// 答卷提交流程
///
/// - 编排完整的答卷提交流程
/// - 决定何时接收文件、何时提取、何时兜底
/// - 不持有任何共享资源（HTTP 客户端由传输器承载）
/// - 只依赖业务能力（services）
pub struct SubmissionFlow {
    extraction: ExtractionService,
    submit_client: crate::clients::SubmitClient,
    warn_writer: WarnWriter,
    max_file_size: usize,
    auto_confirm_extraction: bool,
    verbose_logging: bool,
}

impl SubmissionFlow {
    /// 创建新的答卷提交流程
    pub fn new(config: &Config, transport: HttpTransport) -> Self {
        Self {
            extraction: ExtractionService::new(config, transport.clone()),
            submit_client: crate::clients::SubmitClient::new(config, transport),
            warn_writer: WarnWriter::new(),
            max_file_size: config.max_file_size,
            auto_confirm_extraction: config.auto_confirm_extraction,
            verbose_logging: config.verbose_logging,
        }
    }

    pub async fn run(&mut self, job: &AnswerJob, ctx: &SubmissionCtx) -> Result<ProcessResult> {
        let question = &job.question;

        self.log_question(ctx, question);

        // 历史版本概览（如果启用详细日志）
        if self.verbose_logging && !job.submission_history.is_empty() {
            info!(
                "[任务 {}] 历史版本 {} 个:",
                ctx.job_index,
                job.submission_history.len()
            );
            HistoryView::from_entries(&job.submission_history).log(ctx.job_index);
        }

        // 过期只提醒，拒不拒绝由服务端说了算
        if question.deadline_passed(chrono::Local::now().naive_local()) {
            warn!(
                "[任务 {}] ⚠️ 题目 {} 已过截止时间，提交可能被拒绝",
                ctx.job_index, question.id
            );
        }

        // ========== 表单状态机 ==========
        let mut form = FormController::new(job.has_submission());

        if let Some(submission) = &job.submission {
            info!(
                "[任务 {}] 已有提交 v{} (得分 {})，点击重交进入编辑",
                ctx.job_index, submission.version, submission.total_marks
            );
            form.resubmit_clicked();
        }

        // 预先录入的答案文字
        if let Some(text) = job.answer_text.as_deref() {
            form.draft_mut().set_text(text);
        }

        // ========== 接收答案文件 ==========
        let mut intake = FileIntake::new(self.max_file_size);

        if let Some(path) = job.answer_file.as_deref() {
            match SelectedFile::from_path(path).await {
                Ok(file) => {
                    intake.select_via_picker(file)?;
                    info!("[任务 {}] 📎 已选择文件: {}", ctx.job_index, intake.prompt());
                }
                Err(e) => {
                    warn!("[任务 {}] ⚠️ 答案文件不可用: {}", ctx.job_index, e);
                    // 没有文字答案兜底时整个任务跳过
                    if form.draft().is_empty() {
                        self.write_warn(ctx, question, &format!("答案文件不可用: {}", e))
                            .await?;
                        return Ok(ProcessResult::Skipped);
                    }
                }
            }
        }

        // ========== 提取文字 ==========
        if intake.selected().is_some() {
            info!("[任务 {}] 🔍 正在提取文字...", ctx.job_index);

            match self.extraction.extract(&intake).await {
                Ok(text) => {
                    // 提取结果先进暂存区，确认后才替换正文
                    let had_typed_answer = !form.draft().is_empty();
                    form.draft_mut().stage(text);

                    if self.auto_confirm_extraction || !had_typed_answer {
                        form.draft_mut().confirm_staged();
                        info!(
                            "[任务 {}] ✓ 提取成功，已写入答案 ({} 字)",
                            ctx.job_index,
                            form.draft().text().chars().count()
                        );
                    } else {
                        form.draft_mut().discard_staged();
                        info!(
                            "[任务 {}] 提取结果未确认，保留已录入的答案",
                            ctx.job_index
                        );
                    }
                }
                Err(e) => {
                    // 提取失败不触碰草稿；有文字答案就继续提交
                    error!("[任务 {}] ❌ 提取失败: {}", ctx.job_index, e);
                    if form.draft().is_empty() {
                        self.write_warn(ctx, question, &format!("提取失败: {}", e))
                            .await?;
                        return Ok(ProcessResult::Skipped);
                    }
                    warn!(
                        "[任务 {}] 使用已录入的答案继续提交",
                        ctx.job_index
                    );
                }
            }
        }

        // 分支：答案为空
        if form.draft().is_empty() {
            warn!("[任务 {}] ⚠️ 答案内容为空，写入 warn.txt", ctx.job_index);
            self.write_warn(ctx, question, "答案内容为空").await?;
            return Ok(ProcessResult::Skipped);
        }

        // ========== 提交 ==========
        self.submit_answer(&form, &intake, job, ctx).await
    }

    /// 提交答案（首交或重交）
    async fn submit_answer(
        &self,
        form: &FormController,
        intake: &FileIntake,
        job: &AnswerJob,
        ctx: &SubmissionCtx,
    ) -> Result<ProcessResult> {
        let question = &job.question;
        let answer = form.draft().text();
        let file = intake.selected();

        let result = if form.is_resubmission() {
            // 重交只追加新版本，旧版本由服务端原样保留
            info!(
                "[任务 {}] 📤 正在重交 (预期版本 v{})...",
                ctx.job_index,
                job.expected_next_version()
            );
            self.submit_client.resubmit(question.id, answer, file).await
        } else {
            info!("[任务 {}] 📤 正在首次提交...", ctx.job_index);
            self.submit_client.submit(question.id, answer, file).await
        };

        match result {
            Ok(submission) => {
                let badge = if submission.is_best_submission {
                    " (Best Score)"
                } else {
                    ""
                };
                info!(
                    "[任务 {}] ✓ 提交成功: v{} 得分 {}/{}{}",
                    ctx.job_index,
                    submission.version,
                    submission.total_marks,
                    question.max_marks,
                    badge
                );
                Ok(ProcessResult::Success)
            }
            Err(e) => {
                warn!("[任务 {}] ⚠️ 提交失败: {}", ctx.job_index, e);
                self.write_warn(ctx, question, &format!("提交失败: {}", e))
                    .await?;
                Ok(ProcessResult::Skipped)
            }
        }
    }

    /// 写入警告日志
    async fn write_warn(
        &self,
        ctx: &SubmissionCtx,
        question: &Question,
        reason: &str,
    ) -> Result<()> {
        self.warn_writer
            .write(question.id, &question.title, reason)
            .await?;

        warn!(
            "[任务 {}] ⚠️ 已写入 warn.txt: 题目 {} (原因: {})",
            ctx.job_index, question.id, reason
        );

        Ok(())
    }

    // ========== 日志辅助方法 ==========

    /// 显示题目预览
    fn log_question(&self, ctx: &SubmissionCtx, question: &Question) {
        info!(
            "[任务 {}] 题目 {}: {}",
            ctx.job_index,
            question.id,
            truncate_text(&question.question_text, 80)
        );
    }
}
