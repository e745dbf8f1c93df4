//! # Answer Submit
//!
//! 一个用于自动化提交批改答卷的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有稀缺资源（HTTP 客户端），只暴露能力
//! - `HttpTransport` - 唯一的 client owner，提供 post 能力
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个答卷
//! - `FileIntake` - 文件接收能力（拖拽 / 选择器收敛）
//! - `ExtractionService` - 文字提取能力（按钮守护 + 清洗）
//! - `HistoryView` - 历史版本投影能力
//! - `WarnWriter` - 写 warn.txt 能力
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份答卷"的完整处理流程
//! - `SubmissionCtx` - 上下文封装（question_id + job_index）
//! - `FormController` - 表单状态机（Viewing / Editing）
//! - `SubmissionFlow` - 流程编排（接收 → 提取 → 提交 → warn）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量答卷处理器，管理资源和并发
//! - `orchestrator/job_processor` - 单个答卷处理器，执行完整流程
//!
//! ## 模块结构

pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult};
pub use infrastructure::HttpTransport;
pub use models::{AnswerJob, Question, SelectedFile, Submission};
pub use orchestrator::{process_job, App};
pub use services::{ExtractionService, FileIntake, HistoryView};
pub use workflow::{FormController, FormState, ProcessResult, SubmissionCtx, SubmissionFlow};
