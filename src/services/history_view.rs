//! 提交历史视图 - 业务能力层
//!
//! 对历史版本的只读投影，不持有状态、不做任何修改

use crate::models::submission::best_entry;
use crate::models::HistoryEntry;
use tracing::info;

/// 历史视图中的一行
#[derive(Debug, Clone)]
pub struct HistoryRow {
    pub version: u32,
    pub date: String,
    pub score: f64,
    /// 是否展示 "Best Score" 徽标
    pub is_best: bool,
    /// 批改详情页链接
    pub review_url: String,
}

/// 提交历史视图
///
/// 输入是服务端给定顺序的历史条目，输出是可直接渲染的行列表
#[derive(Debug, Clone)]
pub struct HistoryView {
    rows: Vec<HistoryRow>,
}

impl HistoryView {
    /// 从历史条目构建视图（保持给定顺序）
    ///
    /// 徽标以服务端的最佳标记为准；标记缺失时按同一条规则
    /// （最高分，同分取最新版本）做展示兜底
    pub fn from_entries(entries: &[HistoryEntry]) -> Self {
        let fallback_best = if entries.iter().any(|e| e.is_best) {
            None
        } else {
            best_entry(entries).map(|e| e.id)
        };

        let rows = entries
            .iter()
            .map(|entry| HistoryRow {
                version: entry.version,
                date: entry.date.clone(),
                score: entry.score,
                is_best: entry.is_best || fallback_best == Some(entry.id),
                review_url: entry.review_url(),
            })
            .collect();

        Self { rows }
    }

    pub fn rows(&self) -> &[HistoryRow] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 带 "Best Score" 徽标的那一行
    pub fn best_row(&self) -> Option<&HistoryRow> {
        self.rows.iter().find(|row| row.is_best)
    }

    /// 输出历史列表（verbose 模式）
    pub fn log(&self, job_index: usize) {
        for row in &self.rows {
            if row.is_best {
                info!(
                    "[任务 {}]   v{} | {} | 得分 {} | Best Score | {}",
                    job_index, row.version, row.date, row.score, row.review_url
                );
            } else {
                info!(
                    "[任务 {}]   v{} | {} | 得分 {} | {}",
                    job_index, row.version, row.date, row.score, row.review_url
                );
            }
        }
    }
}
