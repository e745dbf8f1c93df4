use crate::models::question::Question;
use crate::models::submission::{HistoryEntry, Submission};
use serde::{Deserialize, Serialize};

/// 一个待处理的答卷任务
///
/// 对应一个 TOML 文件，内容即服务端渲染提交页面时下发的上下文：
/// 题目信息、当前提交（可选）、历史版本（可选），
/// 外加本地要上传的答案文件路径和/或已录入的答案文字
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerJob {
    pub question: Question,

    /// 当前提交记录，存在与否决定走首交还是重交
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submission: Option<Submission>,

    #[serde(default)]
    pub submission_history: Vec<HistoryEntry>,

    /// 本地答案文件路径（PDF/PNG/JPG）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_file: Option<String>,

    /// 已录入的答案文字
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub answer_text: Option<String>,

    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl AnswerJob {
    /// 是否已有提交记录（决定提交端点）
    pub fn has_submission(&self) -> bool {
        self.submission.is_some()
    }

    /// 重交时预期拿到的版本号
    ///
    /// 以历史和当前提交中最大的版本号为准；真正的版本号由服务端分配
    pub fn expected_next_version(&self) -> u32 {
        let history_max = self.submission_history.iter().map(|e| e.version).max();
        let current = self.submission.as_ref().map(|s| s.version);
        history_max.max(current).unwrap_or(0) + 1
    }

    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_job() {
        let job: AnswerJob = toml::from_str(
            r#"
            answer_file = "uploads/answer.pdf"

            [question]
            id = 7
            title = "地理基础"
            question_text = "What is the capital of France?"
            max_marks = 10
            "#,
        )
        .unwrap();

        assert_eq!(job.question.id, 7);
        assert!(!job.has_submission());
        assert!(job.submission_history.is_empty());
        assert_eq!(job.answer_file.as_deref(), Some("uploads/answer.pdf"));
        assert_eq!(job.answer_text, None);
    }

    #[test]
    fn test_parse_job_with_submission_and_history() {
        let job: AnswerJob = toml::from_str(
            r#"
            answer_text = "Paris is the capital of France."

            [question]
            id = 7
            title = "地理基础"
            question_text = "What is the capital of France?"
            max_marks = 10
            deadline = "2026-06-30"
            requires_examples = true

            [submission]
            id = 21
            question_id = 7
            version = 2
            total_marks = 8.5
            is_best_submission = true

            [[submission_history]]
            id = 20
            version = 1
            date = "2026-02-01 09:00:00"
            score = 6.0

            [[submission_history]]
            id = 21
            version = 2
            date = "2026-03-01 10:00:00"
            score = 8.5
            is_best = true
            "#,
        )
        .unwrap();

        assert!(job.has_submission());
        assert_eq!(job.submission.as_ref().unwrap().version, 2);
        assert_eq!(job.submission_history.len(), 2);
        assert!(job.submission_history[1].is_best);
        assert_eq!(job.expected_next_version(), 3);
    }

    #[test]
    fn test_expected_next_version_without_history() {
        let job: AnswerJob = toml::from_str(
            r#"
            answer_text = "first try"

            [question]
            id = 7
            title = "地理基础"
            question_text = "..."
            max_marks = 10
            "#,
        )
        .unwrap();

        assert_eq!(job.expected_next_version(), 1);
    }
}
