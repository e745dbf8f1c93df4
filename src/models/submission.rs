use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 分项得分
///
/// 服务端按引言/主体/结论/举例/画图五个维度拆分打分，
/// 这里只做透传展示
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SectionMarks {
    #[serde(default)]
    pub introduction: f64,
    #[serde(default)]
    pub main_body: f64,
    #[serde(default)]
    pub conclusion: f64,
    #[serde(default)]
    pub examples: f64,
    #[serde(default)]
    pub diagrams: f64,
}

/// 一次答案提交
///
/// 由服务端创建和打分；重交会生成新的版本号，旧版本永远保留
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: u64,
    pub question_id: u64,
    /// 版本号，从 1 开始，每次重交 +1
    pub version: u32,
    pub total_marks: f64,
    #[serde(default)]
    pub is_best_submission: bool,
    #[serde(default)]
    pub answer: String,
    /// 原始上传文件名（纯文字作答时为 None）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_file: Option<String>,
    /// 提交时间，服务端下发的展示用字符串
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section_marks: Option<SectionMarks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_detection_score: Option<f64>,
}

/// 提交历史条目
///
/// 历史视图的只读投影，字段与渲染上下文一一对应
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u64,
    pub version: u32,
    #[serde(default)]
    pub date: String,
    pub score: f64,
    #[serde(default)]
    pub is_best: bool,
}

impl HistoryEntry {
    /// 批改详情页链接
    pub fn review_url(&self) -> String {
        format!("/review/{}", self.id)
    }
}

impl From<&Submission> for HistoryEntry {
    fn from(submission: &Submission) -> Self {
        Self {
            id: submission.id,
            version: submission.version,
            date: submission.submitted_at.clone().unwrap_or_default(),
            score: submission.total_marks,
            is_best: submission.is_best_submission,
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_best {
            write!(f, "v{} {} 得分 {} [Best Score]", self.version, self.date, self.score)
        } else {
            write!(f, "v{} {} 得分 {}", self.version, self.date, self.score)
        }
    }
}

/// 从历史条目中选出最佳版本
///
/// 规则：总分最高者胜出，同分时取版本号更大的（更新的）一次。
/// 最佳标记由服务端维护，这里的规则只在标记缺失时做展示兜底
pub fn best_entry(entries: &[HistoryEntry]) -> Option<&HistoryEntry> {
    entries.iter().max_by(|a, b| {
        match a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal) {
            Ordering::Equal => a.version.cmp(&b.version),
            ord => ord,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(id: u64, version: u32, total_marks: f64) -> Submission {
        Submission {
            id,
            question_id: 1,
            version,
            total_marks,
            is_best_submission: false,
            answer: String::new(),
            source_file: None,
            submitted_at: None,
            section_marks: None,
            ai_detection_score: None,
        }
    }

    fn entry(id: u64, version: u32, score: f64) -> HistoryEntry {
        HistoryEntry {
            id,
            version,
            date: String::new(),
            score,
            is_best: false,
        }
    }

    #[test]
    fn test_best_entry_highest_score_wins() {
        let history = vec![entry(1, 1, 6.0), entry(2, 2, 8.5), entry(3, 3, 7.0)];
        assert_eq!(best_entry(&history).unwrap().id, 2);
    }

    #[test]
    fn test_best_entry_tie_breaks_to_latest() {
        // 同分时取更新的版本
        let history = vec![entry(1, 1, 8.0), entry(2, 2, 8.0), entry(3, 3, 5.0)];
        assert_eq!(best_entry(&history).unwrap().version, 2);
    }

    #[test]
    fn test_best_entry_order_independent() {
        // 与服务端下发顺序无关
        let history = vec![entry(2, 2, 8.0), entry(1, 1, 8.0)];
        assert_eq!(best_entry(&history).unwrap().version, 2);
    }

    #[test]
    fn test_best_entry_empty_history() {
        assert!(best_entry(&[]).is_none());
    }

    #[test]
    fn test_history_entry_projection() {
        let mut s = submission(42, 3, 7.5);
        s.submitted_at = Some("2026-03-01 10:00:00".to_string());
        s.is_best_submission = true;

        let entry = HistoryEntry::from(&s);
        assert_eq!(entry.id, 42);
        assert_eq!(entry.version, 3);
        assert_eq!(entry.score, 7.5);
        assert!(entry.is_best);
        assert_eq!(entry.review_url(), "/review/42");
    }

    #[test]
    fn test_submission_json_roundtrip_from_server_shape() {
        // 服务端响应里的最小字段集也能解析
        let json = r#"{
            "id": 10,
            "question_id": 7,
            "version": 2,
            "total_marks": 8.5,
            "is_best_submission": true
        }"#;
        let s: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(s.version, 2);
        assert!(s.is_best_submission);
        assert_eq!(s.answer, "");
        assert!(s.section_marks.is_none());
    }
}
