use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// 题目信息
///
/// 由服务端在渲染时下发，提交流程只读不改
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    pub id: u64,
    pub title: String,
    pub question_text: String,
    pub max_marks: u32,

    /// 截止时间，支持 "YYYY-MM-DD HH:MM:SS" 或 "YYYY-MM-DD"
    #[serde(default, deserialize_with = "deserialize_deadline")]
    pub deadline: Option<NaiveDateTime>,

    /// 是否要求举例
    #[serde(default)]
    pub requires_examples: bool,
    /// 是否要求画图
    #[serde(default)]
    pub requires_diagrams: bool,
}

impl Question {
    /// 判断截止时间是否已过（无截止时间视为未过期）
    pub fn deadline_passed(&self, now: NaiveDateTime) -> bool {
        match self.deadline {
            Some(deadline) => now > deadline,
            None => false,
        }
    }
}

// Helper function to deserialize deadline as either datetime or date string
fn deserialize_deadline<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;

    let Some(value) = value else {
        return Ok(None);
    };

    if let Ok(dt) = NaiveDateTime::parse_from_str(&value, "%Y-%m-%d %H:%M:%S") {
        return Ok(Some(dt));
    }

    // 只有日期时取当天最后一秒
    if let Some(dt) = NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(23, 59, 59))
    {
        return Ok(Some(dt));
    }

    Err(serde::de::Error::custom(format!(
        "无法解析截止时间: {}",
        value
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml_str: &str) -> Question {
        toml::from_str(toml_str).unwrap()
    }

    #[test]
    fn test_deadline_full_datetime() {
        let q = parse(
            r#"
            id = 7
            title = "地理基础"
            question_text = "What is the capital of France?"
            max_marks = 10
            deadline = "2026-06-30 18:00:00"
            "#,
        );
        let expected = NaiveDate::from_ymd_opt(2026, 6, 30)
            .unwrap()
            .and_hms_opt(18, 0, 0)
            .unwrap();
        assert_eq!(q.deadline, Some(expected));
        assert!(!q.requires_examples);
    }

    #[test]
    fn test_deadline_date_only_expands_to_end_of_day() {
        let q = parse(
            r#"
            id = 7
            title = "地理基础"
            question_text = "..."
            max_marks = 10
            deadline = "2026-06-30"
            "#,
        );
        assert_eq!(
            q.deadline.unwrap().format("%H:%M:%S").to_string(),
            "23:59:59"
        );
    }

    #[test]
    fn test_deadline_absent() {
        let q = parse(
            r#"
            id = 7
            title = "地理基础"
            question_text = "..."
            max_marks = 10
            requires_examples = true
            "#,
        );
        assert_eq!(q.deadline, None);
        assert!(q.requires_examples);
        assert!(!q.deadline_passed(chrono::Local::now().naive_local()));
    }

    #[test]
    fn test_deadline_passed() {
        let q = parse(
            r#"
            id = 7
            title = "地理基础"
            question_text = "..."
            max_marks = 10
            deadline = "2020-01-01 00:00:00"
            "#,
        );
        let now = NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(q.deadline_passed(now));
    }
}
