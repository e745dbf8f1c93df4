//! 文本处理工具
//!
//! 提取结果落入答案前的归一化处理

use regex::Regex;

/// 清洗并归一化提取出的文本
///
/// 与提取服务端的行为保持一致：连续空白折叠为单个空格，
/// 连续换行折叠为单个换行，首尾留白去掉
pub fn clean_text(text: &str) -> String {
    let collapsed = if let Ok(re) = Regex::new(r"\s+") {
        re.replace_all(text, " ").into_owned()
    } else {
        text.to_string()
    };

    let normalized = if let Ok(re) = Regex::new(r"[\r\n]+") {
        re.replace_all(&collapsed, "\n").into_owned()
    } else {
        collapsed
    };

    normalized.trim().to_string()
}
