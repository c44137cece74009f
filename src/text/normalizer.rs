//! 文本规范化
//!
//! 按固定顺序处理，顺序保证了幂等性：
//! 1. 删除残留的标签语法 `<...>`
//! 2. 删除标点和符号，只保留词字符与空白
//! 3. 把每一段连续空白折叠成一个空格
//! 4. 去掉首尾空白

use std::sync::OnceLock;

use regex::Regex;

static TAG_REGEX: OnceLock<Regex> = OnceLock::new();
static NON_WORD_REGEX: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_REGEX: OnceLock<Regex> = OnceLock::new();

fn tag_regex() -> &'static Regex {
    TAG_REGEX.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

fn non_word_regex() -> &'static Regex {
    NON_WORD_REGEX.get_or_init(|| Regex::new(r"[^\w\s]").expect("punctuation pattern is valid"))
}

fn whitespace_regex() -> &'static Regex {
    WHITESPACE_REGEX.get_or_init(|| Regex::new(r"\s+").expect("whitespace pattern is valid"))
}

/// 把原始文本规范化为可直接分词的字符串
pub fn normalize(raw_text: &str) -> String {
    let without_tags = tag_regex().replace_all(raw_text, "");
    let without_punctuation = non_word_regex().replace_all(&without_tags, "");
    let collapsed = whitespace_regex().replace_all(&without_punctuation, " ");
    collapsed.trim().to_string()
}
