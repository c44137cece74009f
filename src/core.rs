//! 核心分析流程
//!
//! 选项、文档模型，以及从文档到词频表的 normalize → segment → aggregate 流程。
//! 终端输出辅助函数也放在这里。

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::env::{self, EnvVar};
use crate::error::{WebfreqError, WebfreqResult};
use crate::frequency::FrequencyTable;
use crate::network::fetcher::Fetcher;
use crate::text::{normalize, Segmenter};

/// 缺少 `<title>` 时使用的占位标题
pub const DEFAULT_TITLE: &str = "No title found";
pub const DEFAULT_TOP_N: usize = 20;
pub const DEFAULT_MIN_FREQUENCY: u64 = 5;
pub const MIN_FREQUENCY_LIMIT: u64 = 1;
pub const MAX_FREQUENCY_LIMIT: u64 = 20;
pub const DEFAULT_TIMEOUT: u64 = 30;
pub const DEFAULT_PREVIEW_CHARS: usize = 500;

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_YELLOW: &str = "\x1b[33m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Which word segmentation model to use
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmenterKind {
    /// Dictionary + HMM segmentation (default)
    #[default]
    Jieba,
    /// UAX #29 word boundaries, one token per Han character
    Unicode,
}

impl SegmenterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmenterKind::Jieba => "jieba",
            SegmenterKind::Unicode => "unicode",
        }
    }
}

impl fmt::Display for SegmenterKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmenterKind {
    type Err = WebfreqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "jieba" | "dictionary" => Ok(SegmenterKind::Jieba),
            "unicode" | "uax29" => Ok(SegmenterKind::Unicode),
            other => Err(WebfreqError::invalid_option(format!(
                "unknown segmenter \"{other}\" (expected jieba or unicode)"
            ))),
        }
    }
}

/// Configuration options for one fetch-and-analyze run
///
/// `top_n` and `min_frequency` only shape the derived views; the frequency
/// table itself is always built from every token.
#[derive(Clone, Debug, Serialize)]
pub struct AnalysisOptions {
    pub top_n: usize,
    pub min_frequency: u64,
    pub timeout: u64,
    pub user_agent: Option<String>,
    pub segmenter: SegmenterKind,
    pub hmm: bool,
    pub preview_chars: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            min_frequency: DEFAULT_MIN_FREQUENCY,
            timeout: DEFAULT_TIMEOUT,
            user_agent: None,
            segmenter: SegmenterKind::default(),
            hmm: true,
            preview_chars: DEFAULT_PREVIEW_CHARS,
        }
    }
}

impl AnalysisOptions {
    pub fn validate(&self) -> WebfreqResult<()> {
        if self.top_n == 0 {
            return Err(WebfreqError::invalid_option("top_n must be at least 1"));
        }

        if !(MIN_FREQUENCY_LIMIT..=MAX_FREQUENCY_LIMIT).contains(&self.min_frequency) {
            return Err(WebfreqError::invalid_option(format!(
                "min_frequency must be between {MIN_FREQUENCY_LIMIT} and {MAX_FREQUENCY_LIMIT}, got {}",
                self.min_frequency
            )));
        }

        if self.timeout == 0 {
            return Err(WebfreqError::invalid_option("timeout must be at least 1 second"));
        }

        Ok(())
    }
}

/// A fetched document: where it came from, its title and its main text
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Document {
    pub url: String,
    pub title: String,
    pub raw_text: String,
}

impl Document {
    /// 前 `max_chars` 个字符，被截断时追加 `...`
    pub fn preview(&self, max_chars: usize) -> String {
        let mut chars = self.raw_text.chars();
        let head: String = chars.by_ref().take(max_chars).collect();
        if chars.next().is_some() {
            format!("{head}...")
        } else {
            head
        }
    }
}

/// Non-fatal conditions noticed while analyzing a document
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    /// Extraction found no text at all
    EmptyContent,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Notice::EmptyContent => write!(f, "no readable text was found in the document"),
        }
    }
}

/// Result of one successful fetch-and-analyze request
#[derive(Clone, Debug)]
pub struct Analysis {
    pub document: Document,
    pub table: FrequencyTable,
    pub notices: Vec<Notice>,
}

/// Runs normalize → segment → aggregate over an already fetched document
///
/// Never fails: empty content yields an empty table plus
/// [`Notice::EmptyContent`].
pub fn analyze_document(document: Document, segmenter: &dyn Segmenter) -> Analysis {
    let mut notices = Vec::new();

    if document.raw_text.trim().is_empty() {
        warn!(url = %document.url, "{}", Notice::EmptyContent);
        notices.push(Notice::EmptyContent);
    }

    let clean_text = normalize(&document.raw_text);
    let tokens = segmenter.segment(&clean_text);
    debug!(
        segmenter = segmenter.name(),
        clean_chars = clean_text.chars().count(),
        tokens = tokens.len(),
        "text segmented"
    );

    let table = FrequencyTable::build(&tokens);
    info!(
        url = %document.url,
        tokens = table.total(),
        distinct = table.len(),
        "frequency table built"
    );

    Analysis {
        document,
        table,
        notices,
    }
}

/// Fetches `url` and analyzes it
pub fn analyze_url(fetcher: &Fetcher, url: &str, segmenter: &dyn Segmenter) -> WebfreqResult<Analysis> {
    let document = fetcher.fetch(url)?;
    Ok(analyze_document(document, segmenter))
}

/// Parses Content-Type header value into media type and charset
pub fn parse_content_type(content_type: &str) -> (String, String) {
    let mut parts = content_type.split(';');
    let media_type = parts.next().unwrap_or_default().trim().to_lowercase();
    let mut charset = String::new();

    for part in parts {
        let part = part.trim();
        let is_charset = part
            .get(..8)
            .map_or(false, |prefix| prefix.eq_ignore_ascii_case("charset="));
        if is_charset {
            charset = part[8..].trim_matches('"').to_string();
        }
    }

    (media_type, charset)
}

/// Checks if the given media type can be read as an HTML/text document
pub fn is_text_media_type(media_type: &str) -> bool {
    media_type.is_empty()
        || media_type.starts_with("text/")
        || media_type == "application/xhtml+xml"
        || media_type == "application/xml"
}

fn use_color() -> bool {
    !env::core::NoColor::get_or_default(false) && atty::is(atty::Stream::Stderr)
}

/// Prints an error message to stderr
pub fn print_error_message(msg: &str) {
    if use_color() {
        eprintln!("{ANSI_COLOR_RED}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}

/// Prints a non-fatal notice to stderr
pub fn print_warning_message(msg: &str) {
    if use_color() {
        eprintln!("{ANSI_COLOR_YELLOW}{msg}{ANSI_COLOR_RESET}");
    } else {
        eprintln!("{msg}");
    }
}

/// Prints an info message to stdout
pub fn print_info_message(msg: &str) {
    println!("{msg}");
}
