//! 正文提取
//!
//! 提取策略按顺序尝试，第一个产生非空文本的策略胜出。默认顺序为：
//! 百科摘要区域 (`.lemma-summary`)、`<article>`、`<main>`，最后回退到整个文档的可见文本。
//! 因此即使页面缺少某个特定的结构标记，也不会只因此返回空内容。

use encoding_rs::Encoding;
use markup5ever_rcdom::Handle;
use tracing::{debug, warn};

use crate::core::{Document, DEFAULT_TITLE};

use super::dom::{collect_text, decode_bytes, find_first_element, get_node_name, has_class, html_to_dom};
use super::metadata::{get_charset, get_title};

/// 不属于可见文本的元素
pub const INVISIBLE_ELEMENTS: &[&str] = &["head", "script", "style", "noscript", "template"];

/// 百科类页面的摘要区域
pub const SUMMARY_CLASS: &str = "lemma-summary";

/// 一种从 DOM 中定位正文的方式
pub trait ExtractionStrategy {
    fn name(&self) -> &str;

    /// 返回 `None` 或空白文本都表示该策略未命中
    fn extract(&self, document: &Handle) -> Option<String>;
}

/// 第一个带有指定 class 的元素
pub struct ClassRegion {
    class_name: String,
}

impl ClassRegion {
    pub fn new(class_name: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
        }
    }
}

impl ExtractionStrategy for ClassRegion {
    fn name(&self) -> &str {
        &self.class_name
    }

    fn extract(&self, document: &Handle) -> Option<String> {
        find_first_element(document, &|node: &Handle| has_class(node, &self.class_name))
            .map(|node| collect_text(&node, INVISIBLE_ELEMENTS))
    }
}

/// 第一个指定标签名的元素
pub struct TagRegion {
    tag_name: String,
}

impl TagRegion {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
        }
    }
}

impl ExtractionStrategy for TagRegion {
    fn name(&self) -> &str {
        &self.tag_name
    }

    fn extract(&self, document: &Handle) -> Option<String> {
        find_first_element(document, &|node: &Handle| {
            get_node_name(node) == Some(self.tag_name.as_str())
        })
        .map(|node| collect_text(&node, INVISIBLE_ELEMENTS))
    }
}

/// 整个文档的可见文本
pub struct VisibleText;

impl ExtractionStrategy for VisibleText {
    fn name(&self) -> &str {
        "document"
    }

    fn extract(&self, document: &Handle) -> Option<String> {
        Some(collect_text(document, INVISIBLE_ELEMENTS))
    }
}

/// 有序的提取策略列表
pub struct Extractor {
    strategies: Vec<Box<dyn ExtractionStrategy>>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(vec![
            Box::new(ClassRegion::new(SUMMARY_CLASS)),
            Box::new(TagRegion::new("article")),
            Box::new(TagRegion::new("main")),
            Box::new(VisibleText),
        ])
    }
}

impl Extractor {
    pub fn new(strategies: Vec<Box<dyn ExtractionStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn strategy_names(&self) -> Vec<&str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    /// 依次尝试各策略，返回命中的文本和策略名；全部未命中时返回空文本
    pub fn extract(&self, document: &Handle) -> (String, Option<&str>) {
        for strategy in &self.strategies {
            match strategy.extract(document) {
                Some(text) if !text.trim().is_empty() => {
                    debug!(strategy = strategy.name(), chars = text.chars().count(), "content extracted");
                    return (text, Some(strategy.name()));
                }
                _ => debug!(strategy = strategy.name(), "extraction strategy found nothing"),
            }
        }

        (String::new(), None)
    }
}

/// 把 HTML 字节解析为 [`Document`]
///
/// `declared_charset` 来自 HTTP `Content-Type` 头，优先级最高；
/// 未声明时使用文档内 `<meta>` 声明的编码，再否则按 UTF-8 解码。
/// 无法解码的字节以替换字符代替，只记录日志，不会失败。
pub fn read_document(
    url: &str,
    data: &[u8],
    declared_charset: Option<&str>,
    extractor: &Extractor,
) -> Document {
    let declared = declared_charset
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .and_then(|c| {
            let encoding = Encoding::for_label_no_replacement(c.as_bytes());
            if encoding.is_none() {
                warn!(charset = c, "unknown charset in response headers, ignoring it");
            }
            encoding
        });

    let (mut html, mut encoding, mut had_errors) =
        decode_bytes(data, declared.map(|e| e.name()).unwrap_or("utf-8"));
    let mut dom = html_to_dom(&html);

    if declared.is_none() {
        if let Some(html_charset) = get_charset(&dom.document) {
            match Encoding::for_label_no_replacement(html_charset.as_bytes()) {
                Some(document_encoding) if document_encoding != encoding => {
                    debug!(charset = document_encoding.name(), "re-decoding with document charset");
                    (html, encoding, had_errors) = decode_bytes(data, document_encoding.name());
                    dom = html_to_dom(&html);
                }
                Some(_) => {}
                None => warn!(charset = %html_charset, "unknown charset declared in document, using {}", encoding.name()),
            }
        }
    }

    if had_errors {
        warn!(
            url,
            encoding = encoding.name(),
            "document contained byte sequences invalid for its encoding; replaced them"
        );
    }

    let title = get_title(&dom.document).unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let (raw_text, strategy) = extractor.extract(&dom.document);
    debug!(url, strategy = strategy.unwrap_or("none"), "document read");

    Document {
        url: url.to_string(),
        title,
        raw_text,
    }
}
