//! HTML解析和正文提取模块
//!
//! - `dom`: 解码、DOM 构建与基础遍历
//! - `metadata`: 标题与字符编码声明
//! - `extract`: 有序的正文提取策略

pub mod dom;
pub mod extract;
pub mod metadata;

pub use dom::{
    collect_text, decode_bytes, find_first_element, find_nodes, get_node_attr, get_node_name,
    has_class, html_to_dom,
};
pub use extract::{
    read_document, ClassRegion, ExtractionStrategy, Extractor, TagRegion, VisibleText,
    INVISIBLE_ELEMENTS, SUMMARY_CLASS,
};
pub use metadata::{get_charset, get_title};
