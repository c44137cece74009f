//! # 解析器模块
//!
//! 负责把抓取到的 HTML 字节变成可统计的文本：
//!
//! - 字符编码识别与解码
//! - DOM 构建、标题读取
//! - 按策略定位正文区域
//!
//! # 模块组织
//!
//! - `html` - HTML文档解析、元数据读取、正文提取

pub mod html;

// Re-export commonly used items for convenience
pub use html::{get_charset, get_title, html_to_dom, read_document, ExtractionStrategy, Extractor};
