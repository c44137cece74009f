//! # 网络模块
//!
//! 这个模块负责唯一的一次网络交互：抓取目标网页。
//!
//! - 带超时的 HTTP GET
//! - 响应头中的字符编码识别
//! - 传输层错误分类
//!
//! # 模块组织
//!
//! - `fetcher` - HTTP 客户端、URL 校验、文档抓取

pub mod fetcher;

// Re-export commonly used items for convenience
pub use fetcher::{validate_url, Fetcher, RetrievedResource, DEFAULT_USER_AGENT};
