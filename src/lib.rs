//! # Webfreq Library
//!
//! 抓取网页、提取正文并统计中文词频的工具库。
//!
//! ## 模块组织
//!
//! - `core` - 选项、文档模型与分析流程
//! - `env` - 环境变量配置
//! - `error` - 错误类型
//! - `network` - HTTP 抓取
//! - `parsers` - HTML 解码、标题与正文提取
//! - `text` - 文本清洗与分词
//! - `frequency` - 词频表及其视图
//! - `presentation` - 图表数据适配
//! - `session` - 持有当前分析结果的会话

pub mod core;
pub mod env;
pub mod error;
pub mod frequency;
pub mod network;
pub mod parsers;
pub mod presentation;
pub mod session;
pub mod text;

// Re-export commonly used items for convenience
pub use crate::core::{
    analyze_document, analyze_url, Analysis, AnalysisOptions, Document, Notice, SegmenterKind,
};
pub use crate::error::{ErrorCategory, FetchError, WebfreqError, WebfreqResult};
pub use crate::frequency::{FilteredView, FrequencyTable, FrequencyView, RankedView};
pub use crate::network::{validate_url, Fetcher};
pub use crate::parsers::{read_document, Extractor};
pub use crate::presentation::{chart_series, to_pairs, ChartKind, ChartSeries};
pub use crate::session::AnalysisSession;
pub use crate::text::{normalize, Segmenter};
