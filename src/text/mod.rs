//! # 文本处理模块
//!
//! - `normalizer` - 去除残留标记与标点、折叠空白
//! - `segmenter` - 把没有词间分隔符的文本切分成词

pub mod normalizer;
pub mod segmenter;

pub use normalizer::normalize;
pub use segmenter::{segmenter_for, JiebaSegmenter, Segmenter, UnicodeWordSegmenter};
