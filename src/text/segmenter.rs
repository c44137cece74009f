//! 分词
//!
//! 分词模型通过 [`Segmenter`] trait 注入，流水线不关心具体实现。
//! 对固定的输入和词典版本，所有实现的输出都是确定的。

use jieba_rs::Jieba;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::core::{AnalysisOptions, SegmenterKind};

/// Splits normalized text into tokens
pub trait Segmenter {
    fn name(&self) -> &'static str;

    /// 空输入得到空序列；只含空白的词被丢弃
    fn segment(&self, text: &str) -> Vec<String>;
}

/// Dictionary-driven segmentation backed by jieba's bundled dictionary
pub struct JiebaSegmenter {
    jieba: Jieba,
    hmm: bool,
}

impl JiebaSegmenter {
    pub fn new() -> Self {
        debug!("loading jieba dictionary");
        Self {
            jieba: Jieba::new(),
            hmm: true,
        }
    }

    /// 是否用 HMM 识别词典之外的新词
    pub fn with_hmm(mut self, hmm: bool) -> Self {
        self.hmm = hmm;
        self
    }
}

impl Default for JiebaSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for JiebaSegmenter {
    fn name(&self) -> &'static str {
        "jieba"
    }

    fn segment(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }

        self.jieba
            .cut(text, self.hmm)
            .into_iter()
            .filter(|word| !word.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Dictionary-free segmentation on Unicode word boundaries
///
/// Han ideographs have no word-boundary rules of their own, so every
/// character becomes one token; runs of Latin letters or digits stay whole.
pub struct UnicodeWordSegmenter;

impl Segmenter for UnicodeWordSegmenter {
    fn name(&self) -> &'static str {
        "unicode"
    }

    fn segment(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .filter(|word| !word.trim().is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// 根据配置创建分词器
pub fn segmenter_for(options: &AnalysisOptions) -> Box<dyn Segmenter> {
    match options.segmenter {
        SegmenterKind::Jieba => Box::new(JiebaSegmenter::new().with_hmm(options.hmm)),
        SegmenterKind::Unicode => Box::new(UnicodeWordSegmenter),
    }
}
