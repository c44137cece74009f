//! 分析会话
//!
//! 会话独占当前生效的分析结果（包括词频表）。只有新的分析成功时才整体替换，
//! 失败的请求不会改动已有状态。所有视图都从当前结果即时计算。

use tracing::{debug, warn};

use crate::core::{analyze_document, analyze_url, Analysis, AnalysisOptions};
use crate::error::{WebfreqError, WebfreqResult};
use crate::frequency::{FilteredView, RankedView};
use crate::network::fetcher::Fetcher;
use crate::parsers::html::{read_document, Extractor};
use crate::presentation::{chart_series, ChartKind, ChartSeries};
use crate::text::{segmenter_for, Segmenter};

pub struct AnalysisSession {
    options: AnalysisOptions,
    segmenter: Box<dyn Segmenter>,
    extractor: Extractor,
    active: Option<Analysis>,
}

impl AnalysisSession {
    pub fn new(options: AnalysisOptions) -> WebfreqResult<Self> {
        options.validate()?;
        let segmenter = segmenter_for(&options);
        Ok(Self::with_segmenter(options, segmenter))
    }

    /// 注入自定义分词器（例如测试中使用确定性的桩实现）
    pub fn with_segmenter(options: AnalysisOptions, segmenter: Box<dyn Segmenter>) -> Self {
        Self {
            options,
            segmenter,
            extractor: Extractor::default(),
            active: None,
        }
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    pub fn active(&self) -> Option<&Analysis> {
        self.active.as_ref()
    }

    /// 抓取并分析 `url`；失败时保留原有结果
    pub fn analyze_url(&mut self, fetcher: &Fetcher, url: &str) -> WebfreqResult<&Analysis> {
        let analysis = analyze_url(fetcher, url, self.segmenter.as_ref()).map_err(|e| {
            warn!(url, error = %e, "fetch failed, keeping previous analysis");
            e
        })?;
        Ok(self.replace(analysis))
    }

    /// 分析已经在手的 HTML 字节（例如本地文件）
    pub fn analyze_html(&mut self, url: &str, data: &[u8], charset: Option<&str>) -> &Analysis {
        let document = read_document(url, data, charset, &self.extractor);
        let analysis = analyze_document(document, self.segmenter.as_ref());
        self.replace(analysis)
    }

    fn replace(&mut self, analysis: Analysis) -> &Analysis {
        debug!(url = %analysis.document.url, "replacing active analysis");
        self.active.insert(analysis)
    }

    fn require_active(&self) -> WebfreqResult<&Analysis> {
        self.active
            .as_ref()
            .ok_or_else(|| WebfreqError::insufficient_data("no document has been analyzed yet"))
    }

    /// Top-N view using the configured `top_n`
    pub fn ranked(&self) -> WebfreqResult<RankedView> {
        Ok(self.require_active()?.table.top_n(self.options.top_n))
    }

    /// Threshold view using the configured `min_frequency`
    pub fn filtered(&self) -> WebfreqResult<FilteredView> {
        self.require_active()?
            .table
            .filter_by_min_count(self.options.min_frequency)
    }

    /// Pairs for `kind`; the word cloud covers every word
    pub fn chart(&self, kind: ChartKind) -> WebfreqResult<ChartSeries> {
        chart_series(kind, &self.require_active()?.table, self.options.top_n, 1)
    }

    /// Word cloud restricted to words meeting `min_frequency`
    pub fn filtered_cloud(&self) -> WebfreqResult<ChartSeries> {
        chart_series(
            ChartKind::WordCloud,
            &self.require_active()?.table,
            self.options.top_n,
            self.options.min_frequency,
        )
    }
}
