//! 展示适配层
//!
//! 渲染层只依赖 [`to_pairs`] 产生的 `(label, value)` 序列，不接触词频表内部结构。
//! 每种图表对数据形状的要求由 [`ChartKind::contract`] 描述，
//! [`chart_series`] 按照该约定从词频表取数。

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{WebfreqError, WebfreqResult};
use crate::frequency::{FrequencyTable, FrequencyView};

/// Converts a view into chart-ready pairs, preserving its order
pub fn to_pairs<V: FrequencyView + ?Sized>(view: &V) -> Vec<(String, u64)> {
    view.entries().to_vec()
}

/// Chart types the rendering layer knows how to draw
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    WordCloud,
    Bar,
    Line,
    Pie,
    Scatter,
    Funnel,
    Radar,
}

/// Where a chart takes its pairs from
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewSource {
    /// 全部满足最小词频的条目，不排序
    Filtered,
    /// 排名前 N 的条目
    Ranked,
}

/// The shape a chart's pairs must satisfy
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ShapeContract {
    pub source: ViewSource,
    /// 为空时无法绘制
    pub requires_data: bool,
    /// 计数必须非递增
    pub ordered: bool,
    /// 需要所有值共享的坐标上限
    pub needs_axis_max: bool,
}

impl ShapeContract {
    pub fn check(&self, pairs: &[(String, u64)]) -> WebfreqResult<()> {
        if self.requires_data && pairs.is_empty() {
            return Err(WebfreqError::insufficient_data(
                "this chart needs at least one word",
            ));
        }

        if self.ordered && pairs.windows(2).any(|w| w[0].1 < w[1].1) {
            return Err(WebfreqError::invalid_option(
                "this chart needs pairs ordered by count",
            ));
        }

        Ok(())
    }
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        ChartKind::WordCloud,
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::Scatter,
        ChartKind::Funnel,
        ChartKind::Radar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::WordCloud => "wordcloud",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Scatter => "scatter",
            ChartKind::Funnel => "funnel",
            ChartKind::Radar => "radar",
        }
    }

    /// 图表标题
    pub fn title(&self) -> &'static str {
        match self {
            ChartKind::WordCloud => "词云",
            ChartKind::Bar => "柱状图",
            ChartKind::Line => "折线图",
            ChartKind::Pie => "饼状图",
            ChartKind::Scatter => "散点图",
            ChartKind::Funnel => "漏斗图",
            ChartKind::Radar => "雷达图",
        }
    }

    pub fn contract(&self) -> ShapeContract {
        match self {
            ChartKind::WordCloud => ShapeContract {
                source: ViewSource::Filtered,
                requires_data: false,
                ordered: false,
                needs_axis_max: false,
            },
            ChartKind::Bar
            | ChartKind::Line
            | ChartKind::Pie
            | ChartKind::Scatter
            | ChartKind::Funnel => ShapeContract {
                source: ViewSource::Ranked,
                requires_data: true,
                ordered: true,
                needs_axis_max: false,
            },
            ChartKind::Radar => ShapeContract {
                source: ViewSource::Ranked,
                requires_data: true,
                ordered: true,
                needs_axis_max: true,
            },
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = WebfreqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        let normalized = wanted.to_lowercase().replace(['-', '_', ' '], "");

        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.name() == normalized || kind.title() == wanted)
            .ok_or_else(|| {
                WebfreqError::invalid_option(format!(
                    "unknown chart kind \"{wanted}\" (expected one of: {})",
                    ChartKind::ALL.map(|k| k.name()).join(", ")
                ))
            })
    }
}

/// What a renderer needs to draw one chart
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    pub kind: ChartKind,
    pub title: String,
    pub pairs: Vec<(String, u64)>,
    /// Only set for charts whose contract needs a shared axis bound
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axis_max: Option<u64>,
}

/// Builds the pairs for `kind` from `table`
///
/// `top_n` bounds ranked charts; `min_count` filters the word cloud
/// (pass 1 to keep every word).
pub fn chart_series(
    kind: ChartKind,
    table: &FrequencyTable,
    top_n: usize,
    min_count: u64,
) -> WebfreqResult<ChartSeries> {
    let contract = kind.contract();

    let (pairs, axis_max) = match contract.source {
        ViewSource::Filtered => {
            let view = table.filter_by_min_count(min_count)?;
            (to_pairs(&view), view.max_count())
        }
        ViewSource::Ranked => {
            let view = if contract.requires_data {
                table.top_n_required(top_n)?
            } else {
                table.top_n(top_n)
            };
            (to_pairs(&view), view.max_count())
        }
    };

    contract.check(&pairs)?;

    Ok(ChartSeries {
        kind,
        title: kind.title().to_string(),
        pairs,
        axis_max: axis_max.filter(|_| contract.needs_axis_max),
    })
}
