//! 词频统计
//!
//! [`FrequencyTable`] 由词序列一次折叠得到，之后只读。
//! 排名视图与阈值视图都是按需计算的投影，不会修改词频表。
//! 计数相同的词按首次出现的顺序排列，保证结果可复现。

use std::collections::HashMap;

use serde::Serialize;

use crate::error::{WebfreqError, WebfreqResult};

/// A `(token, count)` pair as handed to consumers
pub type Pair = (String, u64);

/// Token → occurrence count, remembering first-occurrence order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    /// 按首次出现顺序排列的词和计数
    entries: Vec<Pair>,
    index: HashMap<String, usize>,
    total: u64,
}

impl FrequencyTable {
    /// O(n) in the number of tokens
    pub fn build<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut table = FrequencyTable::default();

        for token in tokens {
            let token = token.as_ref();
            match table.index.get(token) {
                Some(&position) => table.entries[position].1 += 1,
                None => {
                    table.index.insert(token.to_string(), table.entries.len());
                    table.entries.push((token.to_string(), 1));
                }
            }
            table.total += 1;
        }

        table
    }

    pub fn get(&self, token: &str) -> Option<u64> {
        self.index.get(token).map(|&position| self.entries[position].1)
    }

    /// 不同词的数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 所有计数之和，等于构建时的词数
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Entries in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// The `n` highest counts; fewer than `n` when the table is smaller
    pub fn top_n(&self, n: usize) -> RankedView {
        RankedView {
            entries: rank(self.entries.iter(), n),
        }
    }

    /// Like [`top_n`](Self::top_n), but an empty table is an error
    pub fn top_n_required(&self, n: usize) -> WebfreqResult<RankedView> {
        if self.is_empty() {
            return Err(WebfreqError::insufficient_data(
                "cannot rank an empty frequency table",
            ));
        }
        Ok(self.top_n(n))
    }

    /// All entries with `count >= min_count`, in first-occurrence order
    pub fn filter_by_min_count(&self, min_count: u64) -> WebfreqResult<FilteredView> {
        if min_count == 0 {
            return Err(WebfreqError::invalid_option(
                "min_count must be a positive integer",
            ));
        }

        Ok(FilteredView {
            min_count,
            entries: self
                .entries
                .iter()
                .filter(|(_, count)| *count >= min_count)
                .cloned()
                .collect(),
        })
    }
}

fn rank<'a, I>(entries: I, n: usize) -> Vec<Pair>
where
    I: Iterator<Item = &'a Pair>,
{
    let mut ranked: Vec<&Pair> = entries.collect();
    // stable: equal counts keep first-occurrence order
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(n).cloned().collect()
}

/// Read-only access to a projection of a frequency table
pub trait FrequencyView {
    fn entries(&self) -> &[Pair];

    fn len(&self) -> usize {
        self.entries().len()
    }

    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    fn max_count(&self) -> Option<u64> {
        self.entries().iter().map(|(_, count)| *count).max()
    }
}

/// Top-N entries ordered by count descending
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RankedView {
    entries: Vec<Pair>,
}

impl FrequencyView for RankedView {
    fn entries(&self) -> &[Pair] {
        &self.entries
    }
}

/// Entries meeting a minimum count threshold
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FilteredView {
    min_count: u64,
    entries: Vec<Pair>,
}

impl FilteredView {
    pub fn min_count(&self) -> u64 {
        self.min_count
    }

    /// 按计数降序排列全部条目
    pub fn ranked(&self) -> RankedView {
        RankedView {
            entries: rank(self.entries.iter(), self.entries.len()),
        }
    }
}

impl FrequencyView for FilteredView {
    fn entries(&self) -> &[Pair] {
        &self.entries
    }
}
