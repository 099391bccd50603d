//! Frequency table returned by [`analyze`](crate::analyze)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A counted bucket
///
/// Letters order before the sentinel, so iteration lists `A..Z`, then
/// `a..z` when case-sensitive, then [`Symbol::NonAlphabetic`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Symbol {
    /// An ASCII letter, upper-cased unless the analysis is case-sensitive
    Letter(char),
    /// Everything outside the counted alphabet
    NonAlphabetic,
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{c}"),
            Self::NonAlphabetic => f.write_str("Non-Alpha"),
        }
    }
}

/// One bar of a frequency chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRow {
    /// Bar label, a letter or `Non-Alpha`
    pub label: String,
    /// Occurrences
    pub count: usize,
    /// Share of the table total, `0.0..=100.0`
    pub percentage: f64,
}

/// Occurrence counts per symbol
///
/// Only symbols that occurred are present. An empty table means there was
/// nothing to count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: BTreeMap<Symbol, usize>,
}

impl FrequencyTable {
    pub(crate) fn record(&mut self, symbol: Symbol) {
        *self.counts.entry(symbol).or_insert(0) += 1;
    }

    /// Nothing was counted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct symbols present
    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all counts
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Count for `symbol`, zero when absent
    #[must_use]
    pub fn get(&self, symbol: Symbol) -> usize {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Buckets in symbol order
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        self.counts.iter().map(|(symbol, count)| (*symbol, *count))
    }

    /// Buckets by descending count; ties keep symbol order
    #[must_use]
    pub fn by_count(&self) -> Vec<(Symbol, usize)> {
        let mut buckets: Vec<_> = self.iter().collect();
        buckets.sort_by(|a, b| b.1.cmp(&a.1));
        buckets
    }

    /// Rows ready for a bar chart, in symbol order
    #[must_use]
    pub fn chart_rows(&self) -> Vec<ChartRow> {
        let total = self.total();
        self.iter()
            .map(|(symbol, count)| ChartRow {
                label: symbol.to_string(),
                count,
                percentage: if total == 0 {
                    0.0
                } else {
                    count as f64 * 100.0 / total as f64
                },
            })
            .collect()
    }

    /// Index of coincidence over the letter buckets
    ///
    /// The chance that two letters drawn without replacement match. English
    /// sits near 0.066, uniformly random letters near 0.038. `None` with
    /// fewer than two letters.
    #[must_use]
    pub fn index_of_coincidence(&self) -> Option<f64> {
        let letters = self
            .iter()
            .filter(|(symbol, _)| matches!(symbol, Symbol::Letter(_)))
            .map(|(_, count)| count);

        let (n, pairs) = letters.fold((0usize, 0usize), |(n, pairs), count| {
            (n + count, pairs + count * count.saturating_sub(1))
        });
        if n < 2 {
            return None;
        }
        Some(pairs as f64 / (n * (n - 1)) as f64)
    }
}

impl<'a> IntoIterator for &'a FrequencyTable {
    type Item = (&'a Symbol, &'a usize);
    type IntoIter = std::collections::btree_map::Iter<'a, Symbol, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.iter()
    }
}
