//! Analysis options

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Which characters of the input are looked at
///
/// Deserializing goes through [`Sampling::every_kth`], so a JSON `k` of 0 or
/// a negative `offset` is clamped rather than rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "RawSampling")]
pub enum Sampling {
    /// Every character
    #[default]
    All,
    /// Characters at positions `offset, offset + k, offset + 2k, ...`
    EveryKth {
        /// Step between sampled positions
        k: NonZeroUsize,
        /// First sampled position, 0-indexed
        offset: usize,
    },
}

/// Unchecked wire form of [`Sampling`]
#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawSampling {
    All,
    EveryKth { k: i64, offset: i64 },
}

impl From<RawSampling> for Sampling {
    fn from(raw: RawSampling) -> Self {
        match raw {
            RawSampling::All => Self::All,
            RawSampling::EveryKth { k, offset } => Self::every_kth(k, offset),
        }
    }
}

impl Sampling {
    /// Build an `EveryKth` sampling from raw user input
    ///
    /// `k` below 1 becomes 1 and a negative `offset` becomes 0.
    #[must_use]
    pub fn every_kth(k: i64, offset: i64) -> Self {
        let k = usize::try_from(k).ok().and_then(NonZeroUsize::new).unwrap_or(NonZeroUsize::MIN);
        let offset = usize::try_from(offset).unwrap_or(0);
        Self::EveryKth { k, offset }
    }

    /// Whether the character at `position` is sampled
    #[must_use]
    pub fn keeps(&self, position: usize) -> bool {
        match *self {
            Self::All => true,
            Self::EveryKth { k, offset } => {
                position >= offset && (position - offset) % k.get() == 0
            }
        }
    }
}

/// Options for a single analysis run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Count `a` and `A` separately
    pub case_sensitive: bool,
    /// Drop non-letters instead of counting them under [`Symbol::NonAlphabetic`](crate::Symbol::NonAlphabetic)
    pub ignore_non_alphabetic: bool,
    /// Which positions to look at
    pub sampling: Sampling,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            ignore_non_alphabetic: true,
            sampling: Sampling::All,
        }
    }
}

impl AnalysisConfig {
    /// Default options: case-insensitive, letters only, every character
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set case sensitivity
    #[must_use]
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Set whether non-letters are dropped
    #[must_use]
    pub fn with_ignore_non_alphabetic(mut self, ignore: bool) -> Self {
        self.ignore_non_alphabetic = ignore;
        self
    }

    /// Set the sampling mode
    #[must_use]
    pub fn with_sampling(mut self, sampling: Sampling) -> Self {
        self.sampling = sampling;
        self
    }
}
