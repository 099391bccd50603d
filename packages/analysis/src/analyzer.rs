//! Counting pass

use crate::config::AnalysisConfig;
use crate::table::{FrequencyTable, Symbol};

/// Count symbol occurrences in `text`
///
/// Positions are counted in characters, not bytes. Only ASCII letters are
/// letters; accented and non-Latin characters fall into
/// [`Symbol::NonAlphabetic`]. Never fails: text with nothing to count gives
/// an empty table.
#[must_use]
pub fn analyze(text: &str, config: &AnalysisConfig) -> FrequencyTable {
    let mut table = FrequencyTable::default();

    let sampled = text
        .chars()
        .enumerate()
        .filter(|(position, _)| config.sampling.keeps(*position))
        .map(|(_, c)| c);

    for c in sampled {
        if let Some(symbol) = classify(c, config) {
            table.record(symbol);
        }
    }

    tracing::trace!(
        chars = text.chars().count(),
        counted = table.total(),
        buckets = table.len(),
        "frequency analysis"
    );
    table
}

fn classify(c: char, config: &AnalysisConfig) -> Option<Symbol> {
    if c.is_ascii_alphabetic() {
        let letter = if config.case_sensitive {
            c
        } else {
            c.to_ascii_uppercase()
        };
        Some(Symbol::Letter(letter))
    } else if config.ignore_non_alphabetic {
        None
    } else {
        Some(Symbol::NonAlphabetic)
    }
}
