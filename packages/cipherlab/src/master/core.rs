//! Core master builder

use super::CipherMasterBuilder;
use cipherlab_analysis::{AnalysisConfig, FrequencyTable};

/// Unified entry point for cipherlab operations
pub struct Cipherlab;

impl Cipherlab {
    /// Entry point for cipher operations
    /// Example: `Cipherlab::cipher().caesar().with_shift(3).encrypt(text)`
    #[must_use]
    pub fn cipher() -> CipherMasterBuilder {
        CipherMasterBuilder
    }

    /// Letter-frequency table of `text`
    #[must_use]
    pub fn analyze(text: &str, config: &AnalysisConfig) -> FrequencyTable {
        cipherlab_analysis::analyze(text, config)
    }
}
