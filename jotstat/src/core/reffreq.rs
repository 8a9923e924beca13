// src/core/reffreq.rs
//! The reference word-frequency table: word → baseline frequency in [0, 1].
//!
//! Loaded once at startup from a TOML file of `word = frequency` pairs in
//! the journal root and passed to the ranking step as an explicit value.
//! An absent file is the empty table, which disables outlier ranking.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::StatsError;

/// Filename looked up in the journal root.
pub const REF_FREQ_FILE: &str = ".reffreq.toml";

#[derive(Debug, Default, Clone)]
pub struct RefFreqTable {
    freqs: HashMap<String, f64>,
}

impl RefFreqTable {
    /// Loads the table from `path`; a missing file yields the empty table.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed as TOML.
    pub fn load(path: &Path) -> Result<Self, StatsError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let reference = |source: Box<dyn std::error::Error + Send + Sync>| StatsError::Reference {
            path: path.to_path_buf(),
            source,
        };
        let content = fs::read_to_string(path).map_err(|e| reference(e.into()))?;
        let freqs = toml::from_str(&content).map_err(|e| reference(e.into()))?;
        Ok(Self { freqs })
    }

    /// Baseline frequency for `word`, zero when absent.
    #[must_use]
    pub fn get(&self, word: &str) -> f64 {
        self.freqs.get(word).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.freqs.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for RefFreqTable {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        Self {
            freqs: iter.into_iter().map(|(w, f)| (w.into(), f)).collect(),
        }
    }
}
