// src/models/file_report.rs
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::error::EntryError;

/// Outcome of scanning one journal entry. Exactly one of these is produced
/// per path the walker hands out, by exactly one worker.
#[derive(Debug, Default)]
pub struct FileReport {
    /// Case-folded word counts for this file alone.
    pub word_counts: HashMap<String, u64>,
    /// Best-effort entry date; `None` when no date could be recovered.
    pub date: Option<NaiveDate>,
    /// A load failure. The word map is empty when this is set.
    pub error: Option<EntryError>,
}

impl FileReport {
    #[must_use]
    pub fn failed(error: EntryError) -> Self {
        Self {
            error: Some(error),
            ..Self::default()
        }
    }
}
