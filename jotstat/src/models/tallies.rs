// src/models/tallies.rs
use std::collections::HashMap;

use chrono::NaiveDate;

use super::FileReport;

/// Running totals built up by the aggregator. Single-writer by design:
/// only the draining side ever touches one of these.
#[derive(Debug, Default)]
pub struct Tallies {
    /// Number of entries successfully scanned.
    pub entries: u64,
    /// Merged word counts across all entries.
    pub words: HashMap<String, u64>,
    /// Earliest entry date seen so far.
    pub earliest: Option<NaiveDate>,
}

impl Tallies {
    /// Folds one successful report into the totals. Summation and min-of-dates
    /// are commutative and associative, so arrival order does not matter.
    pub fn absorb(&mut self, report: FileReport) {
        self.entries += 1;
        for (word, count) in report.word_counts {
            *self.words.entry(word).or_insert(0) += count;
        }
        if let Some(date) = report.date {
            self.earliest = Some(self.earliest.map_or(date, |seen| seen.min(date)));
        }
    }

    #[must_use]
    pub fn total_words(&self) -> u64 {
        self.words.values().sum()
    }
}
