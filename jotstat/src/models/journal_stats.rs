// src/models/journal_stats.rs
use chrono::{DateTime, NaiveDate, Utc};

use super::Tallies;

/// Scalar statistics derived once from the final tallies.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalStats {
    pub entry_count: u64,
    pub earliest: NaiveDate,
    pub total_words: u64,
    pub avg_words: f64,
    /// Fraction of days journaled since the earliest entry, in [0, ...].
    pub percent_journaled: f64,
}

impl JournalStats {
    /// Derives the scalar stats, or `None` when nothing was scanned (a
    /// zero-entry run produces no report at all).
    ///
    /// `now` is injected rather than read from the clock so results are
    /// reproducible under test.
    #[must_use]
    pub fn derive(tallies: &Tallies, now: DateTime<Utc>) -> Option<Self> {
        if tallies.entries == 0 {
            return None;
        }
        // A dateless corpus behaves as if it started today.
        let earliest = tallies.earliest.unwrap_or_else(|| now.date_naive());
        let midnight = earliest.and_hms_opt(0, 0, 0)?.and_utc();
        // Whole days elapsed, clamped so a same-day journal divides by one.
        let days = (now - midnight).num_hours().div_euclid(24).max(1);
        let total_words = tallies.total_words();
        Some(Self {
            entry_count: tallies.entries,
            earliest,
            total_words,
            avg_words: total_words as f64 / tallies.entries as f64,
            percent_journaled: tallies.entries as f64 / days as f64,
        })
    }
}
