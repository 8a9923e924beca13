// src/models/word_stat.rs
use std::cmp::Ordering;
use std::collections::HashMap;

use crate::core::reffreq::RefFreqTable;

/// How many words each ranked table holds at most.
pub const TOP_WORD_COUNT: usize = 100;

/// One word's standing against the reference corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct WordStat {
    pub word: String,
    pub occurrences: u64,
    /// Observed-to-reference frequency ratio. Positive means over-used
    /// relative to the reference, negative magnitude means under-used,
    /// zero means over-used but absent from the reference (no signal).
    pub rel_frequency: f64,
}

/// The two ranked outlier tables.
#[derive(Debug, Default)]
pub struct Ranking {
    /// Unusually frequent words, most over-used first.
    pub frequent: Vec<WordStat>,
    /// Unusually infrequent words, most under-used first.
    pub infrequent: Vec<WordStat>,
}

impl Ranking {
    /// Ranks every observed word by relative frequency and keeps the two
    /// extremes, each capped at `min(TOP_WORD_COUNT, distinct words)`.
    ///
    /// `total_words` must be the sum over `word_counts`; callers with a
    /// `Tallies` in hand already have it.
    #[must_use]
    pub fn rank(
        word_counts: &HashMap<String, u64>,
        total_words: u64,
        reference: &RefFreqTable,
    ) -> Self {
        if total_words == 0 {
            return Self::default();
        }
        let mut stats: Vec<WordStat> = word_counts
            .iter()
            .map(|(word, &occurrences)| {
                let frequency = occurrences as f64 / total_words as f64;
                let ref_frequency = reference.get(word);
                let rel_frequency = if frequency > ref_frequency {
                    if ref_frequency > 0.0 {
                        frequency / ref_frequency
                    } else {
                        0.0
                    }
                } else {
                    // frequency is nonzero here: the word was observed.
                    -(ref_frequency / frequency)
                };
                WordStat {
                    word: word.clone(),
                    occurrences,
                    rel_frequency,
                }
            })
            .collect();

        stats.sort_by(|a, b| {
            b.rel_frequency
                .partial_cmp(&a.rel_frequency)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.word.cmp(&b.word))
        });

        let cap = stats.len().min(TOP_WORD_COUNT);
        let infrequent = stats.iter().rev().take(cap).cloned().collect();
        stats.truncate(cap);
        Self {
            frequent: stats,
            infrequent,
        }
    }
}
