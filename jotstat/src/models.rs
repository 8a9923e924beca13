// src/models.rs
mod file_report;
mod journal_stats;
mod tallies;
mod word_stat;

pub use file_report::FileReport;
pub use journal_stats::JournalStats;
pub use tallies::Tallies;
pub use word_stat::{Ranking, TOP_WORD_COUNT, WordStat};
