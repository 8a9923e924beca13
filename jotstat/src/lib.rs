// src/lib.rs
pub mod cli;
pub mod core;
pub mod error;
pub mod models;

pub use crate::cli::{Args, Command};
pub use crate::core::pipeline::collect;
pub use crate::core::reffreq::RefFreqTable;
pub use crate::core::scanner::DEFAULT_POOL_SIZE;
pub use crate::error::{EntryError, StatsError};
pub use crate::models::{FileReport, JournalStats, Ranking, Tallies, WordStat};
