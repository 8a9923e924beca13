// src/error.rs
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for a statistics run.
#[derive(Debug, Error)]
pub enum StatsError {
    /// The working directory could not be resolved before the pipeline started.
    #[error("resolving working directory: {0}")]
    WorkingDirectory(#[source] io::Error),

    /// The traversal itself failed (unreadable directory, broken link, ...).
    #[error("walking journal tree: {0}")]
    Walk(#[from] walkdir::Error),

    /// The walk was aborted by cancellation before it finished.
    #[error("walk canceled")]
    WalkCanceled,

    /// A single entry failed to load; fatal to the whole run.
    #[error(transparent)]
    Entry(#[from] EntryError),

    /// The reference frequency table exists but could not be parsed.
    #[error("reading reference frequencies from {path}: {source}")]
    Reference {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Per-file errors from loading a journal entry.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed frontmatter in {path}: {source}")]
    Frontmatter {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// Non-fatal: an entry with no recoverable date is still counted.
    #[error("no date for {path}")]
    NoDate { path: PathBuf },
}
