// src/core/entry.rs
//! The journal entry format: a Markdown file named for its date
//! (`2024-01-15.md`), optionally opening with a YAML frontmatter block.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::EntryError;

#[derive(Deserialize, Debug, Default)]
struct Frontmatter {
    date: Option<NaiveDate>,
}

/// Returns whether `path` looks like a journal entry: a `.md` file whose
/// stem parses as an ISO date. Pure predicate, no filesystem access.
#[must_use]
pub fn is_entry(path: &Path) -> bool {
    if !path.extension().is_some_and(|ext| ext == "md") {
        return false;
    }
    date_from_path(path).is_some()
}

fn date_from_path(path: &Path) -> Option<NaiveDate> {
    let stem = path.file_stem()?.to_str()?;
    NaiveDate::parse_from_str(stem, "%Y-%m-%d").ok()
}

/// One loaded journal entry.
#[derive(Debug)]
pub struct Entry {
    path: PathBuf,
    frontmatter: Frontmatter,
    body: String,
}

impl Entry {
    /// Reads and parses the file at `path`.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read as UTF-8 or when a frontmatter
    /// block is present but is not valid YAML.
    pub fn load(path: &Path) -> Result<Self, EntryError> {
        let content = fs::read_to_string(path).map_err(|source| EntryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let (frontmatter, body) = split_frontmatter(&content, path)?;
        Ok(Self {
            path: path.to_path_buf(),
            frontmatter,
            body,
        })
    }

    /// Lazy sequence of word tokens from the body: whitespace-split, edges
    /// trimmed of non-alphanumerics, empties skipped. No case-folding here;
    /// that belongs to whoever is counting.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.body
            .split_whitespace()
            .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
            .filter(|token| !token.is_empty())
    }

    /// The entry's date: an explicit frontmatter `date:` wins, otherwise the
    /// filename. Best-effort; callers treat a failure as non-fatal.
    ///
    /// # Errors
    ///
    /// Fails when neither the frontmatter nor the filename carries a date.
    pub fn date(&self) -> Result<NaiveDate, EntryError> {
        self.frontmatter
            .date
            .or_else(|| date_from_path(&self.path))
            .ok_or_else(|| EntryError::NoDate {
                path: self.path.clone(),
            })
    }
}

/// Splits an optional leading `---` frontmatter block off `content`.
fn split_frontmatter(content: &str, path: &Path) -> Result<(Frontmatter, String), EntryError> {
    let mut lines = content.lines();
    if lines.next() != Some("---") {
        return Ok((Frontmatter::default(), content.to_owned()));
    }

    let mut frontmatter_str = String::new();
    for line in lines.by_ref() {
        if line == "---" {
            break;
        }
        frontmatter_str.push_str(line);
        frontmatter_str.push('\n');
    }

    let body = lines.collect::<Vec<_>>().join("\n");
    if frontmatter_str.trim().is_empty() {
        return Ok((Frontmatter::default(), body));
    }
    let frontmatter =
        serde_yaml_ng::from_str(&frontmatter_str).map_err(|source| EntryError::Frontmatter {
            path: path.to_path_buf(),
            source,
        })?;
    Ok((frontmatter, body))
}
