// src/core/walker.rs
//! Directory traversal: finds journal entries under a root and streams
//! their paths to the scanner pool.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, bounded, select};
use tracing::debug;
use walkdir::WalkDir;

use crate::core::cancel::CancelToken;
use crate::core::entry::is_entry;
use crate::error::StatsError;

/// Spawns the walker thread.
///
/// Returns the path stream, the single-slot terminal result, and the
/// thread handle. The path stream is closed on every exit path (success,
/// traversal failure, cancellation); the terminal result is buffered so
/// sending it never blocks the walker, and the caller may read it after
/// draining or abandoning the path stream without deadlock.
#[must_use]
pub fn spawn(
    root: PathBuf,
    token: CancelToken,
) -> (
    Receiver<PathBuf>,
    Receiver<Result<(), StatsError>>,
    JoinHandle<()>,
) {
    let (path_tx, path_rx) = bounded(0);
    let (done_tx, done_rx) = bounded(1);
    let handle = thread::Builder::new()
        .name(String::from("walker"))
        .spawn(move || {
            let outcome = walk(&root, &path_tx, &token);
            // Capacity-one slot; send cannot block. The receiver end lives
            // as long as the pipeline, so the result is never lost.
            let _ = done_tx.send(outcome);
        })
        .expect("spawn walker thread");
    (path_rx, done_rx, handle)
}

/// Traverses `root`, publishing each entry path at most once.
///
/// Entries sharing a base filename are deduplicated, first occurrence wins;
/// which occurrence is first depends on directory order and is accepted as
/// nondeterministic.
fn walk(root: &Path, paths: &Sender<PathBuf>, token: &CancelToken) -> Result<(), StatsError> {
    let mut visited: HashSet<OsString> = HashSet::new();
    for dir_entry in WalkDir::new(root) {
        let dir_entry = dir_entry?;
        if !dir_entry.file_type().is_file() || !is_entry(dir_entry.path()) {
            continue;
        }
        if !visited.insert(dir_entry.file_name().to_os_string()) {
            debug!(path = %dir_entry.path().display(), "skipping duplicate base name");
            continue;
        }
        select! {
            send(paths, dir_entry.into_path()) -> sent => {
                if sent.is_err() {
                    return Err(StatsError::WalkCanceled);
                }
            }
            recv(token.signal()) -> _ => return Err(StatsError::WalkCanceled),
        }
    }
    debug!(entries = visited.len(), "walk complete");
    Ok(())
}
