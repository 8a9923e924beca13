// src/core/scanner.rs
//! The scanning pool: a fixed set of workers that load and tokenize
//! entries in parallel, one report per path consumed.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, bounded, select};
use tracing::debug;

use crate::core::cancel::CancelToken;
use crate::core::entry::Entry;
use crate::models::FileReport;

/// Pool size used outside of tests. Fixed, not adaptive.
pub const DEFAULT_POOL_SIZE: usize = 32;

/// Spawns `size` scanner workers over the shared path stream.
///
/// The report stream disconnects only once every worker has exited: each
/// worker owns a clone of the sender and the original is dropped here, so
/// the last worker out closes the stream. Workers never share any mutable
/// state; paths come in and reports go out over channels only.
#[must_use]
pub fn spawn_pool(
    size: usize,
    paths: Receiver<PathBuf>,
    token: CancelToken,
) -> (Receiver<FileReport>, Vec<JoinHandle<()>>) {
    let (report_tx, report_rx) = bounded(0);
    let handles = (0..size)
        .map(|id| {
            let paths = paths.clone();
            let reports = report_tx.clone();
            let token = token.clone();
            thread::Builder::new()
                .name(format!("scanner-{id}"))
                .spawn(move || worker_loop(&paths, &reports, &token))
                .expect("spawn scanner thread")
        })
        .collect();
    (report_rx, handles)
}

fn worker_loop(paths: &Receiver<PathBuf>, reports: &Sender<FileReport>, token: &CancelToken) {
    loop {
        let path = select! {
            recv(paths) -> msg => match msg {
                Ok(path) => path,
                // Path stream closed and drained: the walk is over.
                Err(_) => return,
            },
            recv(token.signal()) -> _ => return,
        };
        let report = scan(&path);
        select! {
            send(reports, report) -> sent => {
                if sent.is_err() {
                    return;
                }
            }
            recv(token.signal()) -> _ => return,
        }
    }
}

/// Loads and tokenizes a single entry. Load failures become a failed
/// report; a missing date does not, the entry still counts.
fn scan(path: &Path) -> FileReport {
    let entry = match Entry::load(path) {
        Ok(entry) => entry,
        Err(err) => {
            debug!(path = %path.display(), %err, "entry failed to load");
            return FileReport::failed(err);
        }
    };
    let mut word_counts: HashMap<String, u64> = HashMap::new();
    for word in entry.words() {
        *word_counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }
    FileReport {
        word_counts,
        date: entry.date().ok(),
        error: None,
    }
}
