// src/core/pipeline.rs
//! Wiring for the walk → scan → aggregate pipeline.

use std::path::Path;

use tracing::debug;

use crate::core::{aggregate, cancel, scanner, walker};
use crate::error::StatsError;
use crate::models::Tallies;

/// Runs the full pipeline over `root` with a pool of `pool_size` scanners.
///
/// One walker thread feeds entry paths to the pool over a rendezvous
/// channel; the pool fans reports back in to this thread, which aggregates
/// them. Cancellation is signaled on the first failure and, regardless of
/// outcome, on exit, so every thread is joined and none leak.
///
/// # Errors
///
/// Returns the first per-file load error or the walk's terminal error.
pub fn collect(root: &Path, pool_size: usize) -> Result<Tallies, StatsError> {
    debug!(root = %root.display(), pool_size, "starting pipeline");
    let (handle, token) = cancel::pair();
    let (paths, walk_result, walker_thread) = walker::spawn(root.to_path_buf(), token.clone());
    let (reports, scanner_threads) = scanner::spawn_pool(pool_size, paths, token);

    let outcome = aggregate::drain(&reports, &walk_result);

    // Cancel before joining: on an early error the walker and workers may
    // still be blocked on a hand-off nobody will complete.
    handle.cancel();
    for thread in scanner_threads {
        let _ = thread.join();
    }
    let _ = walker_thread.join();
    outcome
}
