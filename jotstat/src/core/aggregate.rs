// src/core/aggregate.rs
//! Fan-in: the single consumer that folds per-file reports into one set
//! of tallies under a first-error-wins policy.

use crossbeam_channel::Receiver;
use tracing::debug;

use crate::error::StatsError;
use crate::models::{FileReport, Tallies};

/// Drains the report stream into final tallies.
///
/// The first failed report is returned immediately without draining the
/// rest; the caller is expected to cancel the pipeline so producers wind
/// down. On a clean drain the walker's terminal result is consulted and a
/// walk failure overrides the otherwise-successful aggregation.
///
/// # Errors
///
/// Returns the first per-file load error, or the walker's terminal error.
pub fn drain(
    reports: &Receiver<FileReport>,
    walk_result: &Receiver<Result<(), StatsError>>,
) -> Result<Tallies, StatsError> {
    let mut tallies = Tallies::default();
    for mut report in reports.iter() {
        if let Some(err) = report.error.take() {
            return Err(err.into());
        }
        tallies.absorb(report);
    }
    // The report stream only closes after every worker has exited, which
    // in turn requires the walker to have finished: the slot is filled.
    match walk_result.recv() {
        Ok(Ok(())) => {
            debug!(entries = tallies.entries, "aggregation complete");
            Ok(tallies)
        }
        Ok(Err(err)) => Err(err),
        Err(_) => Err(StatsError::WalkCanceled),
    }
}
