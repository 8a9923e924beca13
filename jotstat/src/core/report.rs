// src/core/report.rs
//! Human-readable rendering of the final statistics.

use std::io::{self, Write};

use crate::models::{JournalStats, Ranking};

/// Writes the scalar statistics block.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_stats(stats: &JournalStats, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "{:.2}% of days journaled since {}",
        stats.percent_journaled * 100.0,
        stats.earliest.format("%b %-d %Y"),
    )?;
    writeln!(out, "Total word count: {}", stats.total_words)?;
    writeln!(out, "Average word count: {:.1}", stats.avg_words)?;
    writeln!(out)
}

/// Writes the two outlier tables.
///
/// # Errors
///
/// Propagates write failures from `out`.
pub fn render_ranking(ranking: &Ranking, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "Top {} unusually frequent words:",
        ranking.frequent.len()
    )?;
    for ws in &ranking.frequent {
        writeln!(out, "{:<20} {:>8.1}X", ws.word, ws.rel_frequency)?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "Top {} unusually infrequent words:",
        ranking.infrequent.len()
    )?;
    for ws in &ranking.infrequent {
        writeln!(out, "{:<20} {:>8.1}X", ws.word, ws.rel_frequency)?;
    }
    Ok(())
}
