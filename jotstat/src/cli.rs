// src/cli.rs
use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::{Context as _, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::info;

use crate::core::pipeline;
use crate::core::reffreq::{REF_FREQ_FILE, RefFreqTable};
use crate::core::report;
use crate::core::scanner::DEFAULT_POOL_SIZE;
use crate::error::StatsError;
use crate::models::{JournalStats, Ranking};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// View journal statistics for the current directory
    Stats,
}

/// Dispatches the parsed command line.
///
/// # Errors
///
/// Returns any terminal failure of the selected command.
pub fn run(args: &Args) -> Result<()> {
    match args.command {
        Command::Stats => stats(),
    }
}

fn stats() -> Result<()> {
    let root = resolve_working_directory()?;
    let reference = RefFreqTable::load(&root.join(REF_FREQ_FILE))
        .context("loading reference frequencies")?;

    let tallies = pipeline::collect(&root, DEFAULT_POOL_SIZE)
        .context("computing journal statistics")?;

    let Some(stats) = JournalStats::derive(&tallies, Utc::now()) else {
        info!("no journal entries found");
        return Ok(());
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::render_stats(&stats, &mut out)?;
    if !reference.is_empty() {
        let ranking = Ranking::rank(&tallies.words, stats.total_words, &reference);
        report::render_ranking(&ranking, &mut out)?;
    }
    Ok(())
}

fn resolve_working_directory() -> Result<PathBuf> {
    let cwd = env::current_dir().map_err(StatsError::WorkingDirectory)?;
    // Resolve symlinks so dedup and walking see one canonical tree.
    let cwd = cwd
        .canonicalize()
        .map_err(StatsError::WorkingDirectory)?;
    Ok(cwd)
}
