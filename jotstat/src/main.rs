// src/main.rs
use std::process::ExitCode;

use clap::Parser as _;
use tracing::error;
use tracing_subscriber::EnvFilter;

use jotstat::cli::{self, Args};

fn main() -> ExitCode {
    let args = Args::parse();
    setup_logging(args.verbose);

    match cli::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("jotstat=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("jotstat=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
