// tests/integration_tests/error_test.rs
use super::common::create_entry;
use anyhow::Result;
use jotstat::{DEFAULT_POOL_SIZE, StatsError, collect};
use std::fs;
use tempfile::TempDir;

#[test]
fn unreadable_entry_fails_the_whole_run() -> Result<()> {
    let dir = TempDir::new()?;
    create_entry(dir.path(), "2024-01-01.md", "healthy entry")?;
    fs::write(dir.path().join("2024-01-02.md"), [0xff_u8, 0xfe, 0x00])?;

    let result = collect(dir.path(), DEFAULT_POOL_SIZE);
    assert!(matches!(result, Err(StatsError::Entry(_))));
    Ok(())
}

#[test]
fn malformed_frontmatter_fails_the_whole_run() -> Result<()> {
    let dir = TempDir::new()?;
    create_entry(dir.path(), "2024-01-01.md", "---\ndate: [broken\n---\nbody")?;

    let result = collect(dir.path(), DEFAULT_POOL_SIZE);
    assert!(matches!(result, Err(StatsError::Entry(_))));
    Ok(())
}

#[test]
fn one_bad_file_cancels_a_busy_pipeline() -> Result<()> {
    // Many healthy entries crowd the channels so the failure lands while
    // the walk and several scans are still in flight.
    let dir = TempDir::new()?;
    for day in 1..=28 {
        create_entry(
            dir.path(),
            &format!("2024-01-{day:02}.md"),
            "plenty of perfectly ordinary words",
        )?;
    }
    fs::write(dir.path().join("2024-02-01.md"), [0xff_u8])?;

    let result = collect(dir.path(), 4);
    assert!(result.is_err());
    Ok(())
}

#[test]
fn missing_root_is_a_walk_failure() {
    let dir = TempDir::new().unwrap();
    let result = collect(&dir.path().join("not-here"), DEFAULT_POOL_SIZE);
    assert!(matches!(result, Err(StatsError::Walk(_))));
}

#[test]
fn date_parse_trouble_is_not_fatal() -> Result<()> {
    // Frontmatter overrides are optional; an entry keeps its word counts
    // even when only the filename date is available.
    let dir = TempDir::new()?;
    create_entry(dir.path(), "2024-01-05.md", "---\n---\nstill counted fine")?;

    let tallies = collect(dir.path(), DEFAULT_POOL_SIZE)?;
    assert_eq!(tallies.entries, 1);
    assert_eq!(tallies.total_words(), 3);
    assert_eq!(tallies.earliest, Some("2024-01-05".parse()?));
    Ok(())
}
