// tests/integration_tests/pipeline_test.rs
use super::common::{create_entry, setup_journal};
use anyhow::Result;
use chrono::{TimeZone as _, Utc};
use jotstat::{DEFAULT_POOL_SIZE, JournalStats, collect};
use tempfile::TempDir;

#[test]
fn scans_a_journal_end_to_end() -> Result<()> {
    let dir = setup_journal()?;

    let tallies = collect(dir.path(), DEFAULT_POOL_SIZE)?;

    // Three dated entries; the undated note is not an entry.
    assert_eq!(tallies.entries, 3);
    assert_eq!(tallies.earliest, Some("2023-12-25".parse()?));
    assert_eq!(tallies.words["hi"], 3);
    assert_eq!(tallies.words["there"], 1);
    Ok(())
}

#[test]
fn derives_the_documented_scenario() -> Result<()> {
    let dir = TempDir::new()?;
    create_entry(dir.path(), "2024-01-01.md", "Hi hi there")?;
    create_entry(dir.path(), "2024-01-03.md", "Hi world")?;

    let tallies = collect(dir.path(), DEFAULT_POOL_SIZE)?;
    let now = Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap();
    let stats = JournalStats::derive(&tallies, now).unwrap();

    assert_eq!(stats.entry_count, 2);
    assert_eq!(stats.total_words, 5);
    assert!((stats.avg_words - 2.5).abs() < f64::EPSILON);
    assert_eq!(stats.earliest, "2024-01-01".parse()?);
    assert!((stats.percent_journaled * 100.0 - 22.222_222).abs() < 1e-3);
    Ok(())
}

#[test]
fn duplicate_base_names_count_once() -> Result<()> {
    let dir = TempDir::new()?;
    create_entry(dir.path(), "a/2024-01-01.md", "one two three")?;
    create_entry(dir.path(), "b/2024-01-01.md", "four five six")?;

    let tallies = collect(dir.path(), DEFAULT_POOL_SIZE)?;
    assert_eq!(tallies.entries, 1);
    assert_eq!(tallies.total_words(), 3);
    Ok(())
}

#[test]
fn repeated_runs_are_identical() -> Result<()> {
    let dir = setup_journal()?;

    let first = collect(dir.path(), DEFAULT_POOL_SIZE)?;
    let second = collect(dir.path(), DEFAULT_POOL_SIZE)?;

    assert_eq!(first.entries, second.entries);
    assert_eq!(first.words, second.words);
    assert_eq!(first.earliest, second.earliest);
    Ok(())
}

#[test]
fn pool_sizes_agree_on_a_large_tree() -> Result<()> {
    let dir = TempDir::new()?;
    for month in 1..=12 {
        for day in 1..=28 {
            create_entry(
                dir.path(),
                &format!("{month:02}/2024-{month:02}-{day:02}.md"),
                &format!("word{day} common text month{month}"),
            )?;
        }
    }

    let serial = collect(dir.path(), 1)?;
    let parallel = collect(dir.path(), DEFAULT_POOL_SIZE)?;

    assert_eq!(serial.entries, 336);
    assert_eq!(serial.entries, parallel.entries);
    assert_eq!(serial.words, parallel.words);
    assert_eq!(serial.earliest, parallel.earliest);
    Ok(())
}

#[test]
fn empty_journal_produces_no_stats() -> Result<()> {
    let dir = TempDir::new()?;
    create_entry(dir.path(), "todo.md", "no dated entries")?;

    let tallies = collect(dir.path(), DEFAULT_POOL_SIZE)?;
    assert_eq!(tallies.entries, 0);
    assert_eq!(JournalStats::derive(&tallies, Utc::now()), None);
    Ok(())
}
