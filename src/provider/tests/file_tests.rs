//! Tests for the glob file provider

use std::fs;
use std::path::Path;
use std::time::{Duration, SystemTime};

use crate::provider::{FileProvider, Pick, Provider};

fn create_feed_file(dir: &Path, name: &str, content: &str, age: Duration) {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    let modified = SystemTime::now() - age;
    fs::File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(modified)
        .unwrap();
}

#[test]
fn test_fetch_single_match() {
    let dir = tempfile::tempdir().unwrap();
    create_feed_file(dir.path(), "feed.csv", "name\nA\n", Duration::ZERO);

    let pattern = dir.path().join("*.csv").display().to_string();
    let mut provider = FileProvider::new(pattern);

    assert_eq!(provider.fetch().unwrap(), b"name\nA\n");
    assert!(provider.errors().is_empty());
}

#[test]
fn test_fetch_picks_newest_by_default() {
    let dir = tempfile::tempdir().unwrap();
    create_feed_file(dir.path(), "feed-old.csv", "old", Duration::from_secs(3600));
    create_feed_file(dir.path(), "feed-new.csv", "new", Duration::ZERO);

    let pattern = dir.path().join("feed-*.csv").display().to_string();
    let mut provider = FileProvider::new(pattern);

    assert_eq!(provider.fetch().unwrap(), b"new");
}

#[test]
fn test_fetch_picks_oldest_when_configured() {
    let dir = tempfile::tempdir().unwrap();
    create_feed_file(dir.path(), "feed-old.csv", "old", Duration::from_secs(3600));
    create_feed_file(dir.path(), "feed-new.csv", "new", Duration::ZERO);

    let pattern = dir.path().join("feed-*.csv").display().to_string();
    let mut provider = FileProvider::new(pattern).pick(Pick::Oldest);

    assert_eq!(provider.fetch().unwrap(), b"old");
}

#[test]
fn test_fetch_no_match_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = dir.path().join("*.csv").display().to_string();
    let mut provider = FileProvider::new(pattern);

    assert!(provider.fetch().is_err());
}

#[test]
fn test_directories_are_not_candidates() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("feed.csv")).unwrap();
    create_feed_file(dir.path(), "real.csv", "data", Duration::ZERO);

    let pattern = dir.path().join("*.csv").display().to_string();
    let mut provider = FileProvider::new(pattern);

    assert_eq!(provider.fetch().unwrap(), b"data");
}

#[test]
fn test_from_params() {
    let dir = tempfile::tempdir().unwrap();
    create_feed_file(dir.path(), "feed-old.csv", "old", Duration::from_secs(3600));
    create_feed_file(dir.path(), "feed-new.csv", "new", Duration::ZERO);

    let pattern = dir.path().join("feed-*.csv").display().to_string();
    let mut provider = FileProvider::from_params(&serde_json::json!({
        "pattern": pattern,
        "pick": "oldest",
    }))
    .unwrap();

    assert_eq!(provider.fetch().unwrap(), b"old");
}
