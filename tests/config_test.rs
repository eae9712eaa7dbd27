//! Tests for configuration loading.

use rewind::{Config, SortOrder};
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(*config.sort_order(), SortOrder::Ascending);
    assert_eq!(config.log_filter(), "info");
}

#[test]
fn test_file_values_are_read() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "sort_order = \"descending\"\nlog_filter = \"debug\"\nlog_file = \"/tmp/rewind-test.log\""
    )
    .unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(*config.sort_order(), SortOrder::Descending);
    assert_eq!(config.log_filter(), "debug");
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/rewind-test.log"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "log_filter = \"warn\"").unwrap();

    let config = Config::load_or_default(file.path()).unwrap();
    assert_eq!(*config.sort_order(), SortOrder::Ascending);
    assert_eq!(config.log_filter(), "warn");
}

#[test]
fn test_bad_sort_order_is_an_error() {
    let err = Config::from_toml_str("sort_order = \"sideways\"").unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_unreadable_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path()).unwrap_err();
    assert!(err.message.contains("Failed to read config file"));
}
