//! Tests for loading the TOML config from disk.

use oxo::AppConfig;
use std::io::Write;
use std::path::PathBuf;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig::load(dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_load_full_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[logging]\nfilter = \"oxo_engine=debug\"\nfile = \"/tmp/oxo-test.log\"\n\n[display]\nshow_cell_numbers = false"
    )
    .unwrap();

    let config = AppConfig::load(file.path()).unwrap();
    assert_eq!(config.logging().filter(), "oxo_engine=debug");
    assert_eq!(config.logging().file(), &PathBuf::from("/tmp/oxo-test.log"));
    assert!(!*config.display().show_cell_numbers());
}

#[test]
fn test_malformed_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[logging\nfilter = ").unwrap();

    let err = AppConfig::load(file.path()).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}
