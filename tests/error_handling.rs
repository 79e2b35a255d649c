// tests/error_handling.rs

mod common;

use std::io::Write;
use std::path::PathBuf;

use common::FixtureDir;
use on_change::cli::{parse_from, CliArgs, Invocation};
use on_change::config::load_and_validate;
use on_change::errors::OnChangeError;
use on_change::fs::RealFileSystem;
use on_change::types::WatchTarget;
use on_change::watch::{build_watch_set, FilterConfig};
use tempfile::NamedTempFile;

fn args(list: &[&str]) -> CliArgs {
    match parse_from(list.iter().copied()).unwrap() {
        Invocation::Run(a) => a,
        Invocation::Help => panic!("unexpected help"),
    }
}

#[test]
fn invalid_exclusion_returns_structured_error() {
    let result = load_and_validate(
        &args(&["on-change", "ls", ".", "--exclude", "(unclosed"]),
        PathBuf::from("/w"),
    );

    match result {
        Err(OnChangeError::InvalidPattern { pattern, .. }) => assert_eq!(pattern, "(unclosed"),
        Err(e) => panic!("Expected InvalidPattern error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn malformed_config_file_returns_toml_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[config\npoll_interval_ms = ").unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let result = load_and_validate(
        &args(&["on-change", "ls", ".", "--config", path.as_str()]),
        PathBuf::from("/w"),
    );

    assert!(matches!(result, Err(OnChangeError::TomlError(_))));
}

#[test]
fn zero_poll_interval_in_file_is_a_config_error() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "[config]\npoll_interval_ms = 0\n").unwrap();
    let path = file.path().to_string_lossy().into_owned();

    let result = load_and_validate(
        &args(&["on-change", "ls", ".", "--config", path.as_str()]),
        PathBuf::from("/w"),
    );

    match result {
        Err(OnChangeError::ConfigError(msg)) => assert!(msg.contains("poll_interval_ms")),
        other => panic!("Expected ConfigError, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn missing_target_names_the_path() {
    let fixture = FixtureDir::new();
    let filter = FilterConfig::default();
    let targets = [WatchTarget::new("does_not_exist")];

    let err = build_watch_set(&RealFileSystem, fixture.root(), &targets, &filter).unwrap_err();

    match &err {
        OnChangeError::TargetUnreadable { path, .. } => {
            assert_eq!(*path, fixture.path("does_not_exist"));
        }
        e => panic!("Expected TargetUnreadable, got: {:?}", e),
    }
    assert!(err.to_string().contains("does_not_exist"));
}

#[cfg(unix)]
#[test]
fn unlistable_directory_aborts_the_build() {
    use std::os::unix::fs::PermissionsExt;

    let fixture = FixtureDir::new();
    fixture.file("tree/ok.txt");
    let locked = fixture.dir("tree/locked");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

    // Root can list anything; nothing to check in that case.
    if std::fs::read_dir(&locked).is_ok() {
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        return;
    }

    let targets = [WatchTarget::new("tree")];
    let result = build_watch_set(&RealFileSystem, fixture.root(), &targets, &FilterConfig::default());

    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();

    match result {
        Err(OnChangeError::DirectoryUnreadable { path, .. }) => assert_eq!(path, locked),
        other => panic!("Expected DirectoryUnreadable, got: {:?}", other.map(|s| s.len())),
    }
}
