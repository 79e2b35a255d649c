// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::CliArgs;
use crate::config::model::{RawConfigFile, RawWatchConfig, WatchConfig};
use crate::errors::{OnChangeError, Result};
use crate::watch::DEFAULT_POLL_INTERVAL;

/// Load an optional settings file and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; merging with the CLI and
/// validation happen in [`load_and_validate`].
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| {
        OnChangeError::ConfigError(format!("cannot read config file {:?}: {e}", path))
    })?;

    let config: RawConfigFile = toml::from_str(&contents)?;

    Ok(config)
}

/// Merge CLI arguments with the optional settings file.
///
/// Rules:
/// - `command` and targets only come from the CLI.
/// - A list given on the CLI replaces the file's list entirely.
/// - `--verbose` on the CLI or `verbose = true` in the file enables it.
pub fn merge(args: &CliArgs, file: RawConfigFile, cwd: PathBuf) -> RawWatchConfig {
    let extensions = if args.extensions.is_empty() {
        file.default.extensions
    } else {
        args.extensions.clone()
    };

    let exclude = if args.exclude.is_empty() {
        file.default.exclude
    } else {
        args.exclude.clone()
    };

    let poll_interval_ms = args
        .poll_interval_ms
        .or(file.config.poll_interval_ms)
        .unwrap_or(DEFAULT_POLL_INTERVAL.as_millis() as u64);

    RawWatchConfig {
        command: args.command.clone(),
        targets: args.paths.clone(),
        extensions,
        exclude,
        poll_interval_ms,
        verbose: args.verbose || file.config.verbose,
        cwd,
    }
}

/// Build the validated runtime configuration.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads the `--config` TOML file, if any.
/// - Merges it with the CLI arguments.
/// - Compiles exclusion patterns and parses the command.
pub fn load_and_validate(args: &CliArgs, cwd: PathBuf) -> Result<WatchConfig> {
    let file = match &args.config {
        Some(path) => load_from_path(path)?,
        None => RawConfigFile::default(),
    };

    WatchConfig::try_from(merge(args, file, cwd))
}

/// Resolve the process working directory.
pub fn current_dir() -> Result<PathBuf> {
    std::env::current_dir().map_err(OnChangeError::WorkingDirectory)
}
