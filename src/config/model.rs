// src/config/model.rs

use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::exec::CommandSpec;
use crate::types::WatchTarget;
use crate::watch::FilterConfig;

/// Optional settings file, as read from TOML.
///
/// ```toml
/// [config]
/// poll_interval_ms = 50
/// verbose = true
///
/// [default]
/// extensions = [".rs", ".toml"]
/// exclude = ["target/", "\\.git/"]
/// ```
///
/// Every section and key is optional. Values given on the command line win.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub config: ConfigSection,

    #[serde(default)]
    pub default: DefaultSection,
}

/// `[config]` section: engine behaviour.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigSection {
    pub poll_interval_ms: Option<u64>,

    #[serde(default)]
    pub verbose: bool,
}

/// `[default]` section: filter lists used when the CLI gives none.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DefaultSection {
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Merged but not yet validated inputs (CLI + optional file).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawWatchConfig {
    pub command: String,
    pub targets: Vec<PathBuf>,
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
    pub poll_interval_ms: u64,
    pub verbose: bool,
    pub cwd: PathBuf,
}

/// Validated, immutable runtime configuration.
///
/// Built once at startup (see `TryFrom<RawWatchConfig>`) and passed by
/// reference into discovery and the dispatcher.
#[derive(Debug, Clone)]
pub struct WatchConfig {
    pub command: CommandSpec,
    pub targets: Vec<WatchTarget>,
    pub filter: FilterConfig,
    pub poll_interval: Duration,
    pub verbose: bool,
    pub cwd: PathBuf,
}
