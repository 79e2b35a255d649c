// src/config/validate.rs

use std::time::Duration;

use crate::config::model::{RawWatchConfig, WatchConfig};
use crate::errors::{OnChangeError, Result};
use crate::exec::CommandSpec;
use crate::types::WatchTarget;
use crate::watch::FilterConfig;

impl TryFrom<RawWatchConfig> for WatchConfig {
    type Error = OnChangeError;

    fn try_from(raw: RawWatchConfig) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;

        let command = CommandSpec::parse(&raw.command)?;
        let filter = FilterConfig::new(&raw.extensions, &raw.exclude)?;

        Ok(WatchConfig {
            command,
            targets: raw.targets.into_iter().map(WatchTarget::new).collect(),
            filter,
            poll_interval: Duration::from_millis(raw.poll_interval_ms),
            verbose: raw.verbose,
            cwd: raw.cwd,
        })
    }
}

fn validate_raw_config(cfg: &RawWatchConfig) -> Result<()> {
    ensure_has_targets(cfg)?;
    validate_poll_interval(cfg)?;
    Ok(())
}

fn ensure_has_targets(cfg: &RawWatchConfig) -> Result<()> {
    if cfg.targets.is_empty() {
        return Err(OnChangeError::ConfigError(
            "at least one file or directory to watch is required".to_string(),
        ));
    }
    Ok(())
}

fn validate_poll_interval(cfg: &RawWatchConfig) -> Result<()> {
    if cfg.poll_interval_ms == 0 {
        return Err(OnChangeError::ConfigError(
            "poll_interval_ms must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}
