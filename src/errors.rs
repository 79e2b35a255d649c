// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Everything in here is a setup-time failure: once monitors are running,
//! errors are logged and contained by the component that hit them.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OnChangeError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("invalid exclusion pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("cannot stat watch target {path:?}: {source}")]
    TargetUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not open directory {path:?}: {source}")]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot determine working directory: {0}")]
    WorkingDirectory(#[source] std::io::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, OnChangeError>;
