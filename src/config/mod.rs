// src/config/mod.rs

//! Configuration for on-change.
//!
//! Responsibilities:
//! - Define the optional TOML settings file and the runtime config (`model.rs`).
//! - Load the file and merge it with CLI arguments (`loader.rs`).
//! - Validate and compile the result into a `WatchConfig` (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{current_dir, load_and_validate, load_from_path, merge};
pub use model::{ConfigSection, DefaultSection, RawConfigFile, RawWatchConfig, WatchConfig};
