// src/watch/mod.rs

//! Watch-set discovery and change detection.
//!
//! This module is responsible for:
//! - Deciding which paths are interesting (`filter`).
//! - Expanding user targets into a flat list of files (`discovery`).
//! - Polling each file's modification time on its own task (`monitor`).
//!
//! It does **not** run commands; it only turns modification-time changes
//! into [`ChangeEvent`](crate::types::ChangeEvent)s for the dispatcher.

pub mod discovery;
pub mod filter;
pub mod monitor;
pub mod path_utils;

pub use discovery::{build_watch_set, WatchSet};
pub use filter::FilterConfig;
pub use monitor::{monitor_file, spawn_monitors, MonitorExit, DEFAULT_POLL_INTERVAL};
