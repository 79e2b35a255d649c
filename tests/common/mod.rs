#![allow(dead_code)]

use std::path::Path;

use on_change::watch::WatchSet;

pub use on_change_test_utils::{init_tracing, within, FakeRunner, FixtureDir, WatchConfigBuilder};

/// Watch-set entries relative to `root`, `/`-separated and sorted.
pub fn relative_names(set: &WatchSet, root: &Path) -> Vec<String> {
    let mut names: Vec<String> = set
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .unwrap_or(p)
                .to_string_lossy()
                .replace('\\', "/")
        })
        .collect();
    names.sort();
    names
}
