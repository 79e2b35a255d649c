#![allow(dead_code)]

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use on_change::config::{RawWatchConfig, WatchConfig};
use tempfile::TempDir;

/// A throwaway directory tree for tests that touch the real filesystem.
///
/// Every file is created with a modification time one hour in the past, so
/// a later [`FixtureDir::touch`] is always seen as newer regardless of the
/// filesystem's timestamp granularity.
pub struct FixtureDir {
    dir: TempDir,
}

impl FixtureDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.dir.path().join(rel)
    }

    /// Create `rel` (and its parent directories) with some content.
    pub fn file(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent dirs");
        }
        fs::write(&path, rel.as_bytes()).expect("write fixture file");
        set_mtime(&path, SystemTime::now() - Duration::from_secs(3600));
        path
    }

    pub fn dir(&self, rel: &str) -> PathBuf {
        let path = self.path(rel);
        fs::create_dir_all(&path).expect("create fixture dir");
        path
    }

    /// Move the modification time of `rel` to "now".
    pub fn touch(&self, rel: &str) {
        set_mtime(&self.path(rel), SystemTime::now());
    }

    /// The three-file layout used by most scenarios:
    /// `test_folder/{test1.txt, test2.csv, test3.log}`.
    pub fn test_folder() -> Self {
        let fixture = Self::new();
        fixture.file("test_folder/test1.txt");
        fixture.file("test_folder/test2.csv");
        fixture.file("test_folder/test3.log");
        fixture
    }
}

impl Default for FixtureDir {
    fn default() -> Self {
        Self::new()
    }
}

fn set_mtime(path: &Path, when: SystemTime) {
    let file = File::options()
        .write(true)
        .open(path)
        .expect("open fixture file");
    file.set_modified(when).expect("set mtime");
}

/// Builder for `WatchConfig` to simplify test setup.
pub struct WatchConfigBuilder {
    raw: RawWatchConfig,
}

impl WatchConfigBuilder {
    pub fn new(command: &str, cwd: impl Into<PathBuf>) -> Self {
        Self {
            raw: RawWatchConfig {
                command: command.to_string(),
                targets: vec![],
                extensions: vec![],
                exclude: vec![],
                poll_interval_ms: 5,
                verbose: false,
                cwd: cwd.into(),
            },
        }
    }

    pub fn target(mut self, path: impl Into<PathBuf>) -> Self {
        self.raw.targets.push(path.into());
        self
    }

    pub fn extension(mut self, ext: &str) -> Self {
        self.raw.extensions.push(ext.to_string());
        self
    }

    pub fn exclude(mut self, pattern: &str) -> Self {
        self.raw.exclude.push(pattern.to_string());
        self
    }

    pub fn poll_interval_ms(mut self, ms: u64) -> Self {
        self.raw.poll_interval_ms = ms;
        self
    }

    pub fn verbose(mut self, val: bool) -> Self {
        self.raw.verbose = val;
        self
    }

    pub fn build(self) -> WatchConfig {
        WatchConfig::try_from(self.raw).expect("Failed to build valid config from builder")
    }
}
