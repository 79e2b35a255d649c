// src/watch/discovery.rs

//! Expansion of user-supplied targets into the flat set of files to poll.

use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::errors::{OnChangeError, Result};
use crate::fs::FileSystem;
use crate::types::WatchTarget;
use crate::watch::filter::FilterConfig;
use crate::watch::path_utils::absolutize;

/// Absolute file paths to monitor, in discovery order, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WatchSet {
    files: Vec<PathBuf>,
}

impl WatchSet {
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.files.iter().any(|p| p == path)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        self.files.iter()
    }

    pub fn into_vec(self) -> Vec<PathBuf> {
        self.files
    }
}

impl<'a> IntoIterator for &'a WatchSet {
    type Item = &'a PathBuf;
    type IntoIter = std::slice::Iter<'a, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Resolve every target against `cwd` and collect the files that pass
/// `filter`.
///
/// Directories are expanded breadth-first to unbounded depth. A target that
/// cannot be stat'd, or any directory that cannot be listed, aborts the
/// whole build.
///
/// An empty result is not an error; callers decide how to report it.
pub fn build_watch_set(
    fs: &dyn FileSystem,
    cwd: &Path,
    targets: &[WatchTarget],
    filter: &FilterConfig,
) -> Result<WatchSet> {
    let mut builder = WatchSetBuilder::new(fs, filter);

    for target in targets {
        let path = absolutize(cwd, target.as_path());
        builder.add_target(path)?;
    }

    let set = builder.finish();
    info!(files = set.len(), "watch set built");
    Ok(set)
}

struct WatchSetBuilder<'a> {
    fs: &'a dyn FileSystem,
    filter: &'a FilterConfig,
    files: Vec<PathBuf>,
    seen_files: HashSet<PathBuf>,
    /// Canonical forms of directories already expanded; guards symlink cycles.
    visited_dirs: HashSet<PathBuf>,
}

impl<'a> WatchSetBuilder<'a> {
    fn new(fs: &'a dyn FileSystem, filter: &'a FilterConfig) -> Self {
        Self {
            fs,
            filter,
            files: Vec::new(),
            seen_files: HashSet::new(),
            visited_dirs: HashSet::new(),
        }
    }

    fn add_target(&mut self, path: PathBuf) -> Result<()> {
        let stat = self
            .fs
            .stat(&path)
            .map_err(|source| OnChangeError::TargetUnreadable {
                path: path.clone(),
                source,
            })?;

        if stat.is_dir {
            self.expand_dir(path)
        } else {
            self.consider_file(path);
            Ok(())
        }
    }

    fn expand_dir(&mut self, root: PathBuf) -> Result<()> {
        let mut queue = VecDeque::from([root]);

        while let Some(dir) = queue.pop_front() {
            let key = self.fs.canonicalize(&dir).unwrap_or_else(|_| dir.clone());
            if !self.visited_dirs.insert(key) {
                debug!(dir = %dir.display(), "directory already expanded; skipping");
                continue;
            }

            let entries = self
                .fs
                .read_dir(&dir)
                .map_err(|source| OnChangeError::DirectoryUnreadable {
                    path: dir.clone(),
                    source,
                })?;
            debug!(dir = %dir.display(), entries = entries.len(), "expanding directory");

            for entry in entries {
                if entry.is_dir {
                    queue.push_back(entry.path);
                } else {
                    self.consider_file(entry.path);
                }
            }
        }

        Ok(())
    }

    fn consider_file(&mut self, path: PathBuf) {
        if !self.filter.include(&path.to_string_lossy()) {
            debug!(path = %path.display(), "filtered out");
            return;
        }
        if self.seen_files.insert(path.clone()) {
            self.files.push(path);
        }
    }

    fn finish(self) -> WatchSet {
        WatchSet { files: self.files }
    }
}
