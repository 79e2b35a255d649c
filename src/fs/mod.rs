// src/fs/mod.rs

//! Filesystem primitives the watch engine depends on.
//!
//! Discovery and monitors only ever need three operations, so they talk to
//! this trait instead of `std::fs` directly. Tests swap in
//! [`mock::MockFileSystem`].

use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::types::AbsolutePath;

pub mod mock;

/// Result of a `stat` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub modified: SystemTime,
    pub is_dir: bool,
}

/// Abstract filesystem interface.
pub trait FileSystem: Send + Sync + Debug {
    /// Stat a path, following symlinks.
    fn stat(&self, path: &Path) -> io::Result<FileStat>;

    /// List a directory. Returned paths are `path` joined with each entry name.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<AbsolutePath>>;

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;
}

/// Implementation that uses `std::fs`.
#[derive(Debug, Clone, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn stat(&self, path: &Path) -> io::Result<FileStat> {
        let meta = fs::metadata(path)?;
        Ok(FileStat {
            modified: meta.modified()?,
            is_dir: meta.is_dir(),
        })
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<AbsolutePath>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let child = entry.path();
            // Follow symlinks; a dangling link is classified by the link itself.
            let is_dir = match fs::metadata(&child) {
                Ok(meta) => meta.is_dir(),
                Err(_) => entry.file_type()?.is_dir(),
            };
            entries.push(AbsolutePath { path: child, is_dir });
        }
        Ok(entries)
    }

    fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
        fs::canonicalize(path)
    }
}
