use std::fmt;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A path exactly as the user passed it on the command line.
///
/// Can point at a file or a directory; relative targets are resolved
/// against the working directory by the watch-set builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchTarget(PathBuf);

impl WatchTarget {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl From<&str> for WatchTarget {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for WatchTarget {
    fn from(p: PathBuf) -> Self {
        Self(p)
    }
}

/// A resolved path found during directory traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbsolutePath {
    pub path: PathBuf,
    pub is_dir: bool,
}

/// A file being polled, plus the last modification time its monitor saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedFile {
    pub path: PathBuf,
    pub modified: SystemTime,
}

/// Emitted by a monitor when its file's modification time advances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub path: PathBuf,
}

impl ChangeEvent {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Last path component, used when reporting the change to the user.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
