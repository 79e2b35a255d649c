// src/watch/path_utils.rs

//! Utility functions for path handling in the watcher.

use std::path::{Component, Path, PathBuf};

/// Resolve `path` against `cwd`, dropping `.` components.
///
/// Purely lexical: `..` is kept as-is and symlinks are not resolved, so the
/// result is what the user would expect to see printed back.
pub fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    joined
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_are_joined_to_cwd() {
        let cwd = Path::new("/work");
        assert_eq!(absolutize(cwd, Path::new("src")), PathBuf::from("/work/src"));
        assert_eq!(absolutize(cwd, Path::new("./src/./a.rs")), PathBuf::from("/work/src/a.rs"));
        assert_eq!(absolutize(cwd, Path::new(".")), PathBuf::from("/work"));
    }

    #[test]
    fn absolute_paths_ignore_cwd() {
        let cwd = Path::new("/work");
        assert_eq!(absolutize(cwd, Path::new("/tmp/x.txt")), PathBuf::from("/tmp/x.txt"));
    }

    #[test]
    fn parent_components_are_kept() {
        let cwd = Path::new("/work/sub");
        assert_eq!(absolutize(cwd, Path::new("../lib")), PathBuf::from("/work/sub/../lib"));
    }
}
