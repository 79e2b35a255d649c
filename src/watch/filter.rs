// src/watch/filter.rs

use std::fmt;

use regex::Regex;

use crate::errors::{OnChangeError, Result};

/// Extension allow-list plus compiled exclusion regexes.
///
/// A path is included iff the extension list is empty or the path ends
/// with one of the extensions, and no exclusion pattern matches anywhere in
/// the path. Matching is done on the full path string; suffixes are compared
/// literally and case-sensitively.
#[derive(Clone, Default)]
pub struct FilterConfig {
    extensions: Vec<String>,
    exclusions: Vec<Regex>,
}

impl fmt::Debug for FilterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let patterns: Vec<&str> = self.exclusions.iter().map(|r| r.as_str()).collect();
        f.debug_struct("FilterConfig")
            .field("extensions", &self.extensions)
            .field("exclusions", &patterns)
            .finish()
    }
}

impl FilterConfig {
    /// Build a filter, compiling every exclusion pattern.
    ///
    /// Blank entries (e.g. from a trailing comma) are skipped in both lists.
    pub fn new<E, P>(extensions: E, exclusions: P) -> Result<Self>
    where
        E: IntoIterator,
        E::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().to_string())
            .filter(|e| !e.is_empty())
            .collect();

        let mut compiled = Vec::new();
        for pattern in exclusions {
            let pattern = pattern.as_ref();
            if pattern.is_empty() {
                continue;
            }
            let regex = Regex::new(pattern).map_err(|source| OnChangeError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;
            compiled.push(regex);
        }

        Ok(Self {
            extensions,
            exclusions: compiled,
        })
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn exclusion_patterns(&self) -> impl Iterator<Item = &str> {
        self.exclusions.iter().map(|r| r.as_str())
    }

    /// Returns true if `path` belongs in the watch set.
    pub fn include(&self, path: &str) -> bool {
        self.has_allowed_extension(path) && !self.is_excluded(path)
    }

    fn has_allowed_extension(&self, path: &str) -> bool {
        self.extensions.is_empty() || self.extensions.iter().any(|ext| path.ends_with(ext.as_str()))
    }

    fn is_excluded(&self, path: &str) -> bool {
        self.exclusions.iter().any(|re| re.is_match(path))
    }
}
