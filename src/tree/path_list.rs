use snafu::{Snafu, ensure};
use tracing::debug;

use crate::ext::PathStrExt;
use crate::tree::has_conflict;

/// Whether an operation actually changed the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Changed,
    Unchanged,
}

/// The authoritative, ordered list of paths.
///
/// Rename and delete select entries by suffix, not by exact match, so
/// `"a/x.txt"` and `"b/x.txt"` are both hit by the suffix `"x.txt"`. Callers
/// that need a single entry should pass its full path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathList {
    paths: Vec<String>,
}

impl PathList {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.paths
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.iter().any(|existing| existing == path)
    }

    /// Appends a new path after trimming it.
    pub fn add(&mut self, candidate: &str) -> Result<Mutation, PathListError> {
        let candidate = candidate.trim();
        ensure!(!candidate.is_empty(), EmptyInputSnafu);
        ensure!(
            !has_conflict(&self.paths, candidate),
            PathConflictSnafu { path: candidate }
        );

        debug!("Adding path '{}'", candidate);
        self.paths.push(candidate.to_string());
        Ok(Mutation::Changed)
    }

    /// Finds the full path a suffix refers to.
    ///
    /// When several entries end with `suffix` the last one in list order wins.
    pub fn resolve(&self, suffix: &str) -> Result<&str, PathListError> {
        self.paths
            .iter()
            .rev()
            .find(|path| path.ends_with(suffix))
            .map(String::as_str)
            .ok_or_else(|| NotFoundSnafu { suffix }.build())
    }

    /// Replaces the entry `old_suffix` resolves to with `new_path`.
    ///
    /// `None` or an empty `new_path` is a cancelled rename and leaves the list
    /// alone. Every entry ending with the resolved path is replaced, not only
    /// the resolved entry itself.
    pub fn rename(
        &mut self,
        old_suffix: &str,
        new_path: Option<&str>,
    ) -> Result<Mutation, PathListError> {
        let matched = self.resolve(old_suffix)?.to_string();
        let Some(new_path) = new_path.filter(|path| !path.is_empty()) else {
            debug!("Rename of '{}' cancelled", matched);
            return Ok(Mutation::Unchanged);
        };
        ensure!(
            !new_path.is_nested_under(&matched),
            InvalidAppendSnafu {
                suffix: old_suffix,
                path: new_path,
            }
        );

        debug!("Renaming '{}' to '{}'", matched, new_path);
        for path in self.paths.iter_mut().filter(|path| path.ends_with(&matched)) {
            *path = new_path.to_string();
        }
        Ok(Mutation::Changed)
    }

    /// Removes every entry ending with `suffix` and returns how many went.
    pub fn delete(&mut self, suffix: &str) -> usize {
        let before = self.paths.len();
        self.paths.retain(|path| !path.ends_with(suffix));
        let removed = before - self.paths.len();
        debug!("Deleted {} path(s) ending with '{}'", removed, suffix);
        removed
    }
}

impl<'a> IntoIterator for &'a PathList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.paths.iter()
    }
}

#[derive(Debug, Snafu, PartialEq, Eq)]
pub enum PathListError {
    #[snafu(display("No path provided."))]
    EmptyInput,
    #[snafu(display("This path conflicts with an existing path."))]
    PathConflict { path: String },
    #[snafu(display("File path not found: {}", suffix))]
    NotFound { suffix: String },
    #[snafu(display("Cannot append a new path after the existing file path: {}", suffix))]
    InvalidAppend { suffix: String, path: String },
}
