//! Fixture discovery.
//!
//! [`FixtureSource`] turns a root directory into a lazy sequence of
//! [`FixturePath`]s. Calling [`FixtureSource::paths`] again starts a fresh
//! scan.

use glob::{GlobError, Paths, Pattern, PatternError};
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors raised while scanning the fixture root
#[derive(Debug, Error)]
pub enum ScanError {
    /// The configured root does not exist
    #[error("Static mocks were not found on {}. Make sure they exist", .0.display())]
    RootNotFound(PathBuf),
    /// The root produced an unusable glob pattern
    #[error("Invalid fixture pattern: {0}")]
    Pattern(#[from] PatternError),
    /// An entry could not be read while walking the tree
    #[error("Failed to read fixture entry: {0}")]
    Entry(#[from] GlobError),
    /// A scanned file does not live under the root
    #[error("Fixture {} is outside of {}", .path.display(), .root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },
}

/// A fixture file found under the root
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FixturePath {
    /// Path relative to the root, `/`-separated
    pub relative: String,
    /// Path used to read the file
    pub absolute: PathBuf,
}

impl FixturePath {
    fn from_absolute(root: &Path, absolute: PathBuf) -> Result<Self, ScanError> {
        let normalized = without_cur_dir(&absolute);
        let relative = normalized
            .strip_prefix(root)
            .map_err(|_| ScanError::OutsideRoot {
                path: absolute.clone(),
                root: root.to_path_buf(),
            })?
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");

        Ok(Self { relative, absolute })
    }
}

/// Drop `.` components; glob reports `./mock-api/a.json` as `mock-api/a.json`.
fn without_cur_dir(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Directory of JSON fixtures
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureSource {
    root: PathBuf,
}

impl FixtureSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Start a scan for `<root>/**/*.json`.
    ///
    /// Fails immediately when the root is missing. Directories whose name
    /// ends in `.json` are skipped.
    pub fn paths(&self) -> Result<FixturePaths, ScanError> {
        if !self.root.exists() {
            return Err(ScanError::RootNotFound(self.root.clone()));
        }

        let root = without_cur_dir(&self.root);
        let pattern = if root.as_os_str().is_empty() {
            "**/*.json".to_owned()
        } else {
            let escaped = Pattern::escape(&root.to_string_lossy());
            format!("{}/**/*.json", escaped.trim_end_matches('/'))
        };
        let paths = glob::glob(&pattern)?;

        Ok(FixturePaths { root, paths })
    }

    /// Scan the whole tree, sorted by relative path, stopping at the first
    /// unreadable entry.
    pub fn collect(&self) -> Result<Vec<FixturePath>, ScanError> {
        let mut fixtures = self.paths()?.collect::<Result<Vec<_>, _>>()?;
        fixtures.sort_by(|a, b| a.relative.cmp(&b.relative));
        Ok(fixtures)
    }
}

/// Lazy iterator over the fixtures of one scan
pub struct FixturePaths {
    root: PathBuf,
    paths: Paths,
}

impl Iterator for FixturePaths {
    type Item = Result<FixturePath, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.paths.next()? {
                Ok(path) if path.is_file() => {
                    return Some(FixturePath::from_absolute(&self.root, path))
                }
                Ok(_) => continue,
                Err(err) => return Some(Err(err.into())),
            }
        }
    }
}
