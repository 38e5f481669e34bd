//! Context types for rule execution.

use crate::syntax::{ByteRange, TextSpan};
use crate::types::Location;
use std::path::{Path, PathBuf};

/// Context provided to rules for one source file.
///
/// Gives rules the source buffer their syntax nodes point into, and
/// converts byte ranges into reportable [`Location`]s.
#[derive(Debug, Clone)]
pub struct FileContext<'a> {
    /// Absolute path to the file.
    pub path: &'a Path,
    /// File contents as a string.
    pub content: &'a str,
    /// Path relative to the project root.
    pub relative_path: PathBuf,
}

impl<'a> FileContext<'a> {
    /// Creates a new file context.
    #[must_use]
    pub fn new(path: &'a Path, content: &'a str, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .ok()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| path.to_path_buf(), Path::to_path_buf);

        Self {
            path,
            content,
            relative_path,
        }
    }

    /// Creates a context for in-memory source, e.g. in tests.
    #[must_use]
    pub fn from_source(path: &'a Path, content: &'a str) -> Self {
        Self {
            path,
            content,
            relative_path: path.to_path_buf(),
        }
    }

    /// Returns the span for `range`, if it is valid for this file.
    #[must_use]
    pub fn span(&self, range: &ByteRange) -> Option<TextSpan<'a>> {
        TextSpan::new(self.content, range.start, range.end)
    }

    /// Builds a location for a span of this file.
    #[must_use]
    pub fn location(&self, span: &TextSpan<'_>) -> Location {
        Location::from_span(self.relative_path.clone(), span)
    }
}
