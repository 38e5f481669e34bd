//! Parser seam between source languages and the syntax model.

use crate::syntax::SyntaxNode;

/// Error produced when a source file cannot be turned into a tree.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct ParseError {
    /// Human-readable description of the failure.
    pub message: String,
}

impl ParseError {
    /// Creates a new parse error.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Turns source text into a [`SyntaxNode`] tree.
///
/// Implement this to teach the analyzer a new language. The returned tree
/// must carry byte ranges into `source`.
pub trait SourceParser: Send + Sync {
    /// Language identifier (e.g., `"ruby"`).
    fn language_id(&self) -> &'static str;

    /// File extensions this parser handles (e.g., `&["rb"]`).
    fn extensions(&self) -> &'static [&'static str];

    /// Parses `source` into a lowered tree.
    ///
    /// # Errors
    ///
    /// Returns an error if no tree could be produced at all.
    fn parse(&self, source: &str) -> Result<SyntaxNode, ParseError>;
}
