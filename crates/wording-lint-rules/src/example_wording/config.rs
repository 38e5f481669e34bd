//! User overrides for the example-wording autocorrector.

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use wording_lint_core::{ConfigError, RuleConfig};

/// Word tables read from `[rules.example-wording]`.
///
/// ```toml
/// [rules.example-wording]
/// IgnoredWords = ["only", "really"]
///
/// [rules.example-wording.CustomTransform]
/// have = "has"
/// be = "is"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WordingConfig {
    /// Direct word replacements, checked before any suffix rule.
    #[serde(rename = "CustomTransform", alias = "custom_transform", default)]
    custom_transform: HashMap<String, String>,

    /// Words the corrector never transforms.
    #[serde(rename = "IgnoredWords", alias = "ignored_words", default)]
    ignored_words: HashSet<String>,
}

impl WordingConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the tables from a rule's options.
    ///
    /// # Errors
    ///
    /// Returns an error if either table has the wrong shape.
    pub fn from_rule_config(rule_config: &RuleConfig) -> Result<Self, ConfigError> {
        rule_config.options_as()
    }

    /// Adds a `word -> replacement` override.
    #[must_use]
    pub fn with_transform(mut self, word: impl Into<String>, replacement: impl Into<String>) -> Self {
        self.custom_transform
            .insert(word.into(), replacement.into());
        self
    }

    /// Adds words that must never be transformed.
    #[must_use]
    pub fn with_ignored_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_words.extend(words.into_iter().map(Into::into));
        self
    }

    /// The override table.
    #[must_use]
    pub fn custom_transform(&self) -> &HashMap<String, String> {
        &self.custom_transform
    }

    /// The ignore set.
    #[must_use]
    pub fn ignored_words(&self) -> &HashSet<String> {
        &self.ignored_words
    }

    pub(crate) fn is_ignored(&self, word: &str) -> bool {
        self.ignored_words.contains(word)
    }
}
