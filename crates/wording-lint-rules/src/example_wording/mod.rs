//! Rule to keep example descriptions free of "should".
//!
//! # Rationale
//!
//! Example descriptions read better as statements of behavior in present
//! tense. "should" adds nothing and makes every description start the same.
//!
//! # Detected Patterns
//!
//! - `it 'should find nothing' do ... end`
//! - `it "shouldn't raise" do ... end`
//!
//! # Good Patterns
//!
//! ```ruby
//! it 'finds nothing' do
//! end
//! ```
//!
//! # Autocorrection
//!
//! Experimental. The leading "should" is removed and the next word is put
//! into present tense, honoring `CustomTransform` and `IgnoredWords`.

mod config;
mod rewrite;

pub use config::WordingConfig;
pub use rewrite::{rewrite, simple_present};

use wording_lint_core::{
    Config, ConfigError, FileContext, Replacement, Rule, Severity, SyntaxNode, TextSpan,
    Violation,
};

/// Rule code for example-wording.
pub const CODE: &str = "EW001";

/// Rule name for example-wording.
pub const NAME: &str = "example-wording";

/// Message reported for every offense.
pub const MESSAGE: &str = "Do not use should when describing your tests.";

/// Method that declares an example.
const EXAMPLE_METHOD: &str = "it";

const FLAGGED_PREFIX: &str = "should";

/// A flagged description: the literal's content span and the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offense<'src> {
    /// Literal content, delimiters excluded.
    pub span: TextSpan<'src>,
    /// Human-readable message.
    pub message: &'static str,
}

/// Checks whether `node` is an example whose description starts with
/// "should".
///
/// Only `it` blocks whose first argument is a plain string literal are
/// considered. The match is a case-insensitive prefix test, so
/// "shouldn't" and also "shoulder" are flagged.
#[must_use]
pub fn detect<'src>(node: &SyntaxNode, source: &'src str) -> Option<Offense<'src>> {
    let SyntaxNode::Block(block) = node else {
        return None;
    };
    if block.call.method != EXAMPLE_METHOD {
        return None;
    }

    let SyntaxNode::Str(description) = block.call.arguments.first()? else {
        return None;
    };
    if !description.value.to_lowercase().starts_with(FLAGGED_PREFIX) {
        return None;
    }

    let span = TextSpan::inner(source, &description.range)?;
    Some(Offense {
        span,
        message: MESSAGE,
    })
}

/// Flags `it` descriptions that start with "should".
#[derive(Debug, Clone)]
pub struct ExampleWording {
    /// Severity level.
    pub severity: Severity,
    config: WordingConfig,
}

impl Default for ExampleWording {
    fn default() -> Self {
        Self::new()
    }
}

impl ExampleWording {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
            config: WordingConfig::default(),
        }
    }

    /// Creates the rule with the word tables from `[rules.example-wording]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the rule's options are malformed.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let wording = match config.rules.get(NAME) {
            Some(rule_config) => WordingConfig::from_rule_config(rule_config)?,
            None => WordingConfig::default(),
        };
        Ok(Self::new().with_config(wording))
    }

    /// Sets the autocorrect word tables.
    #[must_use]
    pub fn with_config(mut self, config: WordingConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// The autocorrect word tables.
    #[must_use]
    pub fn config(&self) -> &WordingConfig {
        &self.config
    }

    /// Corrected text for a flagged span.
    #[must_use]
    pub fn correct(&self, span: &TextSpan<'_>) -> String {
        rewrite(span.text(), &self.config)
    }
}

impl Rule for ExampleWording {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Forbids example descriptions starting with \"should\""
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn is_fixable(&self) -> bool {
        true
    }

    fn check_node(&self, ctx: &FileContext<'_>, node: &SyntaxNode) -> Option<Violation> {
        let offense = detect(node, ctx.content)?;
        Some(Violation::new(
            CODE,
            NAME,
            self.severity,
            ctx.location(&offense.span),
            offense.message,
        ))
    }

    fn autocorrect(&self, ctx: &FileContext<'_>, violation: &Violation) -> Option<Replacement> {
        let span = violation.location.span(ctx.content)?;
        Some(Replacement::new(
            violation.location.clone(),
            self.correct(&span),
        ))
    }
}
