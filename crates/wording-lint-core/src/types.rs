//! Core types for lint violations and results.

use crate::syntax::TextSpan;
use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for lint violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail lint.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Source code location.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// File path relative to project root.
    pub file: PathBuf,
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// Byte offset in file.
    pub offset: usize,
    /// Length of the span in bytes.
    pub length: usize,
}

impl Location {
    /// Creates a location covering a text span.
    #[must_use]
    pub fn from_span(file: PathBuf, span: &TextSpan<'_>) -> Self {
        let (line, column) = span.line_column();
        Self {
            file,
            line,
            column,
            offset: span.start(),
            length: span.len(),
        }
    }

    /// Creates a new location with explicit values.
    #[must_use]
    pub fn new(file: PathBuf, line: usize, column: usize) -> Self {
        Self {
            file,
            line,
            column,
            offset: 0,
            length: 0,
        }
    }

    /// Sets the byte offset and length for this location.
    #[must_use]
    pub fn with_span(mut self, offset: usize, length: usize) -> Self {
        self.offset = offset;
        self.length = length;
        self
    }

    /// Resolves this location back to a span of `source`.
    #[must_use]
    pub fn span<'src>(&self, source: &'src str) -> Option<TextSpan<'src>> {
        TextSpan::new(source, self.offset, self.offset + self.length)
    }
}

/// A suggested fix for a violation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Human-readable description of the fix.
    pub message: String,
    /// Optional automatic replacement.
    pub replacement: Option<Replacement>,
}

impl Suggestion {
    /// Creates a new suggestion with automatic fix.
    #[must_use]
    pub fn with_fix(message: impl Into<String>, replacement: Replacement) -> Self {
        Self {
            message: message.into(),
            replacement: Some(replacement),
        }
    }
}

/// An automatic code replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replacement {
    /// Location to replace.
    pub location: Location,
    /// New text to insert.
    pub new_text: String,
}

impl Replacement {
    /// Creates a new replacement.
    #[must_use]
    pub fn new(location: Location, new_text: impl Into<String>) -> Self {
        Self {
            location,
            new_text: new_text.into(),
        }
    }
}

/// A lint violation found during analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Violation {
    /// Rule code (e.g., "EW001").
    pub code: String,
    /// Rule name (e.g., "example-wording").
    pub rule: String,
    /// Severity of this violation.
    pub severity: Severity,
    /// Primary location of the violation.
    pub location: Location,
    /// Human-readable message.
    pub message: String,
    /// Optional suggestion for fixing.
    pub suggestion: Option<Suggestion>,
    /// Whether the suggested replacement was written back to the file.
    #[serde(default)]
    pub fixed: bool,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            location,
            message: message.into(),
            suggestion: None,
            fixed: false,
        }
    }

    /// Adds a suggestion to this violation.
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: Suggestion) -> Self {
        self.suggestion = Some(suggestion);
        self
    }

    /// Returns the automatic replacement, if one was computed.
    #[must_use]
    pub fn replacement(&self) -> Option<&Replacement> {
        self.suggestion.as_ref()?.replacement.as_ref()
    }

    /// Formats the violation for terminal output.
    #[must_use]
    pub fn format(&self) -> String {
        use std::fmt::Write;
        let mut output = format!(
            "{} {} at {}:{}:{}\n",
            self.code,
            self.rule,
            self.location.file.display(),
            self.location.line,
            self.location.column,
        );
        let status = if self.fixed { " [corrected]" } else { "" };
        let _ = writeln!(output, "  {}: {}{status}", self.severity, self.message);
        if let Some(suggestion) = &self.suggestion {
            let _ = writeln!(output, "  = help: {}", suggestion.message);
        }
        output
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}:{}:{}: {} [{}] {}",
            self.location.file.display(),
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )?;
        if self.fixed {
            write!(f, " [corrected]")?;
        }
        Ok(())
    }
}

/// A violation rendered as a miette diagnostic for rich terminal output.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ViolationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl From<&Violation> for ViolationDiagnostic {
    fn from(v: &Violation) -> Self {
        Self {
            message: format!("[{}] {}", v.code, v.message),
            help: v.suggestion.as_ref().map(|s| s.message.clone()),
            span: SourceSpan::from((v.location.offset, v.location.length)),
            label_message: v.rule.clone(),
        }
    }
}

/// Result of running lint analysis.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// All violations found.
    pub violations: Vec<Violation>,
    /// Number of files checked.
    pub files_checked: usize,
    /// Number of files rewritten by autocorrection.
    #[serde(default)]
    pub files_fixed: usize,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Violations that were not corrected.
    pub fn remaining(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| !v.fixed)
    }

    /// Checks if any uncorrected violation meets or exceeds the given severity.
    #[must_use]
    pub fn has_violations_at(&self, severity: Severity) -> bool {
        self.remaining().any(|v| v.severity >= severity)
    }

    /// Number of violations that were corrected.
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.violations.iter().filter(|v| v.fixed).count()
    }

    /// Counts violations by severity as `(errors, warnings, infos)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let count = |severity| {
            self.violations
                .iter()
                .filter(|v| v.severity == severity)
                .count()
        };
        (
            count(Severity::Error),
            count(Severity::Warning),
            count(Severity::Info),
        )
    }

    /// One-line summary of the run.
    #[must_use]
    pub fn summary(&self) -> String {
        use std::fmt::Write;
        let (errors, warnings, infos) = self.count_by_severity();
        let mut summary = format!(
            "Found {errors} error(s), {warnings} warning(s), {infos} info(s) in {} file(s)",
            self.files_checked
        );
        if self.files_fixed > 0 {
            let _ = write!(
                summary,
                ", corrected {} in {} file(s)",
                self.fixed_count(),
                self.files_fixed
            );
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_violation(severity: Severity) -> Violation {
        Violation::new(
            "EW001",
            "example-wording",
            severity,
            Location::new(PathBuf::from("spec/user_spec.rb"), 3, 7).with_span(30, 18),
            "Do not use should when describing your tests.",
        )
    }

    #[test]
    fn location_from_span_records_offsets() {
        let src = "describe User do\n  it 'should work' do\n";
        let span = TextSpan::new(src, 23, 34).unwrap();
        let loc = Location::from_span(PathBuf::from("a_spec.rb"), &span);
        assert_eq!((loc.line, loc.column), (2, 7));
        assert_eq!((loc.offset, loc.length), (23, 11));
        assert_eq!(loc.span(src).map(|s| s.text()), Some("should work"));
    }

    #[test]
    fn display_marks_corrected_violations() {
        let mut v = make_violation(Severity::Warning);
        assert!(!format!("{v}").contains("[corrected]"));
        v.fixed = true;
        insta::assert_snapshot!(
            format!("{v}"),
            @"spec/user_spec.rb:3:7: warning [EW001] Do not use should when describing your tests. [corrected]"
        );
    }

    #[test]
    fn has_violations_at_ignores_fixed() {
        let mut result = LintResult::new();
        let mut fixed = make_violation(Severity::Error);
        fixed.fixed = true;
        result.violations.push(fixed);
        result.violations.push(make_violation(Severity::Warning));

        assert!(!result.has_violations_at(Severity::Error));
        assert!(result.has_violations_at(Severity::Warning));
        assert_eq!(result.fixed_count(), 1);
    }

    #[test]
    fn summary_mentions_corrections() {
        let mut result = LintResult::new();
        result.files_checked = 2;
        result.violations.push(make_violation(Severity::Warning));
        assert_eq!(
            result.summary(),
            "Found 0 error(s), 1 warning(s), 0 info(s) in 2 file(s)"
        );

        result.violations[0].fixed = true;
        result.files_fixed = 1;
        assert!(result.summary().ends_with(", corrected 1 in 1 file(s)"));
    }

    #[test]
    fn replacement_is_reachable_from_violation() {
        let v = make_violation(Severity::Warning);
        assert!(v.replacement().is_none());

        let rep = Replacement::new(v.location.clone(), "works");
        let v = v.with_suggestion(Suggestion::with_fix("Use present tense", rep.clone()));
        assert_eq!(v.replacement(), Some(&rep));
    }
}
