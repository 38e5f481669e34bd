//! # wording-lint-core
//!
//! Core framework for wording checks over test-suite source files.
//!
//! This crate provides the foundational traits and types for building
//! wording linters. It includes:
//!
//! - [`SyntaxNode`], a closed tree model produced by a [`SourceParser`]
//! - [`TextSpan`] for byte ranges into a source buffer
//! - [`Rule`] trait for per-node checks with optional autocorrection
//! - [`Analyzer`] for discovering files, running rules and applying fixes
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use wording_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./spec")
//!     .parser(RubyParser::new())
//!     .rule(MyRule::new())
//!     .fix(true)
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! println!("{}", result.summary());
//! if result.has_violations_at(analyzer.fail_on()) {
//!     std::process::exit(1);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod fixer;
mod parser;
mod rule;
mod syntax;
mod types;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError, SourceReport};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use fixer::{apply_replacements, FixOutcome};
pub use parser::{ParseError, SourceParser};
pub use rule::{Rule, RuleBox};
pub use syntax::{Block, ByteRange, Call, Descendants, StringLiteral, SyntaxNode, TextSpan};
pub use types::{
    LintResult, Location, Replacement, Severity, Suggestion, Violation, ViolationDiagnostic,
};
