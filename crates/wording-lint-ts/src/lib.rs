//! # wording-lint-ts
//!
//! Tree-sitter frontend for wording-lint.
//!
//! [`RubyParser`] implements [`wording_lint_core::SourceParser`] on top of
//! `tree-sitter-ruby` and lowers RSpec files into the closed syntax model
//! the rules match on.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod ruby;

pub use ruby::RubyParser;
