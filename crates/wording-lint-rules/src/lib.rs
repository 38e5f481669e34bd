//! # wording-lint-rules
//!
//! Built-in wording rules for wording-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | EW001 | `example-wording` | Forbids `it` descriptions starting with "should" (autocorrectable) |
//!
//! ## Usage
//!
//! ```ignore
//! use wording_lint_core::{Analyzer, Config};
//! use wording_lint_rules::all_rules;
//! use wording_lint_ts::RubyParser;
//!
//! let config = Config::from_file("wording-lint.toml".as_ref())?;
//! let analyzer = Analyzer::builder()
//!     .root("./spec")
//!     .parser(RubyParser::new())
//!     .rules(all_rules(&config)?)
//!     .config(config)
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod example_wording;
mod registry;

pub use example_wording::{
    detect, rewrite, simple_present, ExampleWording, Offense, WordingConfig, CODE, MESSAGE, NAME,
};
pub use registry::{all_rules, default_rules, find_rule, RULES};

/// Re-export core types for convenience.
pub use wording_lint_core::{Rule, Severity, Violation};
