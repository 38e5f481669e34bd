//! Shared output formatting for lint results.

use anyhow::Result;
use miette::{NamedSource, Report};
use std::path::Path;
use wording_lint_core::{LintResult, Severity, Violation, ViolationDiagnostic};

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `root` resolves the relative file paths recorded in violations, so the
/// text format can show source snippets.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result, root),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => print_compact(result),
    }
    Ok(())
}

fn print_text(result: &LintResult, root: &Path) {
    for violation in &result.violations {
        match snippet(violation, root) {
            Some(report) => println!("{report:?}"),
            None => println!("{}", violation.format()),
        }
    }

    let worst = result.remaining().map(|v| v.severity).max();
    let summary_color = if worst == Some(Severity::Error) {
        "\x1b[31m"
    } else if worst == Some(Severity::Warning) {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    println!("{summary_color}{}\x1b[0m", result.summary());
}

/// Renders an uncorrected violation against its source file.
///
/// Corrected violations point into text that no longer exists, so they
/// fall back to the plain format.
fn snippet(violation: &Violation, root: &Path) -> Option<Report> {
    if violation.fixed {
        return None;
    }
    let file = &violation.location.file;
    let path = if file.is_absolute() {
        file.clone()
    } else if root.is_file() {
        root.to_path_buf()
    } else {
        root.join(file)
    };
    let content = std::fs::read_to_string(path).ok()?;
    violation.location.span(&content)?;

    let name = file.display().to_string();
    Some(
        Report::new(ViolationDiagnostic::from(violation))
            .with_source_code(NamedSource::new(name, content)),
    )
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn print_compact(result: &LintResult) {
    for violation in &result.violations {
        println!("{violation}");
    }
}
