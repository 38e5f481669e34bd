//! Check command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use wording_lint_core::{Analyzer, Config, RuleBox};
use wording_lint_rules::{all_rules, find_rule};
use wording_lint_ts::RubyParser;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Options for the check command.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Whether to rewrite offending descriptions.
    pub fix: bool,
    /// Comma-separated rule names or codes to run.
    pub rules_filter: Option<String>,
    /// Extra exclude globs.
    pub exclude: Vec<String>,
}

/// Runs the check command.
///
/// Without a `path`, the configured `[analyzer] root` is analyzed. A
/// relative root is taken from the directory holding the config file.
///
/// Returns `true` when uncorrected violations at or above the configured
/// `fail_on` severity remain.
pub fn run(path: Option<&Path>, options: &CheckOptions, source: &ConfigSource) -> Result<bool> {
    let mut config = load_config(source)?;
    if path.is_none() {
        anchor_root(&mut config, source);
    }

    let mut rules = all_rules(&config).context("Invalid rule options")?;
    if let Some(filter) = &options.rules_filter {
        let names: Vec<&str> = filter.split(',').map(str::trim).collect();
        rules = filter_rules(rules, &names);
    }

    let mut builder = Analyzer::builder();
    if let Some(path) = path {
        builder = builder.root(path);
    }
    let analyzer = builder
        .parser(RubyParser::new())
        .rules(rules)
        .excludes(options.exclude.iter().cloned())
        .config(config)
        .fix(options.fix)
        .build()
        .context("Failed to build analyzer")?;

    tracing::info!(
        "Analyzing {} with {} rule(s)",
        analyzer.root().display(),
        analyzer.rule_count()
    );

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, options.format, analyzer.root())?;

    Ok(result.has_violations_at(analyzer.fail_on()))
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    let Some(path) = source.path() else {
        return Ok(Config::default());
    };
    if source.is_global() {
        tracing::info!("Using global config: {}", path.display());
    }
    Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
}

fn anchor_root(config: &mut Config, source: &ConfigSource) {
    if config.analyzer.root.is_absolute() {
        return;
    }
    if let Some(dir) = source.path().and_then(Path::parent) {
        config.analyzer.root = dir.join(&config.analyzer.root);
    }
}

fn filter_rules(rules: Vec<RuleBox>, names: &[&str]) -> Vec<RuleBox> {
    for name in names {
        if find_rule(name).is_none() {
            tracing::warn!("Unknown rule: {}", name);
        }
    }

    rules
        .into_iter()
        .filter(|rule| names.iter().any(|n| *n == rule.name() || *n == rule.code()))
        .collect()
}
