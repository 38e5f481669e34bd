//! Core analyzer for orchestrating lint execution.

use crate::config::{Config, ConfigError};
use crate::context::FileContext;
use crate::fixer::apply_replacements;
use crate::parser::SourceParser;
use crate::rule::{Rule, RuleBox};
use crate::types::{LintResult, Severity, Suggestion, Violation};

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during analysis.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// IO error reading or writing files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing a source file.
    #[error("Parse error in {path}: {message}")]
    Parse {
        /// Path to the file that failed to parse.
        path: PathBuf,
        /// Parse error message.
        message: String,
    },

    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// Error while walking the project tree.
    #[error("File discovery failed: {0}")]
    Walk(#[from] ignore::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No parser was registered.
    #[error("No source parser configured")]
    NoParser,
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    root: Option<PathBuf>,
    rules: Vec<RuleBox>,
    parser: Option<Box<dyn SourceParser>>,
    exclude_patterns: Vec<String>,
    include_patterns: Vec<String>,
    config: Option<Config>,
    fix: bool,
    fail_on_parse_error: bool,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the root directory (or single file) to analyze.
    #[must_use]
    pub fn root(mut self, path: impl Into<PathBuf>) -> Self {
        self.root = Some(path.into());
        self
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds multiple boxed rules.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Sets the parser used to turn files into syntax trees.
    #[must_use]
    pub fn parser<P: SourceParser + 'static>(mut self, parser: P) -> Self {
        self.parser = Some(Box::new(parser));
        self
    }

    /// Adds an exclude glob pattern.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Adds an include glob pattern.
    #[must_use]
    pub fn include(mut self, pattern: impl Into<String>) -> Self {
        self.include_patterns.push(pattern.into());
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Sets whether autocorrections are computed and written back.
    #[must_use]
    pub fn fix(mut self, fix: bool) -> Self {
        self.fix = fix;
        self
    }

    /// Sets whether to fail on parse errors (default: false).
    #[must_use]
    pub fn fail_on_parse_error(mut self, fail: bool) -> Self {
        self.fail_on_parse_error = fail;
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if no parser was set, a glob pattern is invalid,
    /// or the current directory cannot be resolved.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let parser = self.parser.ok_or(AnalyzerError::NoParser)?;

        let root = self
            .root
            .or_else(|| self.config.as_ref().map(|c| c.analyzer.root.clone()))
            .unwrap_or_else(|| PathBuf::from("."));

        let root = if root.is_absolute() {
            root
        } else {
            std::env::current_dir()?.join(&root)
        };

        // Merge patterns from config
        let mut exclude_patterns = self.exclude_patterns;
        let mut include_patterns = self.include_patterns;
        if let Some(ref config) = self.config {
            exclude_patterns.extend(config.analyzer.exclude.iter().cloned());
            include_patterns.extend(config.analyzer.include.iter().cloned());
        }

        let compile = |patterns: Vec<String>| {
            patterns
                .iter()
                .map(|p| glob::Pattern::new(p))
                .collect::<Result<Vec<_>, _>>()
        };

        let config = self.config.unwrap_or_default();

        Ok(Analyzer {
            root,
            rules: self.rules,
            parser,
            exclude: compile(exclude_patterns)?,
            include: compile(include_patterns)?,
            respect_gitignore: config.analyzer.respect_gitignore,
            config,
            fix: self.fix,
            fail_on_parse_error: self.fail_on_parse_error,
        })
    }
}

/// Violations for one source text, plus the corrected text when fixing
/// changed it.
#[derive(Debug, Default)]
pub struct SourceReport {
    /// Violations in traversal order.
    pub violations: Vec<Violation>,
    /// Rewritten source, if any replacement was applied.
    pub corrected: Option<String>,
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance.
pub struct Analyzer {
    root: PathBuf,
    rules: Vec<RuleBox>,
    parser: Box<dyn SourceParser>,
    exclude: Vec<glob::Pattern>,
    include: Vec<glob::Pattern>,
    respect_gitignore: bool,
    config: Config,
    fix: bool,
    fail_on_parse_error: bool,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the root directory being analyzed.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the severity at which a run counts as failed.
    #[must_use]
    pub fn fail_on(&self) -> Severity {
        self.config.fail_on()
    }

    /// Analyzes all files and returns the results.
    ///
    /// With fixing enabled, corrected files are written back in place.
    ///
    /// # Errors
    ///
    /// Returns an error if file discovery, reading or writing fails, or on
    /// parse errors when `fail_on_parse_error` is set.
    pub fn analyze(&self) -> Result<LintResult, AnalyzerError> {
        info!("Starting analysis at {}", self.root.display());

        let mut result = LintResult::new();
        let files = self.discover_files()?;

        info!("Found {} files to analyze", files.len());

        for file_path in &files {
            match self.analyze_file(file_path) {
                Ok(report) => {
                    result.violations.extend(report.violations);
                    result.files_checked += 1;
                    if report.corrected.is_some() {
                        result.files_fixed += 1;
                    }
                }
                Err(AnalyzerError::Parse { path, message }) => {
                    warn!("Failed to parse {}: {}", path.display(), message);
                    if self.fail_on_parse_error {
                        return Err(AnalyzerError::Parse { path, message });
                    }
                }
                Err(e) => return Err(e),
            }
        }

        // Sort violations by file, then line
        result.violations.sort_by(|a, b| {
            a.location
                .file
                .cmp(&b.location.file)
                .then(a.location.line.cmp(&b.location.line))
                .then(a.location.column.cmp(&b.location.column))
        });

        info!(
            "Analysis complete: {} violations in {} files",
            result.violations.len(),
            result.files_checked
        );

        Ok(result)
    }

    /// Analyzes a single file, writing it back if it was corrected.
    fn analyze_file(&self, path: &Path) -> Result<SourceReport, AnalyzerError> {
        debug!("Analyzing: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let report = self.check_source(path, &content)?;

        if let Some(corrected) = &report.corrected {
            std::fs::write(path, corrected)?;
            info!("Corrected {}", path.display());
        }

        Ok(report)
    }

    /// Runs all enabled rules over in-memory source text.
    ///
    /// Every node is visited in pre-order and offered to each rule. With
    /// fixing enabled, replacements from fixable rules are applied to a
    /// copy of `content`; nothing is written to disk.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Parse`] if the parser produces no tree.
    pub fn check_source(&self, path: &Path, content: &str) -> Result<SourceReport, AnalyzerError> {
        let tree = self
            .parser
            .parse(content)
            .map_err(|e| AnalyzerError::Parse {
                path: path.to_path_buf(),
                message: e.message,
            })?;

        let ctx = FileContext::new(path, content, &self.root);
        let active: Vec<&RuleBox> = self
            .rules
            .iter()
            .filter(|rule| {
                let enabled = self.config.is_rule_enabled(rule.name());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.name());
                }
                enabled
            })
            .collect();

        let mut found: Vec<(&RuleBox, Violation)> = Vec::new();
        for node in tree.descendants() {
            for &rule in &active {
                if let Some(violation) = rule.check_node(&ctx, node) {
                    found.push((rule, self.apply_severity_override(rule.name(), violation)));
                }
            }
        }

        if !self.fix {
            return Ok(SourceReport {
                violations: found.into_iter().map(|(_, v)| v).collect(),
                corrected: None,
            });
        }

        let mut replacements = Vec::new();
        let mut owners = Vec::new();
        for (index, (rule, violation)) in found.iter_mut().enumerate() {
            if !rule.is_fixable() {
                continue;
            }
            if let Some(replacement) = rule.autocorrect(&ctx, violation) {
                let message = format!("Replace with `{}`", replacement.new_text);
                replacements.push(replacement.clone());
                owners.push(index);
                *violation = violation
                    .clone()
                    .with_suggestion(Suggestion::with_fix(message, replacement));
            }
        }

        let outcome = apply_replacements(content, &replacements);
        for (owner, applied) in owners.into_iter().zip(outcome.applied) {
            found[owner].1.fixed = applied;
        }

        let corrected = (outcome.text != content).then_some(outcome.text);
        Ok(SourceReport {
            violations: found.into_iter().map(|(_, v)| v).collect(),
            corrected,
        })
    }

    /// Applies severity overrides from configuration.
    fn apply_severity_override(&self, rule_name: &str, mut violation: Violation) -> Violation {
        if let Some(severity) = self.config.rule_severity(rule_name) {
            violation.severity = severity;
        }
        violation
    }

    /// Discovers all source files to analyze.
    fn discover_files(&self) -> Result<Vec<PathBuf>, AnalyzerError> {
        // An explicitly named file is always analyzed.
        if self.root.is_file() {
            return Ok(vec![self.root.clone()]);
        }

        let walker = ignore::WalkBuilder::new(&self.root)
            .git_ignore(self.respect_gitignore)
            .git_exclude(self.respect_gitignore)
            .git_global(self.respect_gitignore)
            .require_git(false)
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry?;
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }

            let path = entry.into_path();
            if !self.handles_extension(&path) {
                continue;
            }
            if self.should_exclude(&path) {
                debug!("Excluding: {}", path.display());
                continue;
            }
            if !self.should_include(&path) {
                continue;
            }

            files.push(path);
        }

        files.sort();
        Ok(files)
    }

    fn handles_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.parser.extensions().contains(&ext))
    }

    fn relative<'p>(&self, path: &'p Path) -> &'p Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }

    /// Checks if a path should be excluded.
    fn should_exclude(&self, path: &Path) -> bool {
        let relative = self.relative(path);
        self.exclude
            .iter()
            .any(|p| p.matches_path(relative) || p.matches_path(path))
    }

    /// Checks if a path matches the include patterns (all files if none).
    fn should_include(&self, path: &Path) -> bool {
        let relative = self.relative(path);
        self.include.is_empty() || self.include.iter().any(|p| p.matches_path(relative))
    }
}
