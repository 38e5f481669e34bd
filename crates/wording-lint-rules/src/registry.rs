//! Rule registry built from configuration.

use crate::example_wording::{self, ExampleWording};
use tracing::debug;
use wording_lint_core::{Config, ConfigError, Rule, RuleBox};

/// Name and code of every built-in rule, in report order.
pub const RULES: &[(&str, &str)] = &[(example_wording::NAME, example_wording::CODE)];

/// Returns all built-in rules, configured from `config`.
///
/// Disabled rules are left out and severity overrides are applied.
///
/// # Errors
///
/// Returns an error if a rule's options are malformed.
pub fn all_rules(config: &Config) -> Result<Vec<RuleBox>, ConfigError> {
    let mut rules: Vec<RuleBox> = Vec::new();

    if config.is_rule_enabled(example_wording::NAME) {
        let mut rule = ExampleWording::from_config(config)?;
        if let Some(severity) = config.rule_severity(example_wording::NAME) {
            rule = rule.severity(severity);
        }
        rules.push(Box::new(rule));
    } else {
        debug!(rule = example_wording::NAME, "rule disabled by configuration");
    }

    Ok(rules)
}

/// Returns the default rule set, ignoring any configuration.
#[must_use]
pub fn default_rules() -> Vec<RuleBox> {
    vec![Box::new(ExampleWording::new())]
}

/// Looks up a built-in rule by name or code.
#[must_use]
pub fn find_rule(name_or_code: &str) -> Option<RuleBox> {
    default_rules()
        .into_iter()
        .find(|rule| rule.name() == name_or_code || rule.code() == name_or_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wording_lint_core::Severity;

    #[test]
    fn test_default_config_enables_every_rule() {
        let rules = all_rules(&Config::default()).unwrap();
        let names: Vec<_> = rules.iter().map(|r| r.name()).collect();
        let expected: Vec<_> = RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_disabled_rule_is_skipped() {
        let config = Config::parse("[rules.example-wording]\nenabled = false\n").unwrap();
        assert!(all_rules(&config).unwrap().is_empty());
    }

    #[test]
    fn test_severity_override() {
        let config = Config::parse("[rules.example-wording]\nseverity = \"error\"\n").unwrap();
        let rules = all_rules(&config).unwrap();
        assert_eq!(rules[0].default_severity(), Severity::Error);
    }

    #[test]
    fn test_malformed_options_are_reported() {
        let config =
            Config::parse("[rules.example-wording]\nCustomTransform = [\"be\"]\n").unwrap();
        assert!(all_rules(&config).is_err());
    }

    #[test]
    fn test_find_rule() {
        assert_eq!(find_rule("EW001").map(|r| r.name()), Some("example-wording"));
        assert_eq!(find_rule("example-wording").map(|r| r.code()), Some("EW001"));
        assert!(find_rule("no-such-rule").is_none());
    }
}
