//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# wording-lint configuration

# Uncorrected violations at or above this severity fail the check
fail_on = "warning"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./spec"

# Files to analyze
include = ["**/*_spec.rb"]

# Glob patterns to exclude from analysis
exclude = [
    "**/vendor/**",
]

# Respect .gitignore files
respect_gitignore = true

[rules.example-wording]
enabled = true
# severity = "error"  # Override default severity

# Words the autocorrector leaves untouched
# IgnoredWords = ["only", "really"]

# Direct replacements used by the autocorrector
# [rules.example-wording.CustomTransform]
# be = "is"
# have = "has"
# not = "does not"
"#;

const CONFIG_FILE: &str = "wording-lint.toml";

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new(CONFIG_FILE), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules");
    println!("  2. Run: wording-lint check");
    println!("  3. Run: wording-lint check --fix");

    Ok(())
}

fn write_config(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;
    Ok(())
}
