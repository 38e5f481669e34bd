//! Configuration file resolution.
//!
//! Priority order:
//!
//! 1. `--config` flag (explicit path, trusted as-is)
//! 2. `wording-lint.toml` or `.wording-lint.toml` in the analyzed directory
//!    or the nearest ancestor that has one
//! 3. `$WORDING_LINT_CONFIG_DIR/config.toml`, else `~/.wording-lint/config.toml`
//! 4. Built-in defaults

use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given via `--config`.
    Explicit(PathBuf),
    /// Found next to or above the analyzed path.
    Project(PathBuf),
    /// Found in the user-wide config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config came from the user-wide directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

const PROJECT_CONFIG_NAMES: [&str; 2] = ["wording-lint.toml", ".wording-lint.toml"];

const GLOBAL_CONFIG_NAME: &str = "config.toml";

const CONFIG_DIR_ENV: &str = "WORDING_LINT_CONFIG_DIR";

/// Resolves the configuration for `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    let project_dir = std::path::absolute(project_dir).unwrap_or_else(|_| project_dir.into());
    resolve_with(&project_dir, explicit, global_config_dir())
}

fn resolve_with(
    project_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = find_project_config(project_dir) {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    global_dir
        .map(|dir| dir.join(GLOBAL_CONFIG_NAME))
        .filter(|candidate| candidate.is_file())
        .map_or(ConfigSource::Default, |candidate| {
            tracing::debug!("Found global config: {}", candidate.display());
            ConfigSource::Global(candidate)
        })
}

/// Nearest project config, starting at `dir` and walking up.
fn find_project_config(dir: &Path) -> Option<PathBuf> {
    dir.ancestors().find_map(|ancestor| {
        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| ancestor.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Returns the user-wide config directory.
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".wording-lint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_wins_and_is_not_checked() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("wording-lint.toml"), "").unwrap();

        let explicit = Path::new("/nonexistent.toml");
        let result = resolve_with(tmp.path(), Some(explicit), None);
        assert_eq!(result, ConfigSource::Explicit(explicit.to_path_buf()));
    }

    #[test]
    fn plain_name_preferred_over_dot_prefix() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("wording-lint.toml"), "").unwrap();
        fs::write(tmp.path().join(".wording-lint.toml"), "").unwrap();

        let result = resolve_with(tmp.path(), None, None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join("wording-lint.toml"))
        );
    }

    #[test]
    fn dot_prefixed_config_found() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".wording-lint.toml"), "").unwrap();

        let result = resolve_with(tmp.path(), None, None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join(".wording-lint.toml"))
        );
    }

    #[test]
    fn nearest_ancestor_config_found() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("spec/models");
        fs::create_dir_all(&nested).unwrap();
        fs::write(tmp.path().join("wording-lint.toml"), "").unwrap();
        fs::write(tmp.path().join("spec/.wording-lint.toml"), "").unwrap();

        let result = resolve_with(&nested, None, None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join("spec/.wording-lint.toml"))
        );
    }

    #[test]
    fn global_fallback_only_without_project_config() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        fs::write(global.path().join("config.toml"), "").unwrap();

        let result = resolve_with(project.path(), None, Some(global.path().to_path_buf()));
        assert!(result.is_global());
        assert_eq!(result.path(), Some(global.path().join("config.toml").as_path()));

        fs::write(project.path().join("wording-lint.toml"), "").unwrap();
        let result = resolve_with(project.path(), None, Some(global.path().to_path_buf()));
        assert!(matches!(result, ConfigSource::Project(_)));
    }

    #[test]
    fn empty_global_dir_means_defaults() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();

        let result = resolve_with(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(result, ConfigSource::Default);
        assert!(result.path().is_none());
    }
}
