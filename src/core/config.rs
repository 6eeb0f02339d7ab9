//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! Prefixer has two configuration scopes:
//! - **Global**: User-level settings
//! - **Project**: Per-project overrides
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Project config file
//! 4. CLI flags (not handled here)
//!
//! # Global Config Locations
//!
//! Searched in order:
//! 1. `$PREFIXER_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/prefixer/config.toml`
//! 3. `~/.prefixer/config.toml` (canonical write location)
//!
//! # Project Config Location
//!
//! `<project>/Config/Prefixer.toml`, next to the conventions CSV.
//!
//! # Example
//!
//! ```no_run
//! use prefixer::core::config::Config;
//! use std::path::Path;
//!
//! let result = Config::load(Some(Path::new("/work/MyGame"))).unwrap();
//! let config = result.config;
//!
//! println!("Host: {}", config.host_url());
//! for class in config.skip_classes().unwrap() {
//!     println!("Skipping class: {}", class);
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::paths::ProjectPaths;
use crate::core::types::ClassName;

/// Default Remote Control endpoint of a locally running editor.
pub const DEFAULT_HOST_URL: &str = "http://127.0.0.1:30010";

/// Classes never touched by rename/undo unless overridden.
///
/// Generated classes shadow their source asset; renaming them corrupts
/// the link to the asset that generated them.
pub const DEFAULT_SKIP_CLASSES: &[&str] = &["BlueprintGeneratedClass"];

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Warnings generated during config loading.
#[derive(Debug, Clone)]
pub struct ConfigWarning {
    /// The warning message.
    pub message: String,
    /// The path that triggered the warning.
    pub path: PathBuf,
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// Any warnings generated during loading.
    pub warnings: Vec<ConfigWarning>,
}

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// host_url = "http://127.0.0.1:30010"
/// interactive = true
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Remote Control endpoint of the editor
    pub host_url: Option<String>,

    /// Default interactive mode
    pub interactive: Option<bool>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.host_url {
            validate_host_url(url)?;
        }
        Ok(())
    }
}

/// Project configuration.
///
/// # Example
///
/// ```toml
/// host_url = "http://127.0.0.1:30010"
/// conventions = "Config/NamingConventions.csv"
/// skip_classes = ["BlueprintGeneratedClass", "WidgetBlueprintGeneratedClass"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectConfig {
    /// Remote Control endpoint override
    pub host_url: Option<String>,

    /// Conventions CSV path override, relative to the project root
    pub conventions: Option<PathBuf>,

    /// Classes to skip during rename/undo
    pub skip_classes: Option<Vec<String>>,
}

impl ProjectConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(url) = &self.host_url {
            validate_host_url(url)?;
        }
        if let Some(classes) = &self.skip_classes {
            for class in classes {
                ClassName::new(class).map_err(|e| {
                    ConfigError::InvalidValue(format!("invalid skip class: {}", e))
                })?;
            }
        }
        Ok(())
    }
}

fn validate_host_url(url: &str) -> Result<(), ConfigError> {
    if url.is_empty() {
        return Err(ConfigError::InvalidValue("host_url cannot be empty".into()));
    }
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::InvalidValue(format!(
            "host_url must be an http(s) URL, got '{}'",
            url
        )));
    }
    Ok(())
}

/// Merged configuration from all sources.
///
/// This struct provides accessor methods that apply precedence rules
/// automatically. Project config overrides global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Project configuration (if a project root was found)
    pub project: Option<ProjectConfig>,
    /// Path to the global config file (if loaded)
    global_path: Option<PathBuf>,
    /// Path to the project config file (if loaded)
    project_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// # Arguments
    ///
    /// * `project_root` - Project root directory, if one is known
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a config file exists but cannot be read
    /// or parsed. Missing files are not errors.
    pub fn load(project_root: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let mut warnings = Vec::new();
        let mut config = Config::default();

        if let Some(path) = global_config_path(&mut warnings) {
            if path.exists() {
                config.global = read_toml::<GlobalConfig>(&path)?;
                config.global.validate()?;
                config.global_path = Some(path);
            }
        }

        if let Some(root) = project_root {
            let path = ProjectPaths::new(root.to_path_buf()).project_config_path();
            if path.exists() {
                let project = read_toml::<ProjectConfig>(&path)?;
                project.validate()?;
                config.project = Some(project);
                config.project_path = Some(path);
            }
        }

        Ok(ConfigLoadResult { config, warnings })
    }

    /// Build a config from in-memory parts (used by tests and by CLI
    /// flag overrides).
    pub fn from_parts(global: GlobalConfig, project: Option<ProjectConfig>) -> Self {
        Self {
            global,
            project,
            global_path: None,
            project_path: None,
        }
    }

    /// Remote Control endpoint, with precedence applied.
    pub fn host_url(&self) -> String {
        self.project
            .as_ref()
            .and_then(|p| p.host_url.clone())
            .or_else(|| self.global.host_url.clone())
            .unwrap_or_else(|| DEFAULT_HOST_URL.to_string())
    }

    /// Whether interactive prompts are enabled by default.
    pub fn interactive(&self) -> bool {
        self.global.interactive.unwrap_or(true)
    }

    /// Classes excluded from rename/undo.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a configured class name is
    /// invalid. Validation also runs at load time, so this only fails for
    /// configs constructed in memory.
    pub fn skip_classes(&self) -> Result<Vec<ClassName>, ConfigError> {
        let names: Vec<String> = self
            .project
            .as_ref()
            .and_then(|p| p.skip_classes.clone())
            .unwrap_or_else(|| DEFAULT_SKIP_CLASSES.iter().map(|s| s.to_string()).collect());

        names
            .into_iter()
            .map(|name| {
                ClassName::new(name)
                    .map_err(|e| ConfigError::InvalidValue(format!("invalid skip class: {}", e)))
            })
            .collect()
    }

    /// Path to the conventions CSV for a project, honoring the override.
    pub fn conventions_path(&self, paths: &ProjectPaths) -> PathBuf {
        match self.project.as_ref().and_then(|p| p.conventions.as_ref()) {
            Some(rel) if rel.is_absolute() => rel.clone(),
            Some(rel) => paths.root.join(rel),
            None => paths.conventions_path(),
        }
    }

    /// Path the global config was loaded from, if any.
    pub fn global_path(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    /// Path the project config was loaded from, if any.
    pub fn project_path(&self) -> Option<&Path> {
        self.project_path.as_deref()
    }
}

/// Resolve the global config path.
///
/// `$PREFIXER_CONFIG` takes precedence; a set-but-missing override is
/// surfaced as a warning rather than silently ignored.
fn global_config_path(warnings: &mut Vec<ConfigWarning>) -> Option<PathBuf> {
    if let Ok(explicit) = std::env::var("PREFIXER_CONFIG") {
        let path = PathBuf::from(explicit);
        if !path.exists() {
            warnings.push(ConfigWarning {
                message: "PREFIXER_CONFIG is set but the file does not exist".into(),
                path: path.clone(),
            });
        }
        return Some(path);
    }

    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let path = PathBuf::from(xdg).join("prefixer").join("config.toml");
        if path.exists() {
            return Some(path);
        }
    }

    dirs::home_dir().map(|home| home.join(".prefixer").join("config.toml"))
}

fn read_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_empty() {
        let config = Config::default();
        assert_eq!(config.host_url(), DEFAULT_HOST_URL);
        assert!(config.interactive());
        let skips = config.skip_classes().unwrap();
        assert_eq!(skips.len(), 1);
        assert_eq!(skips[0].as_str(), "BlueprintGeneratedClass");
    }

    #[test]
    fn project_overrides_global() {
        let config = Config::from_parts(
            GlobalConfig {
                host_url: Some("http://global:30010".into()),
                interactive: None,
            },
            Some(ProjectConfig {
                host_url: Some("http://project:30010".into()),
                ..Default::default()
            }),
        );
        assert_eq!(config.host_url(), "http://project:30010");
    }

    #[test]
    fn global_used_without_project() {
        let config = Config::from_parts(
            GlobalConfig {
                host_url: Some("http://global:30010".into()),
                interactive: Some(false),
            },
            None,
        );
        assert_eq!(config.host_url(), "http://global:30010");
        assert!(!config.interactive());
    }

    #[test]
    fn skip_classes_override() {
        let config = Config::from_parts(
            GlobalConfig::default(),
            Some(ProjectConfig {
                skip_classes: Some(vec![
                    "BlueprintGeneratedClass".into(),
                    "WidgetBlueprintGeneratedClass".into(),
                ]),
                ..Default::default()
            }),
        );
        let skips = config.skip_classes().unwrap();
        assert_eq!(skips.len(), 2);
    }

    #[test]
    fn conventions_path_default_and_override() {
        let paths = ProjectPaths::new(PathBuf::from("/work/MyGame"));

        let config = Config::default();
        assert_eq!(
            config.conventions_path(&paths),
            PathBuf::from("/work/MyGame/Config/NamingConventions.csv")
        );

        let config = Config::from_parts(
            GlobalConfig::default(),
            Some(ProjectConfig {
                conventions: Some(PathBuf::from("Tools/Naming.csv")),
                ..Default::default()
            }),
        );
        assert_eq!(
            config.conventions_path(&paths),
            PathBuf::from("/work/MyGame/Tools/Naming.csv")
        );
    }

    #[test]
    fn validate_rejects_bad_host_url() {
        let global = GlobalConfig {
            host_url: Some("localhost:30010".into()),
            interactive: None,
        };
        assert!(matches!(
            global.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn validate_rejects_bad_skip_class() {
        let project = ProjectConfig {
            skip_classes: Some(vec!["has space".into()]),
            ..Default::default()
        };
        assert!(matches!(
            project.validate(),
            Err(ConfigError::InvalidValue(_))
        ));
    }

    #[test]
    fn parse_project_toml() {
        let project: ProjectConfig = toml::from_str(
            r#"
            host_url = "http://127.0.0.1:30010"
            conventions = "Config/NamingConventions.csv"
            skip_classes = ["BlueprintGeneratedClass"]
            "#,
        )
        .unwrap();
        assert_eq!(project.skip_classes.unwrap().len(), 1);
    }

    #[test]
    fn unknown_keys_rejected() {
        let result: Result<ProjectConfig, _> = toml::from_str("unknown_key = 1");
        assert!(result.is_err());
    }
}
