//! Lessondeck Config
//!
//! This crate handles configuration loading and management for
//! lessondeck, supporting TOML configuration files.
//!
//! # Overview
//!
//! Configuration is loaded from platform-specific locations:
//! - Linux: `~/.config/lessondeck/config.toml`
//! - macOS: `~/Library/Application Support/lessondeck/config.toml`
//! - Windows: `%APPDATA%\lessondeck\config.toml`
//!
//! # Example
//!
//! ```no_run
//! use lessondeck_config::Config;
//!
//! // Load config with defaults
//! let config = Config::load().unwrap();
//! ```

mod theme;

pub use theme::Theme;

use lessondeck_core::{LessondeckError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default TOML configuration string.
const DEFAULT_TOML: &str = r#"[site]
theme = "light"
content_dir = "."
output_dir = "site"

[store]
"#;

/// Site settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Page color theme.
    #[serde(default)]
    pub theme: Theme,

    /// Root directory the catalog's lesson/template paths resolve
    /// against.
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,

    /// Where `deck build` writes the generated site.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Optional catalog file replacing the built-in catalog.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_file: Option<PathBuf>,
}

fn default_content_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("site")
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            content_dir: default_content_dir(),
            output_dir: default_output_dir(),
            catalog_file: None,
        }
    }
}

impl SiteConfig {
    /// Merge another SiteConfig into this one. Values from `other` take
    /// precedence; TOML cannot distinguish "unset" from "default" for
    /// plain fields, so override files should carry only the keys the
    /// user wants changed.
    pub fn merge(&mut self, other: &SiteConfig) {
        self.theme = other.theme;
        self.content_dir = other.content_dir.clone();
        self.output_dir = other.output_dir.clone();
        if other.catalog_file.is_some() {
            self.catalog_file = other.catalog_file.clone();
        }
    }
}

/// Progress store settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Progress file location; the platform data directory is used when
    /// unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progress_file: Option<PathBuf>,
}

impl StoreConfig {
    pub fn merge(&mut self, other: &StoreConfig) {
        if other.progress_file.is_some() {
            self.progress_file = other.progress_file.clone();
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Site settings
    #[serde(default)]
    pub site: SiteConfig,

    /// Progress store settings
    #[serde(default)]
    pub store: StoreConfig,
}

impl Default for Config {
    fn default() -> Self {
        // Parse the default TOML to ensure consistency
        toml::from_str(DEFAULT_TOML).expect("Default TOML should be valid")
    }
}

impl Config {
    /// Returns the default TOML configuration string.
    pub fn default_toml() -> &'static str {
        DEFAULT_TOML
    }

    /// Returns the platform-specific configuration file path.
    pub fn config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "lessondeck")
            .map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from the default platform-specific path.
    ///
    /// If no config file exists, returns the default configuration.
    pub fn load() -> Result<Self> {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                let content = std::fs::read_to_string(&config_path)?;
                return toml::from_str(&content)
                    .map_err(|e| LessondeckError::Config(format!("Parse error: {}", e)));
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            LessondeckError::Config(format!("Parse error in {}: {}", path.display(), e))
        })
    }

    /// Merge another config into this one. Values from `other` take
    /// precedence; used for CLI overrides and secondary config files.
    pub fn merge(&mut self, other: &Config) {
        self.site.merge(&other.site);
        self.store.merge(&other.store);
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| LessondeckError::Config(format!("Serialization error: {}", e)))?;
        std::fs::write(path, toml_string)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.site.theme, Theme::Light);
        assert_eq!(config.site.content_dir, PathBuf::from("."));
        assert_eq!(config.site.output_dir, PathBuf::from("site"));
        assert!(config.site.catalog_file.is_none());
        assert!(config.store.progress_file.is_none());
    }

    #[test]
    fn test_default_toml_parses() {
        let config: Config = toml::from_str(DEFAULT_TOML).unwrap();
        assert_eq!(config.site.theme, Theme::Light);
    }

    #[test]
    fn test_merge() {
        let mut base = Config::default();

        let override_toml = r#"
            [site]
            theme = "dark"
            content_dir = "content"
            [store]
            progress_file = "custom/progress.toml"
        "#;
        let override_config: Config = toml::from_str(override_toml).unwrap();

        base.merge(&override_config);
        assert_eq!(base.site.theme, Theme::Dark);
        assert_eq!(base.site.content_dir, PathBuf::from("content"));
        assert_eq!(
            base.store.progress_file,
            Some(PathBuf::from("custom/progress.toml"))
        );
    }

    #[test]
    fn test_merge_keeps_unset_optionals() {
        let mut base: Config = toml::from_str(
            r#"
            [store]
            progress_file = "keep.toml"
        "#,
        )
        .unwrap();
        base.merge(&Config::default());
        assert_eq!(base.store.progress_file, Some(PathBuf::from("keep.toml")));
    }

    #[test]
    fn test_load_from_and_save_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.site.theme = Theme::Dark;
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.site.theme, Theme::Dark);
    }

    #[test]
    fn test_load_from_bad_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, LessondeckError::Config(_)));
    }

    #[test]
    fn test_config_path() {
        // On CI/containers this might be None, so just check it doesn't panic
        if let Some(p) = Config::config_path() {
            assert!(p.to_string_lossy().contains("lessondeck"));
        }
    }
}
