//! Driver configuration loaded from TOML.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use menu_core::MenuOptions;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Settings shared by every menu a driver owns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Font size for newly created native submenus and items.
    pub font_size: f32,
    /// Upper bound on component placeholder hops.
    pub max_component_depth: usize,
    /// Detach and release native controls when their node is deleted.
    pub detach_on_delete: bool,
    /// Name of the UI thread.
    pub thread_name: String,
}

impl Default for DriverConfig {
    fn default() -> Self {
        let options = MenuOptions::default();
        Self {
            font_size: options.font_size,
            max_component_depth: options.max_component_depth,
            detach_on_delete: options.detach_on_delete,
            thread_name: "menu-ui".to_string(),
        }
    }
}

impl DriverConfig {
    /// Load and validate a config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            origin: path.display().to_string(),
            source,
        })?;
        config.validate()?;
        tracing::info!(path = %path.display(), "loaded driver config");
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            origin: "<inline>".to_string(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(ConfigError::Invalid {
                key: "font_size",
                reason: format!("must be a positive number, got {}", self.font_size),
            });
        }
        if self.max_component_depth == 0 {
            return Err(ConfigError::Invalid {
                key: "max_component_depth",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.thread_name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                key: "thread_name",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn menu_options(&self) -> MenuOptions {
        MenuOptions {
            font_size: self.font_size,
            max_component_depth: self.max_component_depth,
            detach_on_delete: self.detach_on_delete,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = DriverConfig::from_toml("").unwrap();
        assert_eq!(config, DriverConfig::default());
        assert_eq!(config.font_size, 12.0);
        assert_eq!(config.max_component_depth, 64);
        assert!(config.detach_on_delete);
        assert_eq!(config.thread_name, "menu-ui");
    }

    #[test]
    fn partial_file_overrides_given_keys() {
        let config =
            DriverConfig::from_toml("font_size = 14.0\ndetach_on_delete = false\n").unwrap();
        assert_eq!(config.font_size, 14.0);
        assert!(!config.detach_on_delete);
        assert_eq!(config.max_component_depth, 64);

        let options = config.menu_options();
        assert_eq!(options.font_size, 14.0);
        assert!(!options.detach_on_delete);
    }

    #[test]
    fn round_trips_through_toml() {
        let config = DriverConfig {
            thread_name: "ui".into(),
            ..DriverConfig::default()
        };
        let text = config.to_toml().unwrap();
        assert_eq!(DriverConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn rejects_bad_values() {
        let err = DriverConfig::from_toml("max_component_depth = 0").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                key: "max_component_depth",
                ..
            }
        ));
        assert!(DriverConfig::from_toml("font_size = -1.0").is_err());
        assert!(DriverConfig::from_toml("thread_name = \"  \"").is_err());
        assert!(matches!(
            DriverConfig::from_toml("font_size = \"big\""),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let path = std::env::temp_dir().join(format!(
            "menu-driver-missing-{}.toml",
            std::process::id()
        ));
        assert!(matches!(
            DriverConfig::load(&path),
            Err(ConfigError::Read { .. })
        ));
    }

    #[test]
    fn loads_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "menu-driver-config-{}.toml",
            std::process::id()
        ));
        fs::write(&path, "font_size = 13.0\nthread_name = \"menus\"\n").unwrap();
        let config = DriverConfig::load(&path).unwrap();
        let _ = fs::remove_file(&path);
        assert_eq!(config.font_size, 13.0);
        assert_eq!(config.thread_name, "menus");
    }
}
