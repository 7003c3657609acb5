//! Config persistence and validation methods for `Config`.
//!
//! Covers:
//! - `load` / `save` (YAML file I/O with atomic write)
//! - `load_from` / `save_to` for explicit locations
//! - XDG-style path helpers (`config_path`, `config_dir`)
//! - `validate`

use super::config_struct::Config;
use crate::error::ConfigError;
use anyhow::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

impl Config {
    /// Load configuration from the default location, creating it if missing
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!(
                "Config file not found, creating default at {:?}",
                config_path
            );
            let config = Self::default();
            if let Err(e) = config.save() {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            Ok(config)
        }
    }

    /// Load and validate configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path).map_err(ConfigError::from)?;

        // An empty file means "all defaults"
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml_ng::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::from)?;
        }

        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::from)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let temp_path = path.with_extension("yaml.tmp");
        fs::write(&temp_path, &yaml).map_err(ConfigError::from)?;
        fs::rename(&temp_path, path).map_err(ConfigError::from)?;

        log::debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Get the configuration file path: `~/.config/doctabs/config.yaml`
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory path
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("doctabs")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("doctabs")
            } else {
                PathBuf::from(".")
            }
        }
    }

    /// Check field values that serde cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.untitled_title.trim().is_empty() {
            return Err(ConfigError::Validation(
                "untitled_title must not be empty".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for view in &self.singleton_views {
            if view.path.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "singleton view '{}' has an empty path",
                    view.title
                )));
            }
            if !seen.insert(view.path.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "singleton path '{}' is declared more than once",
                    view.path
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SingletonView;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.max_recently_closed = 7;
        config
            .singleton_views
            .push(SingletonView::new("SETTINGS", "Settings"));
        config.save_to(&path).unwrap();

        assert!(path.exists());
        assert!(!path.with_extension("yaml.tmp").exists());

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_empty_file_gives_defaults() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "  \n").unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_load_corrupt_file_is_parse_error() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        fs::write(&path, "max_recently_closed: [not, a, number]").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let temp = tempdir().unwrap();
        let err = Config::load_from(&temp.path().join("absent.yaml")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_singletons() {
        let mut config = Config::default();
        config.singleton_views.push(SingletonView::new("HOME", "Start"));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_rejects_blank_untitled_title() {
        let config = Config {
            untitled_title: "   ".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_save_refuses_invalid_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        let mut config = Config::default();
        config.singleton_views.push(SingletonView::new("", "Nameless"));

        assert!(config.save_to(&path).is_err());
        assert!(!path.exists());
    }
}
