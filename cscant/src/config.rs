//! Configuration module for the cscant CLI.
//!
//! Settings are read from a `cscant.toml` file. Command-line flags take
//! precedence over anything set here.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{CscantError, Result};
use crate::output::{OutputFormat, RenderOptions};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "cscant.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Output settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Print the banner above text output.
    #[serde(default = "default_true")]
    pub header: bool,

    /// Print the trailing end-of-file token.
    #[serde(default = "default_true")]
    pub include_eof: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            header: true,
            include_eof: true,
        }
    }
}

impl From<&OutputConfig> for RenderOptions {
    fn from(config: &OutputConfig) -> Self {
        Self {
            format: config.format,
            header: config.header,
            include_eof: config.include_eof,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CscantError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            CscantError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            CscantError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("cscant").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("cscant").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(config.output.header);
        assert!(config.output.include_eof);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE_NAME);

        let original = Config {
            verbose: true,
            output: OutputConfig {
                format: OutputFormat::Json,
                header: false,
                include_eof: false,
            },
        };
        original.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[output]\nformat = \"json\"\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
        assert!(config.output.header);
        assert!(config.output.include_eof);
        assert!(!config.verbose);
    }

    #[test]
    fn test_invalid_format_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&config_path, "[output]\nformat = \"xml\"\n").unwrap();

        let err = Config::load_from_path(&config_path).unwrap_err();
        assert!(matches!(err, CscantError::Config(_)));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/cscant.toml"));
        assert!(matches!(result, Err(CscantError::Config(_))));
    }

    #[test]
    fn test_render_options_from_config() {
        let output = OutputConfig {
            format: OutputFormat::Json,
            header: false,
            include_eof: true,
        };
        let options = RenderOptions::from(&output);
        assert_eq!(options.format, OutputFormat::Json);
        assert!(!options.header);
        assert!(options.include_eof);
    }
}
