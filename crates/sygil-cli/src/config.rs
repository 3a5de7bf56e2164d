//! Configuration management for the CLI
//!
//! This module handles loading configuration from:
//! - Default values
//! - Configuration files (YAML/JSON/TOML)
//! - Command-line arguments, which take precedence

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use sygil_core::RenderOptions;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory of `.txt` wordpacks
    pub wordpacks_dir: Option<PathBuf>,

    /// Presets file (JSON or YAML list of presets)
    pub presets_file: Option<PathBuf>,

    /// Default rendering options
    pub render: RenderOptions,

    /// Output settings
    pub output: OutputConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Use colored output by default
    pub color: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: Option<String>,

    /// Log format (compact, full, json)
    pub format: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;

        let config = match path.extension().and_then(|s| s.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            Some("toml") => toml::from_str(&content)?,
            _ => serde_json::from_str(&content)?,
        };

        Ok(config)
    }

    /// Load configuration from default locations
    pub fn load() -> Result<Self> {
        for path in Self::default_config_paths() {
            if path.exists() {
                match Self::from_file(&path) {
                    Ok(config) => {
                        tracing::debug!(path = %path.display(), "Loaded configuration");
                        return Ok(config);
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                    }
                }
            }
        }

        Ok(Self::default())
    }

    /// Load configuration from a specific file or default locations
    pub fn load_with_file(file: Option<&Path>) -> Result<Self> {
        if let Some(path) = file {
            Self::from_file(path).map_err(|e| Error::config(format!("{}: {}", path.display(), e)))
        } else {
            Self::load()
        }
    }

    /// Get default configuration file paths to check
    fn default_config_paths() -> Vec<PathBuf> {
        let mut paths = vec![
            PathBuf::from(".sygil.yaml"),
            PathBuf::from(".sygil.json"),
            PathBuf::from(".sygil.toml"),
            PathBuf::from("sygil.yaml"),
            PathBuf::from("sygil.json"),
        ];

        if let Some(config_dir) = dirs::config_dir() {
            let sygil_dir = config_dir.join("sygil");
            paths.push(sygil_dir.join("config.yaml"));
            paths.push(sygil_dir.join("config.json"));
            paths.push(sygil_dir.join("config.toml"));
        }

        if let Some(home_dir) = dirs::home_dir() {
            paths.push(home_dir.join(".sygil.yaml"));
            paths.push(home_dir.join(".sygil.json"));
        }

        paths
    }

    /// Wordpack directory, command line first
    pub fn wordpacks_dir<'a>(&'a self, cli: Option<&'a Path>) -> Option<&'a Path> {
        cli.or(self.wordpacks_dir.as_deref())
    }

    /// Presets file, command line first
    pub fn presets_file<'a>(&'a self, cli: Option<&'a Path>) -> Option<&'a Path> {
        cli.or(self.presets_file.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_yaml_config_is_loaded() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(
            file,
            "wordpacks_dir: packs\nrender:\n  alphabetize: true\n  groupByWordpack: true\nlogging:\n  level: debug"
        )
        .unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.wordpacks_dir.as_deref(), Some(Path::new("packs")));
        assert!(config.render.alphabetize);
        assert!(config.render.group_by_wordpack);
        assert!(!config.render.one_line);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert!(config.output.color);
    }

    #[test]
    fn test_toml_config_is_loaded() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "presets_file = \"presets.json\"\n\n[render]\noneLine = true").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.presets_file.as_deref(), Some(Path::new("presets.json")));
        assert!(config.render.one_line);
    }

    #[test]
    fn test_cli_paths_take_precedence() {
        let config = Config {
            wordpacks_dir: Some(PathBuf::from("configured")),
            ..Config::default()
        };
        assert_eq!(config.wordpacks_dir(None), Some(Path::new("configured")));
        assert_eq!(
            config.wordpacks_dir(Some(Path::new("flag"))),
            Some(Path::new("flag"))
        );
        assert_eq!(config.presets_file(None), None);
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let err = Config::load_with_file(Some(Path::new("/nonexistent/sygil.yaml"))).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
