//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Error from sygil-core outside of generation
    #[error("Core error: {0}")]
    Core(#[from] sygil_core::Error),

    /// Generation failed
    #[error("{0}")]
    Generate(#[from] sygil_core::GenerateError),

    /// Some groups could not be filled; the shortfalls were already reported
    #[error("Generation failed: {groups} group{} could not be filled", if *groups == 1 { "" } else { "s" })]
    Shortfall { groups: usize },

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Invalid file format
    #[error("Invalid file format for {}: expected {} format", path.display(), expected)]
    InvalidFormat { path: PathBuf, expected: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument combination
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    /// Preset not found
    #[error("Preset '{}' not found", name)]
    PresetNotFound { name: String },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an invalid arguments error
    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::InvalidArgs(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::Core(_) => 2,
            Self::Generate(_) | Self::Shortfall { .. } => 3,
            Self::FileNotFound { .. } => 4,
            Self::InvalidFormat { .. } => 5,
            Self::Config(_) => 6,
            Self::InvalidArgs(_) => 7,
            Self::PresetNotFound { .. } => 8,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Toml(_) => 14,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::InvalidArgs(_))
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sygil_core::GenerateError;

    #[test]
    fn test_exit_codes_are_distinct_for_generation() {
        let err: Error = GenerateError::UnsupportedSchemaVersion { version: 4 }.into();
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "Unsupported generator schema version: 4");
    }

    #[test]
    fn test_shortfall_summary_is_one_line() {
        let err = Error::Shortfall { groups: 1 };
        assert_eq!(err.exit_code(), 3);
        assert_eq!(err.to_string(), "Generation failed: 1 group could not be filled");
        assert_eq!(
            Error::Shortfall { groups: 3 }.to_string(),
            "Generation failed: 3 groups could not be filled"
        );
    }

    #[test]
    fn test_format_error_without_color() {
        let err = Error::PresetNotFound {
            name: "Quick".to_string(),
        };
        assert_eq!(format_error(&err, false), "Error: Preset 'Quick' not found");
        assert!(!err.should_show_help());
        assert!(Error::invalid_args("x").should_show_help());
    }
}
