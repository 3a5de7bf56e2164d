//! Error types for the Sygil core library
//!
//! Generation failures are modeled as a typed sum: an unsupported schema
//! version is fatal to the call, while per-group shortfalls are collected
//! into a single [`GenerationErrors`] bundle so a caller can report every
//! one of them at once.

use crate::types::GeneratorOutput;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use thiserror::Error;

/// Main error type for Sygil operations outside of generation
#[derive(Error, Debug)]
pub enum Error {
    /// Preset store rule violations
    #[error("Preset error: {message}")]
    Preset {
        message: String,
        preset: Option<String>,
    },

    /// Wordpack lookups that cannot be satisfied
    #[error("Wordpack error: {name} - {message}")]
    Wordpack { name: String, message: String },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a single `generate` call
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GenerateError {
    /// The input asked for a schema version this build cannot interpret
    #[error("Unsupported generator schema version: {version}")]
    UnsupportedSchemaVersion { version: u32 },

    /// One or more groups could not supply enough unique words
    #[error(transparent)]
    Generation(GenerationErrors),
}

/// A group whose deduplicated candidate pool was smaller than requested
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotEnoughCandidates {
    pub set_index: usize,
    pub group_index: usize,
    pub requested: usize,
    pub available: usize,
    pub wordpacks: Vec<String>,
}

/// Every shortfall encountered during one generation call
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationErrors {
    /// Shortfalls in the order they were encountered
    pub errors: Vec<NotEnoughCandidates>,

    /// Words drawn by the groups that succeeded
    pub partial_output: GeneratorOutput,
}

impl NotEnoughCandidates {
    /// Full sentence describing the shortfall
    pub fn message(&self) -> String {
        format!(
            "Cannot generate {} unique words from wordpacks {}. \
             Please reduce the number of words or add more wordpacks.",
            self.requested,
            format_wordpack_list(&self.wordpacks)
        )
    }

    /// Short message suited to an inline form-field hint
    pub fn validation_message(&self) -> String {
        if self.wordpacks.is_empty() {
            "No wordpacks selected.".to_string()
        } else {
            format!(
                "These wordpacks only have {} word{}.",
                self.available,
                if self.available == 1 { "" } else { "s" }
            )
        }
    }
}

impl fmt::Display for NotEnoughCandidates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl GenerationErrors {
    pub fn new(errors: Vec<NotEnoughCandidates>, partial_output: GeneratorOutput) -> Self {
        Self {
            errors,
            partial_output,
        }
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NotEnoughCandidates> {
        self.errors.iter()
    }

    /// Number of distinct (set, group) pairs that fell short
    ///
    /// A group shared by several players is counted once.
    pub fn failed_groups(&self) -> usize {
        self.errors
            .iter()
            .map(|e| (e.set_index, e.group_index))
            .collect::<BTreeSet<_>>()
            .len()
    }

    /// The shortfall recorded for a specific set and group, if any
    pub fn for_group(&self, set_index: usize, group_index: usize) -> Option<&NotEnoughCandidates> {
        self.errors
            .iter()
            .find(|e| e.set_index == set_index && e.group_index == group_index)
    }
}

impl fmt::Display for GenerationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [] => write!(f, "No errors occurred while generating"),
            [single] => write!(f, "{}", single),
            many => {
                write!(f, "Multiple errors occurred while generating:")?;
                for error in many {
                    write!(f, "\n\n{}", error)?;
                }
                Ok(())
            }
        }
    }
}

impl GenerateError {
    /// The bundled shortfalls, when this is a per-group failure
    pub fn shortfalls(&self) -> Option<&GenerationErrors> {
        match self {
            GenerateError::Generation(errors) => Some(errors),
            GenerateError::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<GenerationErrors> for GenerateError {
    fn from(errors: GenerationErrors) -> Self {
        GenerateError::Generation(errors)
    }
}

/// Render wordpack names as a JSON-style list, e.g. `["Basic","Basic+"]`
fn format_wordpack_list(wordpacks: &[String]) -> String {
    let quoted: Vec<String> = wordpacks.iter().map(|name| format!("{:?}", name)).collect();
    format!("[{}]", quoted.join(","))
}
