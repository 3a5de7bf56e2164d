//! Core types and data structures for the Sygil generation engine
//!
//! This module defines the documents flowing through the library: the
//! versioned generator input, the per-player generator output, and the
//! options that control how output is rendered.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Schema version understood by this build of the generator
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Mapping from wordpack name to its ordered words
pub type WordpackTable = BTreeMap<String, Vec<String>>;

/// Versioned input document for a generation call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorInput {
    /// Selects the generation algorithm. Absent means the current version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_version: Option<u32>,

    /// Player configurations, in display order
    #[serde(default)]
    pub sets: Vec<SetSpec>,

    /// Words for every wordpack the sets refer to
    #[serde(default)]
    pub wordpacks: WordpackTable,
}

/// One configuration shared by one or more players
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetSpec {
    /// User-facing label override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Number of players this set produces
    pub players: u32,

    /// Independent sampling draws made for every player
    #[serde(default)]
    pub groups: Vec<GroupSpec>,
}

/// One independent draw of unique words from pooled wordpacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Number of unique words to draw
    pub num_words: usize,

    /// Wordpacks pooled together as candidates, in priority order
    #[serde(default)]
    pub wordpacks: Vec<String>,
}

/// Generated words for every player, in set-then-player order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneratorOutput {
    pub players: Vec<PlayerResult>,
}

/// The generated result for a single player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerResult {
    /// Display name computed from the owning set
    pub name: String,

    /// Sampled words in group-then-sample order
    pub words: Vec<WordChoice>,
}

/// A sampled word with its provenance
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordChoice {
    pub word: String,
    pub wordpack_origin: String,
    pub group_origin: usize,
}

/// Options controlling markdown rendering of generator output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Sort each player's words before rendering
    pub alphabetize: bool,

    /// Render lists inline, comma separated
    pub one_line: bool,

    /// Render one labeled sub-list per originating wordpack
    pub group_by_wordpack: bool,
}

impl GeneratorInput {
    /// Create a current-version input
    pub fn new(sets: Vec<SetSpec>, wordpacks: WordpackTable) -> Self {
        Self {
            schema_version: Some(CURRENT_SCHEMA_VERSION),
            sets,
            wordpacks,
        }
    }

    /// The schema version this input asks for, defaulting to the current one
    pub fn effective_schema_version(&self) -> u32 {
        self.schema_version.unwrap_or(CURRENT_SCHEMA_VERSION)
    }

    /// Names of every wordpack referenced by any group, deduplicated
    pub fn referenced_wordpacks(&self) -> Vec<&str> {
        referenced_wordpacks(&self.sets)
    }
}

/// Names of every wordpack referenced by the given sets, in first-seen order
pub fn referenced_wordpacks(sets: &[SetSpec]) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    for name in sets
        .iter()
        .flat_map(|set| set.groups.iter())
        .flat_map(|group| group.wordpacks.iter())
    {
        if !names.contains(&name.as_str()) {
            names.push(name);
        }
    }
    names
}

impl SetSpec {
    /// Create an unnamed set
    pub fn new(players: u32, groups: Vec<GroupSpec>) -> Self {
        Self {
            name: None,
            players,
            groups,
        }
    }

    /// Set the label override
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The label override, if present and non-empty
    pub fn explicit_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }
}

impl GroupSpec {
    pub fn new<I, S>(num_words: usize, wordpacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            num_words,
            wordpacks: wordpacks.into_iter().map(Into::into).collect(),
        }
    }
}

impl GeneratorOutput {
    pub fn new(players: Vec<PlayerResult>) -> Self {
        Self { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Total number of words across every player
    pub fn word_count(&self) -> usize {
        self.players.iter().map(|player| player.words.len()).sum()
    }
}

impl PlayerResult {
    /// The bare words, in stored order
    pub fn word_texts(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|choice| choice.word.as_str())
    }
}

impl From<Vec<PlayerResult>> for GeneratorOutput {
    fn from(players: Vec<PlayerResult>) -> Self {
        Self { players }
    }
}
