//! Sygil Core - Unique word generation from wordpacks
//!
//! This crate turns a versioned generator input (players, sets, groups and
//! the wordpacks they draw from) into per-player word lists, and renders
//! those lists as markdown.
//!
//! # Main Components
//!
//! - **Generator**: samples unique words per player, aggregating every
//!   per-group shortfall into one error
//! - **Renderer**: formats generator output as markdown text
//! - **Wordpacks**: parsing of raw wordpack text and an in-memory library
//! - **Presets**: saved configurations behind a store trait
//!
//! # Example
//!
//! ```
//! use sygil_core::{generate, render, GeneratorInput, GroupSpec, RenderOptions, SetSpec};
//!
//! let mut wordpacks = sygil_core::WordpackTable::new();
//! wordpacks.insert("Basic".to_string(), vec!["Water".into(), "Heavy".into(), "Wood".into(), "Hot".into()]);
//!
//! let input = GeneratorInput::new(
//!     vec![SetSpec::new(2, vec![GroupSpec::new(2, ["Basic"])])],
//!     wordpacks,
//! );
//! let output = generate(&input).unwrap();
//! assert_eq!(output.players.len(), 2);
//!
//! let text = render(&output, &RenderOptions::default());
//! assert!(text.starts_with("### Player 1\n"));
//! ```

pub mod error;
pub mod generator;
pub mod preset;
pub mod render;
pub mod types;
pub mod wordpack;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use error::{Error, GenerateError, GenerationErrors, NotEnoughCandidates, Result};
pub use generator::{generate, generate_with_rng};
pub use preset::{InMemoryPresetStore, Preset, PresetStore};
pub use render::render;
pub use types::{
    GeneratorInput, GeneratorOutput, GroupSpec, PlayerResult, RenderOptions, SetSpec, WordChoice,
    WordpackTable, CURRENT_SCHEMA_VERSION,
};
pub use wordpack::{analyze_name, parse_wordpack, ParsedWordpack, WordpackKind, WordpackLibrary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
