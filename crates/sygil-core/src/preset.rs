//! Saved generator configurations
//!
//! Presets are owned by a [`PresetStore`] supplied by the caller; the
//! generator itself never reads or writes one.

use crate::error::{Error, Result};
use crate::types::{GeneratorInput, RenderOptions, SetSpec};
use crate::wordpack::WordpackLibrary;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A named generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    #[serde(default)]
    pub sets: Vec<SetSpec>,
    #[serde(default)]
    pub render: RenderOptions,
}

impl Preset {
    pub fn new(name: impl Into<String>, sets: Vec<SetSpec>) -> Self {
        Self {
            name: name.into(),
            sets,
            render: RenderOptions::default(),
        }
    }

    /// Build a current-version input carrying only the wordpacks it uses
    pub fn to_input(&self, library: &WordpackLibrary) -> GeneratorInput {
        GeneratorInput::new(self.sets.clone(), library.table_for(&self.sets))
    }
}

/// Storage for presets, with shipped defaults that cannot be changed
pub trait PresetStore {
    fn get(&self, name: &str) -> Option<Preset>;

    /// Insert or replace a user preset
    fn set(&mut self, preset: Preset) -> Result<()>;

    /// Insert a preset and mark it as a shipped default
    fn set_default(&mut self, preset: Preset) -> Result<()>;

    fn remove(&mut self, name: &str) -> Result<()>;

    fn all(&self) -> Vec<Preset>;

    fn default_names(&self) -> Vec<String>;

    fn is_default(&self, name: &str) -> bool {
        self.default_names().iter().any(|n| n == name)
    }
}

/// A [`PresetStore`] held entirely in memory
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InMemoryPresetStore {
    presets: BTreeMap<String, Preset>,
    #[serde(default)]
    defaults: BTreeSet<String>,
}

impl InMemoryPresetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load every preset as a shipped default
    pub fn with_defaults(presets: impl IntoIterator<Item = Preset>) -> Result<Self> {
        let mut store = Self::new();
        for preset in presets {
            store.set_default(preset)?;
        }
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

impl PresetStore for InMemoryPresetStore {
    fn get(&self, name: &str) -> Option<Preset> {
        self.presets.get(name).cloned()
    }

    fn set(&mut self, preset: Preset) -> Result<()> {
        if preset.name.is_empty() {
            return Err(Error::Preset {
                message: "Preset must have a name".to_string(),
                preset: None,
            });
        }
        if self.defaults.contains(&preset.name) {
            return Err(Error::Preset {
                message: format!("Cannot overwrite default preset \"{}\"", preset.name),
                preset: Some(preset.name),
            });
        }
        self.presets.insert(preset.name.clone(), preset);
        Ok(())
    }

    fn set_default(&mut self, preset: Preset) -> Result<()> {
        let name = preset.name.clone();
        self.set(preset)?;
        self.defaults.insert(name);
        Ok(())
    }

    fn remove(&mut self, name: &str) -> Result<()> {
        if self.defaults.contains(name) {
            return Err(Error::Preset {
                message: format!("Cannot delete default preset \"{}\"", name),
                preset: Some(name.to_string()),
            });
        }
        self.presets.remove(name);
        Ok(())
    }

    fn all(&self) -> Vec<Preset> {
        self.presets.values().cloned().collect()
    }

    fn default_names(&self) -> Vec<String> {
        self.defaults.iter().cloned().collect()
    }

    fn is_default(&self, name: &str) -> bool {
        self.defaults.contains(name)
    }
}
