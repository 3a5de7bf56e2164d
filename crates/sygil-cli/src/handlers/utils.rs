//! Shared utilities for command handlers

use crate::error::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use sygil_core::{GeneratorInput, InMemoryPresetStore, Preset, WordpackLibrary};

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|s| s == "yaml" || s == "yml")
        .unwrap_or(false)
}

/// Load a JSON or YAML document, chosen by file extension
pub fn load_document<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Err(Error::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    if is_yaml(path) {
        serde_yaml::from_str(&content).map_err(|e| {
            tracing::debug!(path = %path.display(), error = %e, "YAML parse failed");
            Error::InvalidFormat {
                path: path.to_path_buf(),
                expected: "YAML".to_string(),
            }
        })
    } else {
        serde_json::from_str(&content).map_err(|e| {
            tracing::debug!(path = %path.display(), error = %e, "JSON parse failed");
            Error::InvalidFormat {
                path: path.to_path_buf(),
                expected: "JSON".to_string(),
            }
        })
    }
}

/// Save a document as YAML or pretty JSON, chosen by file extension
pub fn save_document<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let content = if is_yaml(path) {
        serde_yaml::to_string(value)?
    } else {
        serde_json::to_string_pretty(value)?
    };
    fs::write(path, content)?;
    Ok(())
}

/// Load every `*.txt` file in a directory as a default wordpack named by its stem
pub fn load_wordpack_dir(dir: &Path) -> Result<WordpackLibrary> {
    if !dir.is_dir() {
        return Err(Error::FileNotFound {
            path: dir.to_path_buf(),
        });
    }

    let mut library = WordpackLibrary::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|s| s.to_str()) != Some("txt") {
            continue;
        }
        let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
            tracing::warn!(path = %path.display(), "Skipping wordpack with non UTF-8 name");
            continue;
        };

        let raw = fs::read_to_string(&path)?;
        if let Err(e) = library.set_default(name, &raw) {
            tracing::warn!(path = %path.display(), error = %e, "Skipping wordpack");
        }
    }

    tracing::debug!(dir = %dir.display(), count = library.len(), "Loaded wordpacks");
    Ok(library)
}

/// Load a presets file (a list of presets) as shipped defaults
pub fn load_presets(path: &Path) -> Result<InMemoryPresetStore> {
    let presets: Vec<Preset> = load_document(path)?;
    Ok(InMemoryPresetStore::with_defaults(presets)?)
}

/// Add library words for referenced wordpacks the input does not carry
///
/// Returns the names that were filled in.
pub fn fill_missing_wordpacks(input: &mut GeneratorInput, library: &WordpackLibrary) -> Vec<String> {
    let missing: Vec<String> = input
        .referenced_wordpacks()
        .into_iter()
        .filter(|name| !input.wordpacks.contains_key(*name))
        .map(str::to_string)
        .collect();

    let mut filled = Vec::new();
    for name in missing {
        if let Some(words) = library.get(&name) {
            input.wordpacks.insert(name.clone(), words.to_vec());
            filled.push(name);
        }
    }
    filled
}
