//! Wordpack parsing and the in-memory wordpack library
//!
//! A wordpack is written as plain text, one word per line. A line containing
//! only `===` splits the pack: the words above it form the base pack, and
//! the base plus the words below it form the extended pack. The extended
//! pack is addressed by the base name followed by `+`.

use crate::error::{Error, Result};
use crate::types::{referenced_wordpacks, SetSpec, WordpackTable};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Separator line between base and extended words
pub const EXTENDED_SEPARATOR: &str = "===";

/// Suffix addressing the extended variant of a wordpack
pub const EXTENDED_SUFFIX: char = '+';

/// Which variant of a wordpack a name addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WordpackKind {
    Base,
    Extended,
}

/// A wordpack parsed from its raw text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedWordpack {
    /// The text the pack was parsed from
    pub raw: String,
    pub base: Vec<String>,
    /// Base words followed by the words after the separator
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended: Option<Vec<String>>,
}

/// Parse raw wordpack text
pub fn parse_wordpack(raw: &str) -> ParsedWordpack {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    match lines.iter().position(|line| *line == EXTENDED_SEPARATOR) {
        Some(split) => {
            let base: Vec<String> = lines[..split].iter().map(|s| s.to_string()).collect();
            let extended = base
                .iter()
                .cloned()
                .chain(lines[split + 1..].iter().map(|s| s.to_string()))
                .collect();
            ParsedWordpack {
                raw: raw.to_string(),
                base,
                extended: Some(extended),
            }
        }
        None => ParsedWordpack {
            raw: raw.to_string(),
            base: lines.iter().map(|s| s.to_string()).collect(),
            extended: None,
        },
    }
}

/// Split a wordpack name into its base name and the variant it addresses
pub fn analyze_name(name: &str) -> (&str, WordpackKind) {
    match name.strip_suffix(EXTENDED_SUFFIX) {
        Some(base) => (base, WordpackKind::Extended),
        None => (name, WordpackKind::Base),
    }
}

impl ParsedWordpack {
    /// Words for the requested variant
    pub fn words(&self, kind: WordpackKind) -> Option<&[String]> {
        match kind {
            WordpackKind::Base => Some(&self.base),
            WordpackKind::Extended => self.extended.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct LibraryEntry {
    parsed: ParsedWordpack,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    default_raw: Option<String>,
}

/// Named wordpacks available to build generator inputs from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordpackLibrary {
    entries: BTreeMap<String, LibraryEntry>,
}

impl WordpackLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a wordpack from its raw text
    ///
    /// Names ending in `+` are reserved for extended variants and rejected.
    pub fn set(&mut self, name: impl Into<String>, raw: &str) -> Result<()> {
        let name = name.into();
        validate_name(&name)?;
        let parsed = parse_wordpack(raw);
        match self.entries.get_mut(&name) {
            Some(entry) => entry.parsed = parsed,
            None => {
                self.entries.insert(
                    name,
                    LibraryEntry {
                        parsed,
                        default_raw: None,
                    },
                );
            }
        }
        Ok(())
    }

    /// Add a wordpack and remember its text as the shipped default
    pub fn set_default(&mut self, name: impl Into<String>, raw: &str) -> Result<()> {
        let name = name.into();
        self.set(name.clone(), raw)?;
        if let Some(entry) = self.entries.get_mut(&name) {
            entry.default_raw = Some(raw.to_string());
        }
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Option<ParsedWordpack> {
        self.entries.remove(name).map(|entry| entry.parsed)
    }

    /// Words for a name, honoring the `+` suffix
    pub fn get(&self, name: &str) -> Option<&[String]> {
        let (base, kind) = analyze_name(name);
        self.entries.get(base)?.parsed.words(kind)
    }

    /// Words for a name, or an error naming the missing pack
    pub fn require(&self, name: &str) -> Result<&[String]> {
        self.get(name).ok_or_else(|| Error::Wordpack {
            name: name.to_string(),
            message: "not found in library".to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Raw text of the pack a name belongs to
    pub fn raw(&self, name: &str) -> Option<&str> {
        let (base, _) = analyze_name(name);
        self.entries.get(base).map(|entry| entry.parsed.raw.as_str())
    }

    pub fn default_raw(&self, name: &str) -> Option<&str> {
        let (base, _) = analyze_name(name);
        self.entries.get(base)?.default_raw.as_deref()
    }

    pub fn is_default(&self, name: &str) -> bool {
        self.default_raw(name).is_some()
    }

    /// Whether a shipped default has been edited since it was loaded
    pub fn is_default_modified(&self, name: &str) -> bool {
        match (self.default_raw(name), self.raw(name)) {
            (Some(default_raw), Some(raw)) => default_raw != raw,
            _ => false,
        }
    }

    pub fn default_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.default_raw.is_some())
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Every addressable name, extended variants directly after their base
    pub fn names(&self, include_extended: bool) -> Vec<String> {
        let mut names = Vec::new();
        for (name, entry) in &self.entries {
            names.push(name.clone());
            if include_extended && entry.parsed.extended.is_some() {
                names.push(format!("{}{}", name, EXTENDED_SUFFIX));
            }
        }
        names
    }

    /// The whole library as a generator wordpack table
    pub fn table(&self, include_extended: bool) -> WordpackTable {
        self.names(include_extended)
            .into_iter()
            .filter_map(|name| {
                let words = self.get(&name)?.to_vec();
                Some((name, words))
            })
            .collect()
    }

    /// Only the wordpacks the given sets refer to; unknown names are omitted
    pub fn table_for(&self, sets: &[SetSpec]) -> WordpackTable {
        referenced_wordpacks(sets)
            .into_iter()
            .filter_map(|name| Some((name.to_string(), self.get(name)?.to_vec())))
            .collect()
    }

    /// First of `name`, `name (2)`, `name (3)`, ... not already in the library
    pub fn next_available_name(&self, name: &str) -> String {
        let mut candidate = name.to_string();
        while self.entries.contains_key(&candidate) {
            candidate = match split_numbered(&candidate) {
                Some((stem, n)) => match n.checked_add(1) {
                    Some(next) => format!("{} ({})", stem, next),
                    None => format!("{} (2)", candidate),
                },
                None => format!("{} (2)", candidate),
            };
        }
        candidate
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_name(name: &str) -> Result<()> {
    let message = if name.is_empty() {
        "wordpack name cannot be empty".to_string()
    } else if name.ends_with(EXTENDED_SUFFIX) {
        format!("names ending in '{}' are reserved for extended wordpacks", EXTENDED_SUFFIX)
    } else {
        return Ok(());
    };
    Err(Error::Wordpack {
        name: name.to_string(),
        message,
    })
}

/// Split `"Name (3)"` into `("Name", 3)`
fn split_numbered(name: &str) -> Option<(&str, u32)> {
    let inner = name.strip_suffix(')')?;
    let open = inner.rfind(" (")?;
    let number = inner[open + 2..].parse().ok()?;
    Some((&inner[..open], number))
}
