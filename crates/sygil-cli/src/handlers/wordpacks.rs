//! Wordpacks command handler

use super::utils::load_wordpack_dir;
use crate::cli::{OutputFormat, WordpacksArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use serde::Serialize;
use sygil_core::WordpackLibrary;

/// A listed wordpack
#[derive(Debug, Serialize)]
struct WordpackSummary {
    name: String,
    words: usize,
    default: bool,
    modified: bool,
}

/// Handle the wordpacks command
pub fn handle_wordpacks(args: WordpacksArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let dir = config
        .wordpacks_dir(args.dir.as_deref())
        .ok_or_else(|| Error::config("no wordpack directory (use --dir or wordpacks_dir)"))?;
    let library = load_wordpack_dir(dir)?;
    let summaries = summarize(&library, args.extended);

    if output.format() != OutputFormat::Human {
        return output.data(&summaries);
    }

    if summaries.is_empty() {
        return output.warning(&format!("No wordpacks found in {}", dir.display()));
    }

    output.section(&format!("Wordpacks in {}", dir.display()))?;
    let rows: Vec<Vec<String>> = summaries
        .iter()
        .map(|s| {
            let status = match (s.default, s.modified) {
                (true, true) => "default (modified)",
                (true, false) => "default",
                _ => "",
            };
            vec![s.name.clone(), s.words.to_string(), status.to_string()]
        })
        .collect();
    output.table(&["Name", "Words", "Status"], &rows)
}

fn summarize(library: &WordpackLibrary, include_extended: bool) -> Vec<WordpackSummary> {
    library
        .names(include_extended)
        .into_iter()
        .map(|name| WordpackSummary {
            words: library.get(&name).map_or(0, <[String]>::len),
            default: library.is_default(&name),
            modified: library.is_default_modified(&name),
            name,
        })
        .collect()
}
