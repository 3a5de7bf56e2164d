//! Markdown rendering of generator output
//!
//! Pure string building: every player becomes a block of markdown, with a
//! `###` header only when there is more than one player.

use crate::types::{GeneratorOutput, RenderOptions, WordChoice};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Render generator output as markdown text
pub fn render(output: &GeneratorOutput, options: &RenderOptions) -> String {
    let mut rendered = String::new();
    let show_headers = output.players.len() > 1;

    for player in &output.players {
        let mut words: Vec<&WordChoice> = player.words.iter().collect();
        if options.alphabetize {
            words.sort_by(|a, b| locale_compare(&a.word, &b.word));
        }

        if show_headers {
            rendered.push_str("### ");
            rendered.push_str(&player.name);
            rendered.push('\n');
        }

        if options.group_by_wordpack {
            let mut grouped: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
            for choice in &words {
                grouped
                    .entry(choice.wordpack_origin.as_str())
                    .or_default()
                    .push(choice.word.as_str());
            }

            let sections: Vec<String> = grouped
                .iter()
                .map(|(wordpack, words)| {
                    format!("* {}:\n{}", wordpack, indent(&render_list(words, options, true), "  "))
                })
                .collect();
            rendered.push_str(&sections.join("\n"));
        } else {
            let words: Vec<&str> = words.iter().map(|choice| choice.word.as_str()).collect();
            rendered.push_str(&render_list(&words, options, false));
        }

        rendered.push('\n');
    }

    rendered
}

/// Render a list of words, inline or one bullet per line
///
/// `nested` lists in one-line mode start with a bullet so they sit under
/// their wordpack header.
fn render_list(words: &[&str], options: &RenderOptions, nested: bool) -> String {
    if words.is_empty() {
        return String::new();
    }

    if options.one_line {
        let joined = words.iter().map(|word| code(word)).collect::<Vec<_>>().join(", ");
        if nested {
            format!("* {}", joined)
        } else {
            joined
        }
    } else {
        words
            .iter()
            .map(|word| format!("* {}", code(word)))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn code(word: &str) -> String {
    format!("`{}`", word)
}

/// Prefix every line of `text` with `prefix`
fn indent(text: &str, prefix: &str) -> String {
    text.split('\n')
        .map(|line| format!("{}{}", prefix, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Case-insensitive ordering with lowercase first on ties, approximating a
/// natural-language collation
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
