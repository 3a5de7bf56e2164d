//! Word generation
//!
//! Maps a versioned [`GeneratorInput`] to a [`GeneratorOutput`]. Every set
//! produces its players in order; every player draws its groups in order,
//! and a word handed to a player is never offered to that player again.

use crate::error::{GenerateError, GenerationErrors, NotEnoughCandidates};
use crate::types::{GeneratorInput, GeneratorOutput, PlayerResult, SetSpec, WordChoice, WordpackTable};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Generate words for every player using the thread-local RNG
pub fn generate(input: &GeneratorInput) -> Result<GeneratorOutput, GenerateError> {
    generate_with_rng(input, &mut rand::thread_rng())
}

/// Generate words for every player using the supplied RNG
pub fn generate_with_rng<R>(input: &GeneratorInput, rng: &mut R) -> Result<GeneratorOutput, GenerateError>
where
    R: Rng + ?Sized,
{
    match input.effective_schema_version() {
        1 => generate_v1(input, rng),
        version => {
            warn!(version, "Unsupported generator schema version");
            Err(GenerateError::UnsupportedSchemaVersion { version })
        }
    }
}

fn generate_v1<R>(input: &GeneratorInput, rng: &mut R) -> Result<GeneratorOutput, GenerateError>
where
    R: Rng + ?Sized,
{
    let set_count = input.sets.len();
    let mut players = Vec::new();
    let mut errors = Vec::new();

    for (set_index, set) in input.sets.iter().enumerate() {
        for player_index in 0..set.players {
            let name = player_name(set, set_index, set_count, player_index);
            let mut player = PlayerResult {
                name,
                words: Vec::new(),
            };
            let mut assigned: HashSet<String> = HashSet::new();

            for (group_index, group) in set.groups.iter().enumerate() {
                let pool = candidate_pool(&input.wordpacks, &group.wordpacks, group_index, &assigned);

                if pool.len() < group.num_words {
                    debug!(
                        set_index,
                        group_index,
                        requested = group.num_words,
                        available = pool.len(),
                        "Not enough candidates"
                    );
                    errors.push(NotEnoughCandidates {
                        set_index,
                        group_index,
                        requested: group.num_words,
                        available: pool.len(),
                        wordpacks: group.wordpacks.clone(),
                    });
                    continue;
                }

                let drawn: Vec<WordChoice> = pool
                    .choose_multiple(rng, group.num_words)
                    .cloned()
                    .collect();
                debug!(
                    player = %player.name,
                    group_index,
                    pool_size = pool.len(),
                    drawn = drawn.len(),
                    "Sampled group"
                );

                assigned.extend(drawn.iter().map(|choice| choice.word.clone()));
                player.words.extend(drawn);
            }

            players.push(player);
        }
    }

    let output = GeneratorOutput::new(players);
    info!(
        players = output.len(),
        words = output.word_count(),
        errors = errors.len(),
        "Generation finished"
    );

    if errors.is_empty() {
        Ok(output)
    } else {
        Err(GenerationErrors::new(errors, output).into())
    }
}

/// Display name for one player of a set
///
/// Named sets use their name. Otherwise a lone set numbers its players and
/// multiple sets number themselves. Players that share a base name across a
/// multi-set input get a 0-based ` [i]` suffix.
pub fn player_name(set: &SetSpec, set_index: usize, set_count: usize, player_index: u32) -> String {
    let mut name = match set.explicit_name() {
        Some(explicit) => explicit.to_string(),
        None if set_count == 1 => format!("Player {}", player_index + 1),
        None => format!("Player {}", set_index + 1),
    };
    if set_count > 1 && set.players > 1 {
        name.push_str(&format!(" [{}]", player_index));
    }
    name
}

/// Deduplicated candidates for one group, in wordpack-list order
///
/// The first wordpack to contribute a word owns it. Words already given to
/// the player by an earlier group are skipped. Unknown wordpack names
/// contribute nothing.
pub fn candidate_pool(
    table: &WordpackTable,
    wordpacks: &[String],
    group_index: usize,
    assigned: &HashSet<String>,
) -> Vec<WordChoice> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut pool = Vec::new();

    for wordpack in wordpacks {
        let Some(words) = table.get(wordpack) else {
            warn!(wordpack = %wordpack, "Wordpack not found in input table");
            continue;
        };
        for word in words {
            if assigned.contains(word) || !seen.insert(word.as_str()) {
                continue;
            }
            pool.push(WordChoice {
                word: word.clone(),
                wordpack_origin: wordpack.clone(),
                group_origin: group_index,
            });
        }
    }

    pool
}
