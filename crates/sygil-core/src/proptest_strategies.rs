//! Property-based testing strategies for generating test data
//!
//! This module provides proptest strategies for generating random
//! but valid generator inputs and outputs for property testing.

#![cfg(test)]

use crate::types::*;
use proptest::collection::{btree_map, vec};
use proptest::prelude::*;

/// Strategy for generating short words from a small alphabet, so that
/// wordpacks overlap often
pub fn word_strategy() -> impl Strategy<Value = String> {
    "[a-e]{1,2}"
}

/// Strategy for generating a wordpack table with up to four packs
pub fn wordpack_table_strategy() -> impl Strategy<Value = WordpackTable> {
    btree_map("[A-D]", vec(word_strategy(), 0..12), 1..4)
}

/// Strategy for generating groups that draw from packs named `A`..`D`
pub fn group_strategy() -> impl Strategy<Value = GroupSpec> {
    (0usize..6, vec("[A-D]", 0..3)).prop_map(|(num_words, wordpacks)| GroupSpec {
        num_words,
        wordpacks,
    })
}

/// Strategy for generating sets
pub fn set_strategy() -> impl Strategy<Value = SetSpec> {
    (
        proptest::option::of("[A-Z][a-z]{0,6}"),
        0u32..4,
        vec(group_strategy(), 0..4),
    )
        .prop_map(|(name, players, groups)| SetSpec { name, players, groups })
}

/// Strategy for generating current-version generator inputs
pub fn generator_input_strategy() -> impl Strategy<Value = GeneratorInput> {
    (vec(set_strategy(), 0..4), wordpack_table_strategy())
        .prop_map(|(sets, wordpacks)| GeneratorInput::new(sets, wordpacks))
}

/// Strategy for generating render options
pub fn render_options_strategy() -> impl Strategy<Value = RenderOptions> {
    (any::<bool>(), any::<bool>(), any::<bool>()).prop_map(|(alphabetize, one_line, group_by_wordpack)| {
        RenderOptions {
            alphabetize,
            one_line,
            group_by_wordpack,
        }
    })
}

/// Strategy for generating renderable output
pub fn generator_output_strategy() -> impl Strategy<Value = GeneratorOutput> {
    let choice = (word_strategy(), "[A-D]", 0usize..3).prop_map(|(word, wordpack_origin, group_origin)| {
        WordChoice {
            word,
            wordpack_origin,
            group_origin,
        }
    });
    let player = ("Player [1-9]", vec(choice, 0..6)).prop_map(|(name, words)| PlayerResult { name, words });
    vec(player, 0..4).prop_map(GeneratorOutput::new)
}

mod properties {
    use super::*;
    use crate::generator::{candidate_pool, generate_with_rng};
    use crate::render::render;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    proptest! {
        #[test]
        fn prop_player_words_are_unique(input in generator_input_strategy(), seed in any::<u64>()) {
            let players = match generate_with_rng(&input, &mut StdRng::seed_from_u64(seed)) {
                Ok(output) => output.players,
                Err(err) => err.shortfalls().unwrap().partial_output.players.clone(),
            };
            for player in players {
                let unique: HashSet<&str> = player.word_texts().collect();
                prop_assert_eq!(unique.len(), player.words.len());
            }
        }

        #[test]
        fn prop_successful_groups_contribute_exact_counts(input in generator_input_strategy(), seed in any::<u64>()) {
            let (players, failed) = match generate_with_rng(&input, &mut StdRng::seed_from_u64(seed)) {
                Ok(output) => (output.players, Vec::new()),
                Err(err) => {
                    let shortfalls = err.shortfalls().unwrap();
                    (shortfalls.partial_output.players.clone(), shortfalls.errors.clone())
                }
            };

            let mut players = players.into_iter();
            for (set_index, set) in input.sets.iter().enumerate() {
                for _ in 0..set.players {
                    let player = players.next().unwrap();
                    for (group_index, group) in set.groups.iter().enumerate() {
                        let drawn = player.words.iter().filter(|c| c.group_origin == group_index).count();
                        let group_failed = failed
                            .iter()
                            .any(|e| e.set_index == set_index && e.group_index == group_index);
                        if group_failed {
                            prop_assert_eq!(drawn, 0);
                        } else {
                            prop_assert_eq!(drawn, group.num_words);
                        }
                    }
                }
            }
            prop_assert!(players.next().is_none());
        }

        #[test]
        fn prop_first_group_shortfall_matches_pool_size(input in generator_input_strategy(), seed in any::<u64>()) {
            let result = generate_with_rng(&input, &mut StdRng::seed_from_u64(seed));
            for (set_index, set) in input.sets.iter().enumerate() {
                let Some(group) = set.groups.first() else { continue };
                if set.players == 0 {
                    continue;
                }
                let pool = candidate_pool(&input.wordpacks, &group.wordpacks, 0, &HashSet::new());
                let reported = result
                    .as_ref()
                    .err()
                    .and_then(|e| e.shortfalls())
                    .and_then(|s| s.for_group(set_index, 0));
                if pool.len() < group.num_words {
                    let reported = reported.unwrap();
                    prop_assert_eq!(reported.available, pool.len());
                    prop_assert_eq!(reported.requested, group.num_words);
                } else {
                    prop_assert!(reported.is_none());
                }
            }
        }

        #[test]
        fn prop_render_is_deterministic(output in generator_output_strategy(), options in render_options_strategy()) {
            prop_assert_eq!(render(&output, &options), render(&output, &options));
        }

        #[test]
        fn prop_render_mentions_every_word(output in generator_output_strategy(), options in render_options_strategy()) {
            let text = render(&output, &options);
            for player in &output.players {
                for word in player.word_texts() {
                    let needle = format!("`{}`", word);
                    prop_assert!(text.contains(&needle));
                }
            }
        }
    }
}
