//! Rendering tests over generated and hand-written output


use pretty_assertions::assert_eq;
use serde_json::json;
use sygil_core::{render, GeneratorOutput, RenderOptions, WordpackLibrary};
use test_support::assert_generation_succeeds;

#[test]
fn test_render_saved_output_document() {
    let output: GeneratorOutput = serde_json::from_value(json!([
        {"name": "Player 1", "words": [
            {"word": "b", "wordpack_origin": "Basic", "group_origin": 0},
            {"word": "a", "wordpack_origin": "Basic", "group_origin": 0}
        ]}
    ]))
    .unwrap();

    let options = RenderOptions {
        alphabetize: true,
        one_line: false,
        group_by_wordpack: false,
    };
    assert_eq!(render(&output, &options), "* `a`\n* `b`\n");
}

#[test]
fn test_render_generated_multi_player_grouped() {
    let mut library = WordpackLibrary::new();
    library.set("Basic", "Water\nHeavy\nWood\nHot\n===\nCold\nLight").unwrap();
    library.set("Colors", "Red\nBlue").unwrap();

    let preset: sygil_core::Preset = serde_json::from_value(json!({
        "name": "Grouped",
        "sets": [
            {"name": "Alice", "players": 1, "groups": [
                {"num_words": 2, "wordpacks": ["Colors"]},
                {"num_words": 6, "wordpacks": ["Basic+"]}
            ]},
            {"name": "Bob", "players": 1, "groups": [{"num_words": 1, "wordpacks": ["Colors"]}]}
        ],
        "render": {"alphabetize": true, "groupByWordpack": true}
    }))
    .unwrap();

    let output = assert_generation_succeeds(&preset.to_input(&library));
    let text = render(&output, &preset.render);

    let alice = "### Alice\n* Basic+:\n  * `Cold`\n  * `Heavy`\n  * `Hot`\n  * `Light`\n  * `Water`\n  * `Wood`\n* Colors:\n  * `Blue`\n  * `Red`\n";
    assert!(text.starts_with(alice), "unexpected rendering:\n{}", text);
    assert!(text[alice.len()..].starts_with("### Bob\n* Colors:\n  * `"));
    assert!(text.ends_with("`\n"));
}
