//! Presets command handler

use super::utils::load_presets;
use crate::cli::{OutputFormat, PresetsArgs};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::OutputWriter;
use sygil_core::PresetStore;

/// Handle the presets command
pub fn handle_presets(args: PresetsArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let path = config
        .presets_file(args.presets.as_deref())
        .ok_or_else(|| Error::config("no presets file (use --presets or presets_file)"))?;
    let store = load_presets(path)?;
    let presets = store.all();

    if output.format() != OutputFormat::Human {
        return output.data(&presets);
    }

    if presets.is_empty() {
        return output.warning(&format!("No presets found in {}", path.display()));
    }

    output.section("Presets")?;
    let rows: Vec<Vec<String>> = presets
        .iter()
        .map(|preset| {
            let players: u32 = preset.sets.iter().map(|set| set.players).sum();
            vec![
                preset.name.clone(),
                preset.sets.len().to_string(),
                players.to_string(),
            ]
        })
        .collect();
    output.table(&["Name", "Sets", "Players"], &rows)
}
