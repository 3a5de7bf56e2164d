//! Generate command handler

use super::utils::{fill_missing_wordpacks, load_document, load_presets, load_wordpack_dir, save_document};
use crate::cli::GenerateArgs;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sygil_core::{
    generate_with_rng, GenerateError, GeneratorInput, GeneratorOutput, PresetStore, RenderOptions,
    WordpackLibrary,
};
use tracing::instrument;

/// Handle the generate command
#[instrument(skip(args, config, output), fields(input = ?args.input, preset = ?args.preset))]
pub fn handle_generate(args: GenerateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let timer = Timer::new("generate");

    let library = match config.wordpacks_dir(args.wordpacks.as_deref()) {
        Some(dir) => load_wordpack_dir(dir)?,
        None => WordpackLibrary::new(),
    };

    let (mut input, preset_render) = load_input(&args, config, &library)?;
    let filled = fill_missing_wordpacks(&mut input, &library);
    if !filled.is_empty() {
        output.debug(&format!("Filled wordpacks from library: {}", filled.join(", ")))?;
    }

    let options = args
        .render
        .merge_into(merge_render(config.render, preset_render));

    let result = match args.seed {
        Some(seed) => generate_with_rng(&input, &mut StdRng::seed_from_u64(seed)),
        None => generate_with_rng(&input, &mut rand::thread_rng()),
    };
    output.debug(&format!("Generated in {:?}", timer.elapsed()))?;

    finish(result, &args, &options, output)
}

/// The input document, plus the render options of the preset it came from
fn load_input(
    args: &GenerateArgs,
    config: &Config,
    library: &WordpackLibrary,
) -> Result<(GeneratorInput, Option<RenderOptions>)> {
    if let Some(path) = &args.input {
        log_source("input file", &path.display().to_string());
        return Ok((load_document(path)?, None));
    }

    let name = args
        .preset
        .as_deref()
        .ok_or_else(|| Error::invalid_args("either an input file or --preset is required"))?;
    let presets_file = config
        .presets_file(args.presets.as_deref())
        .ok_or_else(|| Error::config("--preset needs a presets file (--presets or presets_file)"))?;

    let store = load_presets(presets_file)?;
    let preset = store.get(name).ok_or_else(|| Error::PresetNotFound {
        name: name.to_string(),
    })?;
    log_source("preset", name);

    Ok((preset.to_input(library), Some(preset.render)))
}

fn log_source(kind: &str, name: &str) {
    tracing::info!(source = kind, name = name, "Loaded generator input");
}

fn merge_render(defaults: RenderOptions, preset: Option<RenderOptions>) -> RenderOptions {
    match preset {
        Some(preset) => RenderOptions {
            alphabetize: defaults.alphabetize || preset.alphabetize,
            one_line: defaults.one_line || preset.one_line,
            group_by_wordpack: defaults.group_by_wordpack || preset.group_by_wordpack,
        },
        None => defaults,
    }
}

fn finish(
    result: std::result::Result<GeneratorOutput, GenerateError>,
    args: &GenerateArgs,
    options: &RenderOptions,
    output: &mut OutputWriter,
) -> Result<()> {
    match result {
        Ok(generated) => {
            if let Some(path) = &args.save_to {
                save_document(path, &generated)?;
                tracing::info!(path = %path.display(), "Saved generator output");
            }
            output.generator_output(&generated, options)?;
            Ok(())
        }
        Err(GenerateError::Generation(errors)) => {
            tracing::warn!(count = errors.len(), "Generation fell short");
            output.generation_errors(&errors)?;
            // The listing above is the report; the error only summarizes it
            Err(Error::Shortfall {
                groups: errors.failed_groups(),
            })
        }
        Err(err) => Err(err.into()),
    }
}
