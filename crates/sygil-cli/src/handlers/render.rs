//! Render command handler

use super::utils::load_document;
use crate::cli::RenderArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use sygil_core::GeneratorOutput;

/// Handle the render command
pub fn handle_render(args: RenderArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let _timer = Timer::with_details("render", &args.output_file.display().to_string());
    let generated: GeneratorOutput = load_document(&args.output_file)?;
    tracing::debug!(
        path = %args.output_file.display(),
        players = generated.len(),
        "Rendering saved output"
    );

    let options = args.render.merge_into(config.render);
    output.generator_output(&generated, &options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{OutputFormat, RenderFlags};
    use crate::error::Error;
    use std::path::PathBuf;

    #[test]
    fn test_missing_output_file() {
        let args = RenderArgs {
            output_file: PathBuf::from("/nonexistent/output.json"),
            render: RenderFlags::default(),
        };
        let mut writer =
            OutputWriter::with_writer(OutputFormat::Human, false, false, 0, Box::new(std::io::sink()));

        let err = handle_render(args, &Config::default(), &mut writer).unwrap_err();
        assert!(matches!(err, Error::FileNotFound { .. }));
    }
}
