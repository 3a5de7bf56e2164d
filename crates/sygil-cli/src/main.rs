//! Sygil CLI - Command-line interface for unique word generation
//!
//! This is the main entry point for the Sygil CLI application, providing
//! commands for generating word lists from wordpacks and presets, rendering
//! saved results, and inspecting wordpack and preset collections.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;
#[cfg(test)]
mod test_support;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LoggingConfig};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Set up colored output
    control::set_override(cli.use_color());

    // Run the application
    let result = run(cli);

    match result {
        Ok(()) => {
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", error::format_error(&e, control::SHOULD_COLORIZE.should_colorize()));

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
fn run(cli: Cli) -> Result<()> {
    // Configuration is read before logging so it can supply the log settings
    let config = Config::load_with_file(cli.config.as_deref())?;

    if let Err(e) = init_logging(&cli, &config) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    execute(cli, &config)
}

#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn execute(cli: Cli, config: &Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let use_color = cli.use_color() && config.output.color;
    control::set_override(use_color);
    let mut output = OutputWriter::new(cli.output, use_color, cli.quiet, cli.verbosity_level());

    tracing::info!(
        command = ?cli.command,
        verbosity = cli.verbosity_level(),
        "Executing command"
    );

    match cli.command {
        Commands::Generate(args) => handlers::handle_generate(args, config, &mut output),
        Commands::Render(args) => handlers::handle_render(args, config, &mut output),
        Commands::Wordpacks(args) => handlers::handle_wordpacks(args, config, &mut output),
        Commands::Presets(args) => handlers::handle_presets(args, config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(cli: &Cli, config: &Config) -> Result<()> {
    let mut logging_config = LoggingConfig::from_verbosity(cli.verbosity_level());
    logging_config.merge_with_file(&config.logging, cli.verbosity_level());
    logging_config.merge_with_env();

    // If quiet mode, only log errors
    if cli.quiet {
        logging_config.level = "error".to_string();
        logging_config.console = false;
    }

    logging::init_logging(logging_config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["sygil", "-vv", "render", "out.json"]);
        assert_eq!(cli.verbosity_level(), 2);

        let cli = Cli::parse_from(["sygil", "--quiet", "wordpacks", "--dir", "packs"]);
        assert_eq!(cli.verbosity_level(), 0);
        assert!(matches!(cli.command, Commands::Wordpacks(_)));
    }

    #[test]
    fn test_output_format_flag() {
        let cli = Cli::parse_from(["sygil", "-o", "json-pretty", "presets"]);
        assert_eq!(cli.output, cli::OutputFormat::JsonPretty);
    }
}
