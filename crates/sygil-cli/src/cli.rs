//! Command-line interface argument parsing and definitions
//!
//! This module defines the CLI structure using clap's derive API,
//! providing a type-safe and well-documented command interface.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::PathBuf;
use sygil_core::RenderOptions;

/// Sygil CLI - Generate unique word lists from wordpacks
///
/// Draws unique words for every player of a configuration and renders
/// them as markdown.
#[derive(Parser, Debug)]
#[command(
    name = "sygil",
    version,
    author,
    about,
    long_about = None,
    propagate_version = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Enable verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all non-essential output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "SYGIL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format for results
    #[arg(short, long, value_enum, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate words from an input document or a preset
    Generate(GenerateArgs),

    /// Render a previously saved generator output
    Render(RenderArgs),

    /// List the wordpacks in a directory
    Wordpacks(WordpacksArgs),

    /// List the presets in a presets file
    Presets(PresetsArgs),

    /// Generate shell completions for the specified shell
    Completions(CompletionsArgs),
}

/// Flags controlling markdown rendering
///
/// Each option has a `--no-` form; whichever comes last wins, and either
/// one overrides the configured default.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct RenderFlags {
    /// Sort each player's words alphabetically
    #[arg(long, overrides_with = "no_alphabetize")]
    pub alphabetize: bool,

    /// Keep each player's words in generation order
    #[arg(long, overrides_with = "alphabetize")]
    pub no_alphabetize: bool,

    /// Put each player's words on a single line
    #[arg(long, overrides_with = "no_one_line")]
    pub one_line: bool,

    /// Put each word on its own line
    #[arg(long, overrides_with = "one_line")]
    pub no_one_line: bool,

    /// Group each player's words under their wordpack
    #[arg(long, overrides_with = "no_group_by_wordpack")]
    pub group_by_wordpack: bool,

    /// Do not group words by wordpack
    #[arg(long, overrides_with = "group_by_wordpack")]
    pub no_group_by_wordpack: bool,
}

/// Arguments for the generate command
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Path to a generator input document (JSON or YAML)
    #[arg(value_name = "INPUT", required_unless_present = "preset", conflicts_with = "preset")]
    pub input: Option<PathBuf>,

    /// Name of a preset to generate from instead of an input document
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Presets file (JSON or YAML list of presets)
    #[arg(long, value_name = "FILE")]
    pub presets: Option<PathBuf>,

    /// Directory of `.txt` wordpacks used to fill missing wordpacks
    #[arg(short, long, value_name = "DIR")]
    pub wordpacks: Option<PathBuf>,

    /// Seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub render: RenderFlags,

    /// Save the generator output (JSON or YAML) to a file
    #[arg(long = "save-to", value_name = "OUTPUT_FILE")]
    pub save_to: Option<PathBuf>,
}

/// Arguments for the render command
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Path to a saved generator output (JSON or YAML)
    #[arg(value_name = "OUTPUT_FILE")]
    pub output_file: PathBuf,

    #[command(flatten)]
    pub render: RenderFlags,
}

/// Arguments for the wordpacks command
#[derive(Parser, Debug)]
pub struct WordpacksArgs {
    /// Directory of `.txt` wordpacks
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Also list extended (`+`) variants
    #[arg(long)]
    pub extended: bool,
}

/// Arguments for the presets command
#[derive(Parser, Debug)]
pub struct PresetsArgs {
    /// Presets file (JSON or YAML list of presets)
    #[arg(long, value_name = "FILE")]
    pub presets: Option<PathBuf>,
}

/// Arguments for generating shell completions
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

/// Output format options
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered markdown and human-readable messages
    Human,
    /// JSON output
    Json,
    /// YAML output
    Yaml,
    /// Pretty-printed JSON output
    JsonPretty,
}

/// Supported shells for completion generation
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    PowerShell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the effective verbosity level (considering quiet flag)
    pub fn verbosity_level(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose
        }
    }

    /// Check if colored output should be used
    pub fn use_color(&self) -> bool {
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl RenderFlags {
    /// Apply the flags given on the command line over `defaults`
    pub fn merge_into(self, defaults: RenderOptions) -> RenderOptions {
        RenderOptions {
            alphabetize: toggle(defaults.alphabetize, self.alphabetize, self.no_alphabetize),
            one_line: toggle(defaults.one_line, self.one_line, self.no_one_line),
            group_by_wordpack: toggle(
                defaults.group_by_wordpack,
                self.group_by_wordpack,
                self.no_group_by_wordpack,
            ),
        }
    }
}

fn toggle(default: bool, on: bool, off: bool) -> bool {
    match (on, off) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

impl Shell {
    /// Convert to clap_complete shell type
    pub fn to_clap_shell(self) -> clap_complete::Shell {
        match self {
            Shell::Bash => clap_complete::Shell::Bash,
            Shell::Zsh => clap_complete::Shell::Zsh,
            Shell::Fish => clap_complete::Shell::Fish,
            Shell::PowerShell => clap_complete::Shell::PowerShell,
            Shell::Elvish => clap_complete::Shell::Elvish,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_generate_requires_input_or_preset() {
        assert!(Cli::try_parse_from(["sygil", "generate"]).is_err());
        assert!(Cli::try_parse_from(["sygil", "generate", "input.json", "--preset", "Quick"]).is_err());

        let cli = Cli::try_parse_from(["sygil", "generate", "--preset", "Quick", "--seed", "9"]).unwrap();
        match cli.command {
            Commands::Generate(args) => {
                assert_eq!(args.preset.as_deref(), Some("Quick"));
                assert_eq!(args.seed, Some(9));
                assert!(args.input.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_render_flags_merge_with_defaults() {
        let cli = Cli::try_parse_from(["sygil", "render", "out.json", "--one-line"]).unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render command");
        };
        let defaults = RenderOptions {
            alphabetize: true,
            ..RenderOptions::default()
        };
        let merged = args.render.merge_into(defaults);
        assert!(merged.alphabetize);
        assert!(merged.one_line);
        assert!(!merged.group_by_wordpack);
    }

    #[test]
    fn test_negated_render_flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "sygil",
            "render",
            "out.json",
            "--no-alphabetize",
            "--group-by-wordpack",
            "--no-group-by-wordpack",
        ])
        .unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render command");
        };
        let defaults = RenderOptions {
            alphabetize: true,
            one_line: true,
            group_by_wordpack: false,
        };

        let merged = args.render.merge_into(defaults);
        assert!(!merged.alphabetize);
        assert!(merged.one_line);
        assert!(!merged.group_by_wordpack);
    }

    #[test]
    fn test_last_render_flag_wins() {
        let cli = Cli::try_parse_from(["sygil", "render", "out.json", "--no-one-line", "--one-line"])
            .unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render command");
        };
        assert!(args.render.merge_into(RenderOptions::default()).one_line);
    }

    #[test]
    fn test_verbosity_level() {
        let cli = Cli {
            verbose: 2,
            quiet: false,
            config: None,
            output: OutputFormat::Human,
            no_color: false,
            command: Commands::Wordpacks(WordpacksArgs {
                dir: None,
                extended: false,
            }),
        };
        assert_eq!(cli.verbosity_level(), 2);

        let quiet_cli = Cli {
            verbose: 2,
            quiet: true,
            ..cli
        };
        assert_eq!(quiet_cli.verbosity_level(), 0);
    }
}
