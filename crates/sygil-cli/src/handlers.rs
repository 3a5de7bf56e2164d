//! Command handlers for CLI subcommands
//!
//! This module contains the implementation logic for each CLI subcommand.

mod completions;
mod generate;
mod presets;
mod render;
mod utils;
mod wordpacks;

pub use completions::handle_completions;
pub use generate::handle_generate;
pub use presets::handle_presets;
pub use render::handle_render;
pub use wordpacks::handle_wordpacks;
