//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable), with dedicated
//! support for generator output and bundled generation errors.

use crate::cli::OutputFormat;
use crate::error::Result;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use sygil_core::{GenerationErrors, GeneratorOutput, NotEnoughCandidates, RenderOptions};
use tracing::trace;

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format generator output; human output is the rendered markdown
    fn format_generator_output(
        &self,
        output: &GeneratorOutput,
        options: &RenderOptions,
    ) -> Result<String>;

    /// Format every shortfall of a failed generation
    fn format_generation_errors(&self, errors: &GenerationErrors) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            // Structured values have no markdown form
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn format_generator_output(
        &self,
        output: &GeneratorOutput,
        options: &RenderOptions,
    ) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(sygil_core::render(output, options)),
            _ => self.format(output),
        }
    }

    fn format_generation_errors(&self, errors: &GenerationErrors) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_generation_errors_human(errors)),
            _ => self.format(errors),
        }
    }
}

/// One line per distinct shortfall, with 1-based set and group numbers
///
/// Players of one set usually fail the same group identically, so equal
/// entries are collapsed and labeled with how many players they hit.
fn format_generation_errors_human(errors: &GenerationErrors) -> String {
    let mut distinct: Vec<(&NotEnoughCandidates, usize)> = Vec::new();
    for error in errors.iter() {
        match distinct.iter_mut().find(|(seen, _)| *seen == error) {
            Some((_, players)) => *players += 1,
            None => distinct.push((error, 1)),
        }
    }

    let groups = errors.failed_groups();
    let mut lines = Vec::with_capacity(distinct.len() + 1);
    lines.push(format!(
        "{} group{} could not be filled:",
        groups,
        if groups == 1 { "" } else { "s" }
    ));

    for (error, players) in distinct {
        let hit = if players > 1 {
            format!(" ({} players)", players)
        } else {
            String::new()
        };
        lines.push(format!(
            "  Set {}, group {}{}: {} ({})",
            error.set_index + 1,
            error.group_index + 1,
            hit,
            error.message(),
            error.validation_message()
        ));
    }

    lines.join("\n")
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    verbose: u8,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool, verbose: u8) -> Self {
        Self::with_writer(format, use_color, quiet, verbose, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        verbose: u8,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            verbose,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Outputting data");

        if self.format == OutputFormat::Human {
            self.writeln(&formatted)
        } else {
            self.write(&formatted)
        }
    }

    /// Write generator output, rendered as markdown in human mode
    pub fn generator_output(
        &mut self,
        output: &GeneratorOutput,
        options: &RenderOptions,
    ) -> Result<()> {
        let formatted = self.format.format_generator_output(output, options)?;
        // Rendered markdown already ends each player block with a newline
        self.write(&formatted)
    }

    /// Write the shortfalls of a failed generation
    pub fn generation_errors(&mut self, errors: &GenerationErrors) -> Result<()> {
        let formatted = self.format.format_generation_errors(errors)?;
        if self.format == OutputFormat::Human && self.use_color {
            self.writeln(&formatted.red().to_string())
        } else {
            self.writeln(&formatted)
        }
    }

    /// Write an aligned table in human mode
    pub fn table(&mut self, headers: &[&str], rows: &[Vec<String>]) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header = pad_row(headers.iter().copied(), &widths);
        if self.use_color {
            self.writeln(&header.bold().to_string())?;
        } else {
            self.writeln(&header)?;
        }
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        self.writeln(&rule.join("  "))?;

        for row in rows {
            let line = pad_row(row.iter().map(String::as_str), &widths);
            self.writeln(&line)?;
        }

        Ok(())
    }

    /// Write debug information if verbose mode is enabled
    pub fn debug(&mut self, message: &str) -> Result<()> {
        if self.verbose == 0 || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "DEBUG:".dimmed(), message.dimmed()))
        } else {
            self.writeln(&format!("DEBUG: {}", message))
        }
    }
}

fn pad_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    padded.join("  ").trim_end().to_string()
}
