//! Output formatting for the sigimsae CLI.
//!
//! Every command result can be rendered as a human-readable table or as
//! JSON for scripts.

use clap::ValueEnum;
use serde::Serialize;
use std::str::FromStr;

mod json;

pub use self::json::JsonOutput;

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable format (default)
    #[default]
    Table,
    /// JSON format for machine consumption
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: '{}'", s)),
        }
    }
}

/// Types that have a human-readable rendering.
pub trait TableDisplay: Serialize {
    fn to_table(&self) -> String;
}

/// Result wrapper that picks the rendering from the output format.
pub struct Output<T> {
    data: T,
    format: OutputFormat,
}

impl<T: TableDisplay> Output<T> {
    pub fn new(data: T, format: OutputFormat) -> Self {
        Self { data, format }
    }

    /// Get the rendered string without printing
    pub fn render_to_string(&self) -> String {
        match self.format {
            OutputFormat::Table => self.data.to_table(),
            OutputFormat::Json => JsonOutput::format(&self.data),
        }
    }

    /// Render the output to stdout
    pub fn render(&self) -> anyhow::Result<()> {
        println!("{}", self.render_to_string());
        Ok(())
    }
}
