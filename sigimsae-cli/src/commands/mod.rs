//! Command implementations for the sigimsae CLI
//!
//! Each command module provides a `run` function that executes the command logic.

pub mod completions;
pub mod generate;
pub mod search;
pub mod show;

use colored::Colorize;
use sigimsae_core::CatalogStats;

/// Per-instrument, per-category ornament counts.
pub(crate) fn breakdown_lines(stats: &CatalogStats) -> Vec<String> {
    let mut lines = Vec::new();
    for instrument in &stats.breakdown {
        lines.push(String::new());
        lines.push(format!("{}:", instrument.name.bold()));
        for category in &instrument.categories {
            lines.push(format!("  - {}: {}", category.name, category.ornaments));
        }
    }
    lines
}

/// Instrument, category and ornament totals.
pub(crate) fn total_lines(stats: &CatalogStats) -> Vec<String> {
    vec![
        format!("  {:<12} {}", "Instruments:".cyan(), stats.instruments),
        format!("  {:<12} {}", "Categories:".cyan(), stats.categories),
        format!("  {:<12} {}", "Ornaments:".cyan(), stats.ornaments),
    ]
}
