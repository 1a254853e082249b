//! Generate command - Scan the ornament tree and write `ornaments.xml`
//!
//! Scan, stop if nothing was found, write the XML, then report totals and
//! the per-instrument breakdown.

use crate::commands::{breakdown_lines, total_lines};
use crate::output::{Output, OutputFormat, TableDisplay};
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use sigimsae_core::{CatalogError, CatalogStats};
use std::path::Path;

/// Summary of a successful generation.
#[derive(Debug, Serialize)]
pub struct GenerateSummary {
    pub base: String,
    pub output: String,
    pub stats: CatalogStats,
    pub skipped_count: usize,
    pub duration_ms: f64,
}

impl TableDisplay for GenerateSummary {
    fn to_table(&self) -> String {
        let mut lines = vec![
            format!("{} {}", "Catalog written:".green().bold(), self.output),
            String::new(),
        ];
        lines.extend(total_lines(&self.stats));
        lines.extend(breakdown_lines(&self.stats));
        lines.push(format!(
            "\n{}",
            format!(
                "({} skipped, {:.1} ms)",
                self.skipped_count, self.duration_ms
            )
            .dimmed()
        ));
        lines.join("\n")
    }
}

/// Run the generate command.
pub fn run(base: &Path, output: &Path, format: OutputFormat) -> Result<()> {
    tracing::info!(base = %base.display(), output = %output.display(), "Generating catalog");

    let result = match sigimsae_core::generate(base, output) {
        Ok(result) => result,
        Err(err @ CatalogError::MissingRootDirectory { .. })
        | Err(err @ CatalogError::EmptyResult { .. }) => {
            return Err(err).context("No ornament data found; nothing was written");
        }
        Err(err) => {
            return Err(err)
                .with_context(|| format!("Failed to generate {}", output.display()));
        }
    };

    let summary = GenerateSummary {
        base: base.display().to_string(),
        output: output.display().to_string(),
        stats: result.catalog.stats(),
        skipped_count: result.skipped_count,
        duration_ms: result.duration_ms,
    };
    Output::new(summary, format).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sigimsae_core::types::{CategoryCount, InstrumentBreakdown};

    fn summary() -> GenerateSummary {
        GenerateSummary {
            base: "Resources/Ornaments".to_string(),
            output: "Resources/ornaments.xml".to_string(),
            stats: CatalogStats {
                instruments: 1,
                categories: 1,
                ornaments: 3,
                breakdown: vec![InstrumentBreakdown {
                    name: "장구".to_string(),
                    categories: vec![CategoryCount {
                        name: "타법".to_string(),
                        ornaments: 3,
                    }],
                }],
            },
            skipped_count: 0,
            duration_ms: 1.5,
        }
    }

    #[test]
    fn test_summary_table() {
        colored::control::set_override(false);
        let table = summary().to_table();
        assert!(table.contains("Catalog written: Resources/ornaments.xml"));
        assert!(table.contains("Ornaments:"));
        assert!(table.contains("장구:"));
        assert!(table.contains("  - 타법: 3"));
    }

    #[test]
    fn test_summary_json() {
        let json = Output::new(summary(), OutputFormat::Json).render_to_string();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["stats"]["ornaments"], 3);
        assert_eq!(value["stats"]["breakdown"][0]["name"], "장구");
    }
}
