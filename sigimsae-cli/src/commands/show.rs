//! Show command - Summarize an existing catalog file

use crate::commands::{breakdown_lines, total_lines};
use crate::output::{Output, OutputFormat, TableDisplay};
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use sigimsae_core::exporter::json;
use sigimsae_core::reader::read_catalog;
use sigimsae_core::CatalogStats;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct CatalogOverview {
    pub path: String,
    pub stats: CatalogStats,
}

impl TableDisplay for CatalogOverview {
    fn to_table(&self) -> String {
        let mut lines = vec![format!("{} {}", "Catalog:".cyan().bold(), self.path)];
        lines.extend(total_lines(&self.stats));
        lines.extend(breakdown_lines(&self.stats));
        lines.join("\n")
    }
}

/// Run the show command.
///
/// With `full`, the whole catalog tree is printed as JSON instead of the
/// summary.
pub fn run(path: &Path, full: bool, format: OutputFormat) -> Result<()> {
    let catalog =
        read_catalog(path).with_context(|| format!("Failed to read {}", path.display()))?;

    if full {
        println!("{}", json::export(&catalog, true)?);
        return Ok(());
    }

    let overview = CatalogOverview {
        path: path.display().to_string(),
        stats: catalog.stats(),
    };
    Output::new(overview, format).render()
}
