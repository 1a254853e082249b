//! Search command - Find ornaments in an existing catalog
//!
//! Matches the query against ornament names and descriptions as well as
//! the instrument and category they belong to.

use crate::output::{Output, OutputFormat, TableDisplay};
use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use sigimsae_core::reader::read_catalog;
use sigimsae_core::SearchFilter;
use std::path::Path;
use tabled::{builder::Builder, settings::Style};

/// One matching ornament, flattened for display.
#[derive(Debug, Serialize)]
pub struct SearchRow {
    pub id: u32,
    pub instrument: String,
    pub category: String,
    pub name: String,
    #[serde(rename = "imagePath")]
    pub image_path: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub results: Vec<SearchRow>,
}

impl TableDisplay for SearchResults {
    fn to_table(&self) -> String {
        if self.results.is_empty() {
            return format!("{} '{}'", "No ornaments match".dimmed(), self.query);
        }

        let mut builder = Builder::default();
        builder.push_record(["ID", "Instrument", "Category", "Name", "Image"]);
        for row in &self.results {
            builder.push_record([
                row.id.to_string(),
                row.instrument.clone(),
                row.category.clone(),
                row.name.clone(),
                row.image_path.clone(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::rounded());

        format!(
            "{}\n{} {} match(es)",
            table,
            "Found".dimmed(),
            self.results.len().to_string().cyan()
        )
    }
}

/// Run the search command.
pub fn run(query: &str, filter: &SearchFilter, path: &Path, format: OutputFormat) -> Result<()> {
    let catalog =
        read_catalog(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let results = catalog
        .search_filtered(query, filter)
        .into_iter()
        .map(|hit| SearchRow {
            id: hit.ornament.id,
            instrument: hit.instrument.to_string(),
            category: hit.category.to_string(),
            name: hit.ornament.name.clone(),
            image_path: hit.ornament.image_path.clone(),
        })
        .collect();

    Output::new(
        SearchResults {
            query: query.to_string(),
            results,
        },
        format,
    )
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_results_message() {
        colored::control::set_override(false);
        let results = SearchResults {
            query: "없음".to_string(),
            results: vec![],
        };
        assert_eq!(results.to_table(), "No ornaments match '없음'");
    }

    #[test]
    fn test_results_table() {
        colored::control::set_override(false);
        let results = SearchResults {
            query: "덩".to_string(),
            results: vec![SearchRow {
                id: 1,
                instrument: "장구".to_string(),
                category: "타법".to_string(),
                name: "덩(떵)".to_string(),
                image_path: "Resources/Ornaments/1_장구/1_타법/1_덩(떵).png".to_string(),
            }],
        };
        let table = results.to_table();
        assert!(table.contains("Instrument"));
        assert!(table.contains("덩(떵)"));
        assert!(table.contains("1 match(es)"));
    }
}
