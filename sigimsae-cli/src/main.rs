//! Sigimsae CLI - Build the ornament catalog from an image tree
//!
//! Scans `Resources/Ornaments/<instrument>/<category>/<ornament>.png` and
//! writes `Resources/ornaments.xml` for the notation front end.

use clap::{CommandFactory, Parser, Subcommand};
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::*;
use config::SigimsaeConfig;
use output::OutputFormat;
use sigimsae_core::SearchFilter;

/// Ornament catalog generator.
///
/// Walks the ornament image folders and writes an XML catalog with
/// sequential IDs for every instrument, category and ornament.
#[derive(Parser)]
#[command(name = "sigimsae")]
#[command(author, version)]
#[command(about = "Generate the sigimsae ornament XML catalog from an image tree")]
#[command(propagate_version = true)]
#[command(after_help = "Examples:
  sigimsae                      Scan Resources/Ornaments, write Resources/ornaments.xml
  sigimsae generate --base art  Scan a different folder
  sigimsae show                 Summarize the generated catalog
  sigimsae search 덩            Find ornaments by name
  sigimsae search ㄷ -i 장구     Initial-consonant search within one instrument")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Output format (overrides config default)
    #[arg(long, global = true, value_enum)]
    format: Option<OutputFormat>,
}

#[derive(Subcommand)]
enum Commands {
    /// Scan the ornament folders and write the XML catalog (default)
    #[command(visible_alias = "gen")]
    Generate {
        /// Directory holding the instrument folders
        #[arg(short, long)]
        base: Option<String>,

        /// Catalog file to write
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Summarize an existing catalog
    Show {
        /// Catalog file (defaults to the configured output path)
        path: Option<String>,

        /// Print the whole catalog tree as JSON
        #[arg(long)]
        full: bool,
    },

    /// Search ornaments in an existing catalog
    Search {
        /// Text to match against names, descriptions, instruments and categories
        query: String,

        /// Catalog file (defaults to the configured output path)
        path: Option<String>,

        /// Only ornaments of these instruments (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        instrument: Vec<String>,

        /// Only ornaments of these categories (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        category: Vec<String>,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: completions::Shell,

        /// Show installation instructions instead of generating completions
        #[arg(long)]
        instructions: bool,
    },
}

/// Scan progress is logged by the core at info, so it stays visible by default.
fn default_filter(verbose: bool, quiet: bool) -> &'static str {
    if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn,sigimsae_core=info"
    }
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = default_filter(verbose, quiet);

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = SigimsaeConfig::load(Path::new("."));

    // CLI flag > config default > Table
    let format = cli.format.unwrap_or_else(|| {
        config
            .default_format()
            .and_then(|f| f.parse().ok())
            .unwrap_or(OutputFormat::Table)
    });

    if let Some(use_color) = config.use_color() {
        colored::control::set_override(use_color);
    }

    let command = cli.command.unwrap_or(Commands::Generate {
        base: None,
        output: None,
    });

    match command {
        Commands::Generate { base, output } => generate::run(
            &config.base_path(base.as_deref()),
            &config.output_path(output.as_deref()),
            format,
        ),
        Commands::Show { path, full } => {
            show::run(&config.output_path(path.as_deref()), full, format)
        }
        Commands::Search {
            query,
            path,
            instrument,
            category,
        } => {
            let filter = SearchFilter {
                instruments: instrument,
                categories: category,
            };
            search::run(&query, &filter, &config.output_path(path.as_deref()), format)
        }
        Commands::Completions {
            shell,
            instructions,
        } => {
            if instructions {
                completions::run_instructions(shell, format)
            } else {
                let mut cmd = Cli::command();
                completions::generate_completions_with_cmd(shell, &mut cmd);
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_shows_core_progress() {
        assert_eq!(default_filter(false, false), "warn,sigimsae_core=info");
        assert_eq!(default_filter(true, false), "debug");
        assert_eq!(default_filter(false, true), "error");
    }

    #[test]
    fn test_search_filter_flags_split_on_commas() {
        let cli = Cli::parse_from([
            "sigimsae",
            "search",
            "ㄷ",
            "--instrument",
            "장구,가야금",
            "-c",
            "타법",
        ]);
        match cli.command {
            Some(Commands::Search {
                query,
                instrument,
                category,
                ..
            }) => {
                assert_eq!(query, "ㄷ");
                assert_eq!(instrument, vec!["장구", "가야금"]);
                assert_eq!(category, vec!["타법"]);
            }
            _ => panic!("expected search command"),
        }
    }
}
