//! Sigimsae core - ornament catalog scanning and XML generation.
//!
//! Turns a directory tree of ornament images into the `ornaments.xml`
//! catalog used by the notation front end.
//!
//! # Pipeline
//!
//! 1. [`scanner::scan_ornaments`] walks `instrument/category/image.png`
//!    and builds a [`Catalog`] with sequential IDs.
//! 2. [`exporter::xml::write_catalog`] serializes it as indented XML.
//!
//! [`reader::read_catalog`] loads a generated file back for inspection.
//!
//! # Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! let result = sigimsae_core::generate(
//!     Path::new("Resources/Ornaments"),
//!     Path::new("Resources/ornaments.xml"),
//! )?;
//! println!("{} instruments", result.catalog.len());
//! # Ok::<(), sigimsae_core::CatalogError>(())
//! ```

pub mod error;
pub mod exporter;
pub mod hangul;
pub mod names;
pub mod reader;
pub mod scanner;
pub mod types;

use std::path::Path;

pub use error::{CatalogError, Result};
pub use exporter::xml::DEFAULT_OUTPUT_PATH;
pub use scanner::{ScanResult, DEFAULT_BASE_PATH};
pub use types::{Catalog, CatalogStats, Category, Instrument, Ornament, SearchFilter};

/// Scan `base` and write the catalog to `output`.
///
/// Nothing is written when the base directory is missing or holds no
/// ornaments; those cases return [`CatalogError::MissingRootDirectory`] and
/// [`CatalogError::EmptyResult`].
pub fn generate(base: &Path, output: &Path) -> Result<ScanResult> {
    let result = scanner::scan_ornaments(base)?;

    if result.root_missing {
        return Err(CatalogError::MissingRootDirectory {
            path: base.to_path_buf(),
        });
    }
    if result.is_empty() {
        return Err(CatalogError::EmptyResult {
            path: base.to_path_buf(),
        });
    }

    exporter::xml::write_catalog(&result.catalog, output)?;
    Ok(result)
}

/// Get the version of sigimsae-core.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
