//! Error types for sigimsae-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while scanning, writing or reading a catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The ornament base directory does not exist.
    #[error("Ornament directory not found: {}", path.display())]
    MissingRootDirectory {
        /// Directory that was expected to hold the instrument folders.
        path: PathBuf,
    },

    /// The scan completed but produced no instrument with ornaments.
    #[error("No ornament data found under {}", path.display())]
    EmptyResult {
        /// Directory that was scanned.
        path: PathBuf,
    },

    /// Writing the XML document failed.
    #[error("Failed to write catalog to {}: {source}", path.display())]
    OutputWrite {
        /// Destination file.
        path: PathBuf,
        /// Underlying filesystem error.
        #[source]
        source: std::io::Error,
    },

    /// A catalog document could not be interpreted.
    #[error("Invalid catalog document: {message}")]
    Parse {
        /// Description of what was wrong.
        message: String,
    },

    /// IO error while listing directories or reading files.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// XML writer error.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CatalogError::MissingRootDirectory {
            path: PathBuf::from("Resources/Ornaments"),
        };
        assert!(err.to_string().contains("Resources/Ornaments"));

        let err = CatalogError::OutputWrite {
            path: PathBuf::from("out/ornaments.xml"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = err.to_string();
        assert!(message.contains("out/ornaments.xml"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: CatalogError = io.into();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
