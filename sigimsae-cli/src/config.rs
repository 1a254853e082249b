//! Configuration loading from `.sigimsaerc.toml`.
//!
//! The file is optional. Missing sections fall back to the built-in
//! defaults, and command-line flags override anything set here.
//!
//! # Example Configuration
//!
//! ```toml
//! [paths]
//! base = "Resources/Ornaments"
//! output = "Resources/ornaments.xml"
//!
//! [output]
//! format = "table"
//! color = true
//! ```

use serde::Deserialize;
use sigimsae_core::{DEFAULT_BASE_PATH, DEFAULT_OUTPUT_PATH};
use std::path::{Path, PathBuf};

/// Name of the config file looked up in the working directory.
pub const CONFIG_FILE: &str = ".sigimsaerc.toml";

/// Root configuration structure loaded from `.sigimsaerc.toml`.
#[derive(Debug, Deserialize, Default)]
pub struct SigimsaeConfig {
    /// Input and output locations.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Console output preferences.
    #[serde(default)]
    pub output: OutputSettings,
}

/// Where to scan and where to write.
#[derive(Debug, Deserialize, Default)]
pub struct PathsConfig {
    /// Directory holding the instrument folders.
    ///
    /// Default: `Resources/Ornaments`
    #[serde(default)]
    pub base: Option<String>,

    /// Destination of the generated XML.
    ///
    /// Default: `Resources/ornaments.xml`
    #[serde(default)]
    pub output: Option<String>,
}

/// Console output preferences.
///
/// Command-line flags (e.g., `--format json`) override these settings.
#[derive(Debug, Deserialize, Default)]
pub struct OutputSettings {
    /// Valid values: `table`, `json`
    #[serde(default)]
    pub format: Option<String>,

    /// Whether to use colored output.
    #[serde(default)]
    pub color: Option<bool>,
}

impl SigimsaeConfig {
    /// Load configuration from `.sigimsaerc.toml` in the given directory.
    ///
    /// If the config file doesn't exist or can't be parsed, returns defaults.
    /// Parse errors are logged as warnings but don't cause failures.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        if config_path.exists() {
            match std::fs::read_to_string(&config_path) {
                Ok(content) => match toml::from_str(&content) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Failed to parse {}: {}", CONFIG_FILE, e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read {}: {}", CONFIG_FILE, e);
                }
            }
        }
        Self::default()
    }

    /// Ornament directory: flag, then config, then default.
    pub fn base_path(&self, flag: Option<&str>) -> PathBuf {
        PathBuf::from(
            flag.or(self.paths.base.as_deref())
                .unwrap_or(DEFAULT_BASE_PATH),
        )
    }

    /// Catalog file: flag, then config, then default.
    pub fn output_path(&self, flag: Option<&str>) -> PathBuf {
        PathBuf::from(
            flag.or(self.paths.output.as_deref())
                .unwrap_or(DEFAULT_OUTPUT_PATH),
        )
    }

    pub fn default_format(&self) -> Option<&str> {
        self.output.format.as_deref()
    }

    pub fn use_color(&self) -> Option<bool> {
        self.output.color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = SigimsaeConfig::default();
        assert_eq!(config.base_path(None), PathBuf::from("Resources/Ornaments"));
        assert_eq!(
            config.output_path(None),
            PathBuf::from("Resources/ornaments.xml")
        );
        assert!(config.default_format().is_none());
        assert!(config.use_color().is_none());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[paths]
base = "assets/ornaments"
output = "build/catalog.xml"

[output]
format = "json"
color = false
"#;
        let config: SigimsaeConfig = toml::from_str(toml_content).unwrap();
        assert_eq!(config.base_path(None), PathBuf::from("assets/ornaments"));
        assert_eq!(config.output_path(None), PathBuf::from("build/catalog.xml"));
        assert_eq!(config.default_format(), Some("json"));
        assert_eq!(config.use_color(), Some(false));
    }

    #[test]
    fn test_flags_override_config() {
        let config: SigimsaeConfig = toml::from_str("[paths]\nbase = \"from-config\"\n").unwrap();
        assert_eq!(
            config.base_path(Some("from-flag")),
            PathBuf::from("from-flag")
        );
        assert_eq!(config.base_path(None), PathBuf::from("from-config"));
    }

    #[test]
    fn test_load_malformed_falls_back() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[paths\nbase = ").unwrap();

        let config = SigimsaeConfig::load(dir.path());
        assert_eq!(config.base_path(None), PathBuf::from(DEFAULT_BASE_PATH));
    }

    #[test]
    fn test_load_from_directory() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE),
            "[paths]\noutput = \"out.xml\"\n",
        )
        .unwrap();

        let config = SigimsaeConfig::load(dir.path());
        assert_eq!(config.output_path(None), PathBuf::from("out.xml"));
    }
}
