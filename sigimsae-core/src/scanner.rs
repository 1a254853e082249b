//! Ornament directory scanner.
//!
//! Walks the fixed three-level layout
//!
//! ```text
//! <base>/<ordinal>_<Instrument>/<ordinal>_<Category>/<ordinal>_<Ornament>.png
//! ```
//!
//! and builds the [`Catalog`] tree. Every level is listed and sorted by name
//! before it is processed, so IDs follow lexicographic order regardless of
//! what the platform's directory listing returns.
//!
//! Categories without images and instruments without such categories are
//! dropped. IDs are only consumed by entities that are kept, so they stay
//! consecutive.

use crate::error::Result;
use crate::names::{extract_name, extract_name_from_filename};
use crate::types::{Catalog, Category, IdCounters, Instrument, Ornament};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Default location of the ornament image tree.
pub const DEFAULT_BASE_PATH: &str = "Resources/Ornaments";

/// Result of scanning an ornament directory.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ScanResult {
    /// Instruments that hold at least one ornament.
    pub catalog: Catalog,

    /// Entries ignored because they were files where a directory was
    /// expected, or not `.png` images.
    pub skipped_count: usize,

    /// Set when the base directory does not exist.
    pub root_missing: bool,

    /// Time taken for the scan in milliseconds.
    pub duration_ms: f64,
}

impl ScanResult {
    /// Check if no ornament data was found.
    pub fn is_empty(&self) -> bool {
        self.catalog.is_empty()
    }
}

/// A directory entry paired with its name, listed in sorted order.
struct Entry {
    name: String,
    path: PathBuf,
}

/// List a directory sorted by entry name.
fn sorted_entries(dir: &Path) -> Result<Vec<Entry>> {
    let mut entries = fs::read_dir(dir)?
        .map(|entry| {
            entry.map(|e| Entry {
                name: e.file_name().to_string_lossy().into_owned(),
                path: e.path(),
            })
        })
        .collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

fn is_png(filename: &str) -> bool {
    filename.to_lowercase().ends_with(".png")
}

/// Relative image path with `/` separators on every platform.
fn image_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Walk state shared across the whole traversal.
struct Walk {
    ids: IdCounters,
    skipped: usize,
}

impl Walk {
    fn scan_instrument(&mut self, entry: &Entry) -> Result<Option<Instrument>> {
        let name = extract_name(&entry.name);
        tracing::info!(dir = %entry.name, name = %name, "Scanning instrument");

        let mut categories = Vec::new();
        for category_entry in sorted_entries(&entry.path)? {
            if !category_entry.path.is_dir() {
                tracing::debug!(entry = %category_entry.name, "Skipping non-directory");
                self.skipped += 1;
                continue;
            }
            if let Some(category) = self.scan_category(&category_entry)? {
                categories.push(category);
            }
        }

        if categories.is_empty() {
            tracing::debug!(dir = %entry.name, "Instrument has no ornaments, dropping");
            return Ok(None);
        }
        Ok(Some(Instrument::new(
            self.ids.next_instrument(),
            name,
            categories,
        )))
    }

    fn scan_category(&mut self, entry: &Entry) -> Result<Option<Category>> {
        let name = extract_name(&entry.name);
        tracing::info!(dir = %entry.name, name = %name, "  Scanning category");

        let mut ornaments = Vec::new();
        for file in sorted_entries(&entry.path)? {
            if !is_png(&file.name) {
                tracing::debug!(entry = %file.name, "Skipping non-png entry");
                self.skipped += 1;
                continue;
            }
            let ornament_name = extract_name_from_filename(&file.name);
            tracing::info!(file = %file.name, name = %ornament_name, "    Ornament");
            ornaments.push(Ornament::new(
                self.ids.next_ornament(),
                ornament_name,
                file.name.clone(),
                image_path(&file.path),
            ));
        }

        if ornaments.is_empty() {
            tracing::debug!(dir = %entry.name, "Category has no ornaments, dropping");
            return Ok(None);
        }
        Ok(Some(Category::new(self.ids.next_category(), name, ornaments)))
    }
}

/// Scan an ornament directory into a catalog.
///
/// A missing base directory is not an error: a warning is logged and an
/// empty result with `root_missing` set is returned. Errors listing a
/// directory that does exist are propagated.
///
/// # Arguments
///
/// * `base` - Directory holding the instrument folders
///
/// # Returns
///
/// ScanResult containing the retained instruments and statistics.
pub fn scan_ornaments(base: &Path) -> Result<ScanResult> {
    let start = Instant::now();

    if !base.exists() {
        tracing::warn!(path = %base.display(), "Ornament directory does not exist");
        return Ok(ScanResult {
            root_missing: true,
            ..Default::default()
        });
    }

    let mut walk = Walk {
        ids: IdCounters::new(),
        skipped: 0,
    };
    let mut instruments = Vec::new();

    for entry in sorted_entries(base)? {
        if !entry.path.is_dir() {
            tracing::debug!(entry = %entry.name, "Skipping non-directory");
            walk.skipped += 1;
            continue;
        }
        if let Some(instrument) = walk.scan_instrument(&entry)? {
            instruments.push(instrument);
        }
    }

    Ok(ScanResult {
        catalog: Catalog::new(instruments),
        skipped_count: walk.skipped,
        root_missing: false,
        duration_ms: start.elapsed().as_secs_f64() * 1000.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        File::create(path).unwrap();
    }

    fn create_test_tree() -> TempDir {
        let dir = TempDir::new().unwrap();
        let base = dir.path();

        touch(&base.join("2_Gayageum/1_Basic/1_Nonghyeon.png"));
        touch(&base.join("1_Janggu/1_Strokes/2_Kung.png"));
        touch(&base.join("1_Janggu/1_Strokes/1_Deong.png"));
        touch(&base.join("1_Janggu/1_Strokes/notes.txt"));
        touch(&base.join("1_Janggu/2_Rhythm/1_Gutgeori.PNG"));
        fs::create_dir_all(base.join("1_Janggu/3_Empty")).unwrap();
        touch(&base.join("1_Janggu/readme.md"));
        fs::create_dir_all(base.join("3_Haegeum/1_Nothing")).unwrap();
        touch(&base.join("3_Haegeum/1_Nothing/sketch.jpg"));
        touch(&base.join("stray.png"));

        dir
    }

    #[test]
    fn test_scan_orders_lexicographically() {
        let dir = create_test_tree();
        let result = scan_ornaments(dir.path()).unwrap();
        let catalog = &result.catalog;

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.instruments[0].name, "Janggu");
        assert_eq!(catalog.instruments[0].id, 1);
        assert_eq!(catalog.instruments[1].name, "Gayageum");
        assert_eq!(catalog.instruments[1].id, 2);

        let strokes = &catalog.instruments[0].categories[0];
        let names: Vec<&str> = strokes.ornaments.iter().map(|o| o.name.as_str()).collect();
        assert_eq!(names, vec!["Deong", "Kung"]);
    }

    #[test]
    fn test_scan_ids_are_global_and_increasing() {
        let dir = create_test_tree();
        let catalog = scan_ornaments(dir.path()).unwrap().catalog;

        let category_ids: Vec<u32> = catalog
            .instruments
            .iter()
            .flat_map(|i| i.categories.iter().map(|c| c.id))
            .collect();
        assert_eq!(category_ids, vec![1, 2, 3]);

        let ornament_ids: Vec<u32> = catalog.ornaments().map(|h| h.ornament.id).collect();
        assert_eq!(ornament_ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_scan_drops_empty_categories_and_instruments() {
        let dir = create_test_tree();
        let catalog = scan_ornaments(dir.path()).unwrap().catalog;

        let janggu = &catalog.instruments[0];
        let categories: Vec<&str> = janggu.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(categories, vec!["Strokes", "Rhythm"]);
        assert!(catalog.instruments.iter().all(|i| i.name != "Haegeum"));
    }

    #[test]
    fn test_scan_png_extension_is_case_insensitive() {
        let dir = create_test_tree();
        let catalog = scan_ornaments(dir.path()).unwrap().catalog;

        let rhythm = &catalog.instruments[0].categories[1];
        assert_eq!(rhythm.ornaments.len(), 1);
        assert_eq!(rhythm.ornaments[0].name, "Gutgeori");
        assert_eq!(rhythm.ornaments[0].filename, "1_Gutgeori.PNG");
    }

    #[test]
    fn test_scan_counts_skipped_entries() {
        let dir = create_test_tree();
        let result = scan_ornaments(dir.path()).unwrap();
        // stray.png, readme.md, notes.txt, sketch.jpg
        assert_eq!(result.skipped_count, 4);
        assert!(!result.root_missing);
    }

    #[test]
    fn test_scan_image_path_uses_forward_slashes() {
        let dir = create_test_tree();
        let catalog = scan_ornaments(dir.path()).unwrap().catalog;
        let ornament = &catalog.instruments[0].categories[0].ornaments[0];

        assert!(!ornament.image_path.contains('\\'));
        assert!(ornament
            .image_path
            .ends_with("1_Janggu/1_Strokes/1_Deong.png"));
        assert!(ornament
            .image_path
            .starts_with(&dir.path().to_string_lossy().replace('\\', "/")));
    }

    #[test]
    fn test_scan_missing_root() {
        let dir = TempDir::new().unwrap();
        let result = scan_ornaments(&dir.path().join("does-not-exist")).unwrap();
        assert!(result.root_missing);
        assert!(result.is_empty());
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = TempDir::new().unwrap();
        let result = scan_ornaments(dir.path()).unwrap();
        assert!(result.is_empty());
        assert!(!result.root_missing);
        assert_eq!(result.skipped_count, 0);
    }

    #[test]
    fn test_scan_unprefixed_names_used_verbatim() {
        let dir = TempDir::new().unwrap();
        touch(&dir.path().join("Janggu/Strokes/Deong.png"));
        let catalog = scan_ornaments(dir.path()).unwrap().catalog;

        assert_eq!(catalog.instruments[0].name, "Janggu");
        assert_eq!(catalog.instruments[0].categories[0].name, "Strokes");
        assert_eq!(catalog.instruments[0].categories[0].ornaments[0].name, "Deong");
    }

    #[test]
    fn test_scan_is_deterministic() {
        let dir = create_test_tree();
        let first = scan_ornaments(dir.path()).unwrap().catalog;
        let second = scan_ornaments(dir.path()).unwrap().catalog;
        assert_eq!(first, second);
    }
}
