//! Data models for the ornament catalog.
//!
//! The catalog is a three-level tree: an [`Instrument`] owns its
//! [`Category`] list, and each category owns its [`Ornament`] list.
//! The tree is built once by the scanner and consumed by the exporters.

use crate::hangul;
use serde::{Deserialize, Serialize};

/// Suffix appended to an ornament name to form its description.
pub const DESCRIPTION_SUFFIX: &str = " 시김새";

/// A single ornament image.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ornament {
    pub id: u32,
    pub name: String,
    /// Original file name, ordinal prefix and extension included.
    pub filename: String,
    pub description: String,
    pub autoalign: bool,
    #[serde(rename = "rightColumnOnly")]
    pub right_column_only: bool,
    /// Path of the image relative to the working tree, always `/`-separated.
    #[serde(rename = "imagePath")]
    pub image_path: String,
}

impl Ornament {
    pub fn new(id: u32, name: String, filename: String, image_path: String) -> Self {
        let description = format!("{}{}", name, DESCRIPTION_SUFFIX);
        Self {
            id,
            name,
            filename,
            description,
            autoalign: false,
            right_column_only: false,
            image_path,
        }
    }

    /// Field values in document order, as written inside `<ornament>`.
    pub fn fields(&self) -> [(&'static str, String); 7] {
        [
            ("id", self.id.to_string()),
            ("name", self.name.clone()),
            ("filename", self.filename.clone()),
            ("description", self.description.clone()),
            ("autoalign", self.autoalign.to_string()),
            ("rightColumnOnly", self.right_column_only.to_string()),
            ("imagePath", self.image_path.clone()),
        ]
    }
}

/// A group of ornaments within an instrument, such as a playing technique.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub korean: String,
    pub ornaments: Vec<Ornament>,
}

impl Category {
    pub fn new(id: u32, name: String, ornaments: Vec<Ornament>) -> Self {
        Self {
            id,
            korean: name.clone(),
            name,
            ornaments,
        }
    }
}

/// A traditional instrument and its categories.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub id: u32,
    pub name: String,
    pub korean: String,
    pub categories: Vec<Category>,
}

impl Instrument {
    pub fn new(id: u32, name: String, categories: Vec<Category>) -> Self {
        Self {
            id,
            korean: name.clone(),
            name,
            categories,
        }
    }

    /// Total ornaments across all categories.
    pub fn ornament_count(&self) -> usize {
        self.categories.iter().map(|c| c.ornaments.len()).sum()
    }
}

/// Running ID state for a single scan.
///
/// Each entity kind has its own counter. Counters start at 1 and are never
/// reset per parent, so IDs increase across the whole traversal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdCounters {
    instrument: u32,
    category: u32,
    ornament: u32,
}

impl Default for IdCounters {
    fn default() -> Self {
        Self {
            instrument: 1,
            category: 1,
            ornament: 1,
        }
    }
}

impl IdCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_instrument(&mut self) -> u32 {
        Self::advance(&mut self.instrument)
    }

    pub fn next_category(&mut self) -> u32 {
        Self::advance(&mut self.category)
    }

    pub fn next_ornament(&mut self) -> u32 {
        Self::advance(&mut self.ornament)
    }

    fn advance(counter: &mut u32) -> u32 {
        let id = *counter;
        *counter += 1;
        id
    }
}

/// The complete catalog, instruments in scan order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub instruments: Vec<Instrument>,
}

/// Ornament count for one category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub name: String,
    pub ornaments: usize,
}

/// Per-instrument breakdown.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct InstrumentBreakdown {
    pub name: String,
    pub categories: Vec<CategoryCount>,
}

/// Totals and per-instrument breakdown of a catalog.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub instruments: usize,
    pub categories: usize,
    pub ornaments: usize,
    pub breakdown: Vec<InstrumentBreakdown>,
}

/// An ornament matched by [`Catalog::search`], with its parents' names.
#[derive(Clone, Debug, Serialize)]
pub struct SearchHit<'a> {
    pub instrument: &'a str,
    pub category: &'a str,
    pub ornament: &'a Ornament,
}

/// Restricts results to the named instruments and categories.
///
/// An empty list places no restriction on that level. Names are compared
/// exactly.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub instruments: Vec<String>,
    pub categories: Vec<String>,
}

impl SearchFilter {
    pub fn instrument(name: impl Into<String>) -> Self {
        Self {
            instruments: vec![name.into()],
            ..Default::default()
        }
    }

    pub fn category(name: impl Into<String>) -> Self {
        Self {
            categories: vec![name.into()],
            ..Default::default()
        }
    }

    fn admits(&self, hit: &SearchHit<'_>) -> bool {
        (self.instruments.is_empty() || self.instruments.iter().any(|i| i == hit.instrument))
            && (self.categories.is_empty() || self.categories.iter().any(|c| c == hit.category))
    }
}

impl SearchHit<'_> {
    fn fields(&self) -> [&str; 4] {
        [
            &self.ornament.name,
            &self.ornament.description,
            self.instrument,
            self.category,
        ]
    }
}

impl Catalog {
    pub fn new(instruments: Vec<Instrument>) -> Self {
        Self { instruments }
    }

    /// Number of instruments.
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Iterate every ornament with its instrument and category, in document order.
    pub fn ornaments(&self) -> impl Iterator<Item = SearchHit<'_>> {
        self.instruments.iter().flat_map(|instrument| {
            instrument.categories.iter().flat_map(move |category| {
                category.ornaments.iter().map(move |ornament| SearchHit {
                    instrument: &instrument.name,
                    category: &category.name,
                    ornament,
                })
            })
        })
    }

    pub fn stats(&self) -> CatalogStats {
        let breakdown: Vec<InstrumentBreakdown> = self
            .instruments
            .iter()
            .map(|instrument| InstrumentBreakdown {
                name: instrument.name.clone(),
                categories: instrument
                    .categories
                    .iter()
                    .map(|c| CategoryCount {
                        name: c.name.clone(),
                        ornaments: c.ornaments.len(),
                    })
                    .collect(),
            })
            .collect();

        CatalogStats {
            instruments: self.instruments.len(),
            categories: breakdown.iter().map(|b| b.categories.len()).sum(),
            ornaments: self.instruments.iter().map(Instrument::ornament_count).sum(),
            breakdown,
        }
    }

    /// Search with no instrument or category restriction.
    pub fn search(&self, query: &str) -> Vec<SearchHit<'_>> {
        self.search_filtered(query, &SearchFilter::default())
    }

    /// Search ornament name, description, instrument name and category name.
    ///
    /// A query made only of Hangul initial consonants (`ㄷ`, `ㅈㄱ`) matches
    /// against each field's initials. Any other query is a case-insensitive
    /// substring match. An empty query matches every ornament the filter
    /// admits.
    pub fn search_filtered(&self, query: &str, filter: &SearchFilter) -> Vec<SearchHit<'_>> {
        let query = query.trim();
        let initials_only = hangul::is_choseong_query(query);
        let needle = query.to_lowercase();

        self.ornaments()
            .filter(|hit| filter.admits(hit))
            .filter(|hit| {
                needle.is_empty()
                    || hit.fields().iter().any(|field| {
                        if initials_only {
                            hangul::choseong_contains(field, query)
                        } else {
                            field.to_lowercase().contains(&needle)
                        }
                    })
            })
            .collect()
    }

    /// Every ornament of the named instrument.
    pub fn ornaments_by_instrument(&self, name: &str) -> Vec<SearchHit<'_>> {
        self.search_filtered("", &SearchFilter::instrument(name))
    }

    /// Every ornament in categories with this name, across instruments.
    pub fn ornaments_by_category(&self, name: &str) -> Vec<SearchHit<'_>> {
        self.search_filtered("", &SearchFilter::category(name))
    }

    pub fn find_ornament(&self, id: u32) -> Option<SearchHit<'_>> {
        self.ornaments().find(|hit| hit.ornament.id == id)
    }
}
