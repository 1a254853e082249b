//! Display names from ordinal-prefixed directory and file names.
//!
//! Asset folders are named `<digits>_<Name>` so that a plain lexicographic
//! listing yields the intended order. The prefix is only for ordering and is
//! dropped from the display name.

use once_cell::sync::Lazy;
use regex::Regex;
use std::path::Path;

static ORDINAL_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+_").unwrap());

/// Strip a leading `<digits>_` prefix. Anything else is returned unchanged.
pub fn extract_name(raw: &str) -> String {
    ORDINAL_PREFIX.replace(raw, "").into_owned()
}

/// Strip the extension, then the ordinal prefix.
///
/// `"3_Item.png"` becomes `"Item"`. A leading dot does not start an
/// extension, so `".png"` is kept whole.
pub fn extract_name_from_filename(filename: &str) -> String {
    let stem = Path::new(filename)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(filename);
    extract_name(stem)
}
