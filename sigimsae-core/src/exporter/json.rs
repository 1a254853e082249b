//! JSON format exporter.

use crate::types::Catalog;

/// Export a catalog to JSON.
pub fn export(catalog: &Catalog, pretty: bool) -> Result<String, serde_json::Error> {
    if pretty {
        serde_json::to_string_pretty(catalog)
    } else {
        serde_json::to_string(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, Instrument, Ornament};

    fn catalog() -> Catalog {
        Catalog::new(vec![Instrument::new(
            1,
            "장구".to_string(),
            vec![Category::new(
                1,
                "타법".to_string(),
                vec![Ornament::new(
                    1,
                    "덩".to_string(),
                    "1_덩.png".to_string(),
                    "Resources/Ornaments/1_장구/1_타법/1_덩.png".to_string(),
                )],
            )],
        )])
    }

    #[test]
    fn test_export_json() {
        let output = export(&catalog(), false).unwrap();
        assert!(output.contains("\"name\":\"장구\""));
        assert!(output.contains("\"rightColumnOnly\":false"));
        assert!(output.contains("\"imagePath\""));
    }

    #[test]
    fn test_export_json_pretty() {
        let output = export(&catalog(), true).unwrap();
        assert!(output.contains('\n'));
    }
}
