//! JSON output formatting for machine-readable output.

use serde::Serialize;

/// JSON output formatter
pub struct JsonOutput;

impl JsonOutput {
    /// Format data as a pretty-printed JSON string
    pub fn format<T: Serialize + ?Sized>(data: &T) -> String {
        serde_json::to_string_pretty(data)
            .unwrap_or_else(|e| format!("{{\n  \"error\": \"{}\"\n}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct TestData {
        name: String,
        value: i32,
    }

    #[test]
    fn test_format_pretty() {
        let data = TestData {
            name: "장구".to_string(),
            value: 42,
        };
        let output = JsonOutput::format(&data);

        assert!(output.contains("\"name\""));
        assert!(output.contains("장구"));
        assert!(output.contains("42"));
        assert!(output.contains('\n'));
    }
}
