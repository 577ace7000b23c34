//! JSON output formatting
//!
//! Command results go to stdout inside a stable `{data, meta}` envelope so
//! scripts can pipe `graphctl ... --format json` into `jq '.data'` without
//! caring which command produced it. The envelope is deterministic: the same
//! invocation against an unchanged tenant renders byte-identical output.

use serde::Serialize;

/// Envelope for JSON output
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// Command result, shaped by the command
    pub data: T,

    /// Envelope metadata
    pub meta: Metadata,
}

/// Envelope metadata.
///
/// Carries only what stays constant between identical invocations; anything
/// run-dependent (clocks, request ids) would break output comparability.
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// graphctl version that produced the output
    pub version: String,
}

impl<T> JsonOutput<T> {
    /// Wrap a command result in the envelope
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: Metadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }
}

/// Render a command result as pretty-printed enveloped JSON
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String, serde_json::Error> {
    let output = JsonOutput::new(data);
    serde_json::to_string_pretty(&output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Clone)]
    struct TestItem {
        id: String,
        name: String,
    }

    #[test]
    fn test_json_output_new() {
        let data = vec!["item1", "item2"];
        let output = JsonOutput::new(data);

        assert_eq!(output.data, vec!["item1", "item2"]);
        assert_eq!(output.meta.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_format_json_basic() {
        let items = vec![TestItem {
            id: "1".to_string(),
            name: "Test".to_string(),
        }];

        let result = format_json(&items).unwrap();

        assert!(result.contains("\"data\""));
        assert!(result.contains("\"meta\""));
        assert!(result.contains("\"id\": \"1\""));
        assert!(result.contains("\"name\": \"Test\""));
        assert!(result.contains("\"version\""));
    }

    #[test]
    fn test_format_json_empty_vec() {
        let items: Vec<TestItem> = vec![];
        let result = format_json(&items).unwrap();

        assert!(result.contains("\"data\": []"));
    }

    #[test]
    fn test_format_json_is_deterministic() {
        let items = vec!["g1", "g2"];

        let first = format_json(&items).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(5));
        let second = format_json(&items).unwrap();

        assert_eq!(first, second);
    }
}
