//! Payload file loading for the segmentgend binary
//!
//! The platform hands the daemon the already-executed query result as a
//! JSON document; when run standalone the document is read from a file.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_json::Value;
use tracing::info;

use fabgen_common::{GeneratorError, GeneratorResult};

/// Load a raw query-result payload from a JSON file
pub fn load_payload(path: impl AsRef<Path>) -> GeneratorResult<Value> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| GeneratorError::io(path.display().to_string(), e))?;

    let reader = BufReader::new(file);
    let payload: Value = serde_json::from_reader(reader)?;

    info!("Loaded payload from {}", path.display());
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_payload_basic() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{
  "ServiceNetworkSegment": {{
    "edges": [
      {{
        "node": {{
          "name": {{"value": "web-tier"}},
          "vlan_id": {{"value": 100}}
        }}
      }}
    ]
  }}
}}"#
        )
        .unwrap();
        file.flush().unwrap();

        let payload = load_payload(file.path()).unwrap();
        assert!(payload.get("ServiceNetworkSegment").is_some());
    }

    #[test]
    fn test_load_payload_not_found() {
        let result = load_payload("/nonexistent/payload.json");
        assert!(matches!(result, Err(GeneratorError::Io { .. })));
    }

    #[test]
    fn test_load_payload_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{{invalid json").unwrap();
        file.flush().unwrap();

        let result = load_payload(file.path());
        assert!(matches!(result, Err(GeneratorError::Json { .. })));
    }
}
