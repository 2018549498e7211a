use std::path::Path;

use serde_json::Value;

/// JSON records read from one file.
pub(crate) struct Records {
    pub(crate) values: Vec<Value>,
    /// True when the file held a top-level array of records.
    pub(crate) batch: bool,
}

/// Read a file holding either one record or an array of records.
pub(crate) fn load_records(path: &Path) -> Result<Records, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("error reading file '{}': {}", path.display(), e))?;
    let doc: Value = serde_json::from_str(&text)
        .map_err(|e| format!("error parsing JSON in '{}': {}", path.display(), e))?;
    tracing::debug!(path = %path.display(), "loaded JSON document");

    Ok(match doc {
        Value::Array(values) => Records {
            values,
            batch: true,
        },
        other => Records {
            values: vec![other],
            batch: false,
        },
    })
}
