use serde_json::Value;

/// Normalizes the heterogeneous list-valued fields of the upstream
/// dataset into a uniform `Vec<String>`.
///
/// The stored representation of a field like `fail_to_pass` varies by
/// export: sometimes a JSON array, sometimes a JSON-encoded array inside
/// a string, sometimes a bare scalar, sometimes absent. All shapes
/// degrade gracefully; this function never fails.
pub fn normalize_list(value: Option<&Value>) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };
    match value {
        Value::Array(items) => items.iter().map(element_text).collect(),
        Value::Null => Vec::new(),
        Value::String(text) => {
            if text.is_empty() {
                return Vec::new();
            }
            match serde_json::from_str::<Value>(text) {
                Ok(Value::Array(items)) => items.iter().map(element_text).collect(),
                // Parsed but not an array (a quoted scalar, a number, an
                // object): keep the original string, matching the
                // single-element fallback for unparseable input.
                Ok(_) | Err(_) => vec![text.clone()],
            }
        }
        other => vec![element_text(other)],
    }
}

/// Array elements are usually strings; anything else keeps its compact
/// JSON rendering so no information is dropped.
fn element_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
