use serde_json::Value;

use super::ParseError;
use crate::messages::Messages;

/// Parse a JSON source and extract the table named by `convention`.
pub fn parse_json_source(content: &str, convention: &str) -> Result<Messages, ParseError> {
    let json: Value =
        serde_json::from_str(content).map_err(|e| ParseError::Syntax(e.to_string()))?;
    extract_convention(&json, convention)
}

/// Pick the convention entry out of a parsed source and flatten it.
///
/// A source without the entry is valid and yields an empty mapping.
pub(crate) fn extract_convention(source: &Value, convention: &str) -> Result<Messages, ParseError> {
    let Value::Object(root) = source else {
        return Err(ParseError::NotATable);
    };

    match root.get(convention) {
        None => Ok(Messages::new()),
        Some(table @ Value::Object(_)) => {
            let mut entries = Vec::new();
            flatten_json(table, String::new(), &mut entries);
            Ok(entries.into_iter().collect())
        }
        Some(_) => Err(ParseError::ConventionNotATable {
            convention: convention.to_string(),
        }),
    }
}

/// Flatten nested tables into dot-separated keys.
///
/// Only string leaves become entries; numbers, booleans, arrays and nulls
/// are skipped.
fn flatten_json(value: &Value, prefix: String, result: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, result);
            }
        }
        Value::String(s) => result.push((prefix, s.clone())),
        _ => {}
    }
}
