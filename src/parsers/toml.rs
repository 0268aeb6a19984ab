use serde_json::Value;

use super::{ParseError, json::extract_convention};
use crate::messages::Messages;

/// Parse a TOML source and extract the table named by `convention`.
///
/// ```toml
/// [lang]
/// welcome = "Welcome"
///
/// [lang.menu]
/// home = "Home"
/// ```
pub fn parse_toml_source(content: &str, convention: &str) -> Result<Messages, ParseError> {
    let table: toml::Table =
        toml::from_str(content).map_err(|e| ParseError::Syntax(e.to_string()))?;
    extract_convention(&to_json(toml::Value::Table(table)), convention)
}

/// Convert to the JSON shape the flattener understands. Only strings and
/// tables carry translations, everything else becomes `null` and is skipped.
fn to_json(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Table(table) => Value::Object(
            table
                .into_iter()
                .map(|(key, val)| (key, to_json(val)))
                .collect(),
        ),
        _ => Value::Null,
    }
}
