//! JSON output keyed by input address.

use super::RangeRow;
use serde_json::{Map, Value};

/// Render rows as `{"<input>": ["first", "last"]}`.
///
/// Failed inputs map to an empty array, so consumers only need to check the
/// array length.
pub fn render_json(rows: &[RangeRow]) -> Result<String, serde_json::Error> {
    let mut map = Map::new();
    for row in rows {
        let value = match &row.result {
            Ok(range) => serde_json::to_value(range)?,
            Err(_) => Value::Array(vec![]),
        };
        map.insert(row.input.clone(), value);
    }
    serde_json::to_string_pretty(&Value::Object(map))
}
