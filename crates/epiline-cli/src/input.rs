//! JSON line-list loading.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::Context;
use epiline_frame::{Frame, Value};
use serde_json::{Map, Value as JsonValue};

/// Loads a line list from a JSON file holding an array of flat objects.
pub fn load_frame<P>(path: P) -> anyhow::Result<Frame>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let reader = BufReader::new(file);
    let rows: Vec<Map<String, JsonValue>> = serde_json::from_reader(reader)
        .with_context(|| format!("failed to parse {} as a JSON line list", path.display()))?;
    Ok(frame_from_json(&rows))
}

/// Builds a [`Frame`] from parsed JSON objects.
///
/// Columns are the union of keys across all objects, in first-seen order.
/// Absent keys and JSON `null` become [`Value::Null`]; numbers keep their
/// integer/float distinction; strings stay strings (date parsing happens
/// lazily in the engines); booleans and nested values render as strings.
pub fn frame_from_json(rows: &[Map<String, JsonValue>]) -> Frame {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !columns.contains(key) {
                columns.push(key.clone());
            }
        }
    }

    let mut frame = Frame::new(columns.clone());
    for row in rows {
        frame.push_row(
            columns
                .iter()
                .map(|column| row.get(column).map_or(Value::Null, convert))
                .collect(),
        );
    }
    frame
}

fn convert(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Number(n) => n
            .as_i64()
            .map_or_else(|| Value::Float(n.as_f64().unwrap_or(f64::NAN)), Value::Int),
        JsonValue::String(s) => Value::from(s.as_str()),
        other => Value::from(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(json: &str) -> Vec<Map<String, JsonValue>> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_columns_are_union_of_keys_in_first_seen_order() {
        let frame = frame_from_json(&rows(
            r#"[{"a": 1, "b": "x"}, {"b": "y", "c": 2.5}]"#,
        ));
        assert_eq!(frame.columns(), ["a", "b", "c"]);

        let all: Vec<Vec<Value>> = frame.rows().map(<[Value]>::to_vec).collect();
        assert_eq!(
            all[0],
            vec![Value::Int(1), Value::from("x"), Value::Null]
        );
        assert_eq!(
            all[1],
            vec![Value::Null, Value::from("y"), Value::Float(2.5)]
        );
    }

    #[test]
    fn test_null_and_absent_are_missing() {
        let frame = frame_from_json(&rows(r#"[{"a": null}, {}]"#));
        let values: Vec<Value> = frame.column_values(0).cloned().collect();
        assert_eq!(values, vec![Value::Null, Value::Null]);
    }

    #[test]
    fn test_booleans_render_as_strings() {
        let frame = frame_from_json(&rows(r#"[{"flag": true}]"#));
        let values: Vec<Value> = frame.column_values(0).cloned().collect();
        assert_eq!(values, vec![Value::from("true")]);
    }
}
