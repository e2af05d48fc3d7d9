//! Terminal rendering of result frames.

use epiline_frame::Frame;
use serde_json::{Map, Value as JsonValue};

/// Renders a GitHub-flavored Markdown table.
///
/// Pipes inside cells are escaped minimally; everything else passes
/// through.
#[must_use]
pub fn to_markdown_table(headers: &[String], rows: &[Vec<String>]) -> String {
    fn esc(s: &str) -> String {
        s.replace('|', "\\|")
    }

    let header_line = format!(
        "| {} |",
        headers.iter().map(|h| esc(h)).collect::<Vec<_>>().join(" | ")
    );
    let sep_line = format!("| {} |", vec!["---"; headers.len()].join(" | "));
    let mut lines = vec![header_line, sep_line];
    for row in rows {
        lines.push(format!(
            "| {} |",
            row.iter().map(|c| esc(c)).collect::<Vec<_>>().join(" | ")
        ));
    }
    lines.join("\n")
}

/// Renders a frame as a Markdown table, truncating to `max_rows` body rows
/// with a trailing note when the frame is larger.
#[must_use]
pub fn frame_to_markdown(frame: &Frame, max_rows: Option<usize>) -> String {
    let all_rows: Vec<Vec<String>> = frame
        .rows()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    let (shown, note) = match max_rows {
        Some(limit) if all_rows.len() > limit => (
            &all_rows[..limit],
            format!("\n\n_(truncated to first {limit} rows)_"),
        ),
        _ => (&all_rows[..], String::new()),
    };

    to_markdown_table(frame.columns(), shown) + &note
}

/// Serializes a frame as a JSON array of objects, one per row.
pub fn frame_to_json_string(frame: &Frame) -> anyhow::Result<String> {
    let mut out = Vec::with_capacity(frame.n_rows());
    for row in frame.rows() {
        let mut object = Map::new();
        for (column, value) in frame.columns().iter().zip(row) {
            object.insert(column.clone(), serde_json::to_value(value)?);
        }
        out.push(JsonValue::Object(object));
    }
    Ok(serde_json::to_string_pretty(&out)?)
}
