//! Long and wide tabular shapes for summary records.
//!
//! The long form is canonical: one row per `(stratum, column, metric,
//! value)` tuple. The wide form pivots metrics into columns and is a pure
//! reshape: no value is recomputed, introduced, or dropped, so pivoting
//! and un-pivoting round-trips the record set.

use std::collections::BTreeMap;

use epiline_frame::{Frame, StratumKey, Value};

use crate::SummaryRecord;

/// Reshapes records into the long output schema: grouping columns (if any)
/// plus `column`, `metric`, `value`.
#[must_use]
pub fn long_frame(records: &[SummaryRecord], by: &[String]) -> Frame {
    let mut columns: Vec<String> = by.to_vec();
    columns.extend(["column".into(), "metric".into(), "value".into()]);
    let mut frame = Frame::new(columns);
    for record in records {
        let mut row = record.stratum.values().to_vec();
        row.push(Value::from(record.column.as_str()));
        row.push(Value::from(record.metric.as_str()));
        row.push(record.value.clone());
        frame.push_row(row);
    }
    frame
}

/// Reshapes records into the wide output schema: grouping columns (if any)
/// plus `column`, then one column per metric.
///
/// Row order and metric-column order are first-seen order over the input
/// records, so engine output pivots into strata sorted ascending with
/// metrics in emission order. Cells with no corresponding long record are
/// [`Value::Null`].
#[must_use]
pub fn wide_frame(records: &[SummaryRecord], by: &[String]) -> Frame {
    let mut metrics: Vec<String> = Vec::new();
    let mut row_keys: Vec<(StratumKey, String)> = Vec::new();
    let mut cells: BTreeMap<(StratumKey, String), BTreeMap<String, Value>> = BTreeMap::new();

    for record in records {
        if !metrics.contains(&record.metric) {
            metrics.push(record.metric.clone());
        }
        let key = (record.stratum.clone(), record.column.clone());
        if !cells.contains_key(&key) {
            row_keys.push(key.clone());
        }
        cells
            .entry(key)
            .or_default()
            .insert(record.metric.clone(), record.value.clone());
    }

    let mut columns: Vec<String> = by.to_vec();
    columns.push("column".into());
    columns.extend(metrics.iter().cloned());
    let mut frame = Frame::new(columns);

    for key in row_keys {
        let row_cells = &cells[&key];
        let (stratum, column) = key;
        let mut row = stratum.values().to_vec();
        row.push(Value::Str(column));
        for metric in &metrics {
            row.push(row_cells.get(metric).cloned().unwrap_or(Value::Null));
        }
        frame.push_row(row);
    }
    frame
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use epiline_frame::{Frame, Value};

    use crate::{SummaryOptions, summarize};

    use super::*;

    fn sample_records() -> (Vec<SummaryRecord>, Vec<String>) {
        let mut frame = Frame::new(["sex", "age", "province"]);
        frame.push_row(vec![Value::from("M"), Value::Int(30), Value::from("A")]);
        frame.push_row(vec![Value::from("M"), Value::Null, Value::from("B")]);
        frame.push_row(vec![Value::from("F"), Value::Int(20), Value::from("A")]);
        let options = SummaryOptions {
            by: vec!["sex".into()],
            numeric_cols: vec!["age".into()],
            categorical_cols: vec!["province".into()],
            top_k: 2,
            ..SummaryOptions::default()
        };
        let records = summarize(&frame, &options).unwrap();
        (records, options.by)
    }

    #[test]
    fn test_long_schema() {
        let (records, by) = sample_records();
        let long = long_frame(&records, &by);
        assert_eq!(long.columns(), ["sex", "column", "metric", "value"]);
        assert_eq!(long.n_rows(), records.len());
    }

    #[test]
    fn test_wide_schema_keys_rows_by_stratum_and_column() {
        let (records, by) = sample_records();
        let wide = wide_frame(&records, &by);

        assert_eq!(&wide.columns()[..2], ["sex", "column"]);
        // Metric columns in first-seen order: n, then missingness, then the
        // numeric and categorical metrics.
        assert_eq!(wide.columns()[2], "n");
        assert!(wide.columns().contains(&"missing_pct".to_owned()));
        assert!(wide.columns().contains(&"top_2_n".to_owned()));
        // Rows: (F, _n), (F, age), (F, province), then the same for M.
        assert_eq!(wide.n_rows(), 6);
    }

    #[test]
    fn test_wide_reshape_is_lossless() {
        let (records, by) = sample_records();
        let wide = wide_frame(&records, &by);

        // Un-pivot the wide frame and compare tuple sets. Cells that are
        // Null for a (stratum, column) pair with no long record (metric
        // belongs to a different column kind) are not tuples of the long
        // form, so both directions are covered by filtering them out.
        let metric_names: Vec<String> = wide.columns()[2..].to_vec();
        let mut recovered: BTreeSet<(Vec<Value>, String, String, Value)> = BTreeSet::new();
        for row in wide.rows() {
            let stratum = vec![row[0].clone()];
            let column = row[1].to_string();
            for (metric, value) in metric_names.iter().zip(&row[2..]) {
                recovered.insert((stratum.clone(), column.clone(), metric.clone(), value.clone()));
            }
        }

        let mut original: BTreeSet<(Vec<Value>, String, String, Value)> = BTreeSet::new();
        for record in &records {
            original.insert((
                record.stratum.values().to_vec(),
                record.column.clone(),
                record.metric.clone(),
                record.value.clone(),
            ));
        }

        assert!(original.is_subset(&recovered));
        // Everything extra in the wide form is a Null filler cell.
        for extra in recovered.difference(&original) {
            assert_eq!(extra.3, Value::Null);
        }
    }

    #[test]
    fn test_empty_records_produce_header_only_frames() {
        let long = long_frame(&[], &[]);
        assert_eq!(long.columns(), ["column", "metric", "value"]);
        assert!(long.is_empty());

        let wide = wide_frame(&[], &[]);
        assert_eq!(wide.columns(), ["column"]);
        assert!(wide.is_empty());
    }
}
