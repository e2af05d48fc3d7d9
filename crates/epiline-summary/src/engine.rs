//! The grouped summary computation.

use std::collections::BTreeMap;

use epiline_frame::{ConfigurationError, Frame, StratumKey, Value};
use serde::Serialize;

use crate::{NumericSummary, OutputShape, SummaryOptions, long_frame, wide_frame};

/// Stable token under which missing values appear in categorical rankings.
pub const MISSING_CATEGORY: &str = "<NA>";

/// Sentinel column name for the group-level `n` metric, which belongs to no
/// input column.
pub const GROUP_SIZE_COLUMN: &str = "_n";

/// One summary observation: the value of `metric` for `column` within
/// `stratum`.
///
/// The engine emits at most one record per `(stratum, column, metric)`
/// triple; missing results (an empty date column's `min`, an unfilled
/// categorical rank) are emitted as [`Value::Null`] rather than omitted, so
/// the record schema is identical across strata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub stratum: StratumKey,
    pub column: String,
    pub metric: String,
    pub value: Value,
}

/// Computes per-stratum descriptive statistics.
///
/// Every column referenced by the options (grouping columns and all three
/// summary lists) is resolved before any computation; an unknown name
/// fails with [`ConfigurationError::UnknownColumn`] and no partial output.
/// `top_k == 0` fails with [`ConfigurationError::InvalidTopK`].
///
/// With `by` empty the whole input forms one stratum (even when it has no
/// rows); otherwise one stratum per distinct combination of grouping
/// values, with missing grouping values kept as a distinct [`Value::Null`]
/// stratum. Output is ordered by stratum, then column list order
/// (dates, numerics, categoricals), then metric.
pub fn summarize(
    frame: &Frame,
    options: &SummaryOptions,
) -> Result<Vec<SummaryRecord>, ConfigurationError> {
    if options.top_k == 0 {
        return Err(ConfigurationError::InvalidTopK { top_k: 0 });
    }
    let by_indices = frame.column_indices(&options.by)?;
    let date_indices = frame.column_indices(&options.date_cols)?;
    let numeric_indices = frame.column_indices(&options.numeric_cols)?;
    let categorical_indices = frame.column_indices(&options.categorical_cols)?;

    let mut groups: BTreeMap<StratumKey, Vec<&[Value]>> = BTreeMap::new();
    if by_indices.is_empty() {
        groups.insert(StratumKey::default(), frame.rows().collect());
    } else {
        for row in frame.rows() {
            groups
                .entry(frame.stratum_key(row, &by_indices))
                .or_default()
                .push(row);
        }
    }

    let mut records = Vec::new();
    for (stratum, rows) in groups {
        let n = rows.len();
        push(&mut records, &stratum, GROUP_SIZE_COLUMN, "n", int(n));

        for (name, &index) in options.date_cols.iter().zip(&date_indices) {
            date_metrics(&mut records, &stratum, name, &rows, index);
        }
        for (name, &index) in options.numeric_cols.iter().zip(&numeric_indices) {
            numeric_metrics(&mut records, &stratum, name, &rows, index);
        }
        for (name, &index) in options.categorical_cols.iter().zip(&categorical_indices) {
            categorical_metrics(&mut records, &stratum, name, &rows, index, options.top_k);
        }
    }
    Ok(records)
}

/// Computes the summary and reshapes it per `options.output`.
///
/// The wide shape is a pure reshape of the long records; both shapes come
/// from one computation pass.
pub fn summarize_frame(
    frame: &Frame,
    options: &SummaryOptions,
) -> Result<Frame, ConfigurationError> {
    let records = summarize(frame, options)?;
    Ok(match options.output {
        OutputShape::Long => long_frame(&records, &options.by),
        OutputShape::Wide => wide_frame(&records, &options.by),
    })
}

fn push(records: &mut Vec<SummaryRecord>, stratum: &StratumKey, column: &str, metric: &str, value: Value) {
    records.push(SummaryRecord {
        stratum: stratum.clone(),
        column: column.to_owned(),
        metric: metric.to_owned(),
        value,
    });
}

fn int(value: usize) -> Value {
    Value::Int(i64::try_from(value).expect("row counts fit in i64"))
}

#[expect(clippy::cast_precision_loss)]
fn push_missingness(
    records: &mut Vec<SummaryRecord>,
    stratum: &StratumKey,
    column: &str,
    missing_n: usize,
    n: usize,
) {
    push(records, stratum, column, "missing_n", int(missing_n));
    // A proportion in [0, 1]; an empty group has nothing missing.
    let pct = if n == 0 { 0.0 } else { missing_n as f64 / n as f64 };
    push(records, stratum, column, "missing_pct", Value::Float(pct));
}

fn date_metrics(
    records: &mut Vec<SummaryRecord>,
    stratum: &StratumKey,
    column: &str,
    rows: &[&[Value]],
    index: usize,
) {
    let parsed: Vec<_> = rows.iter().filter_map(|row| row[index].as_date()).collect();
    push_missingness(records, stratum, column, rows.len() - parsed.len(), rows.len());

    let min = parsed.iter().min().map_or(Value::Null, |d| Value::Date(*d));
    let max = parsed.iter().max().map_or(Value::Null, |d| Value::Date(*d));
    push(records, stratum, column, "min", min);
    push(records, stratum, column, "max", max);
}

const NUMERIC_METRICS: [&str; 8] = ["count", "mean", "std", "min", "p25", "median", "p75", "max"];

fn numeric_metrics(
    records: &mut Vec<SummaryRecord>,
    stratum: &StratumKey,
    column: &str,
    rows: &[&[Value]],
    index: usize,
) {
    let values: Vec<_> = rows.iter().filter_map(|row| row[index].as_f64()).collect();
    push_missingness(records, stratum, column, rows.len() - values.len(), rows.len());

    if let Some(stats) = NumericSummary::new(values) {
        push(records, stratum, column, "count", int(stats.count));
        push(records, stratum, column, "mean", Value::Float(stats.mean));
        let std = stats.std_dev.map_or(Value::Null, Value::Float);
        push(records, stratum, column, "std", std);
        push(records, stratum, column, "min", Value::Float(stats.min));
        push(records, stratum, column, "p25", Value::Float(stats.p25));
        push(records, stratum, column, "median", Value::Float(stats.median));
        push(records, stratum, column, "p75", Value::Float(stats.p75));
        push(records, stratum, column, "max", Value::Float(stats.max));
    } else {
        for metric in NUMERIC_METRICS {
            push(records, stratum, column, metric, Value::Null);
        }
    }
}

fn categorical_metrics(
    records: &mut Vec<SummaryRecord>,
    stratum: &StratumKey,
    column: &str,
    rows: &[&[Value]],
    index: usize,
    top_k: usize,
) {
    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut missing_n = 0;
    for row in rows {
        let value = &row[index];
        let key = if value.is_null() {
            missing_n += 1;
            MISSING_CATEGORY.to_owned()
        } else {
            value.to_string()
        };
        *counts.entry(key).or_insert(0) += 1;
    }
    push_missingness(records, stratum, column, missing_n, rows.len());

    // BTreeMap iteration is ascending by string; the stable sort by count
    // keeps equal-count values in that order, giving the documented
    // tie-break: count descending, then string ascending.
    let mut ranked: Vec<(String, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));

    for rank in 1..=top_k {
        let (value, count) = ranked.get(rank - 1).map_or((Value::Null, Value::Null), |(v, c)| {
            (
                Value::Str(v.clone()),
                Value::Int(i64::try_from(*c).expect("category counts fit in i64")),
            )
        });
        push(records, stratum, column, &format!("top_{rank}"), value);
        push(records, stratum, column, &format!("top_{rank}_n"), count);
    }
}
