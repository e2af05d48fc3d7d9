//! Rolling-window and cumulative transforms over aggregated series.

use epiline_frame::{ConfigurationError, StratumKey};
use serde::Serialize;

use crate::{IncidenceRecord, Period};

/// Aggregation applied inside a rolling window.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum RollingKind {
    #[default]
    Sum,
    Mean,
}

/// Configuration for [`transform`].
///
/// When both a rolling window and `cumulative` are requested, rolling is
/// applied first and the cumulative total runs over the rolled values.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformOptions {
    /// Trailing window size in periods; `None` disables rolling.
    pub rolling: Option<usize>,
    /// Aggregation inside the window. Default [`RollingKind::Sum`].
    pub rolling_kind: RollingKind,
    /// Running total from each stratum's first period. Default `false`.
    pub cumulative: bool,
}

/// One transformed series point.
///
/// Values are real-valued because rolling means are; an untransformed or
/// summed series carries its integral counts exactly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformedRecord {
    pub stratum: StratumKey,
    pub period: Period,
    pub value: f64,
}

/// Applies rolling and cumulative transforms to an aggregated series.
///
/// Precondition: records are grouped by stratum and sorted by period within
/// each stratum, which [`aggregate`](crate::aggregate) guarantees. The
/// existing order is taken as the time axis: nothing is re-sorted, and
/// callers supplying unsorted input get silently wrong results by contract.
///
/// Both transforms run independently per stratum; no window or running
/// total crosses a stratum boundary. The rolling window is trailing with
/// partial windows at the start of each series: the first `w - 1` points
/// aggregate only the periods available so far (a mean divides by the
/// in-window count, not the window size).
pub fn transform(
    records: &[IncidenceRecord],
    options: &TransformOptions,
) -> Result<Vec<TransformedRecord>, ConfigurationError> {
    if options.rolling == Some(0) {
        return Err(ConfigurationError::InvalidWindow { window: 0 });
    }

    let mut out = Vec::with_capacity(records.len());
    for run in records.chunk_by(|a, b| a.stratum == b.stratum) {
        #[expect(clippy::cast_precision_loss)]
        let mut values: Vec<f64> = run.iter().map(|r| r.cases as f64).collect();
        if let Some(window) = options.rolling {
            values = rolling(&values, window, options.rolling_kind);
        }
        if options.cumulative {
            let mut total = 0.0;
            for value in &mut values {
                total += *value;
                *value = total;
            }
        }
        out.extend(run.iter().zip(values).map(|(record, value)| TransformedRecord {
            stratum: record.stratum.clone(),
            period: record.period,
            value,
        }));
    }
    Ok(out)
}

#[expect(clippy::cast_precision_loss)]
fn rolling(values: &[f64], window: usize, kind: RollingKind) -> Vec<f64> {
    values
        .iter()
        .enumerate()
        .map(|(i, _)| {
            let in_window = &values[(i + 1).saturating_sub(window)..=i];
            let sum: f64 = in_window.iter().sum();
            match kind {
                RollingKind::Sum => sum,
                RollingKind::Mean => sum / in_window.len() as f64,
            }
        })
        .collect()
}
