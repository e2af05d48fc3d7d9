//! Incidence counting and time-series transforms for line-list data.
//!
//! This crate turns a line list (one row per event) into per-period,
//! per-stratum case counts, and optionally transforms the counted series.
//! The pipeline is a sequence of explicit stages rather than one
//! configuration-heavy entry point:
//!
//! 1. [`aggregate`]: parse dates, bucket events into [`Period`]s, count per
//!    [`StratumKey`](epiline_frame::StratumKey), and fill gaps with
//!    zero-count records, independently per stratum
//! 2. [`transform`]: trailing rolling window (sum or mean) and cumulative
//!    totals over the aggregated series, again independently per stratum
//! 3. [`records_to_frame`] / [`transformed_to_frame`]: reshape records into
//!    the tabular output schema
//!
//! # Examples
//!
//! ```
//! use epiline_frame::{Frame, Value};
//! use epiline_incidence::{IncidenceOptions, aggregate};
//!
//! let mut frame = Frame::new(["d", "sex"]);
//! frame.push_row(vec![Value::from("2024-01-01"), Value::from("M")]);
//! frame.push_row(vec![Value::from("2024-01-08"), Value::from("M")]);
//! frame.push_row(vec![Value::from("2024-01-01"), Value::from("F")]);
//!
//! let options = IncidenceOptions {
//!     date_col: "d".into(),
//!     by: vec!["sex".into()],
//!     ..IncidenceOptions::default()
//! };
//! let records = aggregate(&frame, &options).unwrap();
//!
//! // Strata sort ascending: F first, then M with two consecutive weeks.
//! let counts: Vec<u64> = records.iter().map(|r| r.cases).collect();
//! assert_eq!(counts, vec![1, 1, 1]);
//! ```

pub use self::{aggregate::*, table::*, transform::*};

pub mod aggregate;
pub mod table;
pub mod transform;
