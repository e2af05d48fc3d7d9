//! Grouped descriptive statistics for line-list data.
//!
//! The summary engine computes per-stratum descriptive statistics across
//! three kinds of columns:
//!
//! - **date columns**: missingness plus `min`/`max` over leniently parsed
//!   dates
//! - **numeric columns**: missingness plus `count`, `mean`, sample `std`,
//!   `min`, quartiles, and `max` (see [`NumericSummary`])
//! - **categorical columns**: missingness plus a deterministic top-k
//!   ranking (count descending, ties by ascending string)
//!
//! Configuration is deliberately conservative: columns are summarized only
//! when explicitly listed, and with no lists at all the output contains
//! nothing but the group-size metric `n`. Nothing is ever auto-inferred.
//!
//! Results come back as an ordered sequence of [`SummaryRecord`]s, the
//! canonical long form, and can be reshaped into tabular long or wide
//! output without recomputation ([`long_frame`], [`wide_frame`]).
//!
//! # Examples
//!
//! ```
//! use epiline_frame::{Frame, Value};
//! use epiline_summary::{SummaryOptions, summarize};
//!
//! let mut frame = Frame::new(["sex", "age"]);
//! frame.push_row(vec![Value::from("M"), Value::Int(30)]);
//! frame.push_row(vec![Value::from("M"), Value::Int(40)]);
//! frame.push_row(vec![Value::from("F"), Value::Int(20)]);
//!
//! let options = SummaryOptions {
//!     by: vec!["sex".into()],
//!     ..SummaryOptions::default()
//! };
//! let records = summarize(&frame, &options).unwrap();
//!
//! // Only the group sizes: one `n` per stratum, nothing inferred.
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].metric, "n");
//! assert_eq!(records[0].value, Value::Int(1)); // F
//! assert_eq!(records[1].value, Value::Int(2)); // M
//! ```

pub use self::{engine::*, numeric::*, options::*, table::*};

pub mod engine;
pub mod numeric;
pub mod options;
pub mod table;
