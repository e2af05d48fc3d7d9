//! Typed table contract for line-list data.
//!
//! This crate defines the minimal tabular interface the epiline engines
//! consume: named, addressable columns over rows that iterate in a stable
//! order. It is intentionally a contract type, not a dataframe library:
//! no joins, no lazy evaluation, no I/O.
//!
//! - [`Value`]: a single cell, with `Null` as a first-class missing marker
//! - [`Frame`]: named columns plus rows of values
//! - [`StratumKey`]: the ordered grouping-column values identifying a
//!   subgroup of rows
//! - [`ConfigurationError`]: the shared error taxonomy for caller
//!   configuration mistakes

pub use self::{frame::*, value::*};

pub mod frame;
pub mod value;

/// Error for configuration problems detected before any computation.
///
/// Engines resolve every referenced column and validate every parameter up
/// front; on failure the call aborts with one of these and produces no
/// partial output.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConfigurationError {
    /// A named column does not exist in the input frame.
    #[display("column not found: {name}")]
    UnknownColumn { name: String },
    /// A rolling window of zero periods was requested.
    #[display("rolling window must be at least 1, got {window}")]
    InvalidWindow { window: usize },
    /// A categorical top-k of zero ranks was requested.
    #[display("top_k must be at least 1, got {top_k}")]
    InvalidTopK { top_k: usize },
}
