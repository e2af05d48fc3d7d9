//! Summary configuration.

/// Output shape for tabular summary results.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum OutputShape {
    /// One row per `(stratum, column, metric, value)` tuple. The canonical,
    /// schema-stable form.
    #[default]
    Long,
    /// Metrics pivoted into columns, keyed by the grouping columns plus
    /// `column`. A pure reshape of the long form.
    Wide,
}

/// Configuration for [`summarize`](crate::summarize).
///
/// Every recognized field has a stated default, and behavior follows only
/// from what is explicitly listed: with all three column lists empty the
/// output contains only the group-size metric `n` per stratum.
#[derive(Debug, Clone)]
pub struct SummaryOptions {
    /// Grouping columns; empty means the whole input is one stratum.
    pub by: Vec<String>,
    /// Columns summarized as dates (`missing_n`, `missing_pct`, `min`,
    /// `max`). Default: none.
    pub date_cols: Vec<String>,
    /// Columns summarized as numbers (missingness plus distribution
    /// statistics). Default: none.
    pub numeric_cols: Vec<String>,
    /// Columns summarized categorically (missingness plus top-k ranking).
    /// Default: none.
    pub categorical_cols: Vec<String>,
    /// Number of categorical ranks to emit. Default 3; must be at least 1.
    pub top_k: usize,
    /// Requested tabular shape. Default [`OutputShape::Long`].
    pub output: OutputShape,
}

impl Default for SummaryOptions {
    fn default() -> Self {
        Self {
            by: Vec::new(),
            date_cols: Vec::new(),
            numeric_cols: Vec::new(),
            categorical_cols: Vec::new(),
            top_k: 3,
            output: OutputShape::default(),
        }
    }
}
