//! The named-column table contract.

use crate::{ConfigurationError, StratumKey, Value};

/// A table of [`Value`]s with named, addressable columns and rows that
/// iterate in a stable order.
///
/// This is the input contract for every epiline engine and the shape of
/// their tabular outputs. Rows are stored row-major; columns are addressed
/// by name through [`Frame::column_index`].
///
/// # Examples
///
/// ```
/// use epiline_frame::{Frame, Value};
///
/// let mut frame = Frame::new(["d", "sex"]);
/// frame.push_row(vec![Value::from("2024-01-01"), Value::from("M")]);
/// frame.push_row(vec![Value::from("2024-01-08"), Value::Null]);
///
/// assert_eq!(frame.n_rows(), 2);
/// assert_eq!(frame.column_index("sex").unwrap(), 1);
/// assert!(frame.column_index("missing").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Frame {
    /// Creates an empty frame with the given column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row.
    ///
    /// # Panics
    ///
    /// Panics if the row arity does not match the column count; mismatched
    /// arity is a programming error, not a data problem.
    pub fn push_row(&mut self, row: Vec<Value>) {
        assert_eq!(
            row.len(),
            self.columns.len(),
            "row arity must match column count"
        );
        self.rows.push(row);
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Resolves a column name to its index.
    pub fn column_index(&self, name: &str) -> Result<usize, ConfigurationError> {
        self.columns
            .iter()
            .position(|c| c == name)
            .ok_or_else(|| ConfigurationError::UnknownColumn {
                name: name.to_owned(),
            })
    }

    /// Resolves several column names at once, failing on the first unknown
    /// name. Engines call this before any computation so that configuration
    /// mistakes never produce partial output.
    pub fn column_indices(&self, names: &[String]) -> Result<Vec<usize>, ConfigurationError> {
        names.iter().map(|name| self.column_index(name)).collect()
    }

    /// Rows in insertion order.
    pub fn rows(&self) -> impl Iterator<Item = &[Value]> {
        self.rows.iter().map(Vec::as_slice)
    }

    /// All values of one column, in row order.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows.iter().map(move |row| &row[index])
    }

    /// Extracts the [`StratumKey`] for a row from the given grouping-column
    /// indices. Missing values stay in the key as [`Value::Null`].
    #[must_use]
    pub fn stratum_key(&self, row: &[Value], by_indices: &[usize]) -> StratumKey {
        StratumKey(by_indices.iter().map(|&i| row[i].clone()).collect())
    }
}
