//! Numeric distribution statistics.

/// Distribution summary of a numeric dataset.
///
/// Conventions, fixed as part of the public contract for reproducibility:
///
/// - `std_dev` is the **sample** standard deviation (`n - 1` divisor) and
///   is `None` when the dataset holds fewer than two values.
/// - Quartiles use **linear interpolation between closest ranks** (the
///   "type 7" rule): for `n` sorted values the `q`-quantile sits at rank
///   `(n - 1) * q`, interpolating between the neighboring values.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericSummary {
    /// Number of values in the dataset.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation; `None` for datasets of fewer than two
    /// values.
    pub std_dev: Option<f64>,
    /// Smallest value.
    pub min: f64,
    /// 25th percentile.
    pub p25: f64,
    /// Median (50th percentile).
    pub median: f64,
    /// 75th percentile.
    pub p75: f64,
    /// Largest value.
    pub max: f64,
}

impl NumericSummary {
    /// Computes a summary from unsorted values, sorting internally.
    ///
    /// Returns `None` for an empty dataset.
    ///
    /// # Examples
    ///
    /// ```
    /// use epiline_summary::NumericSummary;
    ///
    /// let stats = NumericSummary::new([4.0, 1.0, 3.0, 2.0]).unwrap();
    /// assert_eq!(stats.mean, 2.5);
    /// assert_eq!(stats.p25, 1.75);
    /// assert_eq!(stats.median, 2.5);
    /// assert_eq!(stats.p75, 3.25);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes a summary from pre-sorted values, skipping the sort.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let std_dev = (count >= 2).then(|| {
            let sum_sq = sorted_values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
            (sum_sq / (n - 1.0)).sqrt()
        });

        Some(Self {
            count,
            mean,
            std_dev,
            min,
            p25: quantile(sorted_values, 0.25),
            median: quantile(sorted_values, 0.5),
            p75: quantile(sorted_values, 0.75),
            max,
        })
    }
}

/// Computes a single quantile from sorted data by linear interpolation
/// between closest ranks.
///
/// `q` is a fraction in `[0, 1]` (values outside are clamped). Returns
/// `f64::NAN` for an empty dataset.
///
/// # Examples
///
/// ```
/// use epiline_summary::quantile;
///
/// let values = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(quantile(&values, 0.5), 2.5);
/// assert_eq!(quantile(&values, 0.25), 1.75);
/// ```
#[expect(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
#[must_use]
pub fn quantile(sorted_values: &[f64], q: f64) -> f64 {
    if sorted_values.is_empty() {
        return f64::NAN;
    }
    let rank = (sorted_values.len() - 1) as f64 * q.clamp(0.0, 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - rank.floor();
    sorted_values[lo] + (sorted_values[hi] - sorted_values[lo]) * frac
}
