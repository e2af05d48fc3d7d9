//! Cell values and stratum keys.

use std::{cmp::Ordering, fmt};

use chrono::NaiveDate;
use epiline_time::parse_ymd;
use serde::Serialize;

/// A single cell of a [`Frame`](crate::Frame).
///
/// `Null` marks a missing value and is never silently dropped: engines
/// either count it as missingness or keep it as a distinct stratum value.
///
/// # Ordering
///
/// `Value` carries a documented total order so that strata and categorical
/// rankings are deterministic even for heterogeneous columns: values are
/// ordered by type rank first (`Null < Int < Float < Str < Date`), then by
/// value within a type. Floats compare via [`f64::total_cmp`], so the order
/// (and the matching `Eq`) is total even in the presence of `NaN`.
/// `Int(1)` and `Float(1.0)` are distinct values under this order.
#[derive(Debug, Clone, Serialize, derive_more::From)]
#[serde(untagged)]
pub enum Value {
    /// Missing.
    #[from(ignore)]
    Null,
    Int(i64),
    Float(f64),
    Str(String),
    Date(NaiveDate),
}

impl Value {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Lenient date coercion: `Date` values pass through, strings parse
    /// under the strict `YYYY-MM-DD` contract, everything else is `None`.
    #[must_use]
    pub fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            Self::Str(s) => parse_ymd(s).ok(),
            _ => None,
        }
    }

    /// Lenient numeric coercion: `Int` and `Float` values pass through,
    /// numeric strings parse, everything else is `None`.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Str(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    fn type_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Int(_) => 1,
            Self::Float(_) => 2,
            Self::Str(_) => 3,
            Self::Date(_) => 4,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Null, Self::Null) => Ordering::Equal,
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            (Self::Date(a), Self::Date(b)) => a.cmp(b),
            _ => self.type_rank().cmp(&other.type_rank()),
        }
    }
}

/// `Null` renders as the empty string; dates as `YYYY-MM-DD`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(v) => f.write_str(v),
            Self::Date(v) => write!(f, "{v}"),
        }
    }
}

/// The ordered grouping-column values identifying one stratum.
///
/// An empty key means "all rows form one stratum". Missing grouping values
/// stay in the key as [`Value::Null`], so rows with a missing stratum value
/// form their own stable subgroup instead of disappearing.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct StratumKey(pub Vec<Value>);

impl StratumKey {
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
