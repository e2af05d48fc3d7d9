//! Event counting per period and stratum.

use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};
use epiline_frame::{ConfigurationError, Frame, StratumKey};
use epiline_time::EpiWeek;
use serde::Serialize;

/// Time bucketing mode for incidence counts.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum Frequency {
    /// One period per calendar date.
    Daily,
    /// One period per CDC/MMWR epidemiological week.
    #[default]
    Weekly,
}

/// One time bucket under a given [`Frequency`].
///
/// Every date maps to exactly one period per frequency, and the mapping is
/// monotonic: later dates map to non-earlier periods. A single aggregation
/// run only ever produces one variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, derive_more::Display)]
pub enum Period {
    #[display("{_0}")]
    Day(NaiveDate),
    #[display("{_0}")]
    Week(EpiWeek),
}

impl Period {
    /// Buckets a date under the given frequency.
    #[must_use]
    pub fn from_date(date: NaiveDate, freq: Frequency) -> Self {
        match freq {
            Frequency::Daily => Self::Day(date),
            Frequency::Weekly => Self::Week(EpiWeek::from_date(date)),
        }
    }

    /// The immediately following period of the same frequency.
    #[must_use]
    pub fn succ(self) -> Self {
        match self {
            Self::Day(date) => Self::Day(date + Days::new(1)),
            Self::Week(week) => Self::Week(week.succ()),
        }
    }
}

/// One aggregated count: `cases` events observed for `stratum` in `period`.
///
/// Aggregation emits at most one record per `(stratum, period)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IncidenceRecord {
    pub stratum: StratumKey,
    pub period: Period,
    pub cases: u64,
}

/// Configuration for [`aggregate`].
///
/// Every field has an explicit default; omitted configuration never expands
/// scope.
#[derive(Debug, Clone)]
pub struct IncidenceOptions {
    /// Column holding event dates. Default `"date"`.
    pub date_col: String,
    /// Time bucketing mode. Default [`Frequency::Weekly`].
    pub freq: Frequency,
    /// Stratification columns; empty means all rows form one stratum.
    pub by: Vec<String>,
    /// Insert zero-count records for unobserved periods inside each
    /// stratum's own `[min, max]` period span. Default `true`.
    pub fill_gaps: bool,
}

impl Default for IncidenceOptions {
    fn default() -> Self {
        Self {
            date_col: "date".into(),
            freq: Frequency::default(),
            by: Vec::new(),
            fill_gaps: true,
        }
    }
}

/// Counts line-list events per period and stratum.
///
/// Rows whose date value is missing or unparseable are excluded from the
/// counts. That is missing data, not an error; track it through the
/// summary engine's missingness metrics if needed. Unknown column names
/// fail with [`ConfigurationError::UnknownColumn`] before any counting.
///
/// With `fill_gaps`, zero-count records are inserted for every period
/// absent between a stratum's first and last observed period. The span is
/// computed per stratum: a stratum whose data starts later than another's
/// never receives fabricated leading zeros.
///
/// Output is sorted by stratum, then by period ascending.
pub fn aggregate(
    frame: &Frame,
    options: &IncidenceOptions,
) -> Result<Vec<IncidenceRecord>, ConfigurationError> {
    let date_index = frame.column_index(&options.date_col)?;
    let by_indices = frame.column_indices(&options.by)?;

    // Explicit partition: each stratum owns its period map, so no window of
    // later stages can leak across strata through a shared accumulator.
    let mut counts: BTreeMap<StratumKey, BTreeMap<Period, u64>> = BTreeMap::new();
    for row in frame.rows() {
        let Some(date) = row[date_index].as_date() else {
            continue;
        };
        let stratum = frame.stratum_key(row, &by_indices);
        let period = Period::from_date(date, options.freq);
        *counts.entry(stratum).or_default().entry(period).or_insert(0) += 1;
    }

    let mut records = Vec::new();
    for (stratum, periods) in counts {
        if options.fill_gaps {
            let first = *periods.keys().next().expect("stratum has at least one period");
            let last = *periods.keys().next_back().expect("stratum has at least one period");
            let mut period = first;
            loop {
                let cases = periods.get(&period).copied().unwrap_or(0);
                records.push(IncidenceRecord {
                    stratum: stratum.clone(),
                    period,
                    cases,
                });
                if period == last {
                    break;
                }
                period = period.succ();
            }
        } else {
            for (period, cases) in periods {
                records.push(IncidenceRecord {
                    stratum: stratum.clone(),
                    period,
                    cases,
                });
            }
        }
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use epiline_frame::Value;

    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn week(year: i32, week: u32) -> Period {
        Period::Week(EpiWeek { year, week })
    }

    fn line_list(rows: &[(&str, &str)]) -> Frame {
        let mut frame = Frame::new(["d", "sex"]);
        for (date, sex) in rows {
            frame.push_row(vec![Value::from(*date), Value::from(*sex)]);
        }
        frame
    }

    fn weekly_by_sex() -> IncidenceOptions {
        IncidenceOptions {
            date_col: "d".into(),
            by: vec!["sex".into()],
            ..IncidenceOptions::default()
        }
    }

    #[test]
    fn test_weekly_counts_per_stratum() {
        let frame = line_list(&[
            ("2024-01-01", "M"),
            ("2024-01-08", "M"),
            ("2024-01-01", "F"),
        ]);
        let records = aggregate(&frame, &weekly_by_sex()).unwrap();

        // Sorted by stratum (F < M), then period. No fabricated week 2 for
        // F: its own span is a single week.
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].stratum, StratumKey(vec![Value::from("F")]));
        assert_eq!(records[0].period, week(2024, 1));
        assert_eq!(records[0].cases, 1);
        assert_eq!(records[1].stratum, StratumKey(vec![Value::from("M")]));
        assert_eq!(records[1].period, week(2024, 1));
        assert_eq!(records[2].period, week(2024, 2));
        assert_eq!(records[2].cases, 1);
    }

    #[test]
    fn test_gap_fill_is_per_stratum() {
        let frame = line_list(&[
            ("2024-01-01", "A"), // (2024, 1)
            ("2024-01-22", "A"), // (2024, 4)
            ("2024-01-15", "B"), // (2024, 3) only
        ]);
        let records = aggregate(&frame, &weekly_by_sex()).unwrap();

        let a: Vec<_> = records
            .iter()
            .filter(|r| r.stratum == StratumKey(vec![Value::from("A")]))
            .collect();
        assert_eq!(
            a.iter().map(|r| (r.period, r.cases)).collect::<Vec<_>>(),
            vec![
                (week(2024, 1), 1),
                (week(2024, 2), 0),
                (week(2024, 3), 0),
                (week(2024, 4), 1),
            ]
        );

        // B observed a single week; its filled range is exactly that week.
        let b: Vec<_> = records
            .iter()
            .filter(|r| r.stratum == StratumKey(vec![Value::from("B")]))
            .collect();
        assert_eq!(b.len(), 1);
        assert_eq!(b[0].period, week(2024, 3));
    }

    #[test]
    fn test_gap_fill_crosses_year_boundary() {
        let mut frame = Frame::new(["date"]);
        frame.push_row(vec![Value::from("2023-12-30")]); // (2023, 52)
        frame.push_row(vec![Value::from("2024-01-10")]); // (2024, 2)
        let records = aggregate(&frame, &IncidenceOptions::default()).unwrap();

        assert_eq!(
            records.iter().map(|r| r.period).collect::<Vec<_>>(),
            vec![week(2023, 52), week(2024, 1), week(2024, 2)]
        );
        assert_eq!(
            records.iter().map(|r| r.cases).collect::<Vec<_>>(),
            vec![1, 0, 1]
        );
    }

    #[test]
    fn test_daily_mode_fills_dates() {
        let mut frame = Frame::new(["date"]);
        frame.push_row(vec![Value::from("2024-03-01")]);
        frame.push_row(vec![Value::from("2024-03-04")]);
        frame.push_row(vec![Value::from("2024-03-04")]);
        let options = IncidenceOptions {
            freq: Frequency::Daily,
            ..IncidenceOptions::default()
        };
        let records = aggregate(&frame, &options).unwrap();

        assert_eq!(
            records
                .iter()
                .map(|r| (r.period, r.cases))
                .collect::<Vec<_>>(),
            vec![
                (Period::Day(ymd(2024, 3, 1)), 1),
                (Period::Day(ymd(2024, 3, 2)), 0),
                (Period::Day(ymd(2024, 3, 3)), 0),
                (Period::Day(ymd(2024, 3, 4)), 2),
            ]
        );
    }

    #[test]
    fn test_no_fill_gaps_keeps_observed_periods_only() {
        let mut frame = Frame::new(["date"]);
        frame.push_row(vec![Value::from("2024-01-01")]);
        frame.push_row(vec![Value::from("2024-01-22")]);
        let options = IncidenceOptions {
            fill_gaps: false,
            ..IncidenceOptions::default()
        };
        let records = aggregate(&frame, &options).unwrap();
        assert_eq!(
            records.iter().map(|r| r.period).collect::<Vec<_>>(),
            vec![week(2024, 1), week(2024, 4)]
        );
    }

    #[test]
    fn test_unparseable_dates_are_excluded_not_errors() {
        let frame = line_list(&[
            ("2024-01-01", "M"),
            ("not a date", "M"),
            ("", "M"),
        ]);
        let records = aggregate(&frame, &weekly_by_sex()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].cases, 1);
    }

    #[test]
    fn test_typed_date_values_are_accepted() {
        let mut frame = Frame::new(["date"]);
        frame.push_row(vec![Value::Date(ymd(2024, 1, 1))]);
        let records = aggregate(&frame, &IncidenceOptions::default()).unwrap();
        assert_eq!(records[0].period, week(2024, 1));
    }

    #[test]
    fn test_missing_stratum_value_is_a_distinct_stratum() {
        let mut frame = Frame::new(["d", "sex"]);
        frame.push_row(vec![Value::from("2024-01-01"), Value::from("M")]);
        frame.push_row(vec![Value::from("2024-01-01"), Value::Null]);
        let records = aggregate(&frame, &weekly_by_sex()).unwrap();

        assert_eq!(records.len(), 2);
        // Null sorts before any string value.
        assert_eq!(records[0].stratum, StratumKey(vec![Value::Null]));
        assert_eq!(records[0].cases, 1);
    }

    #[test]
    fn test_unknown_columns_fail_with_no_output() {
        let frame = line_list(&[("2024-01-01", "M")]);
        let options = IncidenceOptions {
            date_col: "onset".into(),
            ..IncidenceOptions::default()
        };
        assert_eq!(
            aggregate(&frame, &options),
            Err(ConfigurationError::UnknownColumn { name: "onset".into() })
        );

        let options = IncidenceOptions {
            date_col: "d".into(),
            by: vec!["province".into()],
            ..IncidenceOptions::default()
        };
        assert!(matches!(
            aggregate(&frame, &options),
            Err(ConfigurationError::UnknownColumn { .. })
        ));
    }

    #[test]
    fn test_empty_frame_yields_no_records() {
        let frame = Frame::new(["date"]);
        let records = aggregate(&frame, &IncidenceOptions::default()).unwrap();
        assert!(records.is_empty());
    }
}
