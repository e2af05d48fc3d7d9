//! CDC/MMWR epidemiological week calculation.
//!
//! Week 1 of an MMWR year is the week containing January 4th; weeks start
//! on Sunday. Every date belongs to exactly one `(year, week)` pair, found
//! by locating the unique year `Y` with
//! `week1_start(Y) <= date < week1_start(Y + 1)`.
//!
//! Week numbers are always in `1..=53`; there is no week 0. A date can
//! land in a different epidemiological year than its calendar year in both
//! directions:
//!
//! ```
//! use chrono::NaiveDate;
//! use epiline_time::EpiWeek;
//!
//! // Late December already in next year's week 1.
//! let d = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
//! assert_eq!(EpiWeek::from_date(d), EpiWeek { year: 2024, week: 1 });
//!
//! // Early January still in the previous year's last week.
//! let d = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
//! assert_eq!(EpiWeek::from_date(d), EpiWeek { year: 2021, week: 52 });
//! ```

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Start date (Sunday) of MMWR week 1 for the given calendar year.
///
/// Week 1 contains January 4th, so its start is the Sunday on or before
/// January 4th of `year`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use epiline_time::mmwr_week1_start;
///
/// assert_eq!(
///     mmwr_week1_start(2024),
///     NaiveDate::from_ymd_opt(2023, 12, 31).unwrap()
/// );
/// ```
#[must_use]
pub fn mmwr_week1_start(year: i32) -> NaiveDate {
    let jan4 = NaiveDate::from_ymd_opt(year, 1, 4).expect("January 4th exists in every year");
    let days_since_sunday = u64::from(jan4.weekday().num_days_from_sunday());
    jan4 - Days::new(days_since_sunday)
}

/// An epidemiological week under the CDC/MMWR system.
///
/// Ordered by `(year, week)`, which makes period ordering agree with date
/// ordering: later dates never map to an earlier `EpiWeek`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    derive_more::Display,
)]
#[display("{year}-W{week:02}")]
pub struct EpiWeek {
    /// The epidemiological year; may differ from the calendar year of dates
    /// near the year boundary.
    pub year: i32,
    /// Week number within the epidemiological year, always in `1..=53`.
    pub week: u32,
}

impl EpiWeek {
    /// Maps a date to its MMWR epidemiological week.
    ///
    /// Finds the unique year `Y` with
    /// `week1_start(Y) <= date < week1_start(Y + 1)`: the candidate is the
    /// calendar year, corrected one year down when the date precedes its
    /// own year's week 1, or one year up when it has already crossed into
    /// the next year's week 1.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        let mut year = date.year();
        let mut start = mmwr_week1_start(year);
        let next_start = mmwr_week1_start(year + 1);

        if date < start {
            year -= 1;
            start = mmwr_week1_start(year);
        } else if date >= next_start {
            year += 1;
            start = next_start;
        }

        // 0 <= days < 371 here, so the cast cannot truncate.
        let days = (date - start).num_days();
        let week = (days / 7) as u32 + 1;
        Self { year, week }
    }

    /// The Sunday this week starts on.
    #[must_use]
    pub fn start(self) -> NaiveDate {
        mmwr_week1_start(self.year) + Days::new(7 * u64::from(self.week - 1))
    }

    /// The next epidemiological week, correct across both 52- and 53-week
    /// year boundaries.
    #[must_use]
    pub fn succ(self) -> Self {
        Self::from_date(self.start() + Days::new(7))
    }
}
