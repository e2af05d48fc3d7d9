//! Calendar dates and CDC/MMWR epidemiological weeks.
//!
//! This crate is the time foundation of the epiline workspace:
//!
//! - [`parse_ymd`]: strict `YYYY-MM-DD` parsing into [`chrono::NaiveDate`]
//! - [`mmwr_week1_start`]: the Sunday that starts MMWR week 1 of a year
//! - [`EpiWeek`]: a `(year, week)` pair under the CDC/MMWR week system
//!
//! # The MMWR week system
//!
//! Weeks start on Sunday, and week 1 of a year is the week containing
//! January 4th. The epidemiological year is therefore not always the
//! calendar year: a late-December date can already belong to week 1 of the
//! next year, and an early-January date can still belong to the last week
//! of the previous year.
//!
//! ```
//! use chrono::NaiveDate;
//! use epiline_time::EpiWeek;
//!
//! let d = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
//! assert_eq!(EpiWeek::from_date(d), EpiWeek { year: 2024, week: 1 });
//! ```
//!
//! Other week systems (ISO, WHO) are intentionally not implemented; the
//! `EpiWeek` type does not bake the MMWR rules into its representation, so
//! another system could be added as a separate constructor.

pub use self::{date::*, epiweek::*};

pub mod date;
pub mod epiweek;
