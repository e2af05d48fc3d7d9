//! Strict `YYYY-MM-DD` date parsing.

use chrono::NaiveDate;

/// Error returned when a string does not satisfy the `YYYY-MM-DD` contract.
///
/// Raised for shape violations (missing zero-padding, wrong separators,
/// trailing characters) as well as out-of-range month/day combinations.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid date {input:?}: expected YYYY-MM-DD")]
pub struct FormatError {
    /// The rejected input string.
    pub input: String,
}

/// Parses a strict `YYYY-MM-DD` string into a [`NaiveDate`].
///
/// The input must be exactly ten characters: four digits, `-`, two digits,
/// `-`, two digits, and must name a real Gregorian calendar date. Nothing
/// is coerced; any deviation is a [`FormatError`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use epiline_time::parse_ymd;
///
/// assert_eq!(
///     parse_ymd("2024-02-29").unwrap(),
///     NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
/// );
/// assert!(parse_ymd("2024-2-29").is_err());
/// assert!(parse_ymd("2023-02-29").is_err());
/// ```
pub fn parse_ymd(input: &str) -> Result<NaiveDate, FormatError> {
    let bytes = input.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| if i == 4 || i == 7 { *b == b'-' } else { b.is_ascii_digit() });
    if !shape_ok {
        return Err(FormatError {
            input: input.to_owned(),
        });
    }
    // Shape is right; chrono validates the calendar (leap years, month lengths).
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| FormatError {
        input: input.to_owned(),
    })
}
