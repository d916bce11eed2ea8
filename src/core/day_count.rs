//! Module `core::day_count`.
//!
//! Time-to-expiry conventions for option valuation. Positions measure expiry as
//! whole calendar days over a 365-day year (Act/365 Fixed).
use chrono::{Local, NaiveDate};

/// Days in the Act/365 Fixed year.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Today's date in the local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Signed number of calendar days from `start` to `end`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Act/365 Fixed year fraction between two dates.
///
/// Edge cases:
/// - If `start == end`, returns `0.0`.
/// - If `start > end`, the result is negative.
///
/// # Examples
/// ```rust
/// use chrono::NaiveDate;
/// use ferric_payoffs::core::year_fraction_act365;
///
/// let s = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
/// let e = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert!((year_fraction_act365(s, e) - 1.0).abs() < 1.0e-12);
/// ```
pub fn year_fraction_act365(start: NaiveDate, end: NaiveDate) -> f64 {
    days_between(start, end) as f64 / DAYS_PER_YEAR
}
