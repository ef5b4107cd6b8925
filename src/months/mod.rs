//! Contribution period arithmetic.

use crate::models::YearMonth;

/// Number of months from `start` to `end`, counting both endpoints.
///
/// Order does not matter; a period that starts and ends in the same month
/// is one month long. Years are bounded by [`YEAR_RANGE`], so the count
/// always fits.
///
/// [`YEAR_RANGE`]: crate::models::period::YEAR_RANGE
pub fn months_between(start: YearMonth, end: YearMonth) -> u32 {
    let (earlier, later) = if start <= end { (start, end) } else { (end, start) };

    let year_diff = (later.year() - earlier.year()).unsigned_abs();
    // `later` is not before `earlier`, so this never drops below 1.
    year_diff * 12 + later.month() + 1 - earlier.month()
}
