// Date utility functions
// Month arithmetic and ordinal-weekday lookups shared by the generator and renderer

use chrono::{Datelike, Days, NaiveDate};

use crate::error::CalendarError;
use crate::models::recurrence::Weekday;

/// ISO date format accepted everywhere (`2024-01-31`).
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Number of days in the given month, or `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    // December of the last representable year has no following month
    if month == 12 {
        return Some(31);
    }
    let first_of_next = NaiveDate::from_ymd_opt(year, month + 1, 1)?;
    Some(first_of_next.signed_duration_since(first).num_days() as u32)
}

/// Shift a `(year, month)` pair by `delta_months`, wrapping across years.
pub fn shift_month(year: i32, month: u32, delta_months: i32) -> (i32, u32) {
    let total_months = (year * 12) + (month as i32 - 1) + delta_months;
    let new_year = total_months.div_euclid(12);
    let new_month = total_months.rem_euclid(12) + 1;
    (new_year, new_month as u32)
}

/// First date on or after `date` that falls on `weekday`. Never regresses.
pub fn next_weekday_on_or_after(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let current = date.weekday().num_days_from_monday();
    let target = weekday.num_days_from_monday();
    let days_until_target = (target + 7 - current) % 7;
    date.checked_add_days(Days::new(days_until_target as u64))
}

/// Which occurrence of its weekday `date` is within its month (1..=5).
pub fn weekday_ordinal(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

/// The `ordinal`-th `weekday` of a month.
///
/// When the month has fewer occurrences (a 5th Monday in a four-Monday
/// month), the last occurrence of that weekday is returned instead.
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    ordinal: u32,
) -> Option<NaiveDate> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let first_match = next_weekday_on_or_after(first, weekday)?;
    let last_day = days_in_month(year, month)?;

    let ordinal = ordinal.max(1);
    let mut day = first_match.day() + (ordinal - 1) * 7;
    while day > last_day {
        day -= 7;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a date typed by the user.
///
/// ISO (`YYYY-MM-DD`) is always accepted; `alternate_format` (a chrono
/// format string such as `%d/%m/%Y`) is tried next.
pub fn parse_date(value: &str, alternate_format: Option<&str>) -> Result<NaiveDate, CalendarError> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, ISO_DATE_FORMAT) {
        return Ok(date);
    }

    if let Some(format) = alternate_format {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Ok(date);
        }
    }

    Err(CalendarError::invalid_input(format!(
        "malformed date {value:?} (expected {ISO_DATE_FORMAT}{})",
        alternate_format
            .map(|f| format!(" or {f}"))
            .unwrap_or_default()
    )))
}
