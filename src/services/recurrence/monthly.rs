use chrono::{Datelike, NaiveDate};

use crate::models::recurrence::Weekday;
use crate::utils::date::{nth_weekday_of_month, shift_month, weekday_ordinal};

/// Same ordinal weekday as `anchor`, every `month_step` months, up to `end`.
///
/// Each occurrence is derived from the anchor rather than the previous
/// occurrence, so a month that lacks a fifth weekday (and falls back to the
/// last one) does not pull later months earlier.
pub(super) fn generate(anchor: NaiveDate, end: NaiveDate, month_step: u32) -> Vec<NaiveDate> {
    let mut occurrences = Vec::new();
    let weekday = Weekday::of(anchor);
    let ordinal = weekday_ordinal(anchor);
    let mut months_ahead: i32 = 0;

    loop {
        let (year, month) = shift_month(anchor.year(), anchor.month(), months_ahead);
        let Some(occurrence) = nth_weekday_of_month(year, month, weekday, ordinal) else {
            break;
        };

        if occurrence > end {
            break;
        }

        occurrences.push(occurrence);
        months_ahead += month_step as i32;
    }

    occurrences
}
