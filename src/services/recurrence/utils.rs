use chrono::NaiveDate;

use crate::models::date_entry::DateEntry;
use crate::models::recurrence::Weekday;
use crate::utils::date::next_weekday_on_or_after;

/// First occurrence of `weekday` on or after `start`, if it is still within
/// the range.
pub(super) fn anchor_date(start: NaiveDate, end: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    next_weekday_on_or_after(start, weekday).filter(|anchor| *anchor <= end)
}

/// Sort, dedupe and tag the union of per-weekday sequences.
pub(super) fn into_entries(mut dates: Vec<NaiveDate>) -> Vec<DateEntry> {
    dates.sort_unstable();
    dates.dedup();
    dates.into_iter().map(DateEntry::new).collect()
}
