use std::collections::BTreeSet;

use crate::models::date_entry::DateEntry;
use crate::models::recurrence::{DateRange, RecurrenceRule, Weekday};

pub(super) fn generate(rule: &RecurrenceRule) -> Vec<DateEntry> {
    let every_day = enumerate_days(rule.range());
    let matching = filter_weekdays(every_day, rule.weekdays());
    apply_stride(matching, rule.cadence().stride())
}

/// Every day in the range, tagged with its weekday.
fn enumerate_days(range: DateRange) -> Vec<DateEntry> {
    range.days().map(DateEntry::new).collect()
}

fn filter_weekdays(entries: Vec<DateEntry>, weekdays: &BTreeSet<Weekday>) -> Vec<DateEntry> {
    entries
        .into_iter()
        .filter(|entry| weekdays.contains(&entry.weekday()))
        .collect()
}

/// Keep rows 0, stride, 2*stride, ...
fn apply_stride(entries: Vec<DateEntry>, stride: usize) -> Vec<DateEntry> {
    entries.into_iter().step_by(stride.max(1)).collect()
}
