use chrono::{Days, NaiveDate};

/// Dates from `anchor` to `end` inclusive, `step_days` apart.
pub(super) fn generate(anchor: NaiveDate, end: NaiveDate, step_days: u64) -> Vec<NaiveDate> {
    let mut occurrences = Vec::new();
    let mut current = Some(anchor);

    while let Some(date) = current.filter(|date| *date <= end) {
        occurrences.push(date);
        current = date.checked_add_days(Days::new(step_days));
    }

    occurrences
}
