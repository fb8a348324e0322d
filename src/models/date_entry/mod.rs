// Date entry model
// A generated calendar date paired with its weekday

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use crate::models::recurrence::Weekday;

/// Immutable generated date. The weekday is derived from the date, so the
/// two can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct DateEntry {
    date: NaiveDate,
    weekday: Weekday,
}

impl DateEntry {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weekday: Weekday::of(date),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn weekday(&self) -> Weekday {
        self.weekday
    }

    pub fn weekday_name(&self) -> &'static str {
        self.weekday.name()
    }
}

impl From<NaiveDate> for DateEntry {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

impl fmt::Display for DateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.date.format("%Y-%m-%d"), self.weekday)
    }
}
