//! Explicit state behind the month view.
//!
//! Holds the month on display and the last generated list. The caller owns
//! it; navigation and regeneration go through its methods.

use chrono::{Datelike, NaiveDate};

use crate::error::CalendarError;
use crate::models::calendar::CalendarGrid;
use crate::models::date_entry::DateEntry;
use crate::services::calendar::render_entries;
use crate::utils::date::shift_month;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarViewState {
    year: i32,
    month: u32,
    entries: Vec<DateEntry>,
}

impl CalendarViewState {
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(CalendarError::invalid_input(format!(
                "invalid month {year}-{month:02}"
            )));
        }

        Ok(Self {
            year,
            month,
            entries: Vec::new(),
        })
    }

    /// View opened on the month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
            entries: Vec::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn entries(&self) -> &[DateEntry] {
        &self.entries
    }

    pub fn previous_month(&mut self) {
        self.shift(-1);
    }

    pub fn next_month(&mut self) {
        self.shift(1);
    }

    pub fn jump_to(&mut self, date: NaiveDate) {
        self.year = date.year();
        self.month = date.month();
    }

    /// Replace the generated list; the displayed month is left alone.
    pub fn set_entries(&mut self, entries: Vec<DateEntry>) {
        self.entries = entries;
    }

    pub fn clear_entries(&mut self) {
        self.entries.clear();
    }

    /// Move to the month of the first generated date, if any.
    pub fn focus_first_entry(&mut self) -> bool {
        match self.entries.first() {
            Some(entry) => {
                let date = entry.date();
                self.jump_to(date);
                true
            }
            None => false,
        }
    }

    /// Grid for the displayed month with the generated dates marked.
    pub fn grid(&self) -> Result<CalendarGrid, CalendarError> {
        render_entries(&self.entries, self.year, self.month)
    }

    fn shift(&mut self, delta_months: i32) {
        let (year, month) = shift_month(self.year, self.month, delta_months);
        self.year = year;
        self.month = month;
        log::debug!("Displaying {}-{:02}", self.year, self.month);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recurrence::{Cadence, RecurrenceRule, Weekday};
    use crate::services::recurrence::generate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_navigation_wraps_year_boundaries() {
        let mut state = CalendarViewState::new(2024, 12).unwrap();
        state.next_month();
        assert_eq!((state.year(), state.month()), (2025, 1));

        state.previous_month();
        state.previous_month();
        assert_eq!((state.year(), state.month()), (2024, 11));

        let mut january = CalendarViewState::new(2024, 1).unwrap();
        january.previous_month();
        assert_eq!((january.year(), january.month()), (2023, 12));
    }

    #[test]
    fn test_new_rejects_invalid_month() {
        assert!(CalendarViewState::new(2024, 0).is_err());
        assert!(CalendarViewState::new(2024, 13).is_err());
    }

    #[test]
    fn test_grid_marks_generated_dates_for_displayed_month() {
        let rule = RecurrenceRule::new(
            Cadence::Fortnightly,
            [Weekday::Wednesday],
            date(2024, 1, 1),
            date(2024, 2, 29),
        )
        .unwrap();

        let mut state = CalendarViewState::containing(date(2024, 1, 20));
        state.set_entries(generate(&rule));

        assert_eq!(state.grid().unwrap().marked_days(), vec![3, 17, 31]);

        state.next_month();
        assert_eq!(state.grid().unwrap().marked_days(), vec![14, 28]);
    }

    #[test]
    fn test_focus_first_entry() {
        let mut state = CalendarViewState::new(2020, 6).unwrap();
        assert!(!state.focus_first_entry());

        state.set_entries(vec![DateEntry::new(date(2024, 3, 4))]);
        assert!(state.focus_first_entry());
        assert_eq!((state.year(), state.month()), (2024, 3));

        state.clear_entries();
        assert!(state.entries().is_empty());
    }
}
