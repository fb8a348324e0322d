// Calendar grid model
// Monday-first month table produced by the calendar renderer

use chrono::NaiveDate;
use serde::Serialize;

/// One cell of a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "day", rename_all = "lowercase")]
pub enum CalendarCell {
    /// Padding before the first or after the last day of the month.
    Empty,
    Plain(u32),
    Marked(u32),
}

impl CalendarCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            Self::Empty => None,
            Self::Plain(day) | Self::Marked(day) => Some(*day),
        }
    }

    pub fn is_marked(&self) -> bool {
        matches!(self, Self::Marked(_))
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Weeks x 7 table for one month. Columns run Monday to Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarGrid {
    year: i32,
    month: u32,
    weeks: Vec<[CalendarCell; 7]>,
}

impl CalendarGrid {
    pub(crate) fn new(year: i32, month: u32, weeks: Vec<[CalendarCell; 7]>) -> Self {
        Self { year, month, weeks }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weeks(&self) -> &[[CalendarCell; 7]] {
        &self.weeks
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    pub fn cells(&self) -> impl DoubleEndedIterator<Item = &CalendarCell> {
        self.weeks.iter().flatten()
    }

    /// Days of the month that are marked, ascending.
    pub fn marked_days(&self) -> Vec<u32> {
        self.cells()
            .filter(|cell| cell.is_marked())
            .filter_map(CalendarCell::day)
            .collect()
    }

    /// Empty cells before day 1.
    pub fn leading_empty(&self) -> usize {
        self.cells().take_while(|cell| cell.is_empty()).count()
    }

    /// Empty cells after the last day.
    pub fn trailing_empty(&self) -> usize {
        self.cells().rev().take_while(|cell| cell.is_empty()).count()
    }

    /// Month heading, e.g. "January 2024".
    pub fn title(&self) -> String {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .map(|first| first.format("%B %Y").to_string())
            .unwrap_or_else(|| format!("{}-{:02}", self.year, self.month))
    }
}
