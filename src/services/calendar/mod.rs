//! Month grid rendering.
//!
//! [`render`] lays a month out as Monday-first weeks and marks the days that
//! appear in a set of dates. The `text` and `html` presenters turn the grid
//! into terminal output or an HTML table.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

use crate::error::CalendarError;
use crate::models::calendar::{CalendarCell, CalendarGrid};
use crate::models::date_entry::DateEntry;
use crate::utils::date::days_in_month;

mod html;
mod text;

pub use html::to_html;
pub use text::to_text;

/// Lay out `year`-`month` and mark every day found in `marked`.
///
/// Row count is the number of Monday-first weeks overlapping the month.
/// Fails with `InvalidInput` when `month` is not 1..=12.
pub fn render(
    marked: &BTreeSet<NaiveDate>,
    year: i32,
    month: u32,
) -> Result<CalendarGrid, CalendarError> {
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        CalendarError::invalid_input(format!("invalid month {year}-{month:02}"))
    })?;
    let days_in_month = days_in_month(year, month).ok_or_else(|| {
        CalendarError::invalid_input(format!("invalid month {year}-{month:02}"))
    })? as i64;

    let first_weekday = first_of_month.weekday().num_days_from_monday() as i64;
    let total_cells = first_weekday + days_in_month;
    let weeks_needed = (total_cells + 6) / 7;

    let mut weeks = Vec::with_capacity(weeks_needed as usize);
    let mut day_counter = 1 - first_weekday;

    for _week_row in 0..weeks_needed {
        let mut week = [CalendarCell::Empty; 7];
        for cell in week.iter_mut() {
            if day_counter >= 1 && day_counter <= days_in_month {
                let day = day_counter as u32;
                let is_marked = first_of_month
                    .with_day(day)
                    .is_some_and(|date| marked.contains(&date));
                *cell = if is_marked {
                    CalendarCell::Marked(day)
                } else {
                    CalendarCell::Plain(day)
                };
            }
            day_counter += 1;
        }
        weeks.push(week);
    }

    log::debug!(
        "Rendered {year}-{month:02}: {} week(s), {} marked",
        weeks.len(),
        weeks
            .iter()
            .flatten()
            .filter(|cell| cell.is_marked())
            .count()
    );

    Ok(CalendarGrid::new(year, month, weeks))
}

/// Collect the dates of generated entries for [`render`].
pub fn marked_dates<'a>(entries: impl IntoIterator<Item = &'a DateEntry>) -> BTreeSet<NaiveDate> {
    entries.into_iter().map(DateEntry::date).collect()
}

/// Render a month with the given entries marked.
pub fn render_entries(
    entries: &[DateEntry],
    year: i32,
    month: u32,
) -> Result<CalendarGrid, CalendarError> {
    render(&marked_dates(entries), year, month)
}
