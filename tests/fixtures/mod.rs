// Test fixtures - reusable test data
// Provides consistent test data across all test files

#![allow(dead_code)]

use chrono::NaiveDate;
use recurring_calendar::models::recurrence::{Cadence, RecurrenceRule, Weekday};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday, Jan 1, 2024
    pub fn jan_1_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    /// Thursday, Feb 29, 2024 (leap day)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }

    /// Tuesday, Dec 31, 2024
    pub fn new_years_eve_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()
    }

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}

/// Sample rules for testing
pub mod rules {
    use super::*;

    /// Monday stand-up every week through February 2024
    pub fn weekly_standup() -> RecurrenceRule {
        RecurrenceRule::new(
            Cadence::Weekly,
            [Weekday::Monday],
            dates::jan_1_2024(),
            dates::leap_day_2024(),
        )
        .unwrap()
    }

    /// Mon/Wed/Fri gym sessions for January 2024
    pub fn gym_sessions() -> RecurrenceRule {
        RecurrenceRule::new(
            Cadence::Weekly,
            [Weekday::Monday, Weekday::Wednesday, Weekday::Friday],
            dates::jan_1_2024(),
            dates::ymd(2024, 1, 31),
        )
        .unwrap()
    }

    /// Fortnightly team meeting on Mondays
    pub fn fortnightly_meeting() -> RecurrenceRule {
        RecurrenceRule::new(
            Cadence::Fortnightly,
            [Weekday::Monday],
            dates::jan_1_2024(),
            dates::leap_day_2024(),
        )
        .unwrap()
    }

    /// Monthly review on the same weekday for the whole of 2024
    pub fn monthly_review() -> RecurrenceRule {
        RecurrenceRule::new(
            Cadence::Monthly,
            [Weekday::Thursday],
            dates::jan_1_2024(),
            dates::new_years_eve_2024(),
        )
        .unwrap()
    }

    /// Bimonthly board meeting for 2024
    pub fn bimonthly_board() -> RecurrenceRule {
        RecurrenceRule::new(
            Cadence::Bimonthly,
            [Weekday::Friday],
            dates::jan_1_2024(),
            dates::new_years_eve_2024(),
        )
        .unwrap()
    }
}
