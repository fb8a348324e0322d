use chrono::{Days, NaiveDate};

use crate::error::CalendarError;

/// Days added to the start date when an inverted range is clamped.
pub const DEFAULT_CLAMP_DAYS: u32 = 30;

/// What to do with a range whose end date precedes its start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePolicy {
    /// Fail with `InvalidRange`.
    Reject,
    /// Replace the end with `start + days`.
    Clamp { days: u32 },
}

impl Default for RangePolicy {
    fn default() -> Self {
        Self::Clamp {
            days: DEFAULT_CLAMP_DAYS,
        }
    }
}

/// Inclusive span of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Range covering `start` through `start + days`.
    pub fn starting_at(start: NaiveDate, days: u32) -> Self {
        let end = start
            .checked_add_days(Days::new(days as u64))
            .unwrap_or(NaiveDate::MAX);
        Self { start, end }
    }

    pub fn is_inverted(&self) -> bool {
        self.end < self.start
    }

    /// Apply `policy` to an inverted range; ordered ranges pass through.
    pub fn resolve(self, policy: RangePolicy) -> Result<Self, CalendarError> {
        if !self.is_inverted() {
            return Ok(self);
        }

        match policy {
            RangePolicy::Reject => Err(CalendarError::InvalidRange {
                start: self.start,
                end: self.end,
            }),
            RangePolicy::Clamp { days } => {
                let clamped = Self::starting_at(self.start, days);
                log::warn!(
                    "End date {} precedes start date {}; using {} instead",
                    self.end,
                    self.start,
                    clamped.end
                );
                Ok(clamped)
            }
        }
    }

    /// Every day from start to end inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |day| *day <= end)
    }
}
