// Recurrence module
// Cadences, generation modes and validated recurrence rules

mod range;
mod weekday;

pub use range::{DateRange, RangePolicy, DEFAULT_CLAMP_DAYS};
pub use weekday::Weekday;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// Recurrence interval classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cadence {
    Weekly,
    Fortnightly,
    Monthly,
    Bimonthly,
}

impl Cadence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Fortnightly => "Fortnightly",
            Self::Monthly => "Monthly",
            Self::Bimonthly => "Bimonthly",
        }
    }

    pub fn all() -> [Self; 4] {
        [Self::Weekly, Self::Fortnightly, Self::Monthly, Self::Bimonthly]
    }

    /// Only weekly rules may select more than one weekday.
    pub fn allows_multiple_weekdays(&self) -> bool {
        matches!(self, Self::Weekly)
    }

    /// Fixed day step for day-based cadences.
    pub fn day_step(&self) -> Option<u64> {
        match self {
            Self::Weekly => Some(7),
            Self::Fortnightly => Some(14),
            Self::Monthly | Self::Bimonthly => None,
        }
    }

    /// Month step for month-based cadences.
    pub fn month_step(&self) -> Option<u32> {
        match self {
            Self::Weekly | Self::Fortnightly => None,
            Self::Monthly => Some(1),
            Self::Bimonthly => Some(2),
        }
    }

    /// Row stride applied over matching weekdays in [`GenerationMode::Stride`].
    pub fn stride(&self) -> usize {
        match self {
            Self::Weekly => 1,
            Self::Fortnightly => 2,
            Self::Monthly => 4,
            Self::Bimonthly => 8,
        }
    }

    /// Parse a cadence label (English, or the Portuguese labels
    /// "Semanal", "Quinzenal", "Mensal", "Bimestral").
    pub fn parse_name(name: &str) -> Result<Self, CalendarError> {
        match name.trim().to_lowercase().as_str() {
            "weekly" | "semanal" => Ok(Self::Weekly),
            "fortnightly" | "biweekly" | "quinzenal" => Ok(Self::Fortnightly),
            "monthly" | "mensal" => Ok(Self::Monthly),
            "bimonthly" | "bimestral" => Ok(Self::Bimonthly),
            _ => Err(CalendarError::invalid_input(format!(
                "unrecognised cadence: {name:?}"
            ))),
        }
    }
}

impl FromStr for Cadence {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_name(s)
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a cadence is turned into dates.
///
/// The two modes disagree for month-based cadences:
/// * `Calendar` steps through the calendar. Weekly/Fortnightly add 7/14 days;
///   Monthly/Bimonthly land on the same ordinal weekday (e.g. "3rd Tuesday")
///   one/two months later.
/// * `Stride` lists every matching weekday in the range and keeps every
///   1st/2nd/4th/8th one. Its "Monthly" means every fourth match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Calendar,
    Stride,
}

impl FromStr for GenerationMode {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "calendar" => Ok(Self::Calendar),
            "stride" => Ok(Self::Stride),
            _ => Err(CalendarError::invalid_input(format!(
                "unrecognised generation mode: {s:?} (expected calendar or stride)"
            ))),
        }
    }
}

/// Validated recurrence rule.
///
/// Always holds at least one weekday, exactly one unless the cadence is
/// weekly, and an end date on or after the start date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRule {
    cadence: Cadence,
    weekdays: BTreeSet<Weekday>,
    start: NaiveDate,
    end: NaiveDate,
}

impl RecurrenceRule {
    pub fn new(
        cadence: Cadence,
        weekdays: impl IntoIterator<Item = Weekday>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, CalendarError> {
        let weekdays: BTreeSet<Weekday> = weekdays.into_iter().collect();

        if weekdays.is_empty() {
            return Err(CalendarError::invalid_input(
                "at least one weekday must be selected",
            ));
        }

        if weekdays.len() > 1 && !cadence.allows_multiple_weekdays() {
            return Err(CalendarError::invalid_input(format!(
                "{cadence} recurrence takes exactly one weekday, got {}",
                weekdays.len()
            )));
        }

        if end < start {
            return Err(CalendarError::InvalidRange { start, end });
        }

        Ok(Self {
            cadence,
            weekdays,
            start,
            end,
        })
    }

    /// Build a rule from weekday names. Every name is checked before the
    /// rule exists, so an unknown name never yields partial output.
    pub fn from_names<S: AsRef<str>>(
        cadence: Cadence,
        names: &[S],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Self, CalendarError> {
        let weekdays = names
            .iter()
            .map(|name| Weekday::parse_name(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(cadence, weekdays, start, end)
    }

    pub fn cadence(&self) -> Cadence {
        self.cadence
    }

    pub fn weekdays(&self) -> &BTreeSet<Weekday> {
        &self.weekdays
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn range(&self) -> DateRange {
        DateRange::new(self.start, self.end)
    }
}

/// Raw selection handed over by the front end, before validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceRequest {
    pub cadence: Cadence,
    pub weekdays: Vec<String>,
    pub range: DateRange,
}

impl RecurrenceRequest {
    pub fn new(cadence: Cadence, weekdays: Vec<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            cadence,
            weekdays,
            range: DateRange::new(start, end),
        }
    }

    /// Resolve the range with `policy` and validate into a rule.
    pub fn into_rule(self, policy: RangePolicy) -> Result<RecurrenceRule, CalendarError> {
        let range = self.range.resolve(policy)?;
        RecurrenceRule::from_names(self.cadence, &self.weekdays, range.start, range.end)
    }
}
