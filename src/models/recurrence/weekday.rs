use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CalendarError;

/// Day of the week, ordered Monday first to match the month grid columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
            Self::Sunday => "Sunday",
        }
    }

    pub fn short_label(&self) -> &'static str {
        match self {
            Self::Monday => "Mon",
            Self::Tuesday => "Tue",
            Self::Wednesday => "Wed",
            Self::Thursday => "Thu",
            Self::Friday => "Fri",
            Self::Saturday => "Sat",
            Self::Sunday => "Sun",
        }
    }

    pub fn all() -> [Self; 7] {
        [
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }

    pub fn num_days_from_monday(&self) -> u32 {
        *self as u32
    }

    /// Weekday a calendar date falls on.
    pub fn of(date: NaiveDate) -> Self {
        date.weekday().into()
    }

    /// Parse a weekday name as typed or selected in the front end.
    ///
    /// Accepts English full names and three-letter abbreviations as well as
    /// Portuguese names ("Segunda", "Terça-feira", "Sábado"). Matching is
    /// case-insensitive and ignores accents.
    pub fn parse_name(name: &str) -> Result<Self, CalendarError> {
        let folded: String = name.trim().to_lowercase().chars().map(fold_accent).collect();
        let key = folded.strip_suffix("-feira").unwrap_or(&folded);

        match key {
            "monday" | "mon" | "segunda" => Ok(Self::Monday),
            "tuesday" | "tue" | "terca" => Ok(Self::Tuesday),
            "wednesday" | "wed" | "quarta" => Ok(Self::Wednesday),
            "thursday" | "thu" | "quinta" => Ok(Self::Thursday),
            "friday" | "fri" | "sexta" => Ok(Self::Friday),
            "saturday" | "sat" | "sabado" => Ok(Self::Saturday),
            "sunday" | "sun" | "domingo" => Ok(Self::Sunday),
            _ => Err(CalendarError::invalid_input(format!(
                "unrecognised weekday name: {name:?}"
            ))),
        }
    }
}

fn fold_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' => 'a',
        'é' | 'ê' => 'e',
        'í' => 'i',
        'ó' | 'ô' | 'õ' => 'o',
        'ú' => 'u',
        'ç' => 'c',
        other => other,
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Monday => chrono::Weekday::Mon,
            Weekday::Tuesday => chrono::Weekday::Tue,
            Weekday::Wednesday => chrono::Weekday::Wed,
            Weekday::Thursday => chrono::Weekday::Thu,
            Weekday::Friday => chrono::Weekday::Fri,
            Weekday::Saturday => chrono::Weekday::Sat,
            Weekday::Sunday => chrono::Weekday::Sun,
        }
    }
}

impl FromStr for Weekday {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_name(s)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
