// Error types for the recurrence and calendar core

use chrono::NaiveDate;
use thiserror::Error;

/// Recoverable failures raised while building rules or rendering months.
///
/// Nothing here performs I/O, so callers surface these to the user and
/// either reject the request or substitute a corrected default.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Unrecognised weekday/cadence name, malformed date, or bad month.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// End date precedes the start date.
    #[error("end date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

impl CalendarError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_range_message_names_both_dates() {
        let err = CalendarError::InvalidRange {
            start: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "end date 2024-03-01 is before start date 2024-03-10"
        );
    }

    #[test]
    fn test_invalid_input_message() {
        let err = CalendarError::invalid_input("unrecognised weekday name: \"Funday\"");
        assert_eq!(
            err.to_string(),
            "invalid input: unrecognised weekday name: \"Funday\""
        );
    }
}
