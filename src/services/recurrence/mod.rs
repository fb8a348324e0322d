use chrono::NaiveDate;

use crate::error::CalendarError;
use crate::models::date_entry::DateEntry;
use crate::models::recurrence::{GenerationMode, RangePolicy, RecurrenceRequest, RecurrenceRule};

mod monthly;
mod stride;
mod utils;
mod weekly;

use utils::{anchor_date, into_entries};

/// Generate the dates of `rule` in [`GenerationMode::Calendar`] mode.
///
/// The result is strictly ascending, free of duplicates, and every entry
/// falls on one of the rule's weekdays.
pub fn generate(rule: &RecurrenceRule) -> Vec<DateEntry> {
    generate_with_mode(rule, GenerationMode::Calendar)
}

/// Generate the dates of `rule` with an explicit generation mode.
pub fn generate_with_mode(rule: &RecurrenceRule, mode: GenerationMode) -> Vec<DateEntry> {
    let entries = match mode {
        GenerationMode::Calendar => generate_calendar(rule),
        GenerationMode::Stride => stride::generate(rule),
    };

    log::debug!(
        "Generated {} {} date(s) in {:?} mode between {} and {}",
        entries.len(),
        rule.cadence(),
        mode,
        rule.start(),
        rule.end()
    );

    entries
}

/// Validate a raw front-end selection and generate its dates.
///
/// Unknown weekday names fail with `InvalidInput` and an inverted range is
/// handled by `policy`; on error nothing is generated.
pub fn generate_request(
    request: RecurrenceRequest,
    policy: RangePolicy,
    mode: GenerationMode,
) -> Result<Vec<DateEntry>, CalendarError> {
    let rule = request.into_rule(policy)?;
    Ok(generate_with_mode(&rule, mode))
}

/// A one-off event: exactly one entry for `date`.
pub fn generate_single(date: NaiveDate) -> Vec<DateEntry> {
    vec![DateEntry::new(date)]
}

fn generate_calendar(rule: &RecurrenceRule) -> Vec<DateEntry> {
    let cadence = rule.cadence();
    let mut dates = Vec::new();

    for &weekday in rule.weekdays() {
        let Some(anchor) = anchor_date(rule.start(), rule.end(), weekday) else {
            continue;
        };

        let occurrences = match (cadence.day_step(), cadence.month_step()) {
            (Some(step_days), _) => weekly::generate(anchor, rule.end(), step_days),
            (None, Some(step_months)) => monthly::generate(anchor, rule.end(), step_months),
            (None, None) => vec![anchor],
        };
        dates.extend(occurrences);
    }

    into_entries(dates)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::recurrence::{Cadence, Weekday};
    use chrono::Duration;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn dates(entries: &[DateEntry]) -> Vec<NaiveDate> {
        entries.iter().map(DateEntry::date).collect()
    }

    #[test]
    fn test_weekly_monday_over_28_days() {
        let rule = RecurrenceRule::new(
            Cadence::Weekly,
            [Weekday::Monday],
            date(2024, 1, 1),
            date(2024, 1, 28),
        )
        .unwrap();

        let entries = generate(&rule);
        assert_eq!(entries.len(), 4);
        assert!(entries.iter().all(|e| e.weekday() == Weekday::Monday));
    }

    #[test]
    fn test_fortnightly_is_fourteen_days_apart() {
        let rule = RecurrenceRule::new(
            Cadence::Fortnightly,
            [Weekday::Monday],
            date(2024, 1, 1),
            date(2024, 2, 29),
        )
        .unwrap();

        let result = dates(&generate(&rule));
        assert_eq!(
            result,
            vec![
                date(2024, 1, 1),
                date(2024, 1, 15),
                date(2024, 1, 29),
                date(2024, 2, 12),
                date(2024, 2, 26)
            ]
        );
        for pair in result.windows(2) {
            assert_eq!(pair[1] - pair[0], Duration::days(14));
        }
    }

    #[test]
    fn test_weekly_multiple_weekdays_are_merged_in_order() {
        let rule = RecurrenceRule::new(
            Cadence::Weekly,
            [Weekday::Friday, Weekday::Tuesday],
            date(2024, 1, 3),
            date(2024, 1, 16),
        )
        .unwrap();

        assert_eq!(
            dates(&generate(&rule)),
            vec![
                date(2024, 1, 5),
                date(2024, 1, 9),
                date(2024, 1, 12),
                date(2024, 1, 16)
            ]
        );
    }

    #[test]
    fn test_first_occurrence_never_before_start() {
        // Start on a Wednesday, select Monday: first hit is the following Monday
        let rule = RecurrenceRule::new(
            Cadence::Weekly,
            [Weekday::Monday],
            date(2024, 1, 3),
            date(2024, 1, 20),
        )
        .unwrap();

        assert_eq!(
            dates(&generate(&rule)),
            vec![date(2024, 1, 8), date(2024, 1, 15)]
        );
    }

    #[test]
    fn test_weekday_absent_from_range_yields_nothing() {
        let rule = RecurrenceRule::new(
            Cadence::Monthly,
            [Weekday::Sunday],
            date(2024, 1, 1),
            date(2024, 1, 5),
        )
        .unwrap();

        assert!(generate(&rule).is_empty());
    }

    #[test]
    fn test_monthly_modes_disagree() {
        let rule = RecurrenceRule::new(
            Cadence::Monthly,
            [Weekday::Tuesday],
            date(2024, 1, 16),
            date(2024, 3, 31),
        )
        .unwrap();

        assert_eq!(
            dates(&generate_with_mode(&rule, GenerationMode::Calendar)),
            vec![date(2024, 1, 16), date(2024, 2, 20), date(2024, 3, 19)]
        );
        // Every fourth Tuesday from the 16th: 16 Jan, 13 Feb, 12 Mar
        assert_eq!(
            dates(&generate_with_mode(&rule, GenerationMode::Stride)),
            vec![date(2024, 1, 16), date(2024, 2, 13), date(2024, 3, 12)]
        );
    }

    #[test]
    fn test_generate_request_rejects_unknown_weekday() {
        let request = RecurrenceRequest::new(
            Cadence::Weekly,
            vec!["Monday".to_string(), "Blursday".to_string()],
            date(2024, 1, 1),
            date(2024, 1, 31),
        );

        let result = generate_request(request, RangePolicy::Reject, GenerationMode::Calendar);
        assert!(matches!(result, Err(CalendarError::InvalidInput(_))));
    }

    #[test]
    fn test_generate_request_with_reject_policy() {
        let request = RecurrenceRequest::new(
            Cadence::Weekly,
            vec!["Monday".to_string()],
            date(2024, 2, 1),
            date(2024, 1, 1),
        );

        let result = generate_request(request, RangePolicy::Reject, GenerationMode::Calendar);
        assert_eq!(
            result,
            Err(CalendarError::InvalidRange {
                start: date(2024, 2, 1),
                end: date(2024, 1, 1),
            })
        );
    }

    #[test]
    fn test_generate_request_with_clamp_policy() {
        let request = RecurrenceRequest::new(
            Cadence::Weekly,
            vec!["Thursday".to_string()],
            date(2024, 2, 1),
            date(2024, 1, 1),
        );

        let entries = generate_request(
            request,
            RangePolicy::Clamp { days: 30 },
            GenerationMode::Calendar,
        )
        .unwrap();
        // 2024-02-01 .. 2024-03-02
        assert_eq!(
            dates(&entries),
            vec![
                date(2024, 2, 1),
                date(2024, 2, 8),
                date(2024, 2, 15),
                date(2024, 2, 22),
                date(2024, 2, 29)
            ]
        );
    }

    #[test]
    fn test_generate_single() {
        let entries = generate_single(date(2024, 5, 17));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].weekday(), Weekday::Friday);
    }
}
