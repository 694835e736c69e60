//! Day-granularity calendar primitives shared by the calculation layer.
//!
//! Every date in the crate is a `chrono::NaiveDate` truncated to day
//! granularity. Strings only appear at the repository boundary, where
//! [`parse_day`] rejects anything that is not a real calendar day instead of
//! producing a silently-wrong date.

use chrono::{Datelike, NaiveDate};

use crate::errors::FinanceError;

const DAY_FORMAT: &str = "%Y-%m-%d";
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// Parses a stored date representation into a calendar day.
///
/// Accepts canonical `YYYY-MM-DD` as well as ISO date-time strings; any
/// time-of-day component is discarded before the day is interpreted.
pub fn parse_day(value: &str) -> Result<NaiveDate, FinanceError> {
    let trimmed = value.trim();
    let day_part = trimmed
        .split(|c: char| c == 'T' || c == ' ')
        .next()
        .unwrap_or(trimmed);
    NaiveDate::parse_from_str(day_part, DAY_FORMAT)
        .map_err(|_| FinanceError::InvalidDate(value.to_string()))
}

/// Formats a day in the canonical `YYYY-MM-DD` storage form.
pub fn format_day(date: NaiveDate) -> String {
    date.format(DAY_FORMAT).to_string()
}

/// Formats a day in the `DD/MM/YYYY` form used for display.
pub fn format_day_display(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

/// Inclusive-inclusive window membership test.
pub fn is_within(date: NaiveDate, start: NaiveDate, end: NaiveDate) -> bool {
    start <= date && date <= end
}

pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap()
}

pub fn month_end(date: NaiveDate) -> NaiveDate {
    let day = days_in_month(date.year(), date.month());
    NaiveDate::from_ymd_opt(date.year(), date.month(), day).unwrap()
}

pub fn day_before(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(date)
}

pub fn day_after(date: NaiveDate) -> NaiveDate {
    date.succ_opt().unwrap_or(date)
}

/// Zero-based month counter since year 0, for calendar-month distances.
pub fn month_index(date: NaiveDate) -> i32 {
    date.year() * 12 + date.month() as i32 - 1
}

/// Number of calendar-month transitions between two days (sign follows order).
pub fn months_between(from: NaiveDate, to: NaiveDate) -> i32 {
    month_index(to) - month_index(from)
}

/// Shifts a date by whole calendar months, clamping the day-of-month to the
/// last valid day of shorter target months.
pub fn shift_month(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    let mut day = date.day();
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    day = day.min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap()
}

/// Shifts a date by whole calendar years, clamping Feb 29 to Feb 28 outside
/// leap years.
pub fn shift_year(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    let next_month = if month == 12 { 1 } else { month + 1 };
    let next_year = if month == 12 { year + 1 } else { year };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap());
    let last_current = day_before(first_next);
    last_current.day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_day_accepts_canonical_form() {
        assert_eq!(parse_day("2024-02-29").unwrap(), day(2024, 2, 29));
    }

    #[test]
    fn parse_day_discards_time_of_day() {
        assert_eq!(parse_day("2024-03-05T14:30:00Z").unwrap(), day(2024, 3, 5));
        assert_eq!(parse_day("2024-03-05 14:30:00").unwrap(), day(2024, 3, 5));
    }

    #[test]
    fn parse_day_rejects_invalid_input() {
        for raw in ["", "not-a-date", "2024-13-01", "2023-02-29", "31/01/2024"] {
            assert!(parse_day(raw).is_err(), "expected rejection for {raw:?}");
        }
    }

    #[test]
    fn format_day_round_trips() {
        let d = day(2025, 11, 3);
        assert_eq!(format_day(d), "2025-11-03");
        assert_eq!(parse_day(&format_day(d)).unwrap(), d);
        assert_eq!(format_day_display(d), "03/11/2025");
    }

    #[test]
    fn shift_month_clamps_to_shorter_months() {
        let jan31 = day(2024, 1, 31);
        assert_eq!(shift_month(jan31, 1), day(2024, 2, 29));
        assert_eq!(shift_month(jan31, 2), day(2024, 3, 31));
        assert_eq!(shift_month(jan31, 3), day(2024, 4, 30));
        assert_eq!(shift_month(jan31, 13), day(2025, 2, 28));
        assert_eq!(shift_month(day(2024, 3, 15), -1), day(2024, 2, 15));
    }

    #[test]
    fn shift_year_clamps_leap_day() {
        assert_eq!(shift_year(day(2024, 2, 29), 1), day(2025, 2, 28));
        assert_eq!(shift_year(day(2024, 2, 29), 4), day(2028, 2, 29));
    }

    #[test]
    fn month_window_helpers() {
        let d = day(2024, 2, 15);
        assert_eq!(month_start(d), day(2024, 2, 1));
        assert_eq!(month_end(d), day(2024, 2, 29));
        assert_eq!(day_before(month_start(d)), day(2024, 1, 31));
        assert_eq!(day_after(day(2024, 12, 31)), day(2025, 1, 1));
    }

    #[test]
    fn months_between_counts_calendar_transitions() {
        assert_eq!(months_between(day(2024, 1, 31), day(2024, 2, 1)), 1);
        assert_eq!(months_between(day(2024, 1, 1), day(2024, 1, 31)), 0);
        assert_eq!(months_between(day(2023, 11, 5), day(2024, 2, 5)), 3);
        assert_eq!(months_between(day(2024, 2, 5), day(2023, 11, 5)), -3);
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 12), 31);
        assert_eq!(days_in_month(2024, 4), 30);
    }
}
