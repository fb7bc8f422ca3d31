//! date.rs
//!
//! Gregorian calendar helpers and the birth date validator.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

/// Builds the calendar date named by a day/month/year triple.
///
/// Months outside 1–12 roll over into the neighbouring years (13/2020 is
/// 01/2021, 0/2020 is 12/2019). Returns `None` when the day does not fit the
/// resulting month (31/04, 30/02, 29/02 in a common year, day 0) and for
/// years before 1.
pub fn birth_date(day: i32, month: i32, year: i32) -> Option<NaiveDate> {
    let (year, month) = roll_month(year, month)?;
    if year < 1 {
        return None;
    }
    let day = u32::try_from(day).ok()?;
    if !(1..=days_in_month(year, month)).contains(&day) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Carries a month outside 1–12 into the year.
fn roll_month(year: i32, month: i32) -> Option<(i32, u32)> {
    let zero_based = month.checked_sub(1)?;
    let year = year.checked_add(zero_based.div_euclid(12))?;
    Some((year, zero_based.rem_euclid(12) as u32 + 1))
}

/// Reports whether the triple is a real calendar date that is not after `today`.
pub fn validate_date(day: i32, month: i32, year: i32, today: NaiveDate) -> bool {
    match birth_date(day, month, year) {
        Some(date) if date <= today => true,
        Some(date) => {
            debug!(%date, %today, "rejecting future date");
            false
        }
        None => {
            debug!(day, month, year, "not a calendar date");
            false
        }
    }
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // callers pass months already within 1–12
    }
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The (year, month) immediately before the month containing `date`.
pub fn previous_month(date: NaiveDate) -> (i32, u32) {
    if date.month() == 1 {
        (date.year() - 1, 12)
    } else {
        (date.year(), date.month() - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn leap_day_only_in_leap_years() {
        let today = ymd(2025, 6, 1);
        assert!(validate_date(29, 2, 2024, today));
        assert!(!validate_date(29, 2, 2023, today));
        assert!(validate_date(29, 2, 2000, today));
        assert!(!validate_date(29, 2, 1900, today));
    }

    #[test]
    fn rejects_days_past_month_end() {
        let today = ymd(2025, 6, 1);
        assert!(!validate_date(31, 4, 2020, today));
        assert!(!validate_date(30, 2, 2020, today));
        assert!(validate_date(30, 4, 2020, today));
        assert!(!validate_date(0, 4, 2020, today));
    }

    #[test]
    fn rejects_days_and_years_outside_the_calendar() {
        let today = ymd(2025, 6, 1);
        assert!(!validate_date(-1, 5, 2020, today));
        assert!(!validate_date(1, 1, 0, today));
        assert!(!validate_date(15, 0, 1, today));
    }

    #[test]
    fn months_outside_the_year_roll_over() {
        let today = ymd(2025, 6, 1);
        assert!(validate_date(1, 13, 2020, today));
        assert!(validate_date(15, 0, 2020, today));
        assert_eq!(birth_date(1, 13, 2020), Some(ymd(2021, 1, 1)));
        assert_eq!(birth_date(15, 0, 2020), Some(ymd(2019, 12, 15)));
        assert_eq!(birth_date(30, -1, 2020), Some(ymd(2019, 11, 30)));
        assert_eq!(birth_date(31, -1, 2020), None);
        assert_eq!(birth_date(29, 14, 2023), Some(ymd(2024, 2, 29)));
        // Rolling into the future is still a future date.
        assert!(!validate_date(1, 13, 2024, ymd(2024, 12, 31)));
    }

    #[test]
    fn future_dates_are_invalid_but_today_is_not() {
        let today = ymd(2025, 6, 15);
        assert!(validate_date(15, 6, 2025, today));
        assert!(!validate_date(16, 6, 2025, today));
        assert!(!validate_date(1, 1, 2026, today));
    }

    #[test]
    fn month_lengths() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }

    #[test]
    fn previous_month_wraps_into_december() {
        assert_eq!(previous_month(ymd(2025, 1, 10)), (2024, 12));
        assert_eq!(previous_month(ymd(2025, 3, 31)), (2025, 2));
    }
}
