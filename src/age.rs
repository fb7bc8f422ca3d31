//! age.rs
//!
//! Elapsed age since a birth date, as whole years, months and days.
//!
//! Chrono does not provide a built-in year/month/day diff (unlike Python’s
//! relativedelta), so the calendar-aware borrowing rules are implemented here.
//!
//! This logic handles:
//!   • month underflow (borrowing from years)
//!   • day underflow (borrowing from the previous month)
//!   • leap years
//!   • varying month lengths, including birth days the previous month lacks

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::date::{birth_date, days_in_month, previous_month};
use crate::error::AgeError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AgeResult {
    pub years: u32,
    pub months: u32,
    /// Days since the last whole month boundary.
    pub days: u32,
}

/// Computes the age of someone born on `day/month/year` as of `today`.
pub fn calculate_age(day: i32, month: i32, year: i32, today: NaiveDate) -> Result<AgeResult, AgeError> {
    let birthdate = birth_date(day, month, year).ok_or(AgeError::InvalidDate { day, month, year })?;
    if birthdate > today {
        return Err(AgeError::FutureDate {
            date: birthdate,
            today,
        });
    }
    Ok(age_on(birthdate, today))
}

/// Returns the elapsed age between `birthdate` and `today`.
///
/// A `birthdate` after `today` yields a zero age.
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> AgeResult {
    if birthdate > today {
        return AgeResult::default();
    }

    let mut years = today.year() - birthdate.year();
    let mut months = today.month() as i32 - birthdate.month() as i32;
    let mut days = today.day() as i32 - birthdate.day() as i32;

    // Fix day underflow: count from the birth day-of-month one month back,
    // or from that month's last day when it is shorter.
    if days < 0 {
        months -= 1;

        let (prev_year, prev_month) = previous_month(today);
        let prev_len = days_in_month(prev_year, prev_month);
        let anchor = birthdate.day().min(prev_len);
        days = (prev_len - anchor + today.day()) as i32;
    }

    // Fix month underflow
    if months < 0 {
        years -= 1;
        months += 12;
    }

    AgeResult {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    }
}

impl fmt::Display for AgeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} year{}, {} month{}, {} day{}",
            self.years,
            plural(self.years),
            self.months,
            plural(self.months),
            self.days,
            plural(self.days)
        )
    }
}

fn plural(n: u32) -> &'static str {
    if n == 1 { "" } else { "s" }
}
