//! Birth date form: raw field input, per-field validation messages and the
//! calculator widget state that ties them to the age arithmetic.

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use thiserror::Error;
use tracing::{debug, info};

use crate::age::{AgeResult, age_on};
use crate::clock::Clock;
use crate::date::{birth_date, validate_date};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Day,
    Month,
    Year,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Day, Field::Month, Field::Year];

    pub fn name(self) -> &'static str {
        match self {
            Field::Day => "day",
            Field::Month => "month",
            Field::Year => "year",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Day => "DAY",
            Field::Month => "MONTH",
            Field::Year => "YEAR",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Day => "DD",
            Field::Month => "MM",
            Field::Year => "YYYY",
        }
    }
}

/// User-facing validation message attached to a field or to the whole date.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("This field is required")]
    Required,

    #[error("Must be a valid number")]
    NotANumber,

    #[error("Must be a valid day")]
    InvalidDay,

    #[error("Must be a valid month")]
    InvalidMonth,

    #[error("Must be in the past")]
    FutureYear,

    #[error("Must be a valid date")]
    InvalidDate,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl FormInput {
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Day => &self.day,
            Field::Month => &self.month,
            Field::Year => &self.year,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Day => &mut self.day,
            Field::Month => &mut self.month,
            Field::Year => &mut self.year,
        };
        *slot = value.into();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormErrors {
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "as_message")]
    pub day: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "as_message")]
    pub month: Option<FieldError>,
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "as_message")]
    pub year: Option<FieldError>,
    /// Problems with the day/month/year combination rather than one field.
    #[serde(skip_serializing_if = "Option::is_none", serialize_with = "as_message")]
    pub date: Option<FieldError>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.day.is_none() && self.month.is_none() && self.year.is_none() && self.date.is_none()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        match field {
            Field::Day => self.day,
            Field::Month => self.month,
            Field::Year => self.year,
        }
    }

    fn set(&mut self, field: Field, error: FieldError) {
        match field {
            Field::Day => self.day = Some(error),
            Field::Month => self.month = Some(error),
            Field::Year => self.year = Some(error),
        }
    }

    /// Messages in display order, keyed by field name (`"date"` for the combination).
    pub fn messages(&self) -> impl Iterator<Item = (&'static str, FieldError)> + '_ {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|e| (field.name(), e)))
            .chain(self.date.map(|e| ("date", e)))
    }
}

fn as_message<S: Serializer>(error: &Option<FieldError>, serializer: S) -> Result<S::Ok, S::Error> {
    match error {
        Some(error) => serializer.collect_str(error),
        None => serializer.serialize_none(),
    }
}

/// Checks the raw form fields and returns the birth date they name.
///
/// Empty fields short-circuit with "required" messages. Otherwise every
/// applicable message is collected: field ranges first, then the
/// day/month/year combination against the calendar and `today`.
pub fn validate_form(input: &FormInput, today: NaiveDate) -> Result<NaiveDate, FormErrors> {
    let mut errors = FormErrors::default();

    for field in Field::ALL {
        if input.get(field).trim().is_empty() {
            errors.set(field, FieldError::Required);
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    let day = parse_field(input, Field::Day, &mut errors);
    let month = parse_field(input, Field::Month, &mut errors);
    let year = parse_field(input, Field::Year, &mut errors);

    if matches!(day, Some(d) if !(1..=31).contains(&d)) {
        errors.day = Some(FieldError::InvalidDay);
    }
    if matches!(month, Some(m) if !(1..=12).contains(&m)) {
        errors.month = Some(FieldError::InvalidMonth);
    }
    if matches!(year, Some(y) if y > today.year()) {
        errors.year = Some(FieldError::FutureYear);
    }

    let birthdate = match (day, month, year) {
        (Some(d), Some(m), Some(y)) if validate_date(d, m, y, today) => birth_date(d, m, y),
        _ => None,
    };
    if birthdate.is_none() {
        errors.date = Some(FieldError::InvalidDate);
    }

    match birthdate {
        Some(date) if errors.is_empty() => Ok(date),
        _ => Err(errors),
    }
}

fn parse_field(input: &FormInput, field: Field, errors: &mut FormErrors) -> Option<i32> {
    match input.get(field).trim().parse::<i32>() {
        Ok(value) => Some(value),
        Err(_) => {
            errors.set(field, FieldError::NotANumber);
            None
        }
    }
}

/// State of one age calculator widget: what was typed, what was wrong with
/// it, and the last successfully computed age.
#[derive(Debug, Clone, Default)]
pub struct AgeCalculator {
    input: FormInput,
    errors: FormErrors,
    result: Option<AgeResult>,
}

impl AgeCalculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.input.set(field, value);
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn result(&self) -> Option<AgeResult> {
        self.result
    }

    /// Validates the form against the clock's date and, when it passes,
    /// replaces the result. A rejected submission keeps the previous result.
    pub fn submit<C: Clock + ?Sized>(&mut self, clock: &C) -> bool {
        let today = clock.today();
        match validate_form(&self.input, today) {
            Ok(birthdate) => {
                let age = age_on(birthdate, today);
                info!(%birthdate, %today, %age, "calculated age");
                self.errors = FormErrors::default();
                self.result = Some(age);
                true
            }
            Err(errors) => {
                debug!(?errors, "form rejected");
                self.errors = errors;
                false
            }
        }
    }

    /// The three result lines, with `--` placeholders before the first result.
    pub fn display_lines(&self) -> [String; 3] {
        let show = |value: Option<u32>| value.map_or_else(|| "--".to_string(), |v| v.to_string());
        [
            format!("{} years", show(self.result.map(|r| r.years))),
            format!("{} months", show(self.result.map(|r| r.months))),
            format!("{} days", show(self.result.map(|r| r.days))),
        ]
    }
}
