use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AgeError {
    #[error("{day}/{month}/{year} is not a calendar date")]
    InvalidDate { day: i32, month: i32, year: i32 },

    #[error("birth date {date} is after {today}")]
    FutureDate { date: NaiveDate, today: NaiveDate },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid --today value {value:?}, expected YYYY-MM-DD: {source}")]
    InvalidToday {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}
