use chrono::NaiveDate;
use clap::{Parser, ValueEnum};

use crate::clock::{Clock, FixedClock, SystemClock};
use crate::error::ConfigError;
use crate::form::FormInput;

#[derive(Parser, Debug, Clone)]
#[command(name = "agecalc", version, about = "Calculate elapsed years, months and days since a birth date")]
pub struct CliConfig {
    #[arg(long, help = "Day of birth (DD)")]
    pub day: Option<String>,

    #[arg(long, help = "Month of birth (MM)")]
    pub month: Option<String>,

    #[arg(long, help = "Year of birth (YYYY)")]
    pub year: Option<String>,

    #[arg(long, env = "AGECALC_TODAY", value_name = "YYYY-MM-DD", help = "Use this date instead of the local date")]
    pub today: Option<String>,

    #[arg(long, value_enum, env = "AGECALC_FORMAT", default_value = "text")]
    pub format: OutputFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl CliConfig {
    /// The form fields given on the command line, or `None` when none were
    /// given and the caller should prompt for them.
    pub fn form_input(&self) -> Option<FormInput> {
        if self.day.is_none() && self.month.is_none() && self.year.is_none() {
            return None;
        }
        Some(FormInput::new(
            self.day.clone().unwrap_or_default(),
            self.month.clone().unwrap_or_default(),
            self.year.clone().unwrap_or_default(),
        ))
    }

    pub fn clock(&self) -> Result<Box<dyn Clock>, ConfigError> {
        match &self.today {
            Some(value) => {
                let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|source| {
                    ConfigError::InvalidToday {
                        value: value.clone(),
                        source,
                    }
                })?;
                Ok(Box::new(FixedClock(date)))
            }
            None => Ok(Box::new(SystemClock)),
        }
    }
}
