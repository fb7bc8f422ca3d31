pub mod age;
pub mod clock;
pub mod config;
pub mod date;
pub mod error;
pub mod form;
pub mod logger;
pub mod prompt;
pub mod render;

pub use age::{AgeResult, age_on, calculate_age};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{CliConfig, OutputFormat};
pub use date::validate_date;
pub use error::{AgeError, ConfigError};
pub use form::{AgeCalculator, Field, FieldError, FormErrors, FormInput, validate_form};
