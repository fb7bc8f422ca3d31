//! Output of a submitted form in the selected format.

use serde_json::json;

use crate::config::OutputFormat;
use crate::form::{AgeCalculator, FormErrors};

pub fn render_result(calculator: &AgeCalculator, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(calculator.display_lines().join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(&calculator.result()),
    }
}

pub fn render_errors(errors: &FormErrors, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Text => Ok(errors
            .messages()
            .map(|(name, error)| format!("{name}: {error}"))
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => serde_json::to_string_pretty(&json!({ "errors": errors })),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::form::Field;
    use chrono::NaiveDate;

    fn submitted(day: &str, month: &str, year: &str) -> AgeCalculator {
        let mut calculator = AgeCalculator::new();
        calculator.set_field(Field::Day, day);
        calculator.set_field(Field::Month, month);
        calculator.set_field(Field::Year, year);
        calculator.submit(&FixedClock(NaiveDate::from_ymd_opt(2025, 3, 15).unwrap()));
        calculator
    }

    #[test]
    fn text_result() {
        let calculator = submitted("20", "8", "2000");
        assert_eq!(
            render_result(&calculator, OutputFormat::Text).unwrap(),
            "24 years\n6 months\n23 days"
        );
    }

    #[test]
    fn json_result() {
        let calculator = submitted("20", "8", "2000");
        let value: serde_json::Value =
            serde_json::from_str(&render_result(&calculator, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value, json!({ "years": 24, "months": 6, "days": 23 }));
    }

    #[test]
    fn text_and_json_errors() {
        let calculator = submitted("31", "4", "");
        assert_eq!(
            render_errors(calculator.errors(), OutputFormat::Text).unwrap(),
            "year: This field is required"
        );

        let calculator = submitted("31", "4", "2020");
        let value: serde_json::Value =
            serde_json::from_str(&render_errors(calculator.errors(), OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value, json!({ "errors": { "date": "Must be a valid date" } }));
    }
}
