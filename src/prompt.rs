//! Interactive entry of the three form fields.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::form::{Field, FormInput};

/// Prompts for day, month and year in turn. End of input leaves the
/// remaining fields empty, which form validation reports as required.
pub fn read_form<R: BufRead, W: Write>(mut reader: R, mut writer: W) -> Result<FormInput> {
    let mut input = FormInput::default();

    for field in Field::ALL {
        write!(writer, "{} ({}): ", field.label(), field.placeholder()).context("Failed to write prompt")?;
        writer.flush().context("Failed to flush prompt")?;

        let mut line = String::new();
        reader
            .read_line(&mut line)
            .with_context(|| format!("Failed to read {} field", field.name()))?;
        input.set(field, line.trim());
    }

    Ok(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reads_three_lines() {
        let mut out = Vec::new();
        let input = read_form(Cursor::new("14\n06\n1992\n"), &mut out).unwrap();
        assert_eq!(input, FormInput::new("14", "06", "1992"));
        assert_eq!(String::from_utf8(out).unwrap(), "DAY (DD): MONTH (MM): YEAR (YYYY): ");
    }

    #[test]
    fn eof_leaves_fields_empty() {
        let input = read_form(Cursor::new("3\n"), Vec::new()).unwrap();
        assert_eq!(input, FormInput::new("3", "", ""));
    }
}
