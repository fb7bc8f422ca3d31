use std::io;
use std::process::ExitCode;

use agecalc::{AgeCalculator, CliConfig, Field, logger, prompt, render};
use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, error};

fn main() -> ExitCode {
    let config = CliConfig::parse();
    logger::init_logger(config.verbose);

    match run(&config) {
        Ok(code) => code,
        Err(e) => {
            error!("agecalc failed: {e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(config: &CliConfig) -> Result<ExitCode> {
    debug!(?config, "starting agecalc");

    let clock = config.clock()?;
    let input = match config.form_input() {
        Some(input) => input,
        None => prompt::read_form(io::stdin().lock(), io::stdout())
            .context("Failed to read birth date from stdin")?,
    };

    let mut calculator = AgeCalculator::new();
    for field in Field::ALL {
        calculator.set_field(field, input.get(field));
    }

    if calculator.submit(clock.as_ref()) {
        let output = render::render_result(&calculator, config.format).context("Failed to render result")?;
        println!("{output}");
        Ok(ExitCode::SUCCESS)
    } else {
        let output =
            render::render_errors(calculator.errors(), config.format).context("Failed to render errors")?;
        eprintln!("{output}");
        Ok(ExitCode::from(1))
    }
}
