//! CLI command definitions and input resolution.
//!
//! Uses clap derive macros for argument definitions. Values missing from
//! the command line are prompted for on stdin.

pub mod args;

use std::io::{BufRead, Write};

use ssnit::constants::{PROMPT_MONTHS, PROMPT_SALARY};
use ssnit::input::{InputError, prompt_integer};
use ssnit::models::YearMonth;
use ssnit::months::months_between;

use args::{MonthsSource, PensionArgs};

/// Salary and contributed months, ready for calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PensionInputs {
    pub average_salary: i64,
    pub months_contributed: i64,
}

/// Fill in the pension inputs from flags, prompting for anything missing.
///
/// The salary is asked for first, matching the interactive flow.
pub fn resolve_inputs<R, W>(
    args: &PensionArgs,
    today: YearMonth,
    reader: &mut R,
    writer: &mut W,
) -> Result<PensionInputs, InputError>
where
    R: BufRead,
    W: Write,
{
    let average_salary = match args.salary {
        Some(salary) => salary,
        None => prompt_integer(reader, writer, PROMPT_SALARY)?,
    };

    let months_contributed = match args.months_source(today) {
        MonthsSource::Given(months) => months,
        MonthsSource::Period { from, to } => {
            let months = i64::from(months_between(from, to));
            tracing::info!(%from, %to, months, "derived months from contribution period");
            months
        }
        MonthsSource::Prompt => prompt_integer(reader, writer, PROMPT_MONTHS)?,
    };

    Ok(PensionInputs {
        average_salary,
        months_contributed,
    })
}

/// Human-readable month count (`1 month`, `180 months`).
pub fn format_months(months: u32) -> String {
    if months == 1 {
        "1 month".to_string()
    } else {
        format!("{months} months")
    }
}
