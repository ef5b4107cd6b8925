//! Clap argument types and validation.

use clap::{ArgAction, Parser};

use ssnit::models::{OutputFormat, YearMonth};

/// SSNIT pension calculator.
///
/// Run without a subcommand to be prompted for your salary and months.
#[derive(Parser, Debug)]
#[command(name = "ssnit", version = ssnit::constants::VERSION)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug). Logs go to stderr.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Calculate a monthly pension.
    Pension(PensionArgs),

    /// Count the months in a contribution period (both ends inclusive).
    Months(MonthsArgs),

    /// Print the effective configuration as TOML.
    Config,

    /// Print version and build information.
    Version,
}

/// Arguments for the `pension` subcommand.
#[derive(Parser, Debug, Default)]
pub struct PensionArgs {
    /// Average of the best 3 years' salary, per annum. Prompted for if absent.
    #[arg(long, allow_negative_numbers = true)]
    pub salary: Option<i64>,

    /// Total months contributed. Prompted for if neither this nor --from is given.
    #[arg(long, allow_negative_numbers = true, conflicts_with = "from")]
    pub months: Option<i64>,

    /// First month of contributions (YYYY-MM).
    #[arg(long, value_name = "YYYY-MM")]
    pub from: Option<YearMonth>,

    /// Last month of contributions (YYYY-MM, default: current month).
    #[arg(long, value_name = "YYYY-MM", requires = "from")]
    pub to: Option<YearMonth>,

    /// Output format (default: from config, else plain).
    #[arg(long)]
    pub format: Option<OutputFormat>,
}

/// Arguments for the `months` subcommand.
#[derive(Parser, Debug)]
pub struct MonthsArgs {
    /// First month of the period (YYYY-MM).
    #[arg(long, value_name = "YYYY-MM")]
    pub from: YearMonth,

    /// Last month of the period (YYYY-MM, default: current month).
    #[arg(long, value_name = "YYYY-MM")]
    pub to: Option<YearMonth>,
}

/// Where the contributed months come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MonthsSource {
    /// Given directly with `--months`.
    Given(i64),
    /// Derived from a `--from`/`--to` period.
    Period { from: YearMonth, to: YearMonth },
    /// Read interactively.
    Prompt,
}

impl PensionArgs {
    /// Resolve how the contributed months will be obtained.
    ///
    /// A period without `--to` ends at `today`.
    pub fn months_source(&self, today: YearMonth) -> MonthsSource {
        if let Some(months) = self.months {
            MonthsSource::Given(months)
        } else if let Some(from) = self.from {
            MonthsSource::Period {
                from,
                to: self.to.unwrap_or(today),
            }
        } else {
            MonthsSource::Prompt
        }
    }
}
