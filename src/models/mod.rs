//! Shared types used across all modules.
//!
//! Defines the calculation results, contribution periods and the output
//! format selector. Other modules import from here rather than reaching
//! into each other's internals.

pub mod outcome;
pub mod period;

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub use outcome::{PensionBreakdown, PensionOutcome};
pub use period::YearMonth;

/// How a pension outcome is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The single legacy result line.
    #[default]
    Plain,
    /// Coloured breakdown with the pension right.
    Detailed,
    /// Pretty-printed JSON.
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Detailed => write!(f, "detailed"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(OutputFormat::Plain),
            "detailed" => Ok(OutputFormat::Detailed),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("unknown output format: {s}")),
        }
    }
}
