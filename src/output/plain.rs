//! Plain renderer: the single result line.

use crate::models::PensionOutcome;
use crate::output::OutputRenderer;

pub const NOT_QUALIFIED_MESSAGE: &str = "You do not qualify for pension";

/// Prints `Your pension pay will be  X.X GHS` or the not-qualified message.
pub struct PlainRenderer;

impl OutputRenderer for PlainRenderer {
    fn render(&self, outcome: &PensionOutcome) -> String {
        match outcome {
            // Two spaces before the amount are part of the expected line.
            PensionOutcome::Qualified(b) => format!(
                "Your pension pay will be  {:.1} {}\n",
                b.pension_pay, b.currency
            ),
            PensionOutcome::NotQualified { .. } => format!("{NOT_QUALIFIED_MESSAGE}\n"),
        }
    }
}
