//! Detailed renderer: coloured breakdown of the calculation.

use colored::Colorize;

use crate::models::PensionOutcome;
use crate::output::OutputRenderer;
use crate::output::plain::NOT_QUALIFIED_MESSAGE;

/// Terminal renderer showing pay, pension right and how it was reached.
pub struct DetailedRenderer;

impl OutputRenderer for DetailedRenderer {
    fn render(&self, outcome: &PensionOutcome) -> String {
        let mut output = String::new();

        match outcome {
            PensionOutcome::Qualified(b) => {
                output.push_str(&format!(" {}\n", "PENSION CALCULATION".bold()));
                output.push_str(&format!(
                    "   {}  {}\n",
                    "Monthly pension pay:".cyan(),
                    format!("{:.2} {}", b.pension_pay, b.currency).green().bold()
                ));
                output.push_str(&format!(
                    "   {}        {}\n",
                    "Pension right:".cyan(),
                    format!("{:.2}%", b.pension_right).bold()
                ));
                output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
                output.push_str(&format!(
                    "   {} {} ({} extra)\n",
                    "Months contributed:".dimmed(),
                    b.months_contributed,
                    b.extra_months
                ));
                output.push_str(&format!(
                    "   {} {:.2}% + {:.2}% = {:.2}%",
                    "Accrued right:".dimmed(),
                    b.total_percentage - b.additional_percentage,
                    b.additional_percentage,
                    b.total_percentage
                ));
                if b.total_percentage > b.pension_right {
                    output.push_str(&format!(" {}", format!("(capped at {:.2}%)", b.pension_right).yellow()));
                }
                output.push('\n');
                output.push_str(&format!(
                    "   {} {}\n",
                    "Average salary (annual):".dimmed(),
                    b.average_salary
                ));
            }
            PensionOutcome::NotQualified {
                months_contributed,
                eligible_months,
                months_short,
            } => {
                output.push_str(&format!(" {} {}\n", "✖".red().bold(), "NOT ELIGIBLE".red().bold()));
                output.push_str(&format!(
                    "   {} (min {} months required)\n",
                    NOT_QUALIFIED_MESSAGE, eligible_months
                ));
                output.push_str(&format!(
                    "   {} {} contributed, {} short\n",
                    "Months:".dimmed(),
                    months_contributed,
                    months_short
                ));
            }
        }

        output
    }
}
