//! Result types produced by the pension calculation.

use serde::{Deserialize, Serialize};

/// Every intermediate figure of a qualifying calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PensionBreakdown {
    /// Average of the best three years' salary, per annum.
    pub average_salary: i64,
    /// Total months contributed.
    pub months_contributed: i64,
    /// Months contributed beyond the eligibility minimum.
    pub extra_months: i64,
    /// Percent earned by the extra months.
    pub additional_percentage: f64,
    /// Base plus additional percent, before the cap.
    pub total_percentage: f64,
    /// The capped percentage ("pension right").
    pub pension_right: f64,
    /// Monthly pension pay.
    pub pension_pay: f64,
    /// Currency of `pension_pay`.
    pub currency: String,
}

/// Outcome of a pension calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PensionOutcome {
    /// The contributor qualifies; carries the full breakdown.
    Qualified(PensionBreakdown),
    /// Fewer months than the minimum were contributed.
    NotQualified {
        months_contributed: i64,
        eligible_months: i64,
        /// How many more months are needed to qualify.
        months_short: i64,
    },
}

impl PensionOutcome {
    /// Returns `true` if the contributor qualifies for a pension.
    pub fn is_qualified(&self) -> bool {
        matches!(self, PensionOutcome::Qualified(_))
    }

    /// Monthly pension pay, or `None` when not qualified.
    pub fn pension_pay(&self) -> Option<f64> {
        match self {
            PensionOutcome::Qualified(b) => Some(b.pension_pay),
            PensionOutcome::NotQualified { .. } => None,
        }
    }

    /// Pension right in percent, or `None` when not qualified.
    pub fn pension_right(&self) -> Option<f64> {
        match self {
            PensionOutcome::Qualified(b) => Some(b.pension_right),
            PensionOutcome::NotQualified { .. } => None,
        }
    }
}
