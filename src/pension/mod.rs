//! SSNIT pension calculation.
//!
//! A contributor qualifies after [`ELIGIBLE_MONTHS`] months and earns a base
//! pension right of 37.5%. Every further 12 months add 1.125%, up to a cap of
//! 60%. The monthly pay is the pension right applied to one twelfth of the
//! average of the best three years' annual salary.
//!
//! The calculation is pure: it returns a [`PensionOutcome`] and leaves
//! printing to [`crate::output`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    ACCRUAL_PER_YEAR, BASE_ELIGIBLE_PERCENTAGE, CURRENCY, ELIGIBLE_MONTHS, MAX_PENSION_RIGHT,
};
use crate::models::{PensionBreakdown, PensionOutcome};

/// A scheme parameter that cannot produce a sensible calculation.
#[derive(Error, Debug, PartialEq)]
pub enum SchemeError {
    #[error("eligible_months must not be negative (got {0})")]
    NegativeEligibleMonths(i64),

    #[error("{field} must be a finite, non-negative percentage (got {value})")]
    InvalidPercentage { field: &'static str, value: f64 },

    #[error("base_percentage ({base}) exceeds max_percentage ({max})")]
    BaseAboveCap { base: f64, max: f64 },
}

/// Parameters of the pension formula.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Scheme {
    /// Minimum months required to qualify.
    pub eligible_months: i64,
    /// Pension right at exactly `eligible_months`, in percent.
    pub base_percentage: f64,
    /// Percent added per 12 extra months.
    pub accrual_per_year: f64,
    /// Cap on the pension right, in percent.
    pub max_percentage: f64,
    /// Currency suffix for the pay.
    pub currency: String,
}

impl Default for Scheme {
    fn default() -> Self {
        Self {
            eligible_months: ELIGIBLE_MONTHS,
            base_percentage: BASE_ELIGIBLE_PERCENTAGE,
            accrual_per_year: ACCRUAL_PER_YEAR,
            max_percentage: MAX_PENSION_RIGHT,
            currency: CURRENCY.to_string(),
        }
    }
}

impl Scheme {
    /// Check that the parameters describe a usable formula.
    pub fn validate(&self) -> Result<(), SchemeError> {
        if self.eligible_months < 0 {
            return Err(SchemeError::NegativeEligibleMonths(self.eligible_months));
        }
        for (field, value) in [
            ("base_percentage", self.base_percentage),
            ("accrual_per_year", self.accrual_per_year),
            ("max_percentage", self.max_percentage),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(SchemeError::InvalidPercentage { field, value });
            }
        }
        if self.base_percentage > self.max_percentage {
            return Err(SchemeError::BaseAboveCap {
                base: self.base_percentage,
                max: self.max_percentage,
            });
        }
        Ok(())
    }

    /// Compute the pension for a contributor under this scheme.
    pub fn calculate(&self, average_salary: i64, months_contributed: i64) -> PensionOutcome {
        if months_contributed < self.eligible_months {
            let months_short = self.eligible_months.saturating_sub(months_contributed);
            tracing::debug!(months_contributed, months_short, "below eligibility minimum");
            return PensionOutcome::NotQualified {
                months_contributed,
                eligible_months: self.eligible_months,
                months_short,
            };
        }

        let extra_months = months_contributed.saturating_sub(self.eligible_months);
        let additional_percentage = extra_months as f64 * (self.accrual_per_year / 12.0);
        let total_percentage = self.base_percentage + additional_percentage;
        // pension right
        let pension_right = total_percentage.min(self.max_percentage);
        let pension_pay = pension_right * (average_salary as f64 / 12.0) / 100.0;

        tracing::debug!(
            extra_months,
            additional_percentage,
            total_percentage,
            pension_right,
            pension_pay,
            "pension calculated"
        );

        PensionOutcome::Qualified(PensionBreakdown {
            average_salary,
            months_contributed,
            extra_months,
            additional_percentage,
            total_percentage,
            pension_right,
            pension_pay,
            currency: self.currency.clone(),
        })
    }
}

/// Compute the pension under the statutory SSNIT scheme.
pub fn calculate_pension(average_salary: i64, months_contributed: i64) -> PensionOutcome {
    Scheme::default().calculate(average_salary, months_contributed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(outcome: PensionOutcome) -> PensionBreakdown {
        match outcome {
            PensionOutcome::Qualified(b) => b,
            other => panic!("expected qualified outcome, got {other:?}"),
        }
    }

    #[test]
    fn below_minimum_does_not_qualify() {
        let outcome = calculate_pension(50_000, 179);
        assert_eq!(
            outcome,
            PensionOutcome::NotQualified {
                months_contributed: 179,
                eligible_months: 180,
                months_short: 1,
            }
        );
    }

    #[test]
    fn zero_and_negative_months_do_not_qualify() {
        assert!(!calculate_pension(12_000, 0).is_qualified());
        assert!(!calculate_pension(12_000, -5).is_qualified());
    }

    #[test]
    fn exactly_minimum_earns_base_right() {
        let b = breakdown(calculate_pension(12_000, 180));
        assert_eq!(b.extra_months, 0);
        assert_eq!(b.additional_percentage, 0.0);
        assert_eq!(b.pension_right, 37.5);
        assert_eq!(b.pension_pay, 375.0);
    }

    #[test]
    fn extra_months_accrue() {
        let b = breakdown(calculate_pension(24_000, 300));
        assert_eq!(b.extra_months, 120);
        assert_eq!(b.additional_percentage, 11.25);
        assert_eq!(b.total_percentage, 48.75);
        assert_eq!(b.pension_right, 48.75);
        assert_eq!(b.pension_pay, 975.0);
        assert_eq!(b.currency, "GHS");
    }

    #[test]
    fn cap_reached_exactly() {
        // 240 extra months * 0.09375 = 22.5, so 37.5 + 22.5 = 60
        let b = breakdown(calculate_pension(12_000, 420));
        assert_eq!(b.total_percentage, 60.0);
        assert_eq!(b.pension_right, 60.0);
    }

    #[test]
    fn right_is_clamped_above_cap() {
        let b = breakdown(calculate_pension(12_000, 600));
        assert!(b.total_percentage > 60.0);
        assert_eq!(b.pension_right, 60.0);
        assert_eq!(b.pension_pay, 600.0);
    }

    #[test]
    fn most_negative_months_does_not_qualify() {
        let outcome = calculate_pension(12_000, i64::MIN);
        assert_eq!(
            outcome,
            PensionOutcome::NotQualified {
                months_contributed: i64::MIN,
                eligible_months: 180,
                months_short: i64::MAX,
            }
        );
    }

    #[test]
    fn largest_months_is_capped() {
        let b = breakdown(calculate_pension(12_000, i64::MAX));
        assert_eq!(b.extra_months, i64::MAX - 180);
        assert_eq!(b.pension_right, 60.0);
        assert_eq!(b.pension_pay, 600.0);
    }

    #[test]
    fn large_eligibility_minimum_does_not_overflow() {
        let scheme = Scheme {
            eligible_months: i64::MAX,
            ..Scheme::default()
        };
        match scheme.calculate(12_000, -1) {
            PensionOutcome::NotQualified { months_short, .. } => assert_eq!(months_short, i64::MAX),
            other => panic!("expected not qualified, got {other:?}"),
        }
    }

    #[test]
    fn calculation_is_deterministic() {
        assert_eq!(calculate_pension(31_500, 257), calculate_pension(31_500, 257));
    }

    #[test]
    fn custom_scheme_is_respected() {
        let scheme = Scheme {
            eligible_months: 120,
            base_percentage: 40.0,
            accrual_per_year: 1.5,
            max_percentage: 50.0,
            currency: "USD".into(),
        };
        let b = breakdown(scheme.calculate(12_000, 144));
        // 24 extra months at 1.5% per year
        assert_eq!(b.pension_right, 43.0);
        assert_eq!(b.pension_pay, 430.0);
        assert_eq!(b.currency, "USD");
    }

    #[test]
    fn default_scheme_is_valid() {
        assert_eq!(Scheme::default().validate(), Ok(()));
    }

    #[test]
    fn validate_rejects_negative_months() {
        let scheme = Scheme {
            eligible_months: -1,
            ..Scheme::default()
        };
        assert_eq!(scheme.validate(), Err(SchemeError::NegativeEligibleMonths(-1)));
    }

    #[test]
    fn validate_rejects_non_finite_percentage() {
        let scheme = Scheme {
            accrual_per_year: f64::NAN,
            ..Scheme::default()
        };
        assert!(matches!(
            scheme.validate(),
            Err(SchemeError::InvalidPercentage { field: "accrual_per_year", .. })
        ));
    }

    #[test]
    fn validate_rejects_base_above_cap() {
        let scheme = Scheme {
            base_percentage: 70.0,
            ..Scheme::default()
        };
        assert!(matches!(scheme.validate(), Err(SchemeError::BaseAboveCap { .. })));
    }
}
