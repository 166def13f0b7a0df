//! Investment plan input record

use serde::{Deserialize, Serialize};

/// Inputs for a single projection, immutable once constructed.
///
/// `expected_return` is an annual percentage rate: 6.0 means 6%. Zero means
/// no growth; negative values model a loss and simply shrink the balance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentPlan {
    /// Capital at year 0, before any contributions or interest
    pub initial_investment: f64,

    /// Contribution added once at the start of each year
    pub annual_investment: f64,

    /// Annual return as a percentage (6.0 = 6%)
    pub expected_return: f64,

    /// Number of years to project; 0 yields an empty projection
    pub duration: u32,
}

impl InvestmentPlan {
    pub fn new(
        initial_investment: f64,
        annual_investment: f64,
        expected_return: f64,
        duration: u32,
    ) -> Self {
        Self {
            initial_investment,
            annual_investment,
            expected_return,
            duration,
        }
    }

    /// Returns the first numeric field that is NaN or infinite, if any.
    ///
    /// Upstream parse failures surface as non-finite values; the projection
    /// rejects them outright rather than propagating NaN through every row.
    pub fn non_finite_field(&self) -> Option<(&'static str, f64)> {
        let fields = [
            ("initial_investment", self.initial_investment),
            ("annual_investment", self.annual_investment),
            ("expected_return", self.expected_return),
        ];
        fields.into_iter().find(|(_, value)| !value.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite_plan_has_no_bad_field() {
        let plan = InvestmentPlan::new(10_000.0, 1_200.0, 6.0, 10);
        assert_eq!(plan.non_finite_field(), None);
    }

    #[test]
    fn test_nan_field_is_reported_by_name() {
        let plan = InvestmentPlan::new(10_000.0, f64::NAN, 6.0, 10);
        let (field, value) = plan.non_finite_field().unwrap();
        assert_eq!(field, "annual_investment");
        assert!(value.is_nan());
    }

    #[test]
    fn test_infinite_rate_is_reported() {
        let plan = InvestmentPlan::new(10_000.0, 0.0, f64::INFINITY, 1);
        let (field, _) = plan.non_finite_field().unwrap();
        assert_eq!(field, "expected_return");
    }
}
