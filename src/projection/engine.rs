//! Core projection recurrence for annual compounding

use super::rows::{ProjectionResult, YearlyRow};
use crate::plan::InvestmentPlan;
use thiserror::Error;

/// Errors surfaced by a projection run
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    /// An input field is NaN or infinite, usually from an upstream parse
    /// failure. The run fails outright; no partial rows are returned.
    #[error("input field `{field}` must be finite, got {value}")]
    NonFiniteInput { field: &'static str, value: f64 },
}

/// Run the year-by-year projection for a plan.
///
/// Each year the contribution is added first, then interest accrues on the
/// contribution-inclusive balance ("deposit at start of year, then grow").
/// That ordering is load-bearing: swapping it changes every downstream
/// number. No rounding is applied; display formatting happens elsewhere.
///
/// A `duration` of 0 is a valid request and returns an empty result rather
/// than an error, matching the empty-table behavior callers expect.
pub fn project(plan: &InvestmentPlan) -> Result<ProjectionResult, ProjectionError> {
    if let Some((field, value)) = plan.non_finite_field() {
        return Err(ProjectionError::NonFiniteInput { field, value });
    }

    let mut result = ProjectionResult::new();
    let mut balance = plan.initial_investment;

    for year in 1..=plan.duration {
        balance += plan.annual_investment;
        let interest = balance * (plan.expected_return / 100.0);
        balance += interest;

        result.add_row(YearlyRow {
            year,
            interest,
            value_end_of_year: balance,
            annual_investment: plan.annual_investment,
        });
    }

    log::debug!(
        "Projected {} years: final value {:.2}",
        result.rows.len(),
        balance
    );

    Ok(result)
}
