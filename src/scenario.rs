//! Scenario runner for comparing projections
//!
//! Holds a base plan and runs variations of it (different return rates) or
//! whole batches of plans without the caller re-wiring the engine each time.

use crate::plan::InvestmentPlan;
use crate::projection::{project, ProjectionError, ProjectionResult};

/// Runs projections for a base plan and its variations
///
/// # Example
/// ```
/// use investment_calculator::{InvestmentPlan, ScenarioRunner};
///
/// let runner = ScenarioRunner::new(InvestmentPlan::new(10_000.0, 1_200.0, 6.0, 10));
/// let results = runner.run_rates(&[4.0, 6.0, 8.0]).unwrap();
/// assert_eq!(results.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_plan: InvestmentPlan,
}

impl ScenarioRunner {
    /// Create a runner around a base plan
    pub fn new(base_plan: InvestmentPlan) -> Self {
        Self { base_plan }
    }

    /// Project the base plan as-is
    pub fn run(&self) -> Result<ProjectionResult, ProjectionError> {
        project(&self.base_plan)
    }

    /// Project the base plan once per expected-return rate
    pub fn run_rates(&self, rates: &[f64]) -> Result<Vec<ProjectionResult>, ProjectionError> {
        rates
            .iter()
            .map(|&expected_return| {
                let plan = InvestmentPlan {
                    expected_return,
                    ..self.base_plan
                };
                project(&plan)
            })
            .collect()
    }

    /// Get reference to the base plan for inspection
    pub fn plan(&self) -> &InvestmentPlan {
        &self.base_plan
    }
}

/// Project many plans with one call, failing on the first invalid plan
pub fn run_batch(plans: &[InvestmentPlan]) -> Result<Vec<ProjectionResult>, ProjectionError> {
    plans.iter().map(project).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_plan() -> InvestmentPlan {
        InvestmentPlan::new(10_000.0, 1_200.0, 6.0, 10)
    }

    #[test]
    fn test_higher_rate_ends_higher() {
        let runner = ScenarioRunner::new(test_plan());
        let results = runner.run_rates(&[3.0, 4.0, 5.0]).unwrap();

        assert_eq!(results.len(), 3);
        assert!(results[2].summary().final_value > results[0].summary().final_value);
    }

    #[test]
    fn test_run_matches_direct_projection() {
        let runner = ScenarioRunner::new(test_plan());

        assert_eq!(runner.run().unwrap().rows, project(&test_plan()).unwrap().rows);
    }

    #[test]
    fn test_batch_preserves_order() {
        let plans = vec![
            InvestmentPlan::new(1_000.0, 0.0, 5.0, 1),
            InvestmentPlan::new(2_000.0, 0.0, 5.0, 1),
        ];

        let results = run_batch(&plans).unwrap();
        assert_eq!(results.len(), 2);
        assert!(results[1].summary().final_value > results[0].summary().final_value);
    }

    #[test]
    fn test_batch_fails_on_invalid_plan() {
        let plans = vec![
            test_plan(),
            InvestmentPlan::new(f64::INFINITY, 0.0, 5.0, 1),
        ];

        assert!(run_batch(&plans).is_err());
    }
}
