//! Yearly output structures for projections

use serde::{Deserialize, Serialize};

/// A single row of projection output for one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyRow {
    /// Year number, 1-indexed and contiguous across the projection
    pub year: u32,

    /// Interest earned during this year only, computed on the balance
    /// after this year's contribution was added
    pub interest: f64,

    /// Total balance at the end of this year
    pub value_end_of_year: f64,

    /// Contribution applied this year, carried per-row so cumulative
    /// totals can be reconstructed from a single row
    pub annual_investment: f64,
}

impl YearlyRow {
    /// Total interest accrued from year 1 through this row's year.
    ///
    /// Closed-form: `value_end_of_year` already embeds all prior compounding,
    /// so subtracting the principal and every contribution made so far leaves
    /// pure interest. No iteration over earlier rows is needed, which lets a
    /// row be rendered with no shared state beyond the starting principal.
    ///
    /// `initial_investment` must be the same value the projection was seeded
    /// with; the row cannot verify that itself.
    pub fn cumulative_interest(&self, initial_investment: f64) -> f64 {
        self.value_end_of_year - initial_investment - self.year as f64 * self.annual_investment
    }

    /// Total amount invested through this year (principal plus contributions)
    pub fn total_invested(&self, initial_investment: f64) -> f64 {
        self.value_end_of_year - self.cumulative_interest(initial_investment)
    }
}

/// Complete projection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Yearly rows, ordered by year ascending
    pub rows: Vec<YearlyRow>,
}

impl ProjectionResult {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Add a yearly row
    pub fn add_row(&mut self, row: YearlyRow) {
        self.rows.push(row);
    }

    /// Recover the starting principal from the first row.
    ///
    /// `value_end_of_year - interest - annual_investment` for year 1 is the
    /// balance before that year's contribution, i.e. the initial investment.
    /// Returns None for an empty projection.
    pub fn reconstructed_principal(&self) -> Option<f64> {
        self.rows
            .first()
            .map(|row| row.value_end_of_year - row.interest - row.annual_investment)
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let total_interest: f64 = self.rows.iter().map(|r| r.interest).sum();
        let total_contributions: f64 = self.rows.iter().map(|r| r.annual_investment).sum();
        let final_value = self.rows.last().map(|r| r.value_end_of_year).unwrap_or(0.0);

        ProjectionSummary {
            years: self.rows.len() as u32,
            final_value,
            total_interest,
            total_contributions,
        }
    }
}

impl Default for ProjectionResult {
    fn default() -> Self {
        Self::new()
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years: u32,
    pub final_value: f64,
    pub total_interest: f64,
    pub total_contributions: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_rows() -> Vec<YearlyRow> {
        // 10000 initial, 1200 annual, 6% for 3 years
        vec![
            YearlyRow {
                year: 1,
                interest: 672.0,
                value_end_of_year: 11_872.0,
                annual_investment: 1_200.0,
            },
            YearlyRow {
                year: 2,
                interest: 784.32,
                value_end_of_year: 13_856.32,
                annual_investment: 1_200.0,
            },
            YearlyRow {
                year: 3,
                interest: 903.3792,
                value_end_of_year: 15_959.6992,
                annual_investment: 1_200.0,
            },
        ]
    }

    #[test]
    fn test_cumulative_interest_closed_form() {
        let rows = sample_rows();

        assert_relative_eq!(rows[0].cumulative_interest(10_000.0), 672.0);
        assert_relative_eq!(rows[2].cumulative_interest(10_000.0), 2_359.6992);
    }

    #[test]
    fn test_cumulative_interest_matches_running_sum() {
        let rows = sample_rows();
        let mut running = 0.0;

        for row in &rows {
            running += row.interest;
            assert_relative_eq!(
                row.cumulative_interest(10_000.0),
                running,
                epsilon = 1e-9
            );
        }
    }

    #[test]
    fn test_total_invested() {
        let rows = sample_rows();

        // Principal plus two contributions by end of year 2
        assert_relative_eq!(rows[1].total_invested(10_000.0), 12_400.0);
    }

    #[test]
    fn test_reconstructed_principal() {
        let mut result = ProjectionResult::new();
        for row in sample_rows() {
            result.add_row(row);
        }

        assert_relative_eq!(result.reconstructed_principal().unwrap(), 10_000.0);
    }

    #[test]
    fn test_reconstructed_principal_empty() {
        assert_eq!(ProjectionResult::new().reconstructed_principal(), None);
    }

    #[test]
    fn test_summary() {
        let mut result = ProjectionResult::new();
        for row in sample_rows() {
            result.add_row(row);
        }

        let summary = result.summary();
        assert_eq!(summary.years, 3);
        assert_relative_eq!(summary.final_value, 15_959.6992);
        assert_relative_eq!(summary.total_interest, 2_359.6992, epsilon = 1e-9);
        assert_relative_eq!(summary.total_contributions, 3_600.0);
    }

    #[test]
    fn test_summary_empty() {
        let summary = ProjectionResult::new().summary();
        assert_eq!(summary.years, 0);
        assert_eq!(summary.final_value, 0.0);
    }
}
