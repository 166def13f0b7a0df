//! Compare one plan across several expected-return rates
//!
//! Prints a side-by-side summary so rate sensitivity is visible at a glance.

use investment_calculator::{CurrencyFormatter, InvestmentPlan, ScenarioRunner};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let plan = InvestmentPlan::new(10_000.0, 1_200.0, 6.0, 30);
    let rates = [2.0, 4.0, 6.0, 8.0, 10.0];

    println!("Rate Comparison ({} years)", plan.duration);
    println!("==========================\n");

    let runner = ScenarioRunner::new(plan);
    let results = runner.run_rates(&rates)?;
    let formatter = CurrencyFormatter::default();

    println!(
        "{:>6} {:>18} {:>18} {:>18}",
        "Rate", "Final Value", "Total Interest", "Contributions"
    );
    println!("{}", "-".repeat(64));

    for (rate, result) in rates.iter().zip(&results) {
        let summary = result.summary();
        println!(
            "{:>5}% {:>18} {:>18} {:>18}",
            rate,
            formatter.format(summary.final_value),
            formatter.format(summary.total_interest),
            formatter.format(summary.total_contributions),
        );
    }

    Ok(())
}
