//! Investment Calculator CLI
//!
//! Renders a year-by-year growth table for a single plan, or summarises a
//! batch of plans loaded from CSV.

use anyhow::Context;
use clap::Parser;
use investment_calculator::plan::load_plans;
use investment_calculator::scenario::run_batch;
use investment_calculator::{project, CurrencyFormatter, InvestmentPlan, ProjectionResult};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "investment_calculator", version, about = "Year-by-year investment growth projection")]
struct Args {
    /// Capital at year 0
    #[arg(long, default_value_t = 10_000.0)]
    initial: f64,

    /// Contribution added at the start of each year
    #[arg(long, default_value_t = 1_200.0)]
    annual: f64,

    /// Expected annual return in percent (6 = 6%)
    #[arg(long, default_value_t = 6.0)]
    rate: f64,

    /// Number of years to project
    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Write the full table to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print the projection as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Project every plan in this CSV file and print one summary line each
    #[arg(long)]
    plans: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(path) = &args.plans {
        return run_plans_file(path);
    }

    let plan = InvestmentPlan::new(args.initial, args.annual, args.rate, args.years);
    let result = project(&plan)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_table(&plan, &result);
    }

    if let Some(path) = &args.output {
        write_csv(path, &result)
            .with_context(|| format!("writing {}", path.display()))?;
        println!("\nFull results written to: {}", path.display());
    }

    Ok(())
}

fn print_table(plan: &InvestmentPlan, result: &ProjectionResult) {
    let formatter = CurrencyFormatter::default();

    println!("Investment Calculator v0.1.0");
    println!("============================\n");
    println!(
        "Plan: initial {}, annual {}, {}% over {} years\n",
        formatter.format(plan.initial_investment),
        formatter.format(plan.annual_investment),
        plan.expected_return,
        plan.duration
    );

    println!(
        "{:>4} {:>16} {:>16} {:>16} {:>16}",
        "Year", "End of Year", "Interest (Year)", "Total Interest", "Invested Capital"
    );
    println!("{}", "-".repeat(72));

    for row in &result.rows {
        println!(
            "{:>4} {:>16} {:>16} {:>16} {:>16}",
            row.year,
            formatter.format(row.value_end_of_year),
            formatter.format(row.interest),
            formatter.format(row.cumulative_interest(plan.initial_investment)),
            formatter.format(row.total_invested(plan.initial_investment)),
        );
    }

    let summary = result.summary();
    println!("\nSummary:");
    println!("  Years: {}", summary.years);
    println!("  Final Value: {}", formatter.format(summary.final_value));
    println!("  Total Interest: {}", formatter.format(summary.total_interest));
    println!(
        "  Total Contributions: {}",
        formatter.format(summary.total_contributions)
    );
}

fn write_csv(path: &PathBuf, result: &ProjectionResult) -> anyhow::Result<()> {
    let mut file = File::create(path)?;

    writeln!(file, "Year,Interest,ValueEndOfYear,AnnualInvestment")?;
    for row in &result.rows {
        writeln!(
            file,
            "{},{:.8},{:.8},{:.8}",
            row.year, row.interest, row.value_end_of_year, row.annual_investment
        )?;
    }

    Ok(())
}

fn run_plans_file(path: &PathBuf) -> anyhow::Result<()> {
    let formatter = CurrencyFormatter::default();

    let plans = load_plans(path)
        .map_err(|e| anyhow::anyhow!("loading {}: {e}", path.display()))?;
    log::info!("Loaded {} plans", plans.len());

    let results = run_batch(&plans)?;

    println!(
        "{:>4} {:>14} {:>12} {:>8} {:>6} {:>16} {:>16}",
        "Plan", "Initial", "Annual", "Rate", "Years", "Final Value", "Total Interest"
    );
    println!("{}", "-".repeat(82));

    for (i, (plan, result)) in plans.iter().zip(&results).enumerate() {
        let summary = result.summary();
        println!(
            "{:>4} {:>14} {:>12} {:>7}% {:>6} {:>16} {:>16}",
            i + 1,
            formatter.format(plan.initial_investment),
            formatter.format(plan.annual_investment),
            plan.expected_return,
            plan.duration,
            formatter.format(summary.final_value),
            formatter.format(summary.total_interest),
        );
    }

    Ok(())
}
