//! Load investment plans from CSV

use super::InvestmentPlan;
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Raw CSV row matching the plans file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "InitialInvestment")]
    initial_investment: f64,
    #[serde(rename = "AnnualInvestment")]
    annual_investment: f64,
    #[serde(rename = "ExpectedReturn")]
    expected_return: f64,
    #[serde(rename = "Duration")]
    duration: u32,
}

impl CsvRow {
    fn to_plan(self) -> InvestmentPlan {
        InvestmentPlan {
            initial_investment: self.initial_investment,
            annual_investment: self.annual_investment,
            expected_return: self.expected_return,
            duration: self.duration,
        }
    }
}

/// Read plans from any CSV source (file, in-memory buffer)
pub fn read_plans<R: Read>(reader: R) -> Result<Vec<InvestmentPlan>, Box<dyn Error>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut plans = Vec::new();

    for result in csv_reader.deserialize() {
        let row: CsvRow = result?;
        plans.push(row.to_plan());
    }

    log::info!("Loaded {} plans from CSV", plans.len());
    Ok(plans)
}

/// Load plans from a CSV file on disk
pub fn load_plans(path: &Path) -> Result<Vec<InvestmentPlan>, Box<dyn Error>> {
    let file = File::open(path)?;
    read_plans(file)
}
