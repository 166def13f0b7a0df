//! Investment plan inputs and batch loading

mod data;
mod loader;

pub use data::InvestmentPlan;
pub use loader::{load_plans, read_plans};
