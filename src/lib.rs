//! Investment Calculator - Year-by-year investment growth projection engine
//!
//! This library provides:
//! - Annual compounding projections (contribution at start of year, then growth)
//! - Per-row cumulative interest reconstruction via a closed-form identity
//! - Multi-rate scenario comparison for a single plan
//! - Batch plan loading from CSV
//! - Injectable currency formatting for table output

pub mod plan;
pub mod projection;
pub mod format;
pub mod scenario;

// Re-export commonly used types
pub use plan::InvestmentPlan;
pub use projection::{project, ProjectionError, ProjectionResult, YearlyRow};
pub use format::CurrencyFormatter;
pub use scenario::ScenarioRunner;
