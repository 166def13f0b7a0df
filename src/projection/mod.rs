//! Projection engine for year-by-year compounding

mod engine;
mod rows;

pub use engine::{project, ProjectionError};
pub use rows::{ProjectionResult, ProjectionSummary, YearlyRow};
