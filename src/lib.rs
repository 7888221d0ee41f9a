//! Pension Projection - year-by-year UK pension savings projection
//!
//! This library provides:
//! - Salary growth and employee/employer contribution modelling
//! - The annual allowance cap and two tax-avoidance contribution strategies
//! - Three fixed-return growth scenarios (2%, 4%, 6%) run against the same contributions
//! - Raw form/CSV input parsing and table/CSV/chart-series reporting

pub mod error;
pub mod assumptions;
pub mod input;
pub mod projection;
pub mod scenario;
pub mod report;

// Re-export commonly used types
pub use error::{LoadError, ProjectionError};
pub use assumptions::PolicyLimits;
pub use input::{ProjectionInput, RawInput, TaxStrategy};
pub use projection::{project, ProjectionEngine, ProjectionResult, YearRecord};
pub use scenario::GrowthScenario;
