//! Year-by-year pension projection

mod state;
mod engine;
mod records;

pub use state::ProjectionState;
pub use engine::{project, Contributions, ProjectionEngine};
pub use records::{ProjectionResult, ProjectionSummary, YearRecord};
