//! Projection inputs: typed values, raw form fields, and CSV batches

mod data;
mod raw;
pub mod loader;

pub use data::{ProjectionInput, TaxStrategy, MAX_AGE};
pub use raw::RawInput;
pub use loader::{load_inputs, load_inputs_from_reader, LabelledInput};
