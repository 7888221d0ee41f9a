//! Error types for input validation and projection setup

use thiserror::Error;

/// Errors raised before a projection runs
///
/// The engine never fails once the year loop has started, so every variant
/// here describes an input the caller must correct.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjectionError {
    /// A field could not be parsed as a number
    #[error("invalid value for {field}: {value:?}")]
    Input { field: &'static str, value: String },

    /// A numeric field was NaN or infinite
    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },

    /// A monetary amount was below zero
    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: f64 },

    /// The combination of options is not allowed
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ProjectionError {
    pub fn input(field: &'static str, value: impl Into<String>) -> Self {
        Self::Input { field, value: value.into() }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// True for malformed, missing, or out-of-range numeric input
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Input { .. } | Self::NonFinite { .. } | Self::Negative { .. }
        )
    }

    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Configuration(_))
    }

    /// Name of the offending field, when the error is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::Input { field, .. } | Self::NonFinite { field } | Self::Negative { field, .. } => {
                Some(*field)
            }
            Self::Configuration(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ProjectionError>;

/// Errors raised while loading a batch of inputs from CSV
#[derive(Error, Debug)]
pub enum LoadError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// A data row (1-indexed, header excluded) failed to parse or validate
    #[error("row {row}: {source}")]
    Row {
        row: usize,
        #[source]
        source: ProjectionError,
    },
}

impl LoadError {
    /// The underlying projection error, when a row was readable but invalid
    pub fn projection_error(&self) -> Option<&ProjectionError> {
        match self {
            Self::Row { source, .. } => Some(source),
            Self::Csv(_) => None,
        }
    }

    pub fn row(&self) -> Option<usize> {
        match self {
            Self::Row { row, .. } => Some(*row),
            Self::Csv(_) => None,
        }
    }
}
