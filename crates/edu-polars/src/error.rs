//! Error types for edu-polars

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Moment computation error: {0}")]
    Core(#[from] edu_core::Error),

    /// A column the schema requires is absent
    #[error("Missing column: '{0}'")]
    MissingColumn(String),

    #[error("Insufficient data: column '{column}' has {actual} usable values")]
    InsufficientData { column: String, actual: usize },

    #[error("Type mismatch for column '{column}': expected {expected}, got {got}")]
    TypeMismatch {
        column: String,
        expected: String,
        got: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Name of the missing column, if this is a schema error
    pub fn missing_column(&self) -> Option<&str> {
        match self {
            Self::MissingColumn(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_insufficient_data(&self) -> bool {
        matches!(
            self,
            Self::InsufficientData { .. } | Self::Core(edu_core::Error::InsufficientData { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
