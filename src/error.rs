//! Error types for the analysis pipeline

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Data error: {0}")]
    Data(#[from] edu_polars::Error),

    #[error("Visualization error: {0}")]
    Visualization(#[from] edu_viz::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
