//! Error handling for the report pipeline.

pub mod util;

/// Specialized error type for pipeline operations
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),

    /// Error processing Arrow record batches
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Error reading a delimited series file
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Transport error while fetching a remote series
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A remote series endpoint answered with a non-success status
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// Error parsing a source field into its expected type
    #[error("Parse error: {0}")]
    Parse(String),

    /// Error with the survey extract schema
    #[error("Schema error: {0}")]
    Schema(String),

    /// Error reading configuration
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Error from a collaborator with added context
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, PipelineError>;
