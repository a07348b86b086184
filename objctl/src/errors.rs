//! Error types for objctl

use thiserror::Error;

/// Main error type for objctl
#[derive(Error, Debug)]
pub enum CliError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid header value: {0}")]
    HeaderError(#[from] http::header::InvalidHeaderValue),

    #[error("{status}: {body}")]
    ApiError { status: u16, body: String },

    #[error("{0}")]
    ObjectFileError(String),

    #[error("Unable to set layer-id for layer type {0} from the given context. Please specify a unique layer-id value with the --layer-id flag")]
    LayerError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Context not found: {0}")]
    ContextNotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),
}
