//! Error types for the SWC fantasy football data API and client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, SwcError>;

#[derive(Error, Debug)]
pub enum SwcError {
    /// Transport failure or non-2xx status, after any retries were exhausted.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Response body did not match the expected JSON shape.
    #[error("JSON decoding failed: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid base URL {url:?}: {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("Base URL not provided and {env_var} environment variable not set")]
    MissingBaseUrl { env_var: String },

    #[error("Invalid bulk file format: {format} (expected csv or parquet)")]
    InvalidBulkFileFormat { format: String },

    #[error("Invalid date {value:?}, expected YYYY-MM-DD")]
    InvalidDate { value: String },

    #[error("Failed to parse ID: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid value for {name}: {value}")]
    InvalidSetting { name: String, value: String },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl From<anyhow::Error> for SwcError {
    fn from(err: anyhow::Error) -> Self {
        match err.downcast::<rusqlite::Error>() {
            Ok(db) => SwcError::Database(db),
            Err(other) => SwcError::Storage {
                message: format!("{:#}", other),
            },
        }
    }
}
