use std::path::PathBuf;
use thiserror::Error;

/// All errors produced while loading or querying an event dataset.
#[derive(Error, Debug)]
pub enum EventError {
    /// The tabular source could not be opened.
    #[error("Failed to read file {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV reader rejected the source while reading rows.
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// An exact-match lookup hit a record without the requested field.
    #[error("Missing field: {field}")]
    MissingField { field: String },

    /// An operation that needs at least one record was given none.
    #[error("Empty dataset: {operation} needs at least one record")]
    EmptyDataset { operation: &'static str },

    /// A mean was requested over zero qualifying pass lengths.
    #[error("No pass lengths recorded for team {team}")]
    NoPassLengths { team: String },

    /// A non-empty numeric field could not be parsed.
    #[error("Invalid number in {field}: {value:?}")]
    InvalidNumber { field: String, value: String },

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A summary could not be rendered as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl EventError {
    pub(crate) fn missing_field(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }
}

/// Convenience alias used throughout the events crates.
pub type Result<T> = std::result::Result<T, EventError>;
