use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading [`crate::AppConfig`] from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}

#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    #[error("radius must be a positive number of miles, got {0}")]
    InvalidRadius(f64),
}

/// Errors raised by the facility table normalizer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// Neither an address column nor the full name + city + state set is
    /// present. `missing` lists the absent members of that set.
    #[error(
        "missing one or more required columns: {} (or supply a full_address column)",
        .missing.join(", ")
    )]
    MissingColumns { missing: Vec<String> },
}

/// Errors raised while reading or writing facility tables.
#[derive(Debug, Error)]
pub enum TableIoError {
    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush output: {0}")]
    Flush(#[from] std::io::Error),

    #[error(transparent)]
    Normalize(#[from] NormalizeError),
}
