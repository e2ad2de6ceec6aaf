//! Error types for the sympred library.
//!
//! All fallible operations return [`Result`], whose error side is the
//! [`SympredError`] enum. Variants follow the pipeline stages: dataset
//! loading, training, model persistence, and inference.
//!
//! # Examples
//!
//! ```
//! use sympred::error::{Result, SympredError};
//!
//! fn check(symptoms: &[String]) -> Result<()> {
//!     if symptoms.is_empty() {
//!         return Err(SympredError::invalid_input("symptom list must not be empty"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(check(&[]).is_err());
//! ```

use std::io;

use thiserror::Error;

/// The main error type for sympred operations.
#[derive(Error, Debug)]
pub enum SympredError {
    /// I/O errors (file operations).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The dataset file does not exist.
    #[error("Dataset not found: {path}")]
    DatasetNotFound { path: String },

    /// A dataset row lacks a parseable disease or symptom field.
    #[error("Malformed record at line {line}: {message}")]
    MalformedRecord { line: u64, message: String },

    /// Inference was attempted before any model was loaded.
    #[error("Model not trained: train a model before requesting predictions")]
    ModelNotTrained,

    /// One or more model artifacts are missing.
    #[error("Model not found: {path}")]
    ModelNotFound { path: String },

    /// Model artifacts are unreadable or do not belong together.
    #[error("Corrupt model: {0}")]
    CorruptModel(String),

    /// Invalid caller input (empty symptom list, blank symptoms).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Training could not produce a model.
    #[error("Training error: {0}")]
    Training(String),

    /// Another retrain holds the training slot.
    #[error("A training run is already in progress")]
    RetrainInProgress,

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// CSV parsing errors.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Binary serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] bincode::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with SympredError.
pub type Result<T> = std::result::Result<T, SympredError>;

impl SympredError {
    /// Create a new dataset-not-found error.
    pub fn dataset_not_found<S: Into<String>>(path: S) -> Self {
        SympredError::DatasetNotFound { path: path.into() }
    }

    /// Create a new malformed record error.
    pub fn malformed<S: Into<String>>(line: u64, msg: S) -> Self {
        SympredError::MalformedRecord {
            line,
            message: msg.into(),
        }
    }

    /// Create a new model-not-found error.
    pub fn model_not_found<S: Into<String>>(path: S) -> Self {
        SympredError::ModelNotFound { path: path.into() }
    }

    /// Create a new corrupt model error.
    pub fn corrupt<S: Into<String>>(msg: S) -> Self {
        SympredError::CorruptModel(msg.into())
    }

    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        SympredError::InvalidInput(msg.into())
    }

    /// Create a new training error.
    pub fn training<S: Into<String>>(msg: S) -> Self {
        SympredError::Training(msg.into())
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        SympredError::Config(msg.into())
    }

    /// Whether the error means "no usable model yet".
    ///
    /// Callers can recover from these by triggering a training run.
    pub fn is_not_ready(&self) -> bool {
        matches!(
            self,
            SympredError::ModelNotTrained | SympredError::ModelNotFound { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = SympredError::malformed(3, "missing disease");
        assert_eq!(
            error.to_string(),
            "Malformed record at line 3: missing disease"
        );

        let error = SympredError::dataset_not_found("data.csv");
        assert_eq!(error.to_string(), "Dataset not found: data.csv");

        let error = SympredError::corrupt("model id mismatch");
        assert_eq!(error.to_string(), "Corrupt model: model id mismatch");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = SympredError::from(io_error);

        match error {
            SympredError::Io(_) => {} // Expected
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_not_ready_classification() {
        assert!(SympredError::ModelNotTrained.is_not_ready());
        assert!(SympredError::model_not_found("models/classifier.bin").is_not_ready());
        assert!(!SympredError::corrupt("bad").is_not_ready());
        assert!(!SympredError::invalid_input("empty").is_not_ready());
    }
}
