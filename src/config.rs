//! Configuration for training and inference.
//!
//! [`SympredConfig`] can be built from defaults, read from a JSON file, and
//! overlaid with `SYMPRED_*` environment variables.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, SympredError};

/// Top-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SympredConfig {
    /// Source dataset settings.
    pub dataset: DatasetConfig,
    /// Directory holding the three model artifacts.
    pub model_dir: PathBuf,
    /// Training settings.
    pub training: TrainingConfig,
    /// Feature extraction settings.
    pub vectorizer: VectorizerConfig,
    /// Inference settings.
    pub prediction: PredictionConfig,
}

impl Default for SympredConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetConfig::default(),
            model_dir: PathBuf::from("models/saved"),
            training: TrainingConfig::default(),
            vectorizer: VectorizerConfig::default(),
            prediction: PredictionConfig::default(),
        }
    }
}

/// Location and shape of the disease/symptom dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Path to the CSV file.
    pub path: PathBuf,
    /// Header of the disease name column.
    pub disease_column: String,
    /// Header of the symptom column.
    pub symptoms_column: String,
    /// Delimiter between symptoms inside the symptom column.
    pub symptom_delimiter: char,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/raw/disease_symptoms.csv"),
            disease_column: "benh".to_string(),
            symptoms_column: "trieu_chung".to_string(),
            symptom_delimiter: ';',
        }
    }
}

/// Classifier training configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainingConfig {
    /// Fraction of the corpus held out for evaluation.
    pub test_size: f64,
    /// Seed for augmentation sampling and the train/validation shuffle.
    pub random_seed: u64,
    /// Iteration cap for each binary optimizer.
    pub max_iterations: usize,
    /// Inverse L2 regularization strength.
    pub regularization: f64,
    /// Gradient norm below which an optimizer is considered converged.
    pub tolerance: f64,
    /// Expand the corpus with partial symptom subsets.
    pub augment: bool,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            test_size: 0.2,
            random_seed: 42,
            max_iterations: 300,
            regularization: 1.0,
            tolerance: 1e-4,
            augment: true,
        }
    }
}

/// TF-IDF vectorizer configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Minimum number of documents a term must appear in.
    pub min_df: usize,
    /// Inclusive word n-gram range.
    pub ngram_range: (usize, usize),
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            min_df: 2,
            ngram_range: (1, 2),
        }
    }
}

/// Inference configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Maximum number of diseases returned.
    pub max_predictions: usize,
    /// Minimum probability for a disease to be returned.
    pub min_confidence: f64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            max_predictions: 3,
            min_confidence: 0.3,
        }
    }
}

impl SympredConfig {
    /// Read a configuration from a JSON file. Missing fields take defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: SympredConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Overlay `SYMPRED_*` environment variables on top of this configuration.
    pub fn with_env_overrides(mut self) -> Result<Self> {
        if let Ok(path) = std::env::var("SYMPRED_DATASET_PATH") {
            self.dataset.path = PathBuf::from(path);
        }
        if let Ok(dir) = std::env::var("SYMPRED_MODEL_DIR") {
            self.model_dir = PathBuf::from(dir);
        }
        if let Ok(value) = std::env::var("SYMPRED_MAX_PREDICTIONS") {
            self.prediction.max_predictions = parse_env("SYMPRED_MAX_PREDICTIONS", &value)?;
        }
        if let Ok(value) = std::env::var("SYMPRED_MIN_CONFIDENCE") {
            self.prediction.min_confidence = parse_env("SYMPRED_MIN_CONFIDENCE", &value)?;
        }
        if let Ok(value) = std::env::var("SYMPRED_RANDOM_SEED") {
            self.training.random_seed = parse_env("SYMPRED_RANDOM_SEED", &value)?;
        }
        Ok(self)
    }

    /// Check that every setting is in range.
    pub fn validate(&self) -> Result<()> {
        let training = &self.training;
        if !(training.test_size > 0.0 && training.test_size < 1.0) {
            return Err(SympredError::invalid_config(format!(
                "test_size must be in (0, 1), got {}",
                training.test_size
            )));
        }
        if training.regularization <= 0.0 {
            return Err(SympredError::invalid_config(
                "regularization must be positive",
            ));
        }
        if training.max_iterations == 0 {
            return Err(SympredError::invalid_config(
                "max_iterations must be at least 1",
            ));
        }

        let (min_n, max_n) = self.vectorizer.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(SympredError::invalid_config(format!(
                "invalid ngram_range ({min_n}, {max_n})"
            )));
        }
        if self.vectorizer.min_df == 0 {
            return Err(SympredError::invalid_config("min_df must be at least 1"));
        }

        let prediction = &self.prediction;
        if prediction.max_predictions == 0 {
            return Err(SympredError::invalid_config(
                "max_predictions must be at least 1",
            ));
        }
        if !(0.0..=1.0).contains(&prediction.min_confidence) {
            return Err(SympredError::invalid_config(format!(
                "min_confidence must be in [0, 1], got {}",
                prediction.min_confidence
            )));
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| SympredError::invalid_config(format!("{name} has invalid value '{value}'")))
}
