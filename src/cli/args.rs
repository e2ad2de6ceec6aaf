//! Command line argument parsing for the sympred CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// sympred - symptom-based disease prediction
#[derive(Parser, Debug, Clone)]
#[command(name = "sympred")]
#[command(about = "Train and query a symptom-to-disease classifier")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SympredArgs {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// JSON configuration file
    #[arg(short, long, env = "SYMPRED_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SympredArgs {
    /// Effective verbosity: 0 quiet, 1 default, 2 verbose, 3+ debug.
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train a model from the dataset and save it
    Train(TrainArgs),

    /// Predict diseases from symptoms
    Predict(PredictArgs),

    /// List every symptom in the dataset
    Symptoms(DatasetArgs),

    /// List the diseases the trained model knows
    Diseases(ModelArgs),

    /// Show information about the trained model
    Info(ModelArgs),
}

/// Arguments for training
#[derive(Parser, Debug, Clone)]
pub struct TrainArgs {
    /// Dataset CSV file
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,

    /// Directory to save the model into
    #[arg(short, long)]
    pub model_dir: Option<PathBuf>,

    /// Random seed for augmentation and the validation split
    #[arg(long)]
    pub seed: Option<u64>,

    /// Train on the dataset as-is, without symptom-subset augmentation
    #[arg(long)]
    pub no_augment: bool,
}

/// Arguments for prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    /// Symptoms, one per argument
    #[arg(required = true)]
    pub symptoms: Vec<String>,

    /// Directory holding the trained model
    #[arg(short, long)]
    pub model_dir: Option<PathBuf>,

    /// Maximum number of diseases to return
    #[arg(short = 'k', long)]
    pub max_predictions: Option<usize>,

    /// Minimum probability for a disease to be returned
    #[arg(short = 't', long)]
    pub min_confidence: Option<f64>,
}

/// Arguments for commands that read the dataset
#[derive(Parser, Debug, Clone)]
pub struct DatasetArgs {
    /// Dataset CSV file
    #[arg(short, long)]
    pub dataset: Option<PathBuf>,
}

/// Arguments for commands that read the trained model
#[derive(Parser, Debug, Clone)]
pub struct ModelArgs {
    /// Directory holding the trained model
    #[arg(short, long)]
    pub model_dir: Option<PathBuf>,
}

/// Output format options
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable text
    Human,
    /// JSON
    Json,
}
