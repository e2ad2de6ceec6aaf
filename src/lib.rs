//! # sympred
//!
//! Symptom-based disease prediction.
//!
//! A labelled dataset of diseases and their symptoms is expanded with
//! symptom subsets, turned into TF-IDF features and used to fit a
//! one-vs-rest logistic regression classifier. The fitted model is persisted
//! as three artifacts and served by a [`service::DiagnosisService`], which
//! ranks diseases for a list of symptoms and attaches a description and
//! advice to the most likely one.
//!
//! ```no_run
//! use sympred::config::SympredConfig;
//! use sympred::service::DiagnosisService;
//!
//! # fn main() -> sympred::error::Result<()> {
//! let service = DiagnosisService::open(SympredConfig::default())?;
//! if !service.is_ready() {
//!     service.train()?;
//! }
//! let diagnosis = service.diagnose(&["sốt cao", "ho", "đau đầu"])?;
//! println!("{diagnosis:?}");
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod ml;
pub mod model;
pub mod predict;
pub mod service;
pub mod training;

pub mod prelude {
    pub use crate::config::SympredConfig;
    pub use crate::error::{Result, SympredError};
    pub use crate::predict::PredictionResult;
    pub use crate::service::{Diagnosis, DiagnosisService};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
