//! Learning components of the symptom classifier.
//!
//! - [`TfIdfVectorizer`]: unigram/bigram TF-IDF features over symptom text
//! - [`LabelEncoder`]: disease names ↔ binary indicator vectors
//! - [`LogisticRegression`]: one L2-regularized binary classifier
//! - [`OneVsRestClassifier`]: one binary classifier per disease
//! - [`split`] and [`metrics`]: seeded hold-out evaluation

pub mod label_encoder;
pub mod logistic;
pub mod metrics;
pub mod one_vs_rest;
pub mod sparse;
pub mod split;
pub mod vectorizer;

pub use label_encoder::{LabelEncoder, Labels};
pub use logistic::{LogisticFit, LogisticRegression, LogisticRegressionParams};
pub use metrics::{ClassificationReport, LabelScore};
pub use one_vs_rest::{BinaryEstimator, OneVsRestClassifier};
pub use sparse::SparseVector;
pub use split::train_test_split;
pub use vectorizer::TfIdfVectorizer;
