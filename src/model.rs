//! The trained model artifact and its persistence.

pub mod store;
pub mod trained;

pub use store::{CLASSIFIER_FILE, LABEL_ENCODER_FILE, ModelStore, VECTORIZER_FILE};
pub use trained::{ModelMetadata, TrainedModel};
