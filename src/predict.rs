//! Inference over a trained model.

pub mod disease_info;
pub mod predictor;

pub use disease_info::{
    DiseaseInfo, INSUFFICIENT_SIGNAL_ADVICE, INSUFFICIENT_SIGNAL_MESSAGE, UNKNOWN_ADVICE,
    UNKNOWN_DESCRIPTION,
};
pub use predictor::{PredictionResult, Predictor};
