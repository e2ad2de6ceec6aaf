//! The fitted vectorizer, label space and classifier, held as one unit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::symptom_text;
use crate::error::{Result, SympredError};
use crate::ml::{LabelEncoder, OneVsRestClassifier, SparseVector, TfIdfVectorizer};

/// Facts recorded when a model is trained.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    /// Identifier shared by the three persisted artifacts.
    pub model_id: Uuid,
    /// Training timestamp.
    pub trained_at: DateTime<Utc>,
    /// Corpus entries used to fit the classifier.
    pub training_samples: usize,
    /// Corpus entries held out for evaluation.
    pub validation_samples: usize,
    /// Vocabulary size.
    pub n_features: usize,
    /// Number of diseases in the label space.
    pub n_classes: usize,
    /// Exact-match accuracy on the validation split.
    pub accuracy: f64,
    /// Weighted F1 on the validation split.
    pub f1: f64,
}

/// A complete, immutable trained model.
///
/// Construction checks that the three parts agree on feature dimension and
/// label order, so a value of this type is always safe to predict with.
#[derive(Debug, Clone)]
pub struct TrainedModel {
    vectorizer: TfIdfVectorizer,
    label_encoder: LabelEncoder,
    classifier: OneVsRestClassifier,
    metadata: ModelMetadata,
}

impl TrainedModel {
    /// Assemble a model, rejecting parts that do not belong together.
    pub fn new(
        vectorizer: TfIdfVectorizer,
        label_encoder: LabelEncoder,
        classifier: OneVsRestClassifier,
        metadata: ModelMetadata,
    ) -> Result<Self> {
        let model = Self {
            vectorizer,
            label_encoder,
            classifier,
            metadata,
        };
        model.check_consistency()?;
        Ok(model)
    }

    fn check_consistency(&self) -> Result<()> {
        self.vectorizer.validate()?;
        self.label_encoder.validate()?;
        self.classifier.validate()?;

        if self.classifier.n_features() != self.vectorizer.vocabulary_size() {
            return Err(SympredError::corrupt(format!(
                "classifier expects {} features but vectorizer has {}",
                self.classifier.n_features(),
                self.vectorizer.vocabulary_size()
            )));
        }
        if self.classifier.classes() != self.label_encoder.classes() {
            return Err(SympredError::corrupt(
                "classifier classes differ from the label encoder",
            ));
        }
        if self.metadata.n_features != self.vectorizer.vocabulary_size()
            || self.metadata.n_classes != self.label_encoder.len()
        {
            return Err(SympredError::corrupt(
                "model metadata does not match its artifacts",
            ));
        }
        Ok(())
    }

    /// Featurize raw symptoms exactly as the training corpus was featurized.
    pub fn featurize<S: AsRef<str>>(&self, symptoms: &[S]) -> SparseVector {
        self.vectorizer.transform(&symptom_text(symptoms))
    }

    /// Per-disease probabilities for a feature vector, in [`classes`](Self::classes) order.
    pub fn predict_proba(&self, features: &SparseVector) -> Vec<f64> {
        self.classifier.predict_proba(features)
    }

    /// Disease names in label-space order.
    pub fn classes(&self) -> &[String] {
        self.label_encoder.classes()
    }

    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    pub fn label_encoder(&self) -> &LabelEncoder {
        &self.label_encoder
    }

    pub fn classifier(&self) -> &OneVsRestClassifier {
        &self.classifier
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    /// Identifier shared by this model's persisted artifacts.
    pub fn model_id(&self) -> Uuid {
        self.metadata.model_id
    }
}
