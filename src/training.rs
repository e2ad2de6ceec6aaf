//! The offline training pipeline.
//!
//! ```text
//! records ─► seeded 80/20 split ─► training records ─► Augmenter ─┐
//!                               └► held-out records (whole) ──────┤
//!          corpus ─► TfIdfVectorizer::fit, LabelEncoder::fit ◄────┘
//!                    OneVsRestClassifier::fit   (training part)
//!                    ClassificationReport       (held-out part)
//! ```
//!
//! The split is taken over dataset records before augmentation, so no subset
//! of a held-out record is ever trained on. The vectorizer and label encoder
//! see the whole corpus so every disease and term has a slot; the classifier
//! only sees the training part. Evaluation is diagnostic and never prevents a
//! model from being produced.

use std::time::Instant;

use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::{TrainingConfig, VectorizerConfig};
use crate::corpus::{Augmenter, CorpusEntry, DiseaseRecord, build_corpus, build_corpus_from_samples};
use crate::error::{Result, SympredError};
use crate::ml::{
    ClassificationReport, LabelEncoder, LogisticRegressionParams, OneVsRestClassifier,
    SparseVector, TfIdfVectorizer, train_test_split,
};
use crate::model::{ModelMetadata, TrainedModel};

/// Summary returned to whoever triggered training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Exact-match accuracy on the validation split.
    pub accuracy: f64,
    /// Weighted F1 on the validation split.
    pub f1: f64,
    /// Wall-clock duration of the run.
    pub training_time_seconds: f64,
}

/// A freshly trained model with its evaluation.
#[derive(Debug, Clone)]
pub struct TrainingOutcome {
    pub model: TrainedModel,
    pub evaluation: ClassificationReport,
    pub report: TrainingReport,
}

/// Runs the training pipeline with fixed settings.
#[derive(Debug, Clone, Default)]
pub struct Trainer {
    training: TrainingConfig,
    vectorizer: VectorizerConfig,
}

impl Trainer {
    /// Create a trainer.
    pub fn new(training: TrainingConfig, vectorizer: VectorizerConfig) -> Self {
        Self {
            training,
            vectorizer,
        }
    }

    /// Build the single-label corpus, augmented when configured.
    pub fn corpus(&self, records: &[DiseaseRecord]) -> Vec<CorpusEntry> {
        if self.training.augment {
            let samples = Augmenter::new(self.training.random_seed).augment(records);
            build_corpus_from_samples(&samples)
        } else {
            build_corpus(records)
        }
    }

    /// Split records into training and held-out parts with the configured seed.
    pub fn split(
        &self,
        records: &[DiseaseRecord],
    ) -> Result<(Vec<DiseaseRecord>, Vec<DiseaseRecord>)> {
        let (train_idx, test_idx) = train_test_split(
            records.len(),
            self.training.test_size,
            self.training.random_seed,
        )?;
        let pick = |idx: &[usize]| -> Vec<DiseaseRecord> {
            idx.iter().map(|&i| records[i].clone()).collect()
        };
        Ok((pick(&train_idx), pick(&test_idx)))
    }

    /// Train a model from dataset records.
    pub fn train(&self, records: &[DiseaseRecord]) -> Result<TrainingOutcome> {
        let started = Instant::now();
        if records.is_empty() {
            return Err(SympredError::training("dataset contains no records"));
        }

        let (train_records, held_out) = self.split(records)?;
        let train_corpus = self.corpus(&train_records);
        let test_corpus = build_corpus(&held_out);
        info!(
            "Built corpus of {} training entries from {} records, holding out {} records",
            train_corpus.len(),
            train_records.len(),
            held_out.len()
        );

        let corpus: Vec<&CorpusEntry> = train_corpus.iter().chain(&test_corpus).collect();
        let texts: Vec<&str> = corpus.iter().map(|entry| entry.text.as_str()).collect();
        let mut vectorizer = TfIdfVectorizer::new(&self.vectorizer);
        let features = vectorizer.fit_transform(&texts)?;

        let mut label_encoder = LabelEncoder::new();
        label_encoder.fit(corpus.iter().map(|entry| entry.label.as_str()))?;
        let targets: Vec<Vec<u8>> = corpus
            .iter()
            .map(|entry| label_encoder.encode(entry.label.as_str()))
            .collect();
        info!(
            "Encoded {} diseases over {} features",
            label_encoder.len(),
            vectorizer.vocabulary_size()
        );

        let n_train = train_corpus.len();
        let (train_x, test_x) = features.split_at(n_train);
        let (train_y, test_y) = targets.split_at(n_train);

        let params = LogisticRegressionParams {
            c: self.training.regularization,
            max_iterations: self.training.max_iterations,
            tolerance: self.training.tolerance,
        };
        let classifier = OneVsRestClassifier::fit(
            &train_x.iter().collect::<Vec<&SparseVector>>(),
            train_y,
            label_encoder.classes(),
            vectorizer.vocabulary_size(),
            &params,
        )?;

        let predicted: Vec<Vec<u8>> = test_x.iter().map(|x| classifier.predict(x)).collect();
        let evaluation = ClassificationReport::compute(test_y, &predicted, label_encoder.classes());
        info!(
            "Validation on {} entries: accuracy {:.4}, weighted F1 {:.4}",
            test_x.len(),
            evaluation.accuracy,
            evaluation.weighted_f1
        );
        debug!("Classification report:\n{}", evaluation.to_table());

        let metadata = ModelMetadata {
            model_id: Uuid::new_v4(),
            trained_at: Utc::now(),
            training_samples: train_x.len(),
            validation_samples: test_x.len(),
            n_features: vectorizer.vocabulary_size(),
            n_classes: label_encoder.len(),
            accuracy: evaluation.accuracy,
            f1: evaluation.weighted_f1,
        };
        let model = TrainedModel::new(vectorizer, label_encoder, classifier, metadata)?;

        let report = TrainingReport {
            accuracy: evaluation.accuracy,
            f1: evaluation.weighted_f1,
            training_time_seconds: started.elapsed().as_secs_f64(),
        };
        Ok(TrainingOutcome {
            model,
            evaluation,
            report,
        })
    }
}
