//! The diagnosis service: one object owning the current model.
//!
//! Readers take a cheap `Arc` snapshot of the current [`TrainedModel`] and
//! predict without holding any lock. Retraining builds the replacement model
//! completely, persists it, and only then swaps the shared reference, so a
//! reader sees either the old model or the new one and never a mix. At most
//! one retrain runs at a time; a concurrent request is rejected rather than
//! queued.

use std::sync::Arc;

use log::{info, warn};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};

use crate::analysis::normalize_all;
use crate::config::SympredConfig;
use crate::corpus::{DatasetLoader, DiseaseRecord, all_symptoms};
use crate::error::{Result, SympredError};
use crate::model::{ModelMetadata, ModelStore, TrainedModel};
use crate::predict::{
    DiseaseInfo, INSUFFICIENT_SIGNAL_ADVICE, INSUFFICIENT_SIGNAL_MESSAGE, PredictionResult,
    Predictor,
};
use crate::training::{Trainer, TrainingReport};

/// The most likely disease with its description and advice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimaryDiagnosis {
    pub disease: String,
    pub confidence: f64,
    pub description: String,
    pub advice: String,
}

/// Answer to a diagnosis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Diagnosis {
    /// No disease cleared the confidence threshold.
    InsufficientSignal { message: String, advice: String },
    /// At least one disease cleared the threshold.
    Confident {
        primary: PrimaryDiagnosis,
        others: Vec<PredictionResult>,
    },
}

impl Diagnosis {
    fn from_predictions(predictions: Vec<PredictionResult>) -> Self {
        let mut ranked = predictions.into_iter().map(|p| PredictionResult {
            confidence: round3(p.confidence),
            ..p
        });
        match ranked.next() {
            None => Diagnosis::InsufficientSignal {
                message: INSUFFICIENT_SIGNAL_MESSAGE.to_string(),
                advice: INSUFFICIENT_SIGNAL_ADVICE.to_string(),
            },
            Some(best) => {
                let info = DiseaseInfo::lookup(&best.disease);
                Diagnosis::Confident {
                    primary: PrimaryDiagnosis {
                        disease: best.disease,
                        confidence: best.confidence,
                        description: info.description.to_string(),
                        advice: info.advice.to_string(),
                    },
                    others: ranked.collect(),
                }
            }
        }
    }
}

/// A disease the loaded model can predict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiseaseSummary {
    pub name: String,
    pub description: String,
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Owns the configuration, the model store and the current model.
#[derive(Debug)]
pub struct DiagnosisService {
    config: SympredConfig,
    store: ModelStore,
    predictor: Predictor,
    current: RwLock<Option<Arc<TrainedModel>>>,
    retrain: Mutex<()>,
}

impl DiagnosisService {
    /// Create a service with no model loaded.
    pub fn new(config: SympredConfig) -> Self {
        let store = ModelStore::new(config.model_dir.clone());
        let predictor = Predictor::new(config.prediction);
        Self {
            config,
            store,
            predictor,
            current: RwLock::new(None),
            retrain: Mutex::new(()),
        }
    }

    /// Create a service and load the stored model if there is one.
    ///
    /// A missing model is not an error: the service starts unloaded and must
    /// be trained. A corrupt model is an error.
    pub fn open(config: SympredConfig) -> Result<Self> {
        let service = Self::new(config);
        match service.store.load() {
            Ok(model) => service.publish(model),
            Err(SympredError::ModelNotFound { path }) => {
                warn!("No trained model found ({path}); train before predicting");
            }
            Err(e) => return Err(e),
        }
        Ok(service)
    }

    pub fn config(&self) -> &SympredConfig {
        &self.config
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    /// Whether a model is loaded.
    pub fn is_ready(&self) -> bool {
        self.current.read().is_some()
    }

    /// Snapshot of the current model.
    pub fn current(&self) -> Option<Arc<TrainedModel>> {
        self.current.read().clone()
    }

    fn require_model(&self) -> Result<Arc<TrainedModel>> {
        self.current().ok_or(SympredError::ModelNotTrained)
    }

    fn publish(&self, model: TrainedModel) {
        let model_id = model.model_id();
        *self.current.write() = Some(Arc::new(model));
        info!("Model {model_id} is now serving");
    }

    /// Ranked predictions for `symptoms`.
    ///
    /// An empty list, or one whose entries are all blank, is rejected as
    /// invalid input before prediction.
    pub fn predict<S: AsRef<str>>(&self, symptoms: &[S]) -> Result<Vec<PredictionResult>> {
        if symptoms.is_empty() {
            return Err(SympredError::invalid_input("symptom list is empty"));
        }
        if normalize_all(symptoms).is_empty() {
            return Err(SympredError::invalid_input("symptom list holds only blank entries"));
        }
        let model = self.require_model()?;
        Ok(self.predictor.predict(&model, symptoms))
    }

    /// Predict and package the result with disease information.
    pub fn diagnose<S: AsRef<str>>(&self, symptoms: &[S]) -> Result<Diagnosis> {
        self.predict(symptoms).map(Diagnosis::from_predictions)
    }

    /// Train on the configured dataset, persist the model and swap it in.
    pub fn train(&self) -> Result<TrainingReport> {
        let _guard = self
            .retrain
            .try_lock()
            .ok_or(SympredError::RetrainInProgress)?;
        let records = self.load_dataset()?;
        self.train_locked(&records)
    }

    /// Like [`train`](Self::train), with records supplied by the caller.
    pub fn train_on(&self, records: &[DiseaseRecord]) -> Result<TrainingReport> {
        let _guard = self
            .retrain
            .try_lock()
            .ok_or(SympredError::RetrainInProgress)?;
        self.train_locked(records)
    }

    fn train_locked(&self, records: &[DiseaseRecord]) -> Result<TrainingReport> {
        let trainer = Trainer::new(self.config.training.clone(), self.config.vectorizer);
        let outcome = trainer.train(records)?;
        self.store.save(&outcome.model)?;
        self.publish(outcome.model);
        info!(
            "Training finished in {:.2}s: accuracy {:.4}, F1 {:.4}",
            outcome.report.training_time_seconds, outcome.report.accuracy, outcome.report.f1
        );
        Ok(outcome.report)
    }

    /// Reload the stored model, replacing the current one.
    ///
    /// Holds the training slot, so it never overlaps a save or publishes a
    /// model older than the one a concurrent retrain just stored.
    pub fn reload(&self) -> Result<()> {
        let _guard = self
            .retrain
            .try_lock()
            .ok_or(SympredError::RetrainInProgress)?;
        let model = self.store.load()?;
        self.publish(model);
        Ok(())
    }

    fn load_dataset(&self) -> Result<Vec<DiseaseRecord>> {
        DatasetLoader::from_config(&self.config.dataset).load(&self.config.dataset.path)
    }

    /// Every distinct normalized symptom in the configured dataset, sorted.
    pub fn symptoms(&self) -> Result<Vec<String>> {
        Ok(all_symptoms(&self.load_dataset()?))
    }

    /// Diseases known to the loaded model, in label order.
    pub fn diseases(&self) -> Result<Vec<DiseaseSummary>> {
        let model = self.require_model()?;
        Ok(model
            .classes()
            .iter()
            .map(|name| DiseaseSummary {
                name: name.clone(),
                description: DiseaseInfo::lookup(name).description.to_string(),
            })
            .collect())
    }

    /// Metadata of the loaded model.
    pub fn model_info(&self) -> Result<ModelMetadata> {
        Ok(self.require_model()?.metadata().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.123456), 0.123);
        assert_eq!(round3(0.66666), 0.667);
        assert_eq!(round3(0.0), 0.0);
    }

    #[test]
    fn test_empty_predictions_are_insufficient_signal() {
        let diagnosis = Diagnosis::from_predictions(Vec::new());
        assert_eq!(
            diagnosis,
            Diagnosis::InsufficientSignal {
                message: INSUFFICIENT_SIGNAL_MESSAGE.to_string(),
                advice: INSUFFICIENT_SIGNAL_ADVICE.to_string(),
            }
        );
    }

    #[test]
    fn test_primary_and_others() {
        let predictions = vec![
            PredictionResult {
                disease: "Cảm cúm".to_string(),
                confidence: 0.81234,
            },
            PredictionResult {
                disease: "Cảm lạnh".to_string(),
                confidence: 0.40049,
            },
        ];
        let Diagnosis::Confident { primary, others } = Diagnosis::from_predictions(predictions)
        else {
            panic!("expected a confident diagnosis");
        };
        assert_eq!(primary.disease, "Cảm cúm");
        assert_eq!(primary.confidence, 0.812);
        assert_eq!(primary.description, DiseaseInfo::lookup("Cảm cúm").description);
        assert_eq!(others.len(), 1);
        assert_eq!(others[0].confidence, 0.4);
    }

    #[test]
    fn test_unloaded_service() {
        let service = DiagnosisService::new(SympredConfig::default());
        assert!(!service.is_ready());
        assert!(matches!(
            service.predict(&["fever"]),
            Err(SympredError::ModelNotTrained)
        ));
        assert!(service.model_info().unwrap_err().is_not_ready());
    }

    #[test]
    fn test_empty_input_rejected_before_model_check() {
        let service = DiagnosisService::new(SympredConfig::default());
        let empty: [&str; 0] = [];
        assert!(matches!(
            service.predict(&empty),
            Err(SympredError::InvalidInput(_))
        ));
        assert!(matches!(
            service.predict(&["  ", ";"]),
            Err(SympredError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_retrain_is_exclusive() {
        let service = DiagnosisService::new(SympredConfig::default());
        let _held = service.retrain.lock();
        assert!(matches!(
            service.train_on(&[]),
            Err(SympredError::RetrainInProgress)
        ));
        assert!(matches!(
            service.reload(),
            Err(SympredError::RetrainInProgress)
        ));
    }
}
