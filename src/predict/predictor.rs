//! Ranked, thresholded disease predictions.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::PredictionConfig;
use crate::model::TrainedModel;

/// One candidate disease and its probability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub disease: String,
    /// Probability in `[0, 1]`.
    pub confidence: f64,
}

/// Turns raw symptoms into the top-K diseases above a confidence threshold.
#[derive(Debug, Clone, Copy, Default)]
pub struct Predictor {
    config: PredictionConfig,
}

impl Predictor {
    pub fn new(config: PredictionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PredictionConfig {
        &self.config
    }

    /// Predict diseases for `symptoms`.
    ///
    /// Results are sorted by non-increasing confidence, at most
    /// `max_predictions` long, and only hold diseases whose probability is at
    /// least `min_confidence`. An empty result means no disease was likely
    /// enough; it is not an error. Symptoms unknown to the vocabulary produce
    /// an empty result without consulting the classifier.
    pub fn predict<S: AsRef<str>>(
        &self,
        model: &TrainedModel,
        symptoms: &[S],
    ) -> Vec<PredictionResult> {
        let features = model.featurize(symptoms);
        if features.is_empty() {
            debug!("No known terms in {} symptoms", symptoms.len());
            return Vec::new();
        }

        let mut scored: Vec<(usize, f64)> = model
            .predict_proba(&features)
            .into_iter()
            .enumerate()
            .collect();
        // Stable sort keeps label order among ties.
        scored.sort_by(|a, b| b.1.total_cmp(&a.1));

        let classes = model.classes();
        scored
            .into_iter()
            .take(self.config.max_predictions)
            .take_while(|&(_, p)| p >= self.config.min_confidence)
            .map(|(j, p)| PredictionResult {
                disease: classes[j].clone(),
                confidence: p,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::DiseaseRecord;
    use crate::training::Trainer;

    fn model() -> TrainedModel {
        let rows = [
            ("Flu", "fever;cough;headache;fatigue;chills"),
            ("Flu", "fever;cough;headache;muscle pain"),
            ("Cold", "runny nose;sneezing;sore throat;cough"),
            ("Cold", "runny nose;sneezing;congestion;sore throat"),
            ("Gastritis", "stomach pain;nausea;bloating;vomiting"),
            ("Gastritis", "stomach pain;nausea;heartburn;bloating"),
        ];
        let records: Vec<DiseaseRecord> = rows
            .iter()
            .map(|(d, s)| DiseaseRecord::from_delimited(*d, s, ';'))
            .collect();
        Trainer::default().train(&records).unwrap().model
    }

    fn predictor(max_predictions: usize, min_confidence: f64) -> Predictor {
        Predictor::new(PredictionConfig {
            max_predictions,
            min_confidence,
        })
    }

    #[test]
    fn test_results_are_sorted_and_bounded() {
        let model = model();
        let results = predictor(2, 0.0).predict(&model, &["fever", "cough"]);
        assert_eq!(results.len(), 2);
        assert!(results.windows(2).all(|w| w[0].confidence >= w[1].confidence));
        assert!(results.iter().all(|r| (0.0..=1.0).contains(&r.confidence)));
    }

    #[test]
    fn test_threshold_monotonicity() {
        let model = model();
        let query = ["stomach pain", "nausea", "cough"];
        let mut previous = usize::MAX;
        for threshold in [0.0, 0.1, 0.3, 0.5, 0.7, 0.9, 1.0] {
            let n = predictor(3, threshold).predict(&model, &query).len();
            assert!(n <= previous);
            previous = n;
        }
    }

    #[test]
    fn test_unknown_symptoms_give_no_result() {
        let model = model();
        let results = predictor(3, 0.0).predict(&model, &["xyzzy", "plugh"]);
        assert!(results.is_empty());
    }

    #[test]
    fn test_input_is_normalized() {
        let model = model();
        let p = predictor(3, 0.0);
        assert_eq!(
            p.predict(&model, &["  FEVER ", "Cough"]),
            p.predict(&model, &["fever", "cough"])
        );
    }
}
