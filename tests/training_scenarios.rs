//! End-to-end training and prediction scenarios.

mod common;

use tempfile::TempDir;

use sympred::config::{PredictionConfig, TrainingConfig, VectorizerConfig};
use sympred::corpus::DatasetLoader;
use sympred::error::Result;
use sympred::predict::Predictor;
use sympred::training::Trainer;

#[test]
fn test_flu_symptoms_predict_flu() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let records = common::records(temp_dir.path())?;
    let model = Trainer::default().train(&records)?.model;

    let results = Predictor::default().predict(&model, &["fever", "cough", "headache"]);

    assert!(!results.is_empty());
    assert_eq!(results[0].disease, "Flu");
    assert!(results[0].confidence >= 0.3);

    Ok(())
}

#[test]
fn test_single_disease_dataset_predicts_that_disease() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = common::write_dataset(temp_dir.path(), "flu.csv", common::FLU_ONLY_DATASET)?;
    let records = DatasetLoader::default().load(path)?;
    let model = Trainer::default().train(&records)?.model;

    assert_eq!(model.classes(), &["Flu"]);
    let results = Predictor::default().predict(&model, &["fever", "cough", "headache"]);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].disease, "Flu");
    assert!(results[0].confidence >= 0.3);

    Ok(())
}

#[test]
fn test_unknown_symptoms_give_empty_result() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let records = common::records(temp_dir.path())?;
    let model = Trainer::default().train(&records)?.model;

    let query = ["glowing toenails", "purple hiccups"];
    assert!(model.featurize(&query).is_empty());

    let permissive = Predictor::new(PredictionConfig {
        max_predictions: 5,
        min_confidence: 0.0,
    });
    assert!(permissive.predict(&model, &query).is_empty());

    Ok(())
}

#[test]
fn test_training_is_deterministic() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let records = common::records(temp_dir.path())?;

    let first = Trainer::default().train(&records)?;
    let second = Trainer::default().train(&records)?;

    assert_eq!(first.report.accuracy, second.report.accuracy);
    assert_eq!(first.report.f1, second.report.f1);
    assert_eq!(first.evaluation.labels, second.evaluation.labels);
    assert_eq!(
        first.model.metadata().training_samples,
        second.model.metadata().training_samples
    );

    let query = first.model.featurize(&["sneezing", "cough"]);
    assert_eq!(
        first.model.predict_proba(&query),
        second.model.predict_proba(&query)
    );
    // Each run gets its own identity.
    assert_ne!(first.model.model_id(), second.model.model_id());

    Ok(())
}

#[test]
fn test_results_sorted_and_threshold_monotone() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let records = common::records(temp_dir.path())?;
    let model = Trainer::default().train(&records)?.model;

    let queries: [&[&str]; 4] = [
        &["fever", "cough"],
        &["stomach pain", "sneezing", "rash"],
        &["wheezing"],
        &["dry skin", "fatigue", "nausea", "runny nose"],
    ];
    for query in queries {
        let mut previous = usize::MAX;
        for threshold in [0.0, 0.05, 0.2, 0.3, 0.5, 0.8, 0.95] {
            let predictor = Predictor::new(PredictionConfig {
                max_predictions: 5,
                min_confidence: threshold,
            });
            let results = predictor.predict(&model, query);

            assert!(results.len() <= previous, "threshold {threshold} grew {query:?}");
            assert!(
                results
                    .windows(2)
                    .all(|w| w[0].confidence >= w[1].confidence)
            );
            assert!(results.iter().all(|r| r.confidence >= threshold));
            previous = results.len();
        }
    }

    Ok(())
}

#[test]
fn test_top_k_limits_results() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let records = common::records(temp_dir.path())?;
    let model = Trainer::default().train(&records)?.model;

    for k in 1..=5 {
        let predictor = Predictor::new(PredictionConfig {
            max_predictions: k,
            min_confidence: 0.0,
        });
        assert_eq!(predictor.predict(&model, &["fever", "rash"]).len(), k);
    }

    Ok(())
}

#[test]
fn test_training_without_augmentation() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let records = common::records(temp_dir.path())?;
    let trainer = Trainer::new(
        TrainingConfig {
            augment: false,
            ..TrainingConfig::default()
        },
        VectorizerConfig::default(),
    );

    let outcome = trainer.train(&records)?;
    let meta = outcome.model.metadata();

    assert_eq!(meta.training_samples + meta.validation_samples, records.len());
    assert_eq!(meta.validation_samples, 5);
    assert_eq!(meta.n_classes, 5);

    Ok(())
}

#[test]
fn test_unigram_only_vocabulary_is_smaller() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let records = common::records(temp_dir.path())?;

    let bigrams = Trainer::default().train(&records)?.model;
    let unigrams = Trainer::new(
        TrainingConfig::default(),
        VectorizerConfig {
            ngram_range: (1, 1),
            ..VectorizerConfig::default()
        },
    )
    .train(&records)?
    .model;

    assert!(unigrams.vectorizer().vocabulary_size() < bigrams.vectorizer().vocabulary_size());
    assert!(bigrams.vectorizer().feature_index("stomach pain").is_some());
    assert!(unigrams.vectorizer().feature_index("stomach pain").is_none());

    Ok(())
}
