//! Synthetic symptom-subset augmentation.
//!
//! Each disease usually has very few rows. To teach the classifier that a
//! partial presentation still points at the right disease, every record is
//! emitted once in full and then several more times as random subsets of its
//! symptoms:
//!
//! | symptoms | subsets | subset size |
//! |---|---|---|
//! | ≥ 4 | 3 | `max(3, ⌊n · 0.8⌋)` |
//! | ≥ 5 | 2 more | `max(3, ⌊n · 0.6⌋)` |
//!
//! Sampling is without replacement and driven by one seeded RNG per
//! [`Augmenter`], so a training run is reproducible.

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use serde::{Deserialize, Serialize};

use crate::analysis::{normalize_all, normalize_label};
use crate::corpus::record::DiseaseRecord;

/// A disease with a (possibly partial) list of normalized symptoms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AugmentedSample {
    /// Disease label.
    pub disease: String,
    /// Normalized symptoms.
    pub symptoms: Vec<String>,
}

/// One subset-generation rule.
#[derive(Debug, Clone, Copy)]
struct SubsetRule {
    /// Records with fewer symptoms are skipped.
    min_symptoms: usize,
    /// Share of the symptoms kept in each subset.
    fraction: f64,
    /// Subsets generated per record.
    copies: usize,
}

const SUBSET_RULES: [SubsetRule; 2] = [
    SubsetRule {
        min_symptoms: 4,
        fraction: 0.8,
        copies: 3,
    },
    SubsetRule {
        min_symptoms: 5,
        fraction: 0.6,
        copies: 2,
    },
];

/// Smallest subset ever produced.
const MIN_SUBSET_SIZE: usize = 3;

/// Generates partial symptom subsets per disease.
#[derive(Debug)]
pub struct Augmenter {
    rng: StdRng,
}

impl Augmenter {
    /// Create an augmenter whose sampling is fully determined by `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Subset size for a record with `len` symptoms kept at `fraction`.
    pub fn subset_size(len: usize, fraction: f64) -> usize {
        MIN_SUBSET_SIZE.max((len as f64 * fraction).floor() as usize)
    }

    /// Expand `records` into the full records followed by their subsets.
    pub fn augment(&mut self, records: &[DiseaseRecord]) -> Vec<AugmentedSample> {
        let mut samples = Vec::with_capacity(records.len() * 6);
        let mut subsets = Vec::new();
        for record in records {
            let symptoms = normalize_all(&record.symptoms);
            let disease = normalize_label(&record.disease_name);

            for rule in SUBSET_RULES.iter() {
                if symptoms.len() < rule.min_symptoms {
                    continue;
                }
                let size = Self::subset_size(symptoms.len(), rule.fraction).min(symptoms.len());
                for _ in 0..rule.copies {
                    subsets.push(self.sample_subset(&symptoms, size));
                }
            }

            samples.push(AugmentedSample {
                disease: disease.clone(),
                symptoms,
            });
            samples.extend(subsets.drain(..).map(|symptoms| AugmentedSample {
                disease: disease.clone(),
                symptoms,
            }));
        }

        debug!(
            "Augmented {} records into {} samples",
            records.len(),
            samples.len()
        );
        samples
    }

    /// Draw `size` distinct positions and keep them in record order.
    fn sample_subset(&mut self, symptoms: &[String], size: usize) -> Vec<String> {
        let mut picked = index::sample(&mut self.rng, symptoms.len(), size).into_vec();
        picked.sort_unstable();
        picked.into_iter().map(|i| symptoms[i].clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(disease: &str, n: usize) -> DiseaseRecord {
        let symptoms = (0..n).map(|i| format!("symptom {i}")).collect();
        DiseaseRecord::new(disease, symptoms)
    }

    #[test]
    fn test_subset_size() {
        assert_eq!(Augmenter::subset_size(4, 0.8), 3);
        assert_eq!(Augmenter::subset_size(5, 0.8), 4);
        assert_eq!(Augmenter::subset_size(5, 0.6), 3);
        assert_eq!(Augmenter::subset_size(10, 0.8), 8);
        assert_eq!(Augmenter::subset_size(10, 0.6), 6);
    }

    #[test]
    fn test_sample_counts_by_record_size() {
        let mut augmenter = Augmenter::new(42);

        let samples = augmenter.augment(&[record("A", 3)]);
        assert_eq!(samples.len(), 1);

        let samples = augmenter.augment(&[record("B", 4)]);
        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0].symptoms.len(), 4);
        assert!(samples[1..].iter().all(|s| s.symptoms.len() == 3));

        let samples = augmenter.augment(&[record("C", 10)]);
        assert_eq!(samples.len(), 6);
        assert_eq!(samples[0].symptoms.len(), 10);
        assert!(samples[1..4].iter().all(|s| s.symptoms.len() == 8));
        assert!(samples[4..].iter().all(|s| s.symptoms.len() == 6));
        assert!(samples.iter().all(|s| s.disease == "C"));
    }

    #[test]
    fn test_subsets_are_without_replacement() {
        let mut augmenter = Augmenter::new(7);
        let source = record("D", 8);
        for sample in augmenter.augment(&[source.clone()]) {
            let mut unique = sample.symptoms.clone();
            unique.dedup();
            assert_eq!(unique.len(), sample.symptoms.len());
            assert!(sample.symptoms.iter().all(|s| source.symptoms.contains(s)));
        }
    }

    #[test]
    fn test_seeded_augmentation_is_reproducible() {
        let records = vec![record("A", 6), record("B", 9)];
        let first = Augmenter::new(42).augment(&records);
        let second = Augmenter::new(42).augment(&records);
        assert_eq!(first, second);
    }

    #[test]
    fn test_symptoms_are_normalized() {
        let records = vec![DiseaseRecord::new(
            " Flu ",
            vec!["Fever ".into(), " COUGH".into(), "".into()],
        )];
        let samples = Augmenter::new(1).augment(&records);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].disease, "Flu");
        assert_eq!(samples[0].symptoms, vec!["fever", "cough"]);
    }
}
