//! Turns disease records into single-label corpus entries.

use std::collections::BTreeSet;

use crate::analysis::{normalize_all, normalize_label, symptom_text};
use crate::corpus::augment::AugmentedSample;
use crate::corpus::record::{CorpusEntry, DiseaseRecord};

/// Build one corpus entry per record.
pub fn build_corpus(records: &[DiseaseRecord]) -> Vec<CorpusEntry> {
    records
        .iter()
        .map(|record| CorpusEntry {
            text: symptom_text(&record.symptoms),
            label: normalize_label(&record.disease_name),
        })
        .collect()
}

/// Build one corpus entry per augmented sample.
pub fn build_corpus_from_samples(samples: &[AugmentedSample]) -> Vec<CorpusEntry> {
    samples
        .iter()
        .map(|sample| CorpusEntry {
            text: symptom_text(&sample.symptoms),
            label: sample.disease.clone(),
        })
        .collect()
}

/// Sorted, distinct normalized symptoms across all records.
pub fn all_symptoms(records: &[DiseaseRecord]) -> Vec<String> {
    records
        .iter()
        .flat_map(|record| normalize_all(&record.symptoms))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<DiseaseRecord> {
        vec![
            DiseaseRecord::from_delimited("Flu", "Fever; Cough ;Headache", ';'),
            DiseaseRecord::from_delimited("Cold", "runny nose;cough", ';'),
        ]
    }

    #[test]
    fn test_build_corpus() {
        let corpus = build_corpus(&records());
        assert_eq!(corpus.len(), 2);
        assert_eq!(corpus[0].text, "fever ; cough ; headache");
        assert_eq!(corpus[0].label, "Flu");
        assert_eq!(corpus[1].text, "runny nose ; cough");
    }

    #[test]
    fn test_decomposed_disease_name_is_one_label() {
        let records = vec![
            DiseaseRecord::from_delimited("Viêm da", "ngứa;phát ban", ';'),
            DiseaseRecord::from_delimited("Vie\u{0302}m da", "ngứa;da khô", ';'),
        ];
        let corpus = build_corpus(&records);
        assert_eq!(corpus[0].label, corpus[1].label);
        assert_eq!(corpus[1].label, "Viêm da");
    }

    #[test]
    fn test_build_corpus_from_samples() {
        let samples = vec![AugmentedSample {
            disease: "Flu".to_string(),
            symptoms: vec!["fever".to_string(), "cough".to_string()],
        }];
        let corpus = build_corpus_from_samples(&samples);
        assert_eq!(
            corpus,
            vec![CorpusEntry {
                text: "fever ; cough".to_string(),
                label: "Flu".to_string(),
            }]
        );
    }

    #[test]
    fn test_all_symptoms_sorted_and_distinct() {
        let symptoms = all_symptoms(&records());
        assert_eq!(symptoms, vec!["cough", "fever", "headache", "runny nose"]);
    }
}
