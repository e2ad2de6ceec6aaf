//! Multi-label binary encoding of disease names.
//!
//! A disease name is always one atomic label. [`Labels`] makes the shape of
//! the input explicit, so a string can never be mistaken for a sequence of
//! per-character labels.

use std::collections::{BTreeSet, HashMap};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SympredError};

/// Labels attached to one example.
#[derive(Debug, Clone, Copy)]
pub enum Labels<'a> {
    /// Exactly one disease.
    Single(&'a str),
    /// Any number of diseases.
    Multi(&'a [String]),
}

impl<'a> From<&'a str> for Labels<'a> {
    fn from(label: &'a str) -> Self {
        Labels::Single(label)
    }
}

impl<'a> From<&'a String> for Labels<'a> {
    fn from(label: &'a String) -> Self {
        Labels::Single(label.as_str())
    }
}

impl<'a> From<&'a [String]> for Labels<'a> {
    fn from(labels: &'a [String]) -> Self {
        Labels::Multi(labels)
    }
}

impl<'a> From<&'a Vec<String>> for Labels<'a> {
    fn from(labels: &'a Vec<String>) -> Self {
        Labels::Multi(labels.as_slice())
    }
}

impl Labels<'_> {
    fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Labels::Single(label) => Box::new(std::iter::once(*label)),
            Labels::Multi(labels) => Box::new(labels.iter().map(String::as_str)),
        }
    }
}

/// Maps disease names to fixed indices and indicator vectors.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LabelEncoder {
    /// Sorted distinct labels; position is the label index.
    classes: Vec<String>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl LabelEncoder {
    /// Create an unfitted encoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fit the label space from per-example labels. Classes are sorted.
    pub fn fit<'a, L>(&mut self, examples: impl IntoIterator<Item = L>) -> Result<()>
    where
        L: Into<Labels<'a>>,
    {
        let mut distinct = BTreeSet::new();
        for example in examples {
            let labels: Labels<'a> = example.into();
            for label in labels.iter() {
                distinct.insert(label.to_string());
            }
        }
        if distinct.is_empty() {
            return Err(SympredError::training("no labels to fit"));
        }
        self.classes = distinct.into_iter().collect();
        self.rebuild_index();
        Ok(())
    }

    /// Encode labels as a binary indicator vector of length [`len`](Self::len).
    ///
    /// Labels outside the fitted space are ignored with a warning.
    pub fn encode<'a>(&self, labels: impl Into<Labels<'a>>) -> Vec<u8> {
        let labels: Labels<'a> = labels.into();
        let mut indicator = vec![0u8; self.classes.len()];
        for label in labels.iter() {
            match self.index.get(label) {
                Some(&idx) => indicator[idx] = 1,
                None => warn!("Ignoring unknown label '{label}'"),
            }
        }
        indicator
    }

    /// Decode an indicator vector back to labels, in label-space order.
    pub fn decode(&self, indicator: &[u8]) -> Vec<String> {
        indicator
            .iter()
            .zip(&self.classes)
            .filter(|(bit, _)| **bit != 0)
            .map(|(_, class)| class.clone())
            .collect()
    }

    /// Index of a label, if it is in the label space.
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// The label at `index`.
    pub fn class(&self, index: usize) -> Option<&str> {
        self.classes.get(index).map(String::as_str)
    }

    /// All labels in index order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Number of labels.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Whether the encoder has no labels.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Restore the lookup table after deserialization.
    pub(crate) fn rebuild_index(&mut self) {
        self.index = self
            .classes
            .iter()
            .enumerate()
            .map(|(i, class)| (class.clone(), i))
            .collect();
    }

    /// Check that the label space is non-empty, sorted and distinct.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.classes.is_empty() {
            return Err(SympredError::corrupt("label encoder has no classes"));
        }
        if self.classes.windows(2).any(|w| w[0] >= w[1]) {
            return Err(SympredError::corrupt(
                "label encoder classes are not sorted and distinct",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_label_is_atomic() {
        let mut encoder = LabelEncoder::new();
        encoder.fit(["Flu", "Cold", "Flu"]).unwrap();

        assert_eq!(encoder.len(), 2);
        let indicator = encoder.encode("Flu");
        assert_eq!(indicator.iter().filter(|b| **b == 1).count(), 1);
        assert_eq!(indicator, vec![0, 1]);
        assert!(encoder.index_of("F").is_none());
    }

    #[test]
    fn test_classes_sorted() {
        let mut encoder = LabelEncoder::new();
        encoder.fit(["Viêm họng", "Cảm cúm", "Sốt rét"]).unwrap();
        assert_eq!(encoder.classes(), &["Cảm cúm", "Sốt rét", "Viêm họng"]);
        assert_eq!(encoder.class(1), Some("Sốt rét"));
    }

    #[test]
    fn test_multi_label_round_trip() {
        let examples = vec![
            vec!["Flu".to_string(), "Cold".to_string()],
            vec!["Measles".to_string()],
        ];
        let mut encoder = LabelEncoder::new();
        encoder.fit(&examples).unwrap();

        let indicator = encoder.encode(&examples[0]);
        assert_eq!(indicator, vec![1, 1, 0]);
        assert_eq!(encoder.decode(&indicator), vec!["Cold", "Flu"]);
    }

    #[test]
    fn test_unknown_labels_are_ignored() {
        let mut encoder = LabelEncoder::new();
        encoder.fit(["Flu"]).unwrap();
        assert_eq!(encoder.encode("Measles"), vec![0]);
    }

    #[test]
    fn test_fit_without_labels_fails() {
        let mut encoder = LabelEncoder::new();
        let empty: Vec<&str> = Vec::new();
        assert!(encoder.fit(empty).is_err());
    }

    #[test]
    fn test_serde_round_trip_rebuilds_index() {
        let mut encoder = LabelEncoder::new();
        encoder.fit(["Flu", "Cold"]).unwrap();
        let bytes = bincode::serialize(&encoder).unwrap();
        let mut restored: LabelEncoder = bincode::deserialize(&bytes).unwrap();
        restored.rebuild_index();
        assert!(restored.validate().is_ok());
        assert_eq!(restored.index_of("Flu"), Some(1));
    }
}
