//! Dataset and corpus record types.

use serde::{Deserialize, Serialize};

/// One row of the source dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiseaseRecord {
    /// Disease name, kept verbatim apart from surrounding whitespace.
    pub disease_name: String,
    /// Raw symptom strings in dataset order.
    pub symptoms: Vec<String>,
}

impl DiseaseRecord {
    /// Create a record from a disease name and its raw symptoms.
    pub fn new<S: Into<String>>(disease_name: S, symptoms: Vec<String>) -> Self {
        Self {
            disease_name: disease_name.into(),
            symptoms,
        }
    }

    /// Parse a delimited symptom field (e.g. `"fever;cough"`).
    pub fn from_delimited<S: Into<String>>(disease_name: S, field: &str, delimiter: char) -> Self {
        let symptoms = field.split(delimiter).map(str::to_string).collect();
        Self::new(disease_name, symptoms)
    }
}

/// One training example: symptom text and its single disease label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorpusEntry {
    /// Normalized, separator-joined symptom text.
    pub text: String,
    /// Disease name.
    pub label: String,
}
