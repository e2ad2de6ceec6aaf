//! Corpus construction from the raw disease/symptom dataset.
//!
//! The training path is:
//!
//! ```text
//! CSV rows → DiseaseRecord → Augmenter (seeded subsets) → CorpusEntry { text, label }
//! ```
//!
//! Every [`CorpusEntry`] carries exactly one disease label.

pub mod augment;
pub mod builder;
pub mod loader;
pub mod record;

pub use augment::{AugmentedSample, Augmenter};
pub use builder::{all_symptoms, build_corpus, build_corpus_from_samples};
pub use loader::DatasetLoader;
pub use record::{CorpusEntry, DiseaseRecord};
