//! Text analysis for symptom lists.
//!
//! Training and inference both turn a list of raw symptoms into text through
//! [`normalizer::symptom_text`], and that text into terms through
//! [`tokenizer::SymptomTokenizer`]. Keeping a single path for both sides means
//! a query is always featurized exactly like the corpus was.

pub mod normalizer;
pub mod tokenizer;

pub use normalizer::{SYMPTOM_SEPARATOR, normalize, normalize_all, normalize_label, symptom_text};
pub use tokenizer::SymptomTokenizer;
