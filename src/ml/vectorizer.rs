//! TF-IDF vectorizer for symptom text.

use std::collections::{BTreeMap, HashMap, HashSet};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::analysis::SymptomTokenizer;
use crate::config::VectorizerConfig;
use crate::error::{Result, SympredError};
use crate::ml::sparse::SparseVector;

/// TF-IDF vectorizer over word n-grams.
///
/// Terms seen in fewer than `min_df` training documents are dropped. After
/// fitting, the vocabulary is frozen: unknown terms in [`transform`](Self::transform)
/// contribute nothing.
#[derive(Clone, Serialize, Deserialize)]
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> feature index.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per feature index.
    idf: Vec<f64>,
    /// Number of documents seen during fitting.
    n_documents: usize,
    /// Minimum document frequency for a term to be kept.
    min_df: usize,
    /// Term extraction.
    tokenizer: SymptomTokenizer,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("min_df", &self.min_df)
            .field("tokenizer", &self.tokenizer.name())
            .finish()
    }
}

impl Default for TfIdfVectorizer {
    fn default() -> Self {
        Self::new(&VectorizerConfig::default())
    }
}

impl TfIdfVectorizer {
    /// Create an unfitted vectorizer.
    pub fn new(config: &VectorizerConfig) -> Self {
        let (min_n, max_n) = config.ngram_range;
        Self {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            min_df: config.min_df.max(1),
            tokenizer: SymptomTokenizer::new(min_n, max_n),
        }
    }

    /// Fit the vocabulary and IDF weights on training documents.
    ///
    /// Feature indices follow the sorted order of the kept terms.
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<()> {
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for doc in documents {
            let unique: HashSet<String> = self.tokenizer.tokenize(doc.as_ref()).into_iter().collect();
            for term in unique {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        let n_terms = document_frequency.len();
        let kept: Vec<(String, usize)> = document_frequency
            .into_iter()
            .filter(|(_, df)| *df >= self.min_df)
            .collect();
        if kept.is_empty() {
            return Err(SympredError::training(format!(
                "no terms remain after pruning with min_df={} ({} documents, {} candidate terms)",
                self.min_df,
                documents.len(),
                n_terms
            )));
        }

        let n = documents.len() as f64;
        let mut vocabulary = HashMap::with_capacity(kept.len());
        let mut idf = Vec::with_capacity(kept.len());
        for (idx, (term, df)) in kept.into_iter().enumerate() {
            // IDF = ln((N + 1) / (df + 1)) + 1
            idf.push(((n + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        info!(
            "Fitted TF-IDF vocabulary: {} of {} terms kept from {} documents",
            vocabulary.len(),
            n_terms,
            documents.len()
        );

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.n_documents = documents.len();
        Ok(())
    }

    /// Transform a document into an L2-normalized TF-IDF vector.
    ///
    /// Never fails: an all-zero vector is returned when no term is known.
    pub fn transform(&self, document: &str) -> SparseVector {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for term in self.tokenizer.tokenize(document) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut vector = SparseVector::from_pairs(
            counts
                .into_iter()
                .map(|(idx, tf)| (idx, tf * self.idf[idx]))
                .collect(),
        );
        vector.l2_normalize();
        if vector.is_empty() {
            debug!("No known terms in '{document}'");
        }
        vector
    }

    /// Fit on `documents`, then transform each of them.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> Result<Vec<SparseVector>> {
        self.fit(documents)?;
        Ok(documents
            .iter()
            .map(|doc| self.transform(doc.as_ref()))
            .collect())
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Whether `fit` has produced a vocabulary.
    pub fn is_fitted(&self) -> bool {
        !self.vocabulary.is_empty()
    }

    /// Number of documents the vectorizer was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }

    /// Feature index of a term, if it is in the vocabulary.
    pub fn feature_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Check internal consistency after deserialization.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.idf.len() != self.vocabulary.len() {
            return Err(SympredError::corrupt(format!(
                "vectorizer has {} terms but {} idf weights",
                self.vocabulary.len(),
                self.idf.len()
            )));
        }
        if self.vocabulary.values().any(|&idx| idx >= self.idf.len()) {
            return Err(SympredError::corrupt("vectorizer feature index out of range"));
        }
        Ok(())
    }
}
