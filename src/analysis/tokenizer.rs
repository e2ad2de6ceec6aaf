//! Word n-gram tokenizer aware of symptom boundaries.
//!
//! Text is first cut into symptom segments on `;`. Inside a segment, words are
//! runs of two or more Unicode word characters, and n-grams are formed from
//! adjacent words of that segment only.
//!
//! # Examples
//!
//! ```
//! use sympred::analysis::SymptomTokenizer;
//!
//! let tokenizer = SymptomTokenizer::new(1, 2);
//! let terms = tokenizer.tokenize("sore throat ; high fever");
//! assert!(terms.contains(&"sore throat".to_string()));
//! assert!(!terms.contains(&"throat high".to_string()));
//! ```

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static WORD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?u)\b\w\w+\b").expect("word pattern is a valid regex"));

/// Produces unigram..=n-gram terms from symptom text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomTokenizer {
    min_n: usize,
    max_n: usize,
}

impl Default for SymptomTokenizer {
    fn default() -> Self {
        Self::new(1, 2)
    }
}

impl SymptomTokenizer {
    /// Create a tokenizer for the inclusive n-gram range `min_n..=max_n`.
    pub fn new(min_n: usize, max_n: usize) -> Self {
        let min_n = min_n.max(1);
        Self {
            min_n,
            max_n: max_n.max(min_n),
        }
    }

    /// The inclusive n-gram range.
    pub fn ngram_range(&self) -> (usize, usize) {
        (self.min_n, self.max_n)
    }

    /// Split text into terms. Terms may repeat; callers count them.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let mut terms = Vec::new();
        for segment in text.split(';') {
            let words: Vec<&str> = WORD_PATTERN
                .find_iter(segment)
                .map(|m| m.as_str())
                .collect();
            for n in self.min_n..=self.max_n {
                if n > words.len() {
                    break;
                }
                terms.extend(words.windows(n).map(|window| window.join(" ")));
            }
        }
        terms
    }

    /// Get the name of this tokenizer (for debugging and logging).
    pub fn name(&self) -> &'static str {
        "symptom_ngram"
    }
}
