//! Symptom token normalization.
//!
//! A symptom is canonicalized by lowercasing, composing Unicode (NFC) so that
//! precomposed and decomposed diacritics compare equal, and trimming
//! whitespace and symptom delimiters from both ends. No transliteration or
//! spelling correction is performed.
//!
//! # Examples
//!
//! ```
//! use sympred::analysis::normalize;
//!
//! assert_eq!(normalize("  Đau Đầu "), "đau đầu");
//! assert_eq!(normalize(&normalize(" Fever;")), normalize(" Fever;"));
//! ```

use unicode_normalization::UnicodeNormalization;

/// Separator placed between symptoms in corpus text.
///
/// The `;` is a segment boundary for [`SymptomTokenizer`](super::SymptomTokenizer),
/// so n-grams never span two symptoms.
pub const SYMPTOM_SEPARATOR: &str = " ; ";

/// Characters trimmed from both ends of a symptom.
fn is_boundary(c: char) -> bool {
    c.is_whitespace() || c == ';'
}

/// Canonicalize one raw symptom token. Idempotent.
pub fn normalize(token: &str) -> String {
    let lowered: String = token.to_lowercase().nfc().collect();
    lowered.trim_matches(is_boundary).to_string()
}

/// Canonicalize a disease name: NFC composition and trimmed whitespace.
///
/// Case is kept, since labels are reported back verbatim.
pub fn normalize_label(name: &str) -> String {
    name.trim().nfc().collect()
}

/// Normalize every symptom, dropping the ones that end up empty.
pub fn normalize_all<S: AsRef<str>>(symptoms: &[S]) -> Vec<String> {
    symptoms
        .iter()
        .map(|s| normalize(s.as_ref()))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Build the text representation of a symptom list.
///
/// This is the only function that produces classifier input text, for both
/// corpus entries and prediction queries.
pub fn symptom_text<S: AsRef<str>>(symptoms: &[S]) -> String {
    normalize_all(symptoms).join(SYMPTOM_SEPARATOR)
}
