//! Text normalization applied to candidates and queries before matching.
//!
//! A normalizer folds text (removing diacritics by default) and reports, for
//! every normalized char, the original char it came from so that highlights
//! can be mapped back onto the displayed text.

use crate::engine::util::normalize_with_char_mapping;

/// A text folding function applied to both candidates and queries
pub trait Normalizer: Send + Sync {
    /// Folds `text`
    fn normalize(&self, text: &str) -> String;

    /// Folds `text` and returns, for each normalized char, the index of the original char it came from
    ///
    /// When folding keeps the char count the mapping is the identity.
    /// Otherwise each original char is folded on its own.
    fn normalize_with_mapping(&self, text: &str) -> (String, Vec<usize>) {
        let normalized = self.normalize(text);
        let count = normalized.chars().count();
        if count == text.chars().count() {
            return (normalized, (0..count).collect());
        }

        let mut folded = String::with_capacity(normalized.len());
        let mut mapping = Vec::with_capacity(count);
        let mut buf = [0u8; 4];
        for (idx, c) in text.chars().enumerate() {
            for n in self.normalize(c.encode_utf8(&mut buf)).chars() {
                folded.push(n);
                mapping.push(idx);
            }
        }
        (folded, mapping)
    }
}

/// Removes diacritics: NFD decomposition followed by dropping combining marks
#[derive(Debug, Default, Clone, Copy)]
pub struct DiacriticNormalizer;

impl Normalizer for DiacriticNormalizer {
    fn normalize(&self, text: &str) -> String {
        normalize_with_char_mapping(text).0
    }

    fn normalize_with_mapping(&self, text: &str) -> (String, Vec<usize>) {
        normalize_with_char_mapping(text)
    }
}

impl<F> Normalizer for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn normalize(&self, text: &str) -> String {
        self(text)
    }
}
