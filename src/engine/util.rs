use unicode_normalization::UnicodeNormalization;

/// Strip diacritics from a string and return a mapping from normalized char indices to original char indices.
///
/// Every char is decomposed into NFD form and its combining marks are dropped.
/// Returns (normalized_string, mapping) where mapping[i] gives the original char index
/// for the i-th character in the normalized string.
pub fn normalize_with_char_mapping(s: &str) -> (String, Vec<usize>) {
    let mut normalized = String::with_capacity(s.len());
    let mut mapping = Vec::with_capacity(s.len());

    for (orig_char_idx, orig_char) in s.chars().enumerate() {
        for decomposed_char in orig_char.nfd() {
            if !unicode_normalization::char::is_combining_mark(decomposed_char) {
                normalized.push(decomposed_char);
                mapping.push(orig_char_idx);
            }
        }
    }

    (normalized, mapping)
}

/// Map character indices from a normalized string back to the original string.
///
/// Indices that land on the same original char are reported once.
pub fn map_char_indices_to_original(normalized_indices: &[usize], char_mapping: &[usize]) -> Vec<usize> {
    let mut original: Vec<usize> = normalized_indices
        .iter()
        .filter_map(|&idx| char_mapping.get(idx).copied())
        .collect();
    original.dedup();
    original
}
