//! Candidates fed to the matcher and the results it produces.

use std::fmt;
use std::ops::Range;
use std::sync::Arc;

use crate::engine::{Normalizer, map_char_indices_to_original};
use crate::fuzzy_matcher::{Alignment, ScoreType};

/// An input string together with its position in the input list
///
/// The text used for matching (normalized or not) is split into chars once,
/// when the candidate is built, and reused for every query.
#[derive(Clone)]
pub struct Candidate {
    text: Arc<str>,
    item_index: usize,
    chars: Box<[char]>,
    /// normalized char index to original char index, `None` when matching on the original text
    mapping: Option<Box<[usize]>>,
}

impl Candidate {
    /// Candidate matched against its original text
    pub fn new(item_index: usize, text: impl Into<Arc<str>>) -> Self {
        let text = text.into();
        let chars = text.chars().collect();
        Self {
            text,
            item_index,
            chars,
            mapping: None,
        }
    }

    /// Candidate matched against the normalized form of its text
    pub fn normalized(item_index: usize, text: impl Into<Arc<str>>, normalizer: &dyn Normalizer) -> Self {
        let text = text.into();
        let (folded, mapping) = normalizer.normalize_with_mapping(&text);
        Self {
            chars: folded.chars().collect(),
            mapping: Some(mapping.into_boxed_slice()),
            text,
            item_index,
        }
    }

    /// The original text, as displayed and returned
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Position of the candidate in the input list
    pub fn item_index(&self) -> usize {
        self.item_index
    }

    /// The chars the matcher runs on
    pub fn match_chars(&self) -> &[char] {
        &self.chars
    }

    fn to_original(&self, positions: &[usize]) -> Vec<usize> {
        match &self.mapping {
            Some(mapping) => map_char_indices_to_original(positions, mapping),
            None => positions.to_vec(),
        }
    }
}

impl fmt::Debug for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Candidate")
            .field("text", &self.text)
            .field("item_index", &self.item_index)
            .field("normalized", &self.mapping.is_some())
            .finish()
    }
}

/// Outcome of evaluating one candidate against a query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchResult {
    /// The original candidate text
    pub text: Arc<str>,
    /// Position of the candidate in the input list
    pub item_index: usize,
    /// `[start, end)` char range of the match, `None` when the query does not match
    pub span: Option<Range<usize>>,
    /// Score, only meaningful for matches
    pub score: ScoreType,
    /// Char indices consumed by the query, in the text that was matched
    pub positions: Vec<usize>,
    /// Char indices of `text` to highlight
    pub highlights: Vec<usize>,
}

impl MatchResult {
    /// Result of an empty query: a match with no highlighted chars
    pub fn unfiltered(candidate: &Candidate) -> Self {
        Self {
            text: candidate.text.clone(),
            item_index: candidate.item_index,
            span: Some(0..0),
            score: 0,
            positions: Vec::new(),
            highlights: Vec::new(),
        }
    }

    /// Result for a candidate the query does not match
    pub fn no_match(candidate: &Candidate) -> Self {
        Self {
            span: None,
            ..Self::unfiltered(candidate)
        }
    }

    /// Result of a successful alignment on `candidate`
    pub fn aligned(candidate: &Candidate, alignment: Alignment) -> Self {
        Self {
            text: candidate.text.clone(),
            item_index: candidate.item_index,
            highlights: candidate.to_original(&alignment.positions),
            span: Some(alignment.span),
            score: alignment.score,
            positions: alignment.positions,
        }
    }

    /// Whether the query matched this candidate
    pub fn matched(&self) -> bool {
        self.span.is_some()
    }

    /// Char length of the text without surrounding whitespace, used by [`OrderBy::Length`](crate::OrderBy::Length)
    pub fn trimmed_len(&self) -> usize {
        self.text.trim().chars().count()
    }
}
