//! Fuzzy matching algorithms.
//!
//! The default algorithm is [`v1::FuzzyMatcherV1`], a greedy forward scan
//! followed by a backward tightening pass and a bonus-based scoring of the
//! resulting span.

/// Character classification used by the scorers
pub mod char_class;
/// Forward/backward scan matcher with boundary bonuses
pub mod v1;

use std::ops::Range;

pub(crate) type IndexType = usize;
/// Score of a match, higher is better
pub type ScoreType = i32;

/// Matched character indices, in increasing order
pub type MatchIndices = Vec<IndexType>;

/// Outcome of aligning a pattern against a choice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alignment {
    /// `[start, end)` character range bounding the match
    pub span: Range<IndexType>,
    /// Score of the alignment
    pub score: ScoreType,
    /// Index of each consumed choice character, one per pattern character
    pub positions: MatchIndices,
}

/// Trait for fuzzy matching text patterns against choices
///
/// Implementors work on `char` slices so that callers can normalize and split
/// a candidate once and reuse it for every query.
pub trait FuzzyMatcher: Send + Sync {
    /// Align `pattern` against `choice`, returning `None` when it does not match
    fn align(&self, choice: &[char], pattern: &[char]) -> Option<Alignment>;

    /// fuzzy match choice with pattern, and return the score & matched indices of characters
    fn fuzzy_indices(&self, choice: &str, pattern: &str) -> Option<(ScoreType, MatchIndices)> {
        let choice: Vec<char> = choice.chars().collect();
        let pattern: Vec<char> = pattern.chars().collect();
        self.align(&choice, &pattern)
            .map(|alignment| (alignment.score, alignment.positions))
    }

    /// fuzzy match choice with pattern, and return the score of matching
    fn fuzzy_match(&self, choice: &str, pattern: &str) -> Option<ScoreType> {
        self.fuzzy_indices(choice, pattern).map(|(score, _)| score)
    }
}
