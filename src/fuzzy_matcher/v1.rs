//! Greedy fuzzy matcher, modelled after fzf's v1 algorithm.
//!
//! Matching runs in three steps:
//! 1. a forward scan consumes the pattern greedily and finds the earliest
//!    offset at which the whole pattern has been seen (`end`);
//! 2. a backward scan from `end` re-consumes the pattern in reverse to find
//!    the latest `start` that still admits a full alignment;
//! 3. the `[start, end)` span is scored with per-character bonuses derived
//!    from character class transitions, minus gap penalties.
//!
//! Matching is case sensitive; callers fold case or diacritics beforehand.
//!
//! # Example:
//! ```
//! use fzpick::fuzzy_matcher::FuzzyMatcher;
//! use fzpick::fuzzy_matcher::v1::FuzzyMatcherV1;
//!
//! let matcher = FuzzyMatcherV1;
//!
//! assert_eq!(None, matcher.fuzzy_match("fooBarbaz", "oBZ"));
//!
//! let (score, indices) = matcher.fuzzy_indices("fooBarbaz", "oBz").unwrap();
//! assert_eq!(indices, [2, 3, 8]);
//! assert_eq!(score, 49);
//! ```

use super::char_class::CharClass;
use super::{Alignment, FuzzyMatcher, IndexType, ScoreType};

/// Score of every aligned char
pub const SCORE_MATCH: ScoreType = 16;
/// Penalty of the first unaligned char of a gap
pub const SCORE_GAP_START: ScoreType = -3;
/// Penalty of every further unaligned char of a gap
pub const SCORE_GAP_EXTENSION: ScoreType = -1;

/// Non-word to word transitions
pub const BONUS_BOUNDARY: ScoreType = SCORE_MATCH / 2;
/// Aligned non-word chars
pub const BONUS_NON_WORD: ScoreType = SCORE_MATCH / 2;
/// camelCase and letter123 transitions
pub const BONUS_CAMEL_123: ScoreType = BONUS_BOUNDARY + SCORE_GAP_EXTENSION;
/// Minimum bonus of a char following an aligned one
pub const BONUS_CONSECUTIVE: ScoreType = -(SCORE_GAP_START + SCORE_GAP_EXTENSION);
/// Weight of the first pattern char's bonus
pub const BONUS_FIRST_CHAR_MULTIPLIER: ScoreType = 2;

/// Stateless v1 matcher
#[derive(Debug, Default, Clone, Copy)]
pub struct FuzzyMatcherV1;

impl FuzzyMatcherV1 {
    /// Finds the tightest `[start, end)` span of `choice` containing `pattern` as a subsequence.
    ///
    /// `end` is the earliest offset at which the pattern can be completed and
    /// `start` the latest offset from which it can still be completed before `end`.
    pub fn span(choice: &[char], pattern: &[char]) -> Option<(IndexType, IndexType)> {
        let last = pattern.len().checked_sub(1)?;
        let mut pattern_idx = 0;
        let mut start = None;
        let mut end = None;

        for (idx, &c) in choice.iter().enumerate() {
            if c != pattern[pattern_idx] {
                continue;
            }
            start.get_or_insert(idx);
            if pattern_idx == last {
                end = Some(idx + 1);
                break;
            }
            pattern_idx += 1;
        }

        let (mut start, end) = (start?, end?);

        // pattern_idx is on the last pattern char again, walk back to the first one
        for idx in (start + 1..end).rev() {
            if choice[idx] != pattern[pattern_idx] {
                continue;
            }
            if pattern_idx == 0 {
                start = idx;
                break;
            }
            pattern_idx -= 1;
        }

        Some((start, end))
    }

    /// Scores the alignment of `pattern` inside `choice[start..end]`
    pub fn score(choice: &[char], pattern: &[char], start: IndexType, end: IndexType) -> (ScoreType, Vec<IndexType>) {
        let mut pattern_idx = 0;
        let mut score = 0;
        let mut consecutive = 0;
        let mut first_bonus = 0;
        let mut in_gap = false;
        let mut positions = Vec::with_capacity(pattern.len());

        let mut prev_class = match start {
            0 => CharClass::NonWord,
            _ => CharClass::of(choice[start - 1]),
        };

        for (idx, &c) in choice.iter().enumerate().take(end).skip(start) {
            let class = CharClass::of(c);

            if pattern.get(pattern_idx) == Some(&c) {
                positions.push(idx);
                score += SCORE_MATCH;

                let mut bonus = bonus_for(prev_class, class);
                if consecutive == 0 {
                    first_bonus = bonus;
                } else {
                    // a boundary in the middle of a chunk starts a new one
                    if bonus == BONUS_BOUNDARY {
                        first_bonus = bonus;
                    }
                    bonus = bonus.max(first_bonus).max(BONUS_CONSECUTIVE);
                }

                score += if pattern_idx == 0 {
                    bonus * BONUS_FIRST_CHAR_MULTIPLIER
                } else {
                    bonus
                };

                in_gap = false;
                consecutive += 1;
                pattern_idx += 1;
            } else {
                score += if in_gap { SCORE_GAP_EXTENSION } else { SCORE_GAP_START };
                in_gap = true;
                consecutive = 0;
                first_bonus = 0;
            }

            prev_class = class;
        }

        (score, positions)
    }
}

fn bonus_for(prev: CharClass, class: CharClass) -> ScoreType {
    use CharClass::*;
    match (prev, class) {
        (NonWord, c) if c.is_word() => BONUS_BOUNDARY,
        (Lower, Upper) => BONUS_CAMEL_123,
        (p, Number) if p != Number => BONUS_CAMEL_123,
        (_, NonWord) => BONUS_NON_WORD,
        _ => 0,
    }
}

impl FuzzyMatcher for FuzzyMatcherV1 {
    fn align(&self, choice: &[char], pattern: &[char]) -> Option<Alignment> {
        if pattern.is_empty() {
            return Some(Alignment {
                span: 0..0,
                score: 0,
                positions: Vec::new(),
            });
        }
        let (start, end) = Self::span(choice, pattern)?;
        let (score, positions) = Self::score(choice, pattern, start, end);
        trace!("aligned {pattern:?} in {start}..{end}, score {score}");
        Some(Alignment {
            span: start..end,
            score,
            positions,
        })
    }
}
