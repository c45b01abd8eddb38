//! This module contains the matching coordinator and the ranking pass
use std::cmp::Reverse;
use std::sync::Arc;

use rayon::prelude::*;

use crate::engine::{DiacriticNormalizer, Normalizer};
use crate::fuzzy_matcher::FuzzyMatcher;
use crate::fuzzy_matcher::v1::FuzzyMatcherV1;
use crate::item::{Candidate, MatchResult};
use crate::options::PickOptions;

/// Ordering of the matched results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[cfg_attr(feature = "cli", clap(rename_all = "snake_case"))]
pub enum OrderBy {
    /// Highest score first
    #[default]
    Score,
    /// Shortest text first, surrounding whitespace ignored
    Length,
}

//==============================================================================
/// Evaluates a query against every candidate and ranks the matches.
#[derive(Clone)]
pub struct Matcher {
    algorithm: Arc<dyn FuzzyMatcher>,
    normalizer: Option<Arc<dyn Normalizer>>,
    order_by: OrderBy,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::builder()
    }
}

impl Matcher {
    /// Creates a new Matcher builder using the v1 algorithm without normalization.
    pub fn builder() -> Self {
        Self {
            algorithm: Arc::new(FuzzyMatcherV1),
            normalizer: None,
            order_by: OrderBy::default(),
        }
    }

    /// Sets the matching algorithm
    pub fn algorithm(mut self, algorithm: Arc<dyn FuzzyMatcher>) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the normalizer applied to candidates and queries
    pub fn normalizer(mut self, normalizer: Option<Arc<dyn Normalizer>>) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Sets the ordering of ranked results
    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = order_by;
        self
    }

    /// Finalizes the builder and returns the configured Matcher.
    pub fn build(self) -> Self {
        self
    }

    /// Creates a Matcher configured from the given PickOptions.
    ///
    /// `normalize` without an explicit normalizer strips diacritics.
    pub fn from_options(options: &PickOptions) -> Self {
        let normalizer = match (&options.normalizer, options.normalize) {
            (Some(normalizer), _) => Some(normalizer.clone()),
            (None, true) => Some(Arc::new(DiacriticNormalizer) as Arc<dyn Normalizer>),
            (None, false) => None,
        };
        debug!(
            "creating matcher, order by {:?}, normalized: {}",
            options.order_by,
            normalizer.is_some()
        );
        Matcher::builder()
            .normalizer(normalizer)
            .order_by(options.order_by)
            .build()
    }

    /// Returns the ordering applied by [`Matcher::run`]
    pub fn ordering(&self) -> OrderBy {
        self.order_by
    }

    /// Turns input strings into candidates, normalizing them once if needed
    pub fn candidates<I, S>(&self, items: I) -> Vec<Candidate>
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        items
            .into_iter()
            .enumerate()
            .map(|(idx, text)| match &self.normalizer {
                Some(normalizer) => Candidate::normalized(idx, text, normalizer.as_ref()),
                None => Candidate::new(idx, text),
            })
            .collect()
    }

    /// Evaluates `query` against every candidate.
    ///
    /// The output has one result per candidate, in candidate order, including non-matches.
    pub fn match_all(&self, candidates: &[Candidate], query: &str) -> Vec<MatchResult> {
        if query.is_empty() {
            return candidates.iter().map(MatchResult::unfiltered).collect();
        }
        let pattern: Vec<char> = match &self.normalizer {
            Some(normalizer) => normalizer.normalize(query).chars().collect(),
            None => query.chars().collect(),
        };
        trace!("matcher start, total: {}", candidates.len());
        candidates
            .par_iter()
            .map(|candidate| self.evaluate(candidate, &pattern))
            .collect()
    }

    /// Evaluates an already normalized pattern against one candidate
    pub fn evaluate(&self, candidate: &Candidate, pattern: &[char]) -> MatchResult {
        match self.algorithm.align(candidate.match_chars(), pattern) {
            Some(alignment) => MatchResult::aligned(candidate, alignment),
            None => MatchResult::no_match(candidate),
        }
    }

    /// Matches and ranks: the results shown for `query`
    ///
    /// An empty query keeps every candidate in input order.
    pub fn run(&self, candidates: &[Candidate], query: &str) -> Vec<MatchResult> {
        let results = self.match_all(candidates, query);
        if query.is_empty() {
            return results;
        }
        let ranked = rank(results, self.order_by);
        debug!("query {query:?}: {}/{} matched", ranked.len(), candidates.len());
        ranked
    }
}

/// Keeps the matched results and orders them.
///
/// Both orders are stable: ties keep the input order.
pub fn rank(results: Vec<MatchResult>, order_by: OrderBy) -> Vec<MatchResult> {
    let mut matched: Vec<MatchResult> = results.into_iter().filter(MatchResult::matched).collect();
    match order_by {
        OrderBy::Score => matched.par_sort_by_key(|result| Reverse(result.score)),
        OrderBy::Length => matched.par_sort_by_cached_key(MatchResult::trimmed_len),
    }
    matched
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(results: &[MatchResult]) -> Vec<&str> {
        results.iter().map(|r| r.text.as_ref()).collect()
    }

    #[test]
    fn empty_query_keeps_everything_in_order() {
        let matcher = Matcher::builder().order_by(OrderBy::Length).build();
        let candidates = matcher.candidates(["ccc", "a", "bb"]);
        let results = matcher.run(&candidates, "");
        assert_eq!(texts(&results), ["ccc", "a", "bb"]);
        assert!(results.iter().all(|r| r.matched() && r.score == 0 && r.highlights.is_empty()));
    }

    #[test]
    fn match_all_keeps_non_matches() {
        let matcher = Matcher::default();
        let candidates = matcher.candidates(["foo", "bar", "fob"]);
        let results = matcher.match_all(&candidates, "fo");
        assert_eq!(results.len(), 3);
        assert_eq!(
            results.iter().map(MatchResult::matched).collect::<Vec<_>>(),
            [true, false, true]
        );
        assert_eq!(results.iter().map(|r| r.item_index).collect::<Vec<_>>(), [0, 1, 2]);
    }

    #[test]
    fn rank_by_score_is_stable() {
        let matcher = Matcher::default();
        let candidates = matcher.candidates(["xaxb", "ab", "a_b", "xaxb2"]);
        let results = matcher.run(&candidates, "ab");
        // "ab" and "a_b" both start on a boundary, "xaxb" ties with "xaxb2"
        assert_eq!(texts(&results), ["ab", "a_b", "xaxb", "xaxb2"]);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn rank_by_length_trims_whitespace() {
        let matcher = Matcher::builder().order_by(OrderBy::Length).build();
        let candidates = matcher.candidates(["a long b", "   ab   ", "a b", "ba"]);
        let results = matcher.run(&candidates, "ab");
        assert_eq!(texts(&results), ["   ab   ", "a b", "a long b"]);
    }

    #[test]
    fn normalized_query_and_candidates() {
        let matcher = Matcher::builder()
            .normalizer(Some(Arc::new(DiacriticNormalizer)))
            .build();
        let candidates = matcher.candidates(["café", "cafe", "tea"]);
        assert_eq!(texts(&matcher.run(&candidates, "cafe")), ["café", "cafe"]);
        assert_eq!(texts(&matcher.run(&candidates, "café")), ["café", "cafe"]);

        let plain = Matcher::default();
        let candidates = plain.candidates(["café", "cafe", "tea"]);
        assert_eq!(texts(&plain.run(&candidates, "cafe")), ["cafe"]);
    }

    #[test]
    fn custom_normalizer() {
        let lower: Arc<dyn Normalizer> = Arc::new(|s: &str| s.to_lowercase());
        let matcher = Matcher::builder().normalizer(Some(lower)).build();
        let candidates = matcher.candidates(["README.md", "src/lib.rs"]);
        let results = matcher.run(&candidates, "ReAd");
        assert_eq!(texts(&results), ["README.md"]);
        assert_eq!(results[0].highlights, [0, 1, 2, 3]);
    }
}
