//! Convenience re-exports of commonly used types.
//!
//! This module provides a convenient way to import all the commonly used
//! fzpick types and traits with a single `use fzpick::prelude::*;` statement.

pub use crate::engine::{DiacriticNormalizer, Normalizer};
pub use crate::fuzzy_matcher::FuzzyMatcher;
pub use crate::fuzzy_matcher::v1::FuzzyMatcherV1;
pub use crate::options::{PickOptions, PickOptionsBuilder};
pub use crate::tui::event::Action;
pub use crate::tui::{KeySource, Surface};
pub use crate::*;
pub use std::sync::Arc;
