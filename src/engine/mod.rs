//! Text preparation shared by the matcher.

pub mod normalized;
mod util;

pub use normalized::{DiacriticNormalizer, Normalizer};
pub(crate) use util::map_char_indices_to_original;
