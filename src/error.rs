//! Error kinds returned by this crate's public functions.
//!
//! Every function documents which of these it can return; none of them
//! recover locally or return partial results on failure (spec section 7).

use thiserror::Error;

/// Failure modes for the segmentation and case-folding API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A scalar value was outside `0..=0x10FFFF`, or inside the surrogate
    /// range where this algorithm has no defined category.
    #[error("invalid codepoint: U+{0:04X}")]
    BadCodepoint(u32),

    /// An offset was outside `0..=len` of the text it indexes into.
    #[error("invalid offset {offset} for text of length {len}")]
    BadOffset { offset: i64, len: usize },

    /// A general-category mask had no bits matching any defined category.
    #[error("mask {0:#010x} matches no defined general category")]
    BadMask(u32),

    /// A `category_name` algorithm selector was not one of `grapheme`,
    /// `word`, `sentence`.
    #[error("unknown category selector {0:?}, expected grapheme, word, or sentence")]
    BadWhich(String),
}

pub type Result<T> = std::result::Result<T, Error>;
