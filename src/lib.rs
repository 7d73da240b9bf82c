//! Unicode text segmentation (UAX #29) and case folding over raw scalar
//! values.
//!
//! A [`Scalar`] is a `u32` Unicode scalar value — any codepoint in
//! `0..=0x10FFFF` except the surrogate range `0xD800..=0xDFFF` — and
//! `Text` throughout this crate's docs means `&[Scalar]`: a finite,
//! random-access, read-only sequence of them. This crate does not decode
//! UTF-8/UTF-16 itself; callers already holding a `&str` pass
//! `s.chars().map(|c| c as Scalar).collect::<Vec<_>>()`.
//!
//! What's here: grapheme-cluster, word, and sentence boundary detection
//! (`*_next_break`), case folding for caseless comparison (`casefold`),
//! general/break category classification and naming, and grapheme-aware
//! length/substring. What's not: Unicode normalization, collation,
//! language-aware tokenization or stemming, locale-sensitive case
//! mappings, line breaking (UAX #14), and bidi (UAX #9) — none of those
//! are approximated or partially implemented here.

pub mod classify;
pub mod error;
pub mod fold;
mod fold_tables;
pub mod iter;
pub mod segment;
mod tables;
pub mod text_ops;

/// A Unicode scalar value: any codepoint in `0..=0x10FFFF` other than a
/// surrogate. Plain `u32` rather than `char` so that this crate's API can
/// accept (and reject, with [`error::Error::BadCodepoint`]) values a
/// caller has not already validated.
pub type Scalar = u32;

/// The revision of the Unicode Character Database this crate's curated
/// tables and rules were written against, as a dotted version string.
pub const UNICODE_VERSION: &str = "15.1.0";

pub use error::{Error, Result};

pub use classify::{general_category, grapheme_category, sentence_category, word_category};
pub use fold::casefold;
pub use segment::{grapheme_next_break, sentence_next_break, word_next_break};
pub use text_ops::{category_name, grapheme_length, grapheme_substr, has_category};

pub use tables::{gc, gcb, sb, wb};
