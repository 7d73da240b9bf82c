//! The codepoint classifier (C1): four pure, total functions from a scalar
//! value to a category bitmask.
//!
//! Each function is O(number of curated ranges) rather than the O(1)
//! single-array-index a fully generated three-stage trie would give (see
//! [`crate::tables`]); the contract — total, pure, no branch on value other
//! than the lookup itself — is unchanged either way.

use crate::error::Error;
use crate::tables::{gc, gcb, sb, wb};
use crate::Scalar;

const MAX_SCALAR: u32 = 0x10FFFF;
const SURROGATE_LO: u32 = 0xD800;
const SURROGATE_HI: u32 = 0xDFFF;

fn check_codepoint(cp: u32) -> Result<(), Error> {
    if cp > MAX_SCALAR {
        return Err(Error::BadCodepoint(cp));
    }
    Ok(())
}

/// General Unicode category (`Lu`, `Ll`, `Nd`, ...), one bit per call.
///
/// Codepoints in the surrogate range are classified `Cs` per the UCD
/// rather than rejected: surrogates have a defined general category even
/// though they can never appear as a [`Scalar`] in well-formed text.
/// Unassigned codepoints default to `Cn`.
pub fn general_category(cp: u32) -> Result<u32, Error> {
    check_codepoint(cp)?;
    let mask = crate::tables::lookup(gc::RANGES, cp);
    Ok(if mask == 0 { gc::CN } else { mask })
}

/// Grapheme-cluster break category bitflags (C1, C4 rules GB1-GB999).
pub fn grapheme_category(cp: u32) -> Result<u32, Error> {
    check_codepoint(cp)?;
    if (SURROGATE_LO..=SURROGATE_HI).contains(&cp) {
        return Ok(gcb::CONTROL);
    }
    if let Some(mask) = gcb::hangul(cp) {
        return Ok(mask);
    }
    Ok(crate::tables::lookup(gcb::RANGES, cp))
}

/// Word break category bitflags (C1, C4 rules WB1-WB999).
pub fn word_category(cp: u32) -> Result<u32, Error> {
    check_codepoint(cp)?;
    if (SURROGATE_LO..=SURROGATE_HI).contains(&cp) {
        return Ok(0);
    }
    Ok(crate::tables::lookup(wb::RANGES, cp))
}

/// Sentence break category bitflags (C1, C4 rules SB1-SB999).
pub fn sentence_category(cp: u32) -> Result<u32, Error> {
    check_codepoint(cp)?;
    if (SURROGATE_LO..=SURROGATE_HI).contains(&cp) {
        return Ok(0);
    }
    Ok(crate::tables::lookup(sb::RANGES, cp))
}

/// Convenience used by [`crate::text_ops::category_name`]: classify a
/// [`Scalar`] directly rather than the raw `u32` the public API takes, so
/// internal callers never re-derive the codepoint-validity check.
pub(crate) fn grapheme_category_scalar(cp: Scalar) -> u32 {
    grapheme_category(cp).expect("Scalar is always a valid codepoint")
}

pub(crate) fn word_category_scalar(cp: Scalar) -> u32 {
    word_category(cp).expect("Scalar is always a valid codepoint")
}

pub(crate) fn sentence_category_scalar(cp: Scalar) -> u32 {
    sentence_category(cp).expect("Scalar is always a valid codepoint")
}
