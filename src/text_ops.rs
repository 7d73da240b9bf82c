//! Grapheme-aware text operations (C6) built on top of [`crate::segment`]:
//! counting clusters, slicing by cluster index, testing general-category
//! membership over a scalar range, and naming the category bits set on a
//! single codepoint.

use crate::classify::{self, grapheme_category, sentence_category, word_category};
use crate::error::Error;
use crate::segment::grapheme_next_break;
use crate::tables::{gc, gcb, sb, wb};
use crate::Scalar;

/// Number of grapheme clusters in `text[offset..]`.
pub fn grapheme_length(text: &[Scalar], offset: usize) -> Result<usize, Error> {
    let len = text.len();
    if offset > len {
        return Err(Error::BadOffset {
            offset: offset as i64,
            len,
        });
    }
    let mut pos = offset;
    let mut count = 0;
    while pos < len {
        pos = grapheme_next_break(text, pos)?;
        count += 1;
    }
    Ok(count)
}

/// Slice `text` by grapheme-cluster index, Python-style: `stop` is
/// exclusive, and either bound may be negative to count from the end.
/// Returns an empty vector for every out-of-order or degenerate range
/// (`start > text.len()`, `start == stop`, `stop == 0`, or a positive
/// `start >= stop`) rather than erroring — an empty selection is not a
/// failure.
pub fn grapheme_substr(text: &[Scalar], start: i64, stop: i64) -> Result<Vec<Scalar>, Error> {
    let len = text.len();

    if start < 0 || stop < 0 {
        let mut boundaries = vec![0usize];
        let mut pos = 0;
        while pos < len {
            pos = grapheme_next_break(text, pos)?;
            boundaries.push(pos);
        }
        let n_clusters = (boundaries.len() - 1) as i64;
        let resolve = |i: i64| if i < 0 { i + n_clusters } else { i };
        let s = resolve(start).clamp(0, n_clusters) as usize;
        let e = resolve(stop).clamp(0, n_clusters) as usize;
        if s >= e {
            return Ok(Vec::new());
        }
        return Ok(text[boundaries[s]..boundaries[e]].to_vec());
    }

    if start as usize > len || start == stop || stop == 0 || (start > 0 && start >= stop) {
        return Ok(Vec::new());
    }
    let start = start as usize;
    let stop = stop as usize;

    let mut pos = 0usize;
    let mut cluster = 0usize;
    let mut start_pos = None;
    while pos < len && cluster < stop {
        if cluster == start {
            start_pos = Some(pos);
        }
        pos = grapheme_next_break(text, pos)?;
        cluster += 1;
    }
    if cluster == start {
        start_pos = Some(pos);
    }

    match start_pos {
        Some(s) => Ok(text[s..pos].to_vec()),
        None => Ok(Vec::new()),
    }
}

fn check_range(text: &[Scalar], start: i64, end: i64) -> Result<(usize, usize), Error> {
    let len = text.len();
    if start < 0 || end < 0 || start as usize > len || end as usize > len || start > end {
        return Err(Error::BadOffset {
            offset: if start < 0 || start as usize > len {
                start
            } else {
                end
            },
            len,
        });
    }
    Ok((start as usize, end as usize))
}

/// True iff any scalar in `text[start..end]` has a general category bit
/// set in `mask`.
pub fn has_category(text: &[Scalar], start: i64, end: i64, mask: u32) -> Result<bool, Error> {
    if mask & gc::ALL == 0 {
        return Err(Error::BadMask(mask));
    }
    let (start, end) = check_range(text, start, end)?;
    for &cp in &text[start..end] {
        if classify::general_category(cp)? & mask != 0 {
            return Ok(true);
        }
    }
    Ok(false)
}

const GC_NAMES: &[(u32, &str)] = &[
    (gc::LU, "Lu"),
    (gc::LL, "Ll"),
    (gc::LT, "Lt"),
    (gc::LM, "Lm"),
    (gc::LO, "Lo"),
    (gc::MN, "Mn"),
    (gc::MC, "Mc"),
    (gc::ME, "Me"),
    (gc::ND, "Nd"),
    (gc::NL, "Nl"),
    (gc::NO, "No"),
    (gc::PC, "Pc"),
    (gc::PD, "Pd"),
    (gc::PS, "Ps"),
    (gc::PE, "Pe"),
    (gc::PI, "Pi"),
    (gc::PF, "Pf"),
    (gc::PO, "Po"),
    (gc::SM, "Sm"),
    (gc::SC, "Sc"),
    (gc::SK, "Sk"),
    (gc::SO, "So"),
    (gc::ZS, "Zs"),
    (gc::ZL, "Zl"),
    (gc::ZP, "Zp"),
    (gc::CC, "Cc"),
    (gc::CF, "Cf"),
    (gc::CS, "Cs"),
    (gc::CO, "Co"),
    (gc::CN, "Cn"),
];

const GCB_NAMES: &[(u32, &str)] = &[
    (gcb::CR, "CR"),
    (gcb::LF, "LF"),
    (gcb::CONTROL, "Control"),
    (gcb::EXTEND, "Extend"),
    (gcb::ZWJ, "ZWJ"),
    (gcb::REGIONAL_INDICATOR, "Regional_Indicator"),
    (gcb::PREPEND, "Prepend"),
    (gcb::SPACING_MARK, "SpacingMark"),
    (gcb::L, "L"),
    (gcb::V, "V"),
    (gcb::T, "T"),
    (gcb::LV, "LV"),
    (gcb::LVT, "LVT"),
    (gcb::EXTENDED_PICTOGRAPHIC, "Extended_Pictographic"),
    (gcb::INCB_LINKER, "InCB_Linker"),
    (gcb::INCB_CONSONANT, "InCB_Consonant"),
    (gcb::INCB_EXTEND, "InCB_Extend"),
];

const WB_NAMES: &[(u32, &str)] = &[
    (wb::CR, "CR"),
    (wb::LF, "LF"),
    (wb::NEWLINE, "Newline"),
    (wb::EXTEND, "Extend"),
    (wb::ZWJ, "ZWJ"),
    (wb::REGIONAL_INDICATOR, "Regional_Indicator"),
    (wb::FORMAT, "Format"),
    (wb::KATAKANA, "Katakana"),
    (wb::HEBREW_LETTER, "Hebrew_Letter"),
    (wb::ALETTER, "ALetter"),
    (wb::SINGLE_QUOTE, "Single_Quote"),
    (wb::DOUBLE_QUOTE, "Double_Quote"),
    (wb::MID_NUM_LET, "MidNumLet"),
    (wb::MID_LETTER, "MidLetter"),
    (wb::MID_NUM, "MidNum"),
    (wb::NUMERIC, "Numeric"),
    (wb::EXTEND_NUM_LET, "ExtendNumLet"),
    (wb::WSEG_SPACE, "WSegSpace"),
    (wb::EXTENDED_PICTOGRAPHIC, "Extended_Pictographic"),
];

const SB_NAMES: &[(u32, &str)] = &[
    (sb::CR, "CR"),
    (sb::LF, "LF"),
    (sb::EXTEND, "Extend"),
    (sb::SEP, "Sep"),
    (sb::FORMAT, "Format"),
    (sb::SP, "Sp"),
    (sb::LOWER, "Lower"),
    (sb::UPPER, "Upper"),
    (sb::OLETTER, "OLetter"),
    (sb::NUMERIC, "Numeric"),
    (sb::ATERM, "ATerm"),
    (sb::SCONTINUE, "SContinue"),
    (sb::STERM, "STerm"),
    (sb::CLOSE, "Close"),
];

fn names_for(table: &[(u32, &'static str)], mask: u32) -> Vec<&'static str> {
    table
        .iter()
        .filter(|&&(bit, _)| mask & bit != 0)
        .map(|&(_, name)| name)
        .collect()
}

/// Every category name whose bit is set for `codepoint`, under the
/// `"general"`, `"grapheme"`, `"word"`, or `"sentence"` algorithm.
/// Multiple names can come back at once (e.g. an Indic_Conjunct_Break
/// codepoint is both `Extend` and `InCB_Extend`); names are emitted in a
/// fixed, algorithm-specific declaration order, not sorted.
pub fn category_name(which: &str, codepoint: u32) -> Result<Vec<&'static str>, Error> {
    match which {
        "general" => {
            let mask = classify::general_category(codepoint)?;
            Ok(names_for(GC_NAMES, mask))
        }
        "grapheme" => Ok(names_for(GCB_NAMES, grapheme_category(codepoint)?)),
        "word" => Ok(names_for(WB_NAMES, word_category(codepoint)?)),
        "sentence" => Ok(names_for(SB_NAMES, sentence_category(codepoint)?)),
        other => Err(Error::BadWhich(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalars(s: &str) -> Vec<Scalar> {
        s.chars().map(|c| c as Scalar).collect()
    }

    #[test]
    fn length_counts_clusters_not_scalars() {
        // "a\u{0301}" is one grapheme cluster over two scalars.
        let text = scalars("a\u{0301}bc");
        assert_eq!(grapheme_length(&text, 0).unwrap(), 3);
    }

    #[test]
    fn length_counts_from_arbitrary_offset() {
        let text = scalars("a\u{0301}bc");
        assert_eq!(grapheme_length(&text, 2).unwrap(), 2);
    }

    #[test]
    fn length_rejects_offset_past_end() {
        let text = scalars("ab");
        assert!(matches!(
            grapheme_length(&text, 3),
            Err(Error::BadOffset { offset: 3, len: 2 })
        ));
    }

    #[test]
    fn substr_positive_bounds() {
        let text = scalars("cafe\u{0301}");
        assert_eq!(grapheme_substr(&text, 0, 3).unwrap(), scalars("caf"));
    }

    #[test]
    fn substr_negative_bounds_count_from_end() {
        let text = scalars("hello");
        assert_eq!(grapheme_substr(&text, -3, -1).unwrap(), scalars("ll"));
    }

    #[test]
    fn substr_degenerate_ranges_are_empty() {
        let text = scalars("hello");
        assert_eq!(grapheme_substr(&text, 3, 3).unwrap(), Vec::<Scalar>::new());
        assert_eq!(grapheme_substr(&text, 2, 0).unwrap(), Vec::<Scalar>::new());
        assert_eq!(
            grapheme_substr(&text, 100, 200).unwrap(),
            Vec::<Scalar>::new()
        );
    }

    #[test]
    fn has_category_digits_vs_letters() {
        let text = scalars("abc123");
        assert!(has_category(&text, 0, 6, gc::ND).unwrap());
        assert!(!has_category(&text, 0, 6, gc::LU).unwrap());
        assert!(has_category(&text, 0, 3, gc::LL).unwrap());
    }

    #[test]
    fn has_category_rejects_bad_mask() {
        assert!(matches!(
            has_category(&scalars("abc"), 0, 3, 0),
            Err(Error::BadMask(0))
        ));
    }

    #[test]
    fn category_name_lists_all_set_bits() {
        let names = category_name("grapheme", 0x094D).unwrap();
        assert!(names.contains(&"Extend"));
        assert!(names.contains(&"InCB_Linker"));
    }

    #[test]
    fn category_name_rejects_unknown_which() {
        assert!(category_name("paragraph", 'a' as u32).is_err());
    }
}
