//! Segmentation engines (C4): the three next-boundary functions.
//!
//! Each function shares the skeleton UAX #29 describes: the first
//! [`TextIterator::advance`] implements the implicit "start of text is a
//! boundary" rule (GB1/WB1/SB1), then an ordered cascade of rules decides,
//! on every subsequent character pair, whether to continue, break after,
//! or (grapheme only) break before. Rule order is significant and mirrors
//! the authoritative UAX #29 numbering; earlier rules win.

use crate::classify::{grapheme_category_scalar, sentence_category_scalar, word_category_scalar};
use crate::error::Error;
use crate::iter::TextIterator;
use crate::tables::{gcb, sb, wb};
use crate::Scalar;

fn check_offset(offset: usize, len: usize) -> Result<(), Error> {
    if offset > len {
        return Err(Error::BadOffset {
            offset: offset as i64,
            len,
        });
    }
    Ok(())
}

/// Next grapheme-cluster boundary strictly greater than `offset` (rules
/// GB1-GB999, plus the GB9c Indic-Conjunct-Break extension).
pub fn grapheme_next_break(text: &[Scalar], offset: usize) -> Result<usize, Error> {
    let len = text.len();
    check_offset(offset, len)?;
    if offset == len {
        return Ok(len);
    }

    let mut it = TextIterator::new(text, offset, grapheme_category_scalar);

    while it.pos < len {
        it.advance();

        // GB3
        if it.curchar & gcb::CR != 0 && it.lookahead & gcb::LF != 0 {
            it.pos += 1;
            break;
        }

        // GB4 (break after Control|CR|LF, unless already-accepted text precedes it: GB5 breaks before)
        if it.curchar & (gcb::CONTROL | gcb::CR | gcb::LF) != 0 {
            if it.has_accepted() {
                it.pos -= 1;
            }
            break;
        }

        // GB6
        if it.curchar & gcb::L != 0 && it.lookahead & (gcb::L | gcb::V | gcb::LV | gcb::LVT) != 0 {
            continue;
        }

        // GB7
        if it.curchar & (gcb::LV | gcb::V) != 0 && it.lookahead & (gcb::V | gcb::T) != 0 {
            continue;
        }

        // GB8
        if it.curchar & (gcb::LVT | gcb::T) != 0 && it.lookahead & gcb::T != 0 {
            continue;
        }

        // GB9a
        if it.lookahead & gcb::SPACING_MARK != 0 {
            continue;
        }

        // GB9b
        if it.curchar & gcb::PREPEND != 0 {
            continue;
        }

        // GB9c: Indic_Conjunct_Break, must run before GB9/GB11 swallow the run
        if it.curchar & gcb::INCB_CONSONANT != 0
            && it.lookahead & (gcb::INCB_EXTEND | gcb::INCB_LINKER) != 0
        {
            it.begin();
            let mut seen_linker = it.lookahead & gcb::INCB_LINKER != 0;
            it.advance();
            while it.lookahead & (gcb::INCB_EXTEND | gcb::INCB_LINKER) != 0 {
                seen_linker = seen_linker || it.lookahead & gcb::INCB_LINKER != 0;
                it.advance();
            }
            if seen_linker && it.lookahead & gcb::INCB_CONSONANT != 0 {
                it.commit();
                continue;
            }
            it.rollback();
        }

        // GB11
        if it.curchar & gcb::EXTENDED_PICTOGRAPHIC != 0
            && it.lookahead & (gcb::EXTEND | gcb::ZWJ) != 0
        {
            it.begin();
            while it.lookahead & gcb::EXTEND != 0 {
                it.advance();
            }
            if it.lookahead & gcb::ZWJ != 0 {
                it.advance();
                if it.lookahead & gcb::EXTENDED_PICTOGRAPHIC != 0 {
                    it.commit();
                    continue;
                }
            }
            it.rollback();
        }

        // GB9 (after GB9c and GB11: InCB_Extend/InCB_Linker are also Extend)
        if it.lookahead & (gcb::EXTEND | gcb::ZWJ) != 0 {
            continue;
        }

        // GB12/GB13: consume exactly one paired Regional_Indicator, then reapply GB9
        if it.curchar & gcb::REGIONAL_INDICATOR != 0 && it.lookahead & gcb::REGIONAL_INDICATOR != 0
        {
            it.advance();
            if it.lookahead & (gcb::EXTEND | gcb::ZWJ) != 0 {
                continue;
            }
            break;
        }

        // GB999
        break;
    }

    Ok(it.pos)
}

/// Next word boundary strictly greater than `offset` (rules WB1-WB999).
pub fn word_next_break(text: &[Scalar], offset: usize) -> Result<usize, Error> {
    const AH_LETTER: u32 = wb::ALETTER | wb::HEBREW_LETTER;
    const MID_NUM_LET_Q: u32 = wb::MID_NUM_LET | wb::SINGLE_QUOTE;

    let len = text.len();
    check_offset(offset, len)?;
    if offset == len {
        return Ok(len);
    }

    let mut it = TextIterator::new(text, offset, word_category_scalar);

    'outer: while it.pos < len {
        it.advance();

        loop {
            // WB3
            if it.curchar & wb::CR != 0 && it.lookahead & wb::LF != 0 {
                it.pos += 1;
                break 'outer;
            }

            // WB3a/b
            if it.curchar & (wb::NEWLINE | wb::CR | wb::LF) != 0 {
                if it.has_accepted() {
                    it.pos -= 1;
                }
                break 'outer;
            }

            // WB3c
            if it.curchar & wb::ZWJ != 0 && it.lookahead & wb::EXTENDED_PICTOGRAPHIC != 0 {
                continue 'outer;
            }
            if it.lookahead & wb::ZWJ != 0 {
                it.begin();
                it.advance();
                if it.lookahead & wb::EXTENDED_PICTOGRAPHIC != 0 {
                    it.advance();
                    it.commit();
                    continue 'outer;
                }
                it.rollback();
            }

            // WB3d
            if it.curchar & wb::WSEG_SPACE != 0 && it.lookahead & wb::WSEG_SPACE != 0 {
                continue 'outer;
            }

            // WB4: Format/Extend/ZWJ are transparent to the preceding character,
            // re-entering WB3c if a ZWJ-then-pictograph run is uncovered.
            if it.lookahead & (wb::EXTEND | wb::ZWJ | wb::FORMAT) != 0 {
                let saved_char = it.curchar;
                while it.lookahead & (wb::EXTEND | wb::ZWJ | wb::FORMAT) != 0 {
                    if it.lookahead & wb::ZWJ != 0 {
                        it.advance();
                        if it.lookahead & wb::EXTENDED_PICTOGRAPHIC != 0 {
                            it.curchar = saved_char;
                            continue 'outer;
                        }
                    } else {
                        it.advance();
                    }
                }
                it.curchar = saved_char;
            }

            // WB5
            if it.curchar & AH_LETTER != 0 && it.lookahead & AH_LETTER != 0 {
                continue 'outer;
            }

            // WB6/7
            if it.curchar & AH_LETTER != 0 && it.lookahead & (wb::MID_LETTER | MID_NUM_LET_Q) != 0 {
                it.begin();
                it.advance();
                it.absorb(wb::EXTEND | wb::FORMAT | wb::ZWJ, 0);
                if it.lookahead & AH_LETTER != 0 {
                    it.commit();
                    continue 'outer;
                }
                it.rollback();
            }

            // WB7a
            if it.curchar & wb::HEBREW_LETTER != 0 && it.lookahead & wb::SINGLE_QUOTE != 0 {
                continue 'outer;
            }

            // WB7b/c
            if it.curchar & wb::HEBREW_LETTER != 0 && it.lookahead & wb::DOUBLE_QUOTE != 0 {
                it.begin();
                it.advance();
                if it.lookahead & wb::HEBREW_LETTER != 0 {
                    it.commit();
                    continue 'outer;
                }
                it.rollback();
            }

            // WB8
            if it.curchar & wb::NUMERIC != 0 && it.lookahead & wb::NUMERIC != 0 {
                continue 'outer;
            }

            // WB9
            if it.curchar & AH_LETTER != 0 && it.lookahead & wb::NUMERIC != 0 {
                continue 'outer;
            }

            // WB10
            if it.curchar & wb::NUMERIC != 0 && it.lookahead & AH_LETTER != 0 {
                continue 'outer;
            }

            // WB11/12
            if it.curchar & wb::NUMERIC != 0 && it.lookahead & (wb::MID_NUM | MID_NUM_LET_Q) != 0 {
                it.begin();
                it.advance();
                it.absorb(wb::EXTEND | wb::FORMAT | wb::ZWJ, 0);
                if it.lookahead & wb::NUMERIC != 0 {
                    it.commit();
                    continue 'outer;
                }
                it.rollback();
            }

            // WB13
            if it.curchar & wb::KATAKANA != 0 && it.lookahead & wb::KATAKANA != 0 {
                continue 'outer;
            }

            // WB13a
            if it.curchar & (AH_LETTER | wb::NUMERIC | wb::KATAKANA | wb::EXTEND_NUM_LET) != 0
                && it.lookahead & wb::EXTEND_NUM_LET != 0
            {
                continue 'outer;
            }

            // WB13b
            if it.curchar & wb::EXTEND_NUM_LET != 0
                && it.lookahead & (AH_LETTER | wb::NUMERIC | wb::KATAKANA) != 0
            {
                continue 'outer;
            }

            // WB15/16
            if it.curchar & wb::REGIONAL_INDICATOR != 0 && it.lookahead & wb::REGIONAL_INDICATOR != 0
            {
                it.advance();
                it.absorb(wb::EXTEND | wb::ZWJ | wb::FORMAT, 0);
                break 'outer;
            }

            // WB999
            break 'outer;
        }
    }

    Ok(it.pos)
}

/// Next sentence boundary strictly greater than `offset` (rules
/// SB1-SB999). Unlike grapheme/word, the default action inside the loop
/// is to continue: a sentence only breaks where a rule explicitly says so.
pub fn sentence_next_break(text: &[Scalar], offset: usize) -> Result<usize, Error> {
    const PARA_SEP: u32 = sb::SEP | sb::CR | sb::LF;
    const SA_TERM: u32 = sb::STERM | sb::ATERM;
    const SB8_OTHER: u32 = !(sb::OLETTER | sb::UPPER | sb::LOWER) & !PARA_SEP & !SA_TERM;

    let len = text.len();
    check_offset(offset, len)?;
    if offset == len {
        return Ok(len);
    }

    let mut it = TextIterator::new(text, offset, sentence_category_scalar);

    while it.pos < len {
        it.advance();

        // SB3
        if it.curchar & sb::CR != 0 && it.lookahead & sb::LF != 0 {
            it.advance();
            break;
        }

        // SB4
        if it.curchar & PARA_SEP != 0 {
            break;
        }

        // SB5
        it.absorb(sb::FORMAT | sb::EXTEND, 0);

        // SB6
        if it.curchar & sb::ATERM != 0 && it.lookahead & sb::NUMERIC != 0 {
            continue;
        }

        // SB7
        if it.curchar & (sb::UPPER | sb::LOWER) != 0 && it.lookahead & sb::ATERM != 0 {
            it.begin();
            it.advance();
            it.absorb(sb::FORMAT | sb::EXTEND, 0);
            if it.lookahead & sb::UPPER != 0 {
                it.commit();
                continue;
            }
            it.rollback();
        }

        // SB8
        if it.curchar & sb::ATERM != 0 {
            it.begin();
            it.absorb(sb::CLOSE, sb::FORMAT | sb::EXTEND);
            it.absorb(sb::SP, sb::FORMAT | sb::EXTEND);
            it.absorb(SB8_OTHER, 0);
            it.absorb(sb::FORMAT | sb::EXTEND, 0);
            if it.lookahead & sb::LOWER != 0 {
                it.absorb(sb::FORMAT | sb::EXTEND, 0);
                it.commit();
                continue;
            }
            it.rollback();
        }

        // SB8a
        if it.curchar & SA_TERM != 0 {
            it.begin();
            it.absorb(sb::CLOSE, sb::FORMAT | sb::EXTEND);
            it.absorb(sb::SP, sb::FORMAT | sb::EXTEND);
            if it.lookahead & (sb::SCONTINUE | SA_TERM) != 0 {
                it.advance();
                it.absorb(sb::FORMAT | sb::EXTEND, 0);
                it.commit();
                continue;
            }
            it.rollback();
        }

        // SB9/10/11
        if it.curchar & SA_TERM != 0 {
            it.absorb(sb::CLOSE, sb::FORMAT | sb::EXTEND);
            it.absorb(sb::SP, sb::FORMAT | sb::EXTEND);
            if it.lookahead & PARA_SEP != 0 {
                continue;
            }
            break;
        }

        // SB998: default is continue, not break
    }

    Ok(it.pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalars(s: &str) -> Vec<Scalar> {
        s.chars().map(|c| c as Scalar).collect()
    }

    #[test]
    fn grapheme_rejects_offset_past_end() {
        let text = scalars("ab");
        assert!(matches!(
            grapheme_next_break(&text, 3),
            Err(Error::BadOffset { offset: 3, len: 2 })
        ));
    }

    #[test]
    fn grapheme_offset_at_end_is_a_boundary() {
        let text = scalars("ab");
        assert_eq!(grapheme_next_break(&text, 2).unwrap(), 2);
    }

    #[test]
    fn grapheme_combining_acute_stays_joined() {
        // "a\u{0301}b": combining acute (Extend) joins to the base letter.
        let text = scalars("a\u{0301}b");
        assert_eq!(grapheme_next_break(&text, 0).unwrap(), 2);
        assert_eq!(grapheme_next_break(&text, 2).unwrap(), 3);
    }

    #[test]
    fn grapheme_crlf_is_one_cluster() {
        let text = scalars("\r\n");
        assert_eq!(grapheme_next_break(&text, 0).unwrap(), 2);
    }

    #[test]
    fn grapheme_zwj_emoji_family_is_one_cluster() {
        // man-ZWJ-woman-ZWJ-girl, five scalars, GB11 applies twice.
        let text: Vec<Scalar> = vec![0x1F468, 0x200D, 0x1F469, 0x200D, 0x1F467];
        assert_eq!(grapheme_next_break(&text, 0).unwrap(), text.len());
    }

    #[test]
    fn grapheme_indic_conjunct_chain_is_one_cluster() {
        // Consonant Virama Consonant Virama Consonant (devanagari KA, virama, repeated).
        let text: Vec<Scalar> = vec![0x0915, 0x094D, 0x0915, 0x094D, 0x0915];
        assert_eq!(grapheme_next_break(&text, 0).unwrap(), text.len());
    }

    #[test]
    fn grapheme_indic_conjunct_absorbs_an_incb_extend_codepoint() {
        // Consonant, InCB=Extend vowel sign, Linker, Consonant: the
        // Extend*Linker run in GB9c must include InCB_Extend codepoints,
        // not just the Linker itself.
        let text: Vec<Scalar> = vec![0x0915, 0x0941, 0x094D, 0x0915];
        assert_eq!(grapheme_next_break(&text, 0).unwrap(), text.len());
    }

    #[test]
    fn grapheme_regional_indicator_pairs_up() {
        // Four REGIONAL INDICATOR SYMBOL LETTERs: two flags, not one four-letter cluster.
        let text: Vec<Scalar> = vec![0x1F1E6, 0x1F1E7, 0x1F1E8, 0x1F1E9];
        assert_eq!(grapheme_next_break(&text, 0).unwrap(), 2);
        assert_eq!(grapheme_next_break(&text, 2).unwrap(), 4);
    }

    #[test]
    fn word_hello_world_boundaries() {
        let text = scalars("hello world");
        assert_eq!(word_next_break(&text, 0).unwrap(), 5);
        assert_eq!(word_next_break(&text, 5).unwrap(), 6);
        assert_eq!(word_next_break(&text, 6).unwrap(), 11);
    }

    #[test]
    fn word_apostrophe_keeps_contraction_joined() {
        let text = scalars("don't");
        assert_eq!(word_next_break(&text, 0).unwrap(), text.len());
    }

    #[test]
    fn word_number_with_decimal_point_joined() {
        let text = scalars("3.14");
        assert_eq!(word_next_break(&text, 0).unwrap(), text.len());
    }

    #[test]
    fn sentence_abbreviation_does_not_break_mid_name() {
        // "Mr. Smith went home. He slept." — SB7 absorbs the title
        // abbreviation so "Mr." does not itself end a sentence; the first
        // sentence boundary lands after the trailing space that follows
        // "home.", since SB9-11's Sp* absorption is part of the same
        // sentence as the terminator it follows.
        let text = scalars("Mr. Smith went home. He slept.");
        let first = sentence_next_break(&text, 0).unwrap();
        assert_eq!(first, 21);
        let second = sentence_next_break(&text, first).unwrap();
        assert_eq!(second, text.len());
    }

    #[test]
    fn sentence_rejects_bad_offset() {
        let text = scalars("Hi.");
        assert!(sentence_next_break(&text, 10).is_err());
    }
}
