//! Case folding (C5): `casefold` implements Unicode simple+full case
//! folding (merged C+F status from `CaseFolding.txt`), not locale-sensitive
//! lowercasing and not Turkic dotless-i folding.
//!
//! Mirrors apsw's `casefold`/`casefold_ascii` split: an ASCII-only fast
//! path short-circuits the common case, and the general path makes one
//! pass to decide whether anything changes (and by how much the output
//! grows) before allocating, returning the input unchanged when nothing
//! folds rather than paying for a copy nobody needed.

use crate::fold_tables::{full_fold, simple_fold};
use crate::Scalar;
use std::borrow::Cow;

fn is_ascii_upper(cp: Scalar) -> bool {
    (0x41..=0x5A).contains(&cp)
}

fn fold_one(cp: Scalar, out: &mut Vec<Scalar>) {
    if let Some(expansion) = full_fold(cp) {
        out.extend_from_slice(expansion);
    } else if let Some(folded) = simple_fold(cp) {
        out.push(folded);
    } else {
        out.push(cp);
    }
}

/// Case-fold `text` for caseless comparison.
///
/// Returns the input unchanged (zero allocation) when every scalar is
/// already its own fold, matching apsw's avoidance of a copy when
/// `change` never triggers. Idempotent: folding already-folded text is a
/// no-op.
pub fn casefold(text: &[Scalar]) -> Cow<'_, [Scalar]> {
    if text.iter().all(|&cp| cp < 0x80) {
        if !text.iter().any(|&cp| is_ascii_upper(cp)) {
            return Cow::Borrowed(text);
        }
        return Cow::Owned(
            text.iter()
                .map(|&cp| if is_ascii_upper(cp) { cp + 0x20 } else { cp })
                .collect(),
        );
    }

    let changed = text
        .iter()
        .any(|&cp| full_fold(cp).is_some() || simple_fold(cp).is_some());
    if !changed {
        return Cow::Borrowed(text);
    }

    let mut out = Vec::with_capacity(text.len());
    for &cp in text {
        fold_one(cp, &mut out);
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalars(s: &str) -> Vec<Scalar> {
        s.chars().map(|c| c as Scalar).collect()
    }

    #[test]
    fn ascii_unchanged_is_borrowed() {
        let text = scalars("already lower");
        assert!(matches!(casefold(&text), Cow::Borrowed(_)));
    }

    #[test]
    fn ascii_uppercase_folds() {
        let text = scalars("HELLO");
        assert_eq!(casefold(&text).into_owned(), scalars("hello"));
    }

    #[test]
    fn sharp_s_expands_to_ss() {
        let text = scalars("Stra\u{00DF}e");
        assert_eq!(casefold(&text).into_owned(), scalars("strasse"));
    }

    #[test]
    fn micro_sign_folds_to_greek_mu() {
        let text: Vec<Scalar> = "micro sign: \u{00B5}".chars().map(|c| c as Scalar).collect();
        let expected: Vec<Scalar> = "micro sign: \u{03BC}".chars().map(|c| c as Scalar).collect();
        assert_eq!(casefold(&text).into_owned(), expected);
    }

    #[test]
    fn idempotent() {
        let text = scalars("Stra\u{00DF}e MICRO \u{00B5}");
        let once = casefold(&text).into_owned();
        let twice = casefold(&once).into_owned();
        assert_eq!(once, twice);
    }

    #[test]
    fn non_ascii_without_folding_needed_is_borrowed() {
        let text: Vec<Scalar> = vec![0x4E2D, 0x6587]; // already-lowercase-equivalent CJK
        assert!(matches!(casefold(&text), Cow::Borrowed(_)));
    }
}
