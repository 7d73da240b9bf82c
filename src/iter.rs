//! TextIterator (C3): a one-level save/restore cursor over category masks.
//!
//! Mirrors the `TextIterator`/`it_*` macros this crate's segmentation
//! engines are translated from: `pos` is the index one past the most
//! recently accepted scalar, `curchar` is that scalar's category mask (or
//! `0` before anything has been accepted), and `lookahead` is the mask of
//! the scalar at `pos` (or `0` at end of text). A single save slot backs
//! the transactional rules that need to look further ahead and possibly
//! give up.

use crate::Scalar;

/// A function from a scalar to the category mask used by one particular
/// segmentation algorithm.
pub type CategoryFn = fn(Scalar) -> u32;

pub struct TextIterator<'t> {
    text: &'t [Scalar],
    offset: usize,
    classify: CategoryFn,

    pub pos: usize,
    pub curchar: u32,
    pub lookahead: u32,

    saved: Option<(usize, u32, u32)>,
}

impl<'t> TextIterator<'t> {
    pub fn new(text: &'t [Scalar], offset: usize, classify: CategoryFn) -> Self {
        let lookahead = if offset == text.len() {
            0
        } else {
            classify(text[offset])
        };
        TextIterator {
            text,
            offset,
            classify,
            pos: offset,
            curchar: 0,
            lookahead,
            saved: None,
        }
    }

    /// Accept the lookahead as the new current character and refresh the
    /// lookahead from the next scalar (`0` at end of text).
    pub fn advance(&mut self) {
        debug_assert!(self.pos < self.text.len());
        self.curchar = self.lookahead;
        self.pos += 1;
        self.lookahead = if self.pos == self.text.len() {
            0
        } else {
            (self.classify)(self.text[self.pos])
        };
    }

    /// Advance while the lookahead matches `match_mask`, and after each
    /// such advance, keep advancing while the lookahead matches
    /// `extend_mask`. `curchar` is restored to its pre-call value on exit:
    /// the absorbed run is transparent to the identity of the preceding
    /// character.
    pub fn absorb(&mut self, match_mask: u32, extend_mask: u32) {
        if self.lookahead & match_mask != 0 {
            let saved_curchar = self.curchar;
            while self.lookahead & match_mask != 0 {
                self.advance();
                while self.lookahead & extend_mask != 0 {
                    self.advance();
                }
            }
            self.curchar = saved_curchar;
        }
    }

    /// True iff at least one [`TextIterator::advance`] has happened since
    /// construction.
    pub fn has_accepted(&self) -> bool {
        self.pos > self.offset + 1
    }

    /// Snapshot `(pos, curchar, lookahead)`. Panics (debug builds) if a
    /// transaction is already open: nested transactions are a programming
    /// error, never a legitimate use of this type.
    pub fn begin(&mut self) {
        debug_assert!(self.saved.is_none(), "nested TextIterator transaction");
        self.saved = Some((self.pos, self.curchar, self.lookahead));
    }

    /// Discard the open transaction's snapshot; current state stands.
    pub fn commit(&mut self) {
        debug_assert!(self.saved.is_some(), "commit without begin");
        self.saved = None;
    }

    /// Restore the snapshot taken by the last [`TextIterator::begin`].
    pub fn rollback(&mut self) {
        let (pos, curchar, lookahead) = self.saved.take().expect("rollback without begin");
        self.pos = pos;
        self.curchar = curchar;
        self.lookahead = lookahead;
    }

    pub fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }
}
