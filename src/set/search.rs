//! Forward-only binary search over a sorted slice.
//!
//! When a strictly ascending sequence of needles is looked up in a sorted
//! haystack, every match (and every insertion point) sits at or after the
//! previous one. [`MonotonicSearch`] exploits this by narrowing each binary
//! search to the part of the haystack not yet passed.

use std::borrow::Borrow;

/// A binary-search cursor whose lower bound only ever moves forward.
///
/// Needles must be presented in strictly ascending order. Positions returned
/// are absolute indices into the haystack, with the same meaning as
/// [`slice::binary_search`]: `Ok(index)` on a hit, `Err(insertion_point)` on a
/// miss.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct MonotonicSearch {
    offset: usize,
}

impl MonotonicSearch {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self { offset: 0 }
    }

    /// Lower bound of the next search.
    #[cfg(test)]
    const fn offset(&self) -> usize {
        self.offset
    }

    /// Returns `true` once the cursor has passed the end of `haystack`, after
    /// which no further needle can match.
    #[inline]
    pub(crate) const fn is_exhausted<T>(&self, haystack: &[T]) -> bool {
        self.offset >= haystack.len()
    }

    /// Searches `haystack[offset..]` for `needle` and advances the cursor.
    ///
    /// On a hit the cursor moves past the match; on a miss it moves to the
    /// insertion point.
    pub(crate) fn find<T, Q>(&mut self, haystack: &[T], needle: &Q) -> Result<usize, usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let window = haystack.get(self.offset..).unwrap_or_default();
        match window.binary_search_by(|item| item.borrow().cmp(needle)) {
            Ok(relative) => {
                let position = self.offset + relative;
                self.offset = position + 1;
                Ok(position)
            }
            Err(relative) => {
                let position = self.offset + relative;
                self.offset = position;
                Err(position)
            }
        }
    }
}
