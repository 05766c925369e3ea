//! Error types for sorted set construction.
//!
//! Every set operation is total. The only fallible entry point is checked
//! bulk construction from a vector that claims to be sorted already.

/// Represents input that is not strictly ascending.
///
/// Returned by [`SortedSet::try_from_sorted_vec`](crate::SortedSet::try_from_sorted_vec)
/// when an element is not strictly greater than its predecessor, which covers
/// both out-of-order and duplicated elements.
///
/// # Examples
///
/// ```rust
/// use sortedset::{SortedSet, UnsortedInputError};
///
/// let error = SortedSet::try_from_sorted_vec(vec![1, 3, 2]).unwrap_err();
/// assert_eq!(error, UnsortedInputError { index: 2 });
/// assert_eq!(
///     format!("{error}"),
///     "input is not strictly increasing at index 2"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UnsortedInputError {
    /// Index of the first element that is not greater than the one before it.
    pub index: usize,
}

impl std::fmt::Display for UnsortedInputError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "input is not strictly increasing at index {}",
            self.index
        )
    }
}

impl std::error::Error for UnsortedInputError {}

/// Returns the index of the first element that breaks strict ascent.
pub(crate) fn first_unsorted_index<T: Ord>(slice: &[T]) -> Option<usize> {
    slice
        .windows(2)
        .position(|window| window[0] >= window[1])
        .map(|position| position + 1)
}
