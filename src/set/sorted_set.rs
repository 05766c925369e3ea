//! Sorted, duplicate-free set stored in a contiguous vector.
//!
//! This module provides [`SortedSet`], a set whose elements live in a single
//! `Vec<T>` kept in strictly ascending order at all times.
//!
//! # Overview
//!
//! Every lookup is a binary search over the backing vector:
//! - Membership is O(log n)
//! - Insertion and removal are O(n) because later elements shift
//! - Set algebra walks one operand in order and binary-searches the other,
//!   narrowing each search with a forward-only offset
//!
//! # Ownership
//!
//! Mutating operations take `&mut self` and return `&mut Self`, so calls can
//! be chained. A view obtained through [`SortedSet::as_slice`] borrows the set,
//! so it can never outlive a later mutation. [`Clone`] produces a fully
//! independent copy, whereas [`SortedSet::clear`] keeps the allocation for
//! reuse.
//!
//! # Time Complexity
//!
//! | Operation           | Complexity             |
//! |---------------------|------------------------|
//! | `has`               | O(log n)               |
//! | `insert` / `remove` | O(n)                   |
//! | `add` (k values)    | O(k * n)               |
//! | `delete` (k values) | O(k * n)               |
//! | `equal`             | O(n)                   |
//! | `intersects`        | O(1) to O(m log n)     |
//! | `intersection`      | O(n log m) + inserts   |
//! | `union`             | O((n + m) * (n + m))   |
//!
//! # Examples
//!
//! ```rust
//! use sortedset::SortedSet;
//!
//! let mut set = SortedSet::new();
//! set.add(["b"]).add(["a"]).add(["c", "a"]);
//! assert_eq!(set.as_slice(), &["a", "b", "c"]);
//!
//! assert!(set.has("a"));
//! assert!(!set.has("d"));
//!
//! set.delete(["a"]).delete(["d"]);
//! assert_eq!(set.as_slice(), &["b", "c"]);
//! ```

use std::borrow::Borrow;
use std::fmt;

use super::error::{UnsortedInputError, first_unsorted_index};
use super::iter::{SortedSetIntoIterator, SortedSetIterator};
use super::search::MonotonicSearch;

/// A set of unique elements kept in ascending order in a contiguous vector.
///
/// # Type Parameters
///
/// * `T` - The element type. Operations that search require `T: Ord`; a total
///   order is assumed, so types such as `f64` with `NaN` are not supported.
///
/// # Examples
///
/// ```rust
/// use sortedset::SortedSet;
///
/// let mut set = SortedSet::with_capacity(4);
/// set.add([3, 1, 2, 1]);
///
/// assert_eq!(set.len(), 3);
/// assert_eq!(set.as_slice(), &[1, 2, 3]);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SortedSet<T> {
    elements: Vec<T>,
}

static_assertions::assert_impl_all!(SortedSet<i32>: Send, Sync, Clone, Default, fmt::Debug);
static_assertions::assert_impl_all!(SortedSet<String>: Send, Sync, Clone, Eq, std::hash::Hash);

// =============================================================================
// Construction and Inspection
// =============================================================================

impl<T> SortedSet<T> {
    /// Creates a new empty set without allocating.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let set: SortedSet<i32> = SortedSet::new();
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), 0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a new empty set able to hold `capacity` elements without
    /// reallocating.
    ///
    /// The hint is a `usize`, so it can never be negative.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let set: SortedSet<i32> = SortedSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the set.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` if the set contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of elements the set can hold without reallocating.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.elements.capacity()
    }

    /// Reserves room for at least `additional` more elements.
    #[inline]
    pub fn reserve(&mut self, additional: usize) -> &mut Self {
        self.elements.reserve(additional);
        self
    }

    /// Shrinks the backing allocation as much as possible.
    #[inline]
    pub fn shrink_to_fit(&mut self) -> &mut Self {
        self.elements.shrink_to_fit();
        self
    }

    /// Returns the elements as an ascending slice.
    ///
    /// The slice borrows the set, so it cannot be held across a mutation and
    /// cannot be used to break the ordering invariant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let set: SortedSet<i32> = [5, 1, 3].into();
    /// assert_eq!(set.as_slice(), &[1, 3, 5]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        self.elements.as_slice()
    }

    /// Returns a sorted `Vec` containing clones of all elements.
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.elements.clone()
    }

    /// Consumes the set and returns its backing vector, in ascending order.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Returns an iterator over the elements in ascending order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let set: SortedSet<i32> = [3, 1, 2].into();
    /// let elements: Vec<&i32> = set.iter().collect();
    /// assert_eq!(elements, vec![&1, &2, &3]);
    /// ```
    #[inline]
    #[must_use]
    pub fn iter(&self) -> SortedSetIterator<'_, T> {
        SortedSetIterator::new(&self.elements)
    }

    /// Returns the smallest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Returns the largest element, or `None` if the set is empty.
    #[inline]
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.elements.last()
    }

    /// Removes every element while keeping the allocation for reuse.
    ///
    /// Calling `clear` on an empty set does nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let mut set: SortedSet<i32> = (0..100).collect();
    /// let capacity = set.capacity();
    ///
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert_eq!(set.capacity(), capacity);
    /// ```
    #[inline]
    pub fn clear(&mut self) -> &mut Self {
        self.elements.clear();
        self
    }
}

// =============================================================================
// Queries and Mutation
// =============================================================================

impl<T: Ord> SortedSet<T> {
    /// Creates a set from a vector that is already sorted and deduplicated.
    ///
    /// # Preconditions
    ///
    /// The vector must be strictly increasing. This is validated with
    /// `debug_assert!` in debug builds; in release builds invalid input yields
    /// a set whose searches give wrong answers (a logic error, not memory
    /// unsafety). Use [`SortedSet::try_from_sorted_vec`] for untrusted input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let set = SortedSet::from_sorted_vec(vec![2, 4, 6]);
    /// assert!(set.has(&4));
    /// ```
    #[must_use]
    pub fn from_sorted_vec(elements: Vec<T>) -> Self {
        debug_assert!(
            first_unsorted_index(&elements).is_none(),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        Self { elements }
    }

    /// Creates a set from a vector that should already be sorted and
    /// deduplicated, checking that it is.
    ///
    /// # Errors
    ///
    /// Returns [`UnsortedInputError`] with the index of the first element that
    /// is not strictly greater than its predecessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// assert!(SortedSet::try_from_sorted_vec(vec![1, 2, 3]).is_ok());
    /// assert!(SortedSet::try_from_sorted_vec(vec![1, 1, 2]).is_err());
    /// ```
    pub fn try_from_sorted_vec(elements: Vec<T>) -> Result<Self, UnsortedInputError> {
        match first_unsorted_index(&elements) {
            Some(index) => Err(UnsortedInputError { index }),
            None => Ok(Self { elements }),
        }
    }

    /// Returns `true` if the set contains `value`.
    ///
    /// Borrowed forms of the element type are accepted, so a
    /// `SortedSet<String>` can be searched with a `&str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let set: SortedSet<String> = ["a".to_string(), "b".to_string()].into();
    /// assert!(set.has("a"));
    /// assert!(!set.has("c"));
    /// ```
    #[inline]
    #[must_use]
    pub fn has<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.position(value).is_ok()
    }

    /// Returns `true` if both sets hold the same elements.
    ///
    /// Both sets are in canonical order, so this is a positional comparison.
    #[inline]
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self.elements == other.elements
    }

    /// Inserts `value` at its sorted position.
    ///
    /// Returns `true` if the value was added, `false` if an equal element was
    /// already present (the existing element is kept).
    pub fn insert(&mut self, value: T) -> bool {
        match self.elements.binary_search(&value) {
            Ok(_) => false,
            Err(position) => {
                self.elements.insert(position, value);
                true
            }
        }
    }

    /// Removes the element equal to `value`.
    ///
    /// Returns `true` if an element was removed.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self.position(value) {
            Ok(position) => {
                self.elements.remove(position);
                true
            }
            Err(_) => false,
        }
    }

    /// Adds every value, in order, skipping those already present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let mut set = SortedSet::new();
    /// set.add(["d", "b"]).add(["c", "b"]);
    /// assert_eq!(set.as_slice(), &["b", "c", "d"]);
    /// ```
    pub fn add<I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.insert(value);
        }
        self
    }

    /// Deletes every value, in order. Values not present are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let mut set: SortedSet<i32> = [1, 2, 3, 4].into();
    /// set.delete(&[2, 4, 9]);
    /// assert_eq!(set.as_slice(), &[1, 3]);
    /// ```
    pub fn delete<'a, Q, I>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = &'a Q>,
        T: Borrow<Q>,
        Q: Ord + ?Sized + 'a,
    {
        for value in values {
            self.remove(value);
        }
        self
    }

    /// Reduces the set to the elements it shares with `other`.
    ///
    /// The result equals clearing the set and then calling
    /// [`SortedSet::intersection`] with the previous contents and `other`. The
    /// receiver is compacted in place, so its allocation is kept.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let mut set: SortedSet<&str> = ["b", "d", "f"].into();
    /// let other: SortedSet<&str> = ["b", "c", "d", "x"].into();
    ///
    /// set.intersection_with(&other);
    /// assert_eq!(set.as_slice(), &["b", "d"]);
    /// ```
    pub fn intersection_with(&mut self, other: &Self) -> &mut Self {
        let mut search = MonotonicSearch::new();

        if self.len() >= other.len() {
            self.elements.retain(|element| {
                !search.is_exhausted(&other.elements)
                    && search.find(&other.elements, element).is_ok()
            });
        } else {
            // Matches land at strictly increasing positions, so every swap
            // stays below the search offset and never disturbs the region
            // still to be searched.
            let mut kept = 0;
            for value in &other.elements {
                if search.is_exhausted(&self.elements) {
                    break;
                }
                if let Ok(position) = search.find(&self.elements, value) {
                    self.elements.swap(kept, position);
                    kept += 1;
                }
            }
            self.elements.truncate(kept);
        }

        self
    }

    /// Returns `true` if the sets share at least one element.
    ///
    /// Returns `false` in O(1) when either set is empty or their value ranges
    /// do not overlap. Otherwise the smaller set is walked in order while the
    /// larger one is binary-searched from a forward-only offset.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let set: SortedSet<&str> = ["b", "d", "f"].into();
    /// assert!(!set.intersects(&["c", "e"].into()));
    /// assert!(set.intersects(&["c", "d", "g"].into()));
    /// assert!(!set.intersects(&["x", "y"].into()));
    /// ```
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        let (smaller, larger) = if other.len() < self.len() {
            (other, self)
        } else {
            (self, other)
        };
        if !ranges_overlap(smaller.as_slice(), larger.as_slice()) {
            return false;
        }

        let mut search = MonotonicSearch::new();
        for value in &smaller.elements {
            if search.find(&larger.elements, value).is_ok() {
                return true;
            }
            if search.is_exhausted(&larger.elements) {
                return false;
            }
        }
        false
    }

    /// Returns `true` if every element of `self` is also in `other`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let small: SortedSet<i32> = [2, 4].into();
    /// let large: SortedSet<i32> = [1, 2, 3, 4].into();
    /// assert!(small.is_subset(&large));
    /// assert!(!large.is_subset(&small));
    /// ```
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        if self.len() > other.len() {
            return false;
        }
        let (Some(first), Some(last)) = (self.first(), self.last()) else {
            return true;
        };
        let within_range = matches!(
            (other.first(), other.last()),
            (Some(other_first), Some(other_last)) if other_first <= first && last <= other_last
        );
        if !within_range {
            return false;
        }

        let mut search = MonotonicSearch::new();
        self.elements
            .iter()
            .all(|value| search.find(&other.elements, value).is_ok())
    }

    /// Returns `true` if every element of `other` is also in `self`.
    #[inline]
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.is_subset(self)
    }

    fn position<Q>(&self, value: &Q) -> Result<usize, usize>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.elements
            .binary_search_by(|item| item.borrow().cmp(value))
    }
}

// =============================================================================
// Set Algebra Producing Elements
// =============================================================================

impl<T: Ord + Clone> SortedSet<T> {
    /// Adds the intersection `x ∩ y` to the set.
    ///
    /// Elements already in the set are kept, so the result is
    /// `self ∪ (x ∩ y)`. The larger operand is walked in order and each of its
    /// elements is binary-searched in the smaller one, starting from where the
    /// previous search ended.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let x: SortedSet<&str> = ["b", "d", "f"].into();
    /// let y: SortedSet<&str> = ["b", "c", "d", "x"].into();
    ///
    /// let mut result = SortedSet::new();
    /// result.intersection(&x, &y);
    /// assert_eq!(result.as_slice(), &["b", "d"]);
    /// ```
    pub fn intersection(&mut self, x: &Self, y: &Self) -> &mut Self {
        let (outer, inner) = if x.len() < y.len() { (y, x) } else { (x, y) };

        let mut search = MonotonicSearch::new();
        for value in &outer.elements {
            if search.is_exhausted(&inner.elements) {
                break;
            }
            if search.find(&inner.elements, value).is_ok() {
                self.insert(value.clone());
            }
        }
        self
    }

    /// Adds the union `x ∪ y` to the set.
    ///
    /// Every element of `x`, then every element of `y`, goes through
    /// [`SortedSet::add`], so duplicates across all three sets collapse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let x: SortedSet<&str> = ["b", "d", "f"].into();
    /// let y: SortedSet<&str> = ["b", "c", "d", "x"].into();
    ///
    /// let mut result = SortedSet::new();
    /// result.union(&x, &y);
    /// assert_eq!(result.as_slice(), &["b", "c", "d", "f", "x"]);
    /// ```
    pub fn union(&mut self, x: &Self, y: &Self) -> &mut Self {
        self.add(x.iter().cloned()).add(y.iter().cloned())
    }

    /// Adds every element of `other` to the set.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sortedset::SortedSet;
    ///
    /// let mut set: SortedSet<&str> = ["b", "d", "f"].into();
    /// set.union_with(&["b", "c", "d", "x"].into());
    /// assert_eq!(set.as_slice(), &["b", "c", "d", "f", "x"]);
    /// ```
    pub fn union_with(&mut self, other: &Self) -> &mut Self {
        self.add(other.iter().cloned())
    }
}

/// Returns `true` if both slices are non-empty and their `[first, last]`
/// ranges overlap.
fn ranges_overlap<T: Ord>(left: &[T], right: &[T]) -> bool {
    match (left.first(), left.last(), right.first(), right.last()) {
        (Some(left_first), Some(left_last), Some(right_first), Some(right_last)) => {
            left_first <= right_last && right_first <= left_last
        }
        _ => false,
    }
}

/// Message constant for panic when `from_sorted_vec` receives invalid input.
const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "from_sorted_vec requires strictly increasing elements (sorted + deduplicated)";

// =============================================================================
// Trait Implementations
// =============================================================================

impl<T> Default for SortedSet<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for SortedSet<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "}}")
    }
}

impl<T> AsRef<[T]> for SortedSet<T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.elements
    }
}

impl<T: Ord> From<Vec<T>> for SortedSet<T> {
    /// Sorts and deduplicates `elements`. Of several equal elements, the one
    /// appearing first is kept, as with [`SortedSet::add`].
    fn from(mut elements: Vec<T>) -> Self {
        elements.sort();
        elements.dedup();
        Self { elements }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SortedSet<T> {
    fn from(elements: [T; N]) -> Self {
        Self::from(Vec::from(elements))
    }
}

impl<T: Ord> FromIterator<T> for SortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<T: Ord> Extend<T> for SortedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<'a, T: Ord + Copy + 'a> Extend<&'a T> for SortedSet<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.add(iter.into_iter().copied());
    }
}

impl<T> IntoIterator for SortedSet<T> {
    type Item = T;
    type IntoIter = SortedSetIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        SortedSetIntoIterator::new(self.elements)
    }
}

impl<'a, T> IntoIterator for &'a SortedSet<T> {
    type Item = &'a T;
    type IntoIter = SortedSetIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SortedSet<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct SortedSetVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SortedSetVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

/// Upper bound on the capacity pre-allocated from an untrusted size hint.
#[cfg(feature = "serde")]
const MAX_PREALLOCATED_ELEMENTS: usize = 4096;

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SortedSetVisitor<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    type Value = SortedSet<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let capacity = access
            .size_hint()
            .unwrap_or(0)
            .min(MAX_PREALLOCATED_ELEMENTS);
        let mut set = SortedSet::with_capacity(capacity);
        while let Some(element) = access.next_element()? {
            set.insert(element);
        }
        Ok(set)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedSet<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedSetVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
