//! Sorted set backed by a contiguous vector.
//!
//! - [`SortedSet`]: the container
//! - [`SortedSetIterator`] / [`SortedSetIntoIterator`]: ascending iterators
//! - [`UnsortedInputError`]: returned by checked bulk construction
//!
//! # Examples
//!
//! ```rust
//! use sortedset::set::SortedSet;
//!
//! let x: SortedSet<i32> = [1, 3, 5, 7].into();
//! let y: SortedSet<i32> = [3, 4, 5].into();
//!
//! let mut union = SortedSet::new();
//! union.union(&x, &y);
//! assert_eq!(union.as_slice(), &[1, 3, 4, 5, 7]);
//!
//! let mut intersection = SortedSet::new();
//! intersection.intersection(&x, &y);
//! assert_eq!(intersection.as_slice(), &[3, 5]);
//!
//! assert!(x.intersects(&y));
//! ```

mod error;
mod iter;
mod search;
mod sorted_set;

pub use error::UnsortedInputError;
pub use iter::SortedSetIntoIterator;
pub use iter::SortedSetIterator;
pub use sorted_set::SortedSet;
