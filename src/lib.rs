//! # sortedset
//!
//! A sorted, duplicate-free set backed by a contiguous vector.
//!
//! ## Overview
//!
//! [`SortedSet`] keeps its elements in strictly ascending order in a single
//! `Vec`. Membership, insertion, deletion and the set-algebraic operations
//! (union, intersection, intersection test) are all driven by binary search
//! rather than hashing or trees.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`SortedSet`] as a sequence
//!
//! ## Example
//!
//! ```rust
//! use sortedset::prelude::*;
//!
//! let mut set = SortedSet::new();
//! set.add(["b"]).add(["a"]).add(["c", "a"]);
//! assert_eq!(set.as_slice(), &["a", "b", "c"]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use sortedset::prelude::*;
/// ```
pub mod prelude {
    pub use crate::set::*;
}

pub mod set;

pub use set::{SortedSet, UnsortedInputError};
