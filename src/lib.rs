//! # lazy-list
//!
//! A lazy, memoizing singly-linked list for Rust.
//!
//! ## Overview
//!
//! A [`LazyList`](sequence::LazyList) is a chain of nodes, each holding a
//! head element and a deferred computation of the next node. Tails are
//! computed on first access and memoized, so a list can wrap a single-pass
//! source, be shared by several iterators, and be infinite.
//!
//! - **Sequence**: `LazyList`, its iterator, `map`, `filter`, `from_source`
//! - **Control**: `MemoCell`, the compute-once cell behind every tail
//!
//! ## Feature Flags
//!
//! - `arc`: share nodes through `Arc` and guard tails with a mutex, making
//!   lazy lists `Send + Sync`
//!
//! ## Example
//!
//! ```rust
//! use lazy_list::prelude::*;
//!
//! let evens = LazyList::from_source(0u64..).filter(|value| value % 2 == 0);
//! let first: Vec<u64> = evens.iter().take(4).collect();
//! assert_eq!(first, vec![0, 2, 4, 6]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use lazy_list::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::{MemoCell, Shareable, TailPoisonedError};
    pub use crate::sequence::{LazyList, LazyListIterator, Stream};
}

pub mod control;
pub mod sequence;
