//! Lazy, memoizing sequences.
//!
//! This module provides [`LazyList`], a singly-linked list whose tails are
//! computed on demand and memoized, and [`LazyListIterator`], which walks it
//! through the standard [`Iterator`] protocol.
//!
//! # Overview
//!
//! - [`LazyList::new`], [`LazyList::singleton`], [`LazyList::empty`]: explicit
//!   construction
//! - [`LazyList::from_source`]: wrap any iterator, pulling one element per
//!   forced tail
//! - [`LazyList::map`] and [`LazyList::filter`]: derive new lazy lists
//! - [`Stream`]: the same two operators as a trait, for code generic over the
//!   sequence type
//!
//! # Examples
//!
//! ```rust
//! use lazy_list::sequence::LazyList;
//!
//! let names = LazyList::from_source(["html", "head", "title", "p", "div", "a", "b"]);
//! let upper = names
//!     .filter(|name| *name == "p" || *name == "div")
//!     .map(|name| name.to_uppercase());
//!
//! assert_eq!(upper.iter().collect::<Vec<_>>(), vec!["P", "DIV"]);
//! // Re-traversal reuses the memoized tails.
//! assert_eq!(upper.iter().count(), 2);
//! ```
//!
//! # Memoization
//!
//! ```text
//! from_source:  [0] --thunk--> [1] --thunk--> (unforced)
//!                 \              \
//! map(+1):       [1] --thunk--> [2] --thunk--> (unforced)
//! ```
//!
//! Every thunk runs once. A second iterator over either chain reuses the
//! nodes already built.

mod iter;
mod list;
mod source;
mod stream;
mod transform;

pub use iter::LazyListIterator;
pub use list::LazyList;
pub use stream::Stream;
