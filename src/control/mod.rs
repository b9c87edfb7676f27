//! Control primitives for lazy evaluation.
//!
//! - [`MemoCell`]: a compute-once cell with poisoning, the memoization
//!   primitive behind every deferred tail
//! - [`Shareable`]: the marker bound placed on everything a lazy list stores
//!   (thunks, mapping functions, predicates, sources)
//!
//! # Reference Counting
//!
//! When the `arc` feature is enabled, nodes are shared through
//! `std::sync::Arc` and [`Shareable`] requires `Send + Sync`.
//!
//! When the `arc` feature is disabled (default), nodes are shared through
//! `std::rc::Rc` and [`Shareable`] is implemented for every type.

mod memo;

pub use memo::{MemoCell, TailPoisonedError};

/// Reference-counted smart pointer type.
#[cfg(feature = "arc")]
pub(crate) type ReferenceCounter<T> = std::sync::Arc<T>;

#[cfg(not(feature = "arc"))]
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// Boxed deferred computation stored by a [`MemoCell`].
#[cfg(feature = "arc")]
pub(crate) type BoxedThunk<V> = Box<dyn FnOnce() -> V + Send>;

#[cfg(not(feature = "arc"))]
pub(crate) type BoxedThunk<V> = Box<dyn FnOnce() -> V>;

/// Marker for values a lazy list may capture.
///
/// With the `arc` feature this is `Send + Sync`, so lazy lists built from
/// shareable parts can cross threads. Without it, every type qualifies.
#[cfg(feature = "arc")]
pub trait Shareable: Send + Sync {}

#[cfg(feature = "arc")]
impl<T: Send + Sync + ?Sized> Shareable for T {}

/// Marker for values a lazy list may capture.
///
/// With the `arc` feature this is `Send + Sync`, so lazy lists built from
/// shareable parts can cross threads. Without it, every type qualifies.
#[cfg(not(feature = "arc"))]
pub trait Shareable {}

#[cfg(not(feature = "arc"))]
impl<T: ?Sized> Shareable for T {}
