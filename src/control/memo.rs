//! Compute-once cells.
//!
//! This module provides [`MemoCell<V>`], a single-assignment cell that holds a
//! deferred computation until it is first forced and the memoized result
//! afterwards. It is the primitive behind the memoized tails of
//! [`LazyList`](crate::sequence::LazyList).
//!
//! # Examples
//!
//! ```rust
//! use lazy_list::control::MemoCell;
//!
//! let cell = MemoCell::new(|| 6 * 7);
//! assert!(!cell.is_initialized());
//!
//! assert_eq!(cell.force(), 42);
//! assert!(cell.is_initialized());
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind, resume_unwind};

use super::{BoxedThunk, Shareable};

/// Error returned when a [`MemoCell`] cannot produce a value because its
/// computation panicked on an earlier attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("deferred tail has been poisoned: its computation panicked")]
pub struct TailPoisonedError;

/// The internal state of a [`MemoCell`].
enum MemoState<V> {
    /// Not forced yet. Holds the deferred computation.
    Pending(BoxedThunk<V>),
    /// The computation is running.
    Forcing,
    /// Forced. Holds the memoized value.
    Ready(V),
    /// The computation panicked. The cell can no longer produce a value.
    Poisoned,
}

#[cfg(not(feature = "arc"))]
type StateLock<V> = std::cell::RefCell<MemoState<V>>;

#[cfg(feature = "arc")]
type StateLock<V> = parking_lot::Mutex<MemoState<V>>;

/// A single-assignment cell with a deferred initializer.
///
/// `MemoCell<V>` stores a zero-argument computation and runs it at most once,
/// on the first call to [`force`](Self::force) or
/// [`try_force`](Self::try_force). Every later access returns a clone of the
/// memoized value. Values are expected to be cheap handles (such as
/// reference-counted nodes), so `force` hands out clones instead of borrows.
///
/// # Thread Safety
///
/// Without the `arc` feature the state lives in a `RefCell` and the cell is
/// neither `Send` nor `Sync`. With the `arc` feature the state lives in a
/// `parking_lot::Mutex` that is only held for state transitions, while a
/// second mutex serializes the computation itself, so concurrent first
/// accesses run the computation once and all observe the same value. Queries
/// such as [`is_initialized`](Self::is_initialized) and `Debug` never wait for
/// a running computation; they report it as not yet initialized.
///
/// # Poisoning
///
/// If the computation panics, the panic propagates to the caller that forced
/// the cell and the cell becomes poisoned. No value is stored for it.
///
/// # Examples
///
/// ```rust
/// use lazy_list::control::MemoCell;
/// use std::rc::Rc;
/// use std::cell::Cell;
/// # #[cfg(not(feature = "arc"))]
/// # {
/// let calls = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&calls);
/// let cell = MemoCell::new(move || {
///     counter.set(counter.get() + 1);
///     "value"
/// });
///
/// assert_eq!(cell.force(), "value");
/// assert_eq!(cell.force(), "value");
/// assert_eq!(calls.get(), 1);
/// # }
/// ```
pub struct MemoCell<V> {
    state: StateLock<V>,
    #[cfg(feature = "arc")]
    forcing: parking_lot::Mutex<()>,
}

impl<V> MemoCell<V> {
    /// Creates a cell whose value is computed by `initializer` on first use.
    #[inline]
    pub fn new<F>(initializer: F) -> Self
    where
        F: FnOnce() -> V + Shareable + 'static,
    {
        Self::with_state(MemoState::Pending(Box::new(initializer)))
    }

    /// Creates a cell that already holds `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_list::control::MemoCell;
    ///
    /// let cell = MemoCell::new_with_value(42);
    /// assert!(cell.is_initialized());
    /// ```
    #[inline]
    pub fn new_with_value(value: V) -> Self {
        Self::with_state(MemoState::Ready(value))
    }

    fn with_state(state: MemoState<V>) -> Self {
        Self {
            state: StateLock::new(state),
            #[cfg(feature = "arc")]
            forcing: parking_lot::Mutex::new(()),
        }
    }

    #[cfg(not(feature = "arc"))]
    fn lock(&self) -> std::cell::RefMut<'_, MemoState<V>> {
        self.state.borrow_mut()
    }

    #[cfg(not(feature = "arc"))]
    fn read(&self) -> std::cell::Ref<'_, MemoState<V>> {
        self.state.borrow()
    }

    #[cfg(feature = "arc")]
    fn lock(&self) -> parking_lot::MutexGuard<'_, MemoState<V>> {
        self.state.lock()
    }

    #[cfg(feature = "arc")]
    fn read(&self) -> parking_lot::MutexGuard<'_, MemoState<V>> {
        self.state.lock()
    }

    /// Moves the pending computation out, leaving the cell in `Forcing`.
    fn take_initializer(&self) -> Option<BoxedThunk<V>> {
        let mut state = self.lock();
        match std::mem::replace(&mut *state, MemoState::Forcing) {
            MemoState::Pending(initializer) => Some(initializer),
            settled => {
                *state = settled;
                None
            }
        }
    }

    /// Returns whether the value has been computed.
    #[inline]
    pub fn is_initialized(&self) -> bool {
        matches!(&*self.read(), MemoState::Ready(_))
    }

    /// Returns whether the computation panicked.
    #[inline]
    pub fn is_poisoned(&self) -> bool {
        matches!(&*self.read(), MemoState::Poisoned)
    }

    /// Consumes the cell and returns the memoized value, if any.
    ///
    /// A pending computation is dropped without being run.
    pub fn into_inner(self) -> Option<V> {
        match self.state.into_inner() {
            MemoState::Ready(value) => Some(value),
            MemoState::Pending(_) | MemoState::Forcing | MemoState::Poisoned => None,
        }
    }
}

impl<V: Clone> MemoCell<V> {
    /// Forces the computation and returns a clone of the memoized value.
    ///
    /// # Panics
    ///
    /// - If the computation panics, the panic propagates and the cell becomes
    ///   poisoned.
    /// - If the cell is already poisoned.
    pub fn force(&self) -> V {
        match self.try_force() {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }

    /// Forces the computation, returning an error instead of panicking when
    /// the cell is poisoned.
    ///
    /// # Errors
    ///
    /// Returns [`TailPoisonedError`] if an earlier computation panicked.
    ///
    /// # Panics
    ///
    /// - If the computation itself panics, the panic propagates to the
    ///   caller and the cell becomes poisoned.
    /// - If the computation forces its own cell.
    pub fn try_force(&self) -> Result<V, TailPoisonedError> {
        if let Some(settled) = self.settled() {
            return settled;
        }

        // Held until the state leaves `Forcing`; later forcers wait here.
        #[cfg(feature = "arc")]
        let _forcing = self.forcing.lock();

        let Some(initializer) = self.take_initializer() else {
            return self
                .settled()
                .unwrap_or_else(|| panic!("deferred computation forced from inside itself"));
        };

        tracing::trace!("forcing deferred computation");
        match catch_unwind(AssertUnwindSafe(initializer)) {
            Ok(value) => {
                *self.lock() = MemoState::Ready(value.clone());
                Ok(value)
            }
            Err(payload) => {
                *self.lock() = MemoState::Poisoned;
                resume_unwind(payload)
            }
        }
    }

    fn settled(&self) -> Option<Result<V, TailPoisonedError>> {
        match &*self.read() {
            MemoState::Ready(value) => Some(Ok(value.clone())),
            MemoState::Poisoned => {
                tracing::warn!("attempted to force a poisoned deferred tail");
                Some(Err(TailPoisonedError))
            }
            MemoState::Pending(_) | MemoState::Forcing => None,
        }
    }

    /// Returns the memoized value without forcing the computation.
    ///
    /// Returns `None` when the cell is pending, being forced, or poisoned.
    pub fn get(&self) -> Option<V> {
        match &*self.read() {
            MemoState::Ready(value) => Some(value.clone()),
            MemoState::Pending(_) | MemoState::Forcing | MemoState::Poisoned => None,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for MemoCell<V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.read() {
            MemoState::Ready(value) => formatter.debug_tuple("MemoCell").field(value).finish(),
            MemoState::Pending(_) => formatter.debug_tuple("MemoCell").field(&"<pending>").finish(),
            MemoState::Forcing => formatter.debug_tuple("MemoCell").field(&"<forcing>").finish(),
            MemoState::Poisoned => formatter.debug_tuple("MemoCell").field(&"<poisoned>").finish(),
        }
    }
}
