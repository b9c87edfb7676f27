//! The lazy list node and its memoized tail.

use std::fmt;

use crate::control::{MemoCell, ReferenceCounter, Shareable, TailPoisonedError};

/// A node with a present head.
///
/// `tail` is `None` for a single-element terminal node, otherwise a cell
/// holding the deferred (or already forced) next node.
pub(super) struct Node<T> {
    pub(super) head: T,
    pub(super) tail: Option<MemoCell<LazyList<T>>>,
}

/// A lazy, memoizing singly-linked list.
///
/// A `LazyList<T>` is a handle to a node. The canonical empty list holds no
/// node at all; every other list holds a head element and, unless it is the
/// last element, a deferred computation producing the next node. The
/// computation runs at most once, on the first call to [`tail`](Self::tail),
/// and its result is shared by every later caller.
///
/// Cloning a `LazyList` clones the handle, not the elements. Any number of
/// handles and iterators may observe the same nodes.
///
/// # Time Complexity
///
/// | Operation      | Complexity                                   |
/// |----------------|----------------------------------------------|
/// | `empty`        | O(1)                                         |
/// | `new`          | O(1)                                         |
/// | `head`         | O(1)                                         |
/// | `tail`         | O(1) plus the deferred computation, once     |
/// | `map`          | O(1) plus one call of the mapping function   |
/// | `filter`       | O(k), k = rejected elements before a match   |
/// | `from_source`  | O(1) plus one pull from the source           |
///
/// # Examples
///
/// ```rust
/// use lazy_list::sequence::LazyList;
///
/// let list = LazyList::new(1, || LazyList::new(2, || LazyList::singleton(3)));
/// assert_eq!(list.head(), Some(&1));
///
/// let collected: Vec<i32> = list.iter().collect();
/// assert_eq!(collected, vec![1, 2, 3]);
/// ```
pub struct LazyList<T>(Option<ReferenceCounter<Node<T>>>);

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(LazyList<i32>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(LazyList<i32>: Send, Sync);

impl<T> LazyList<T> {
    /// Returns the canonical empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_list::sequence::LazyList;
    ///
    /// let list: LazyList<i32> = LazyList::empty();
    /// assert!(list.is_empty());
    /// assert!(list.tail().is_none());
    /// ```
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self(None)
    }

    /// Creates a single-element list with no tail.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_list::sequence::LazyList;
    ///
    /// let list = LazyList::singleton("only");
    /// assert_eq!(list.head(), Some(&"only"));
    /// assert!(!list.has_tail());
    /// ```
    #[inline]
    #[must_use]
    pub fn singleton(head: T) -> Self {
        Self(Some(ReferenceCounter::new(Node { head, tail: None })))
    }

    /// Creates a list from an eager head and a deferred tail.
    ///
    /// `tail` is not called here. It runs on the first call to
    /// [`tail`](Self::tail) on the returned list, and never again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_list::sequence::LazyList;
    ///
    /// let list = LazyList::new(1, || LazyList::singleton(2));
    /// assert!(!list.is_tail_forced());
    /// assert_eq!(list.tail().and_then(|tail| tail.head().copied()), Some(2));
    /// assert!(list.is_tail_forced());
    /// ```
    #[inline]
    pub fn new<F>(head: T, tail: F) -> Self
    where
        F: FnOnce() -> Self + Shareable + 'static,
    {
        Self(Some(ReferenceCounter::new(Node {
            head,
            tail: Some(MemoCell::new(tail)),
        })))
    }

    #[inline]
    pub(super) fn node(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }

    /// Returns the head element, or `None` for the empty list.
    ///
    /// Never forces anything.
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.node().map(|node| &node.head)
    }

    /// Returns the next node, forcing the deferred tail on first access.
    ///
    /// Returns `None` for the empty list and for a single-element terminal
    /// node. A node built with a deferred tail always returns `Some`, possibly
    /// holding the empty list.
    ///
    /// # Panics
    ///
    /// - If the deferred computation panics. The node's tail is then
    ///   poisoned.
    /// - If the node's tail was poisoned by an earlier panic. Use
    ///   [`try_tail`](Self::try_tail) to observe this as an error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_list::sequence::LazyList;
    ///
    /// let list = LazyList::new(1, || LazyList::singleton(2));
    /// let first = list.tail().unwrap();
    /// let second = list.tail().unwrap();
    /// assert!(first.ptr_eq(&second));
    /// ```
    pub fn tail(&self) -> Option<Self> {
        match self.try_tail() {
            Ok(tail) => tail,
            Err(error) => panic!("{error}"),
        }
    }

    /// Returns the next node like [`tail`](Self::tail), reporting a poisoned
    /// tail as an error instead of panicking.
    ///
    /// # Errors
    ///
    /// Returns [`TailPoisonedError`] if the deferred computation of this node
    /// panicked on an earlier access.
    ///
    /// # Panics
    ///
    /// If the deferred computation panics during this call.
    pub fn try_tail(&self) -> Result<Option<Self>, TailPoisonedError> {
        match self.tail_cell() {
            Some(cell) => cell.try_force().map(Some),
            None => Ok(None),
        }
    }

    /// Returns whether this is the empty list.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Returns whether this node has a tail, deferred or forced.
    ///
    /// Never forces anything.
    #[inline]
    pub fn has_tail(&self) -> bool {
        self.node().is_some_and(|node| node.tail.is_some())
    }

    /// Returns whether the tail of this node has already been computed.
    #[inline]
    pub fn is_tail_forced(&self) -> bool {
        self.tail_cell().is_some_and(MemoCell::is_initialized)
    }

    /// Returns whether the tail computation of this node panicked.
    #[inline]
    pub fn is_tail_poisoned(&self) -> bool {
        self.tail_cell().is_some_and(MemoCell::is_poisoned)
    }

    /// Returns whether both handles point at the same node.
    ///
    /// Two empty lists are always the same node.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (Some(left), Some(right)) => ReferenceCounter::ptr_eq(left, right),
            (None, None) => true,
            _ => false,
        }
    }

    fn tail_cell(&self) -> Option<&MemoCell<Self>> {
        self.node().and_then(|node| node.tail.as_ref())
    }
}

// Forced chains are released iteratively; the default recursive drop would
// use one stack frame per element.
impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        let mut next = self.tail.take().and_then(MemoCell::into_inner);
        while let Some(LazyList(Some(node))) = next {
            next = match ReferenceCounter::try_unwrap(node) {
                Ok(mut node) => node.tail.take().and_then(MemoCell::into_inner),
                Err(_) => None,
            };
        }
    }
}

impl<T> Clone for LazyList<T> {
    #[inline]
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for LazyList<T> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Shareable + 'static> From<Vec<T>> for LazyList<T> {
    /// Walks the vector lazily, one element per forced tail.
    fn from(elements: Vec<T>) -> Self {
        Self::from_source(elements)
    }
}

/// Renders the already forced prefix without forcing anything.
///
/// An unforced, poisoned, or currently forcing tail is shown as `..`.
impl<T: fmt::Debug> fmt::Debug for LazyList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("LazyList")?;
        let mut entries = formatter.debug_list();
        let mut current = self.clone();
        while let Some(node) = current.node() {
            entries.entry(&node.head);
            let next = match &node.tail {
                Some(cell) => cell.get(),
                None => break,
            };
            match next {
                Some(next) => current = next,
                None => {
                    entries.entry(&format_args!(".."));
                    break;
                }
            }
        }
        entries.finish()
    }
}
