//! Construction of lazy lists from external pull-based producers.

use super::LazyList;
use crate::control::Shareable;

impl<T> LazyList<T> {
    /// Builds a lazy list over any iterator, pulling one element at a time.
    ///
    /// Exactly one element is pulled here. Each later element is pulled when
    /// the tail of the node before it is first forced, from the same iterator
    /// (it is moved into the deferred tail, never cloned). Because tails are
    /// memoized, every position is pulled at most once, however many times or
    /// by however many handles it is observed.
    ///
    /// An exhausted source yields the empty list. An infinite source yields an
    /// infinite list; construction still only pulls one element.
    ///
    /// # Panics
    ///
    /// A panic raised by the source propagates out of this call (for the
    /// first element) or out of the [`tail`](Self::tail) call that demanded
    /// the element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_list::sequence::LazyList;
    ///
    /// let naturals = LazyList::from_source(0u64..);
    /// let first: Vec<u64> = naturals.iter().take(3).collect();
    /// assert_eq!(first, vec![0, 1, 2]);
    ///
    /// let nothing = LazyList::from_source(Vec::<u64>::new());
    /// assert!(nothing.is_empty());
    /// ```
    pub fn from_source<I>(source: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: Shareable + 'static,
    {
        pull(source.into_iter())
    }
}

fn pull<T, I>(mut source: I) -> LazyList<T>
where
    I: Iterator<Item = T> + Shareable + 'static,
{
    match source.next() {
        Some(head) => LazyList::new(head, move || pull(source)),
        None => {
            tracing::trace!("lazy list source exhausted");
            LazyList::empty()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_source(
        limit: usize,
        pulls: Arc<AtomicUsize>,
    ) -> impl Iterator<Item = usize> + Shareable + 'static {
        (0..limit).inspect(move |_| {
            pulls.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[rstest]
    fn test_from_source_pulls_only_first_element() {
        let pulls = Arc::new(AtomicUsize::new(0));
        let list = LazyList::from_source(counting_source(10, Arc::clone(&pulls)));

        assert_eq!(list.head(), Some(&0));
        assert_eq!(pulls.load(Ordering::SeqCst), 1);
    }

    #[rstest]
    fn test_from_source_pulls_once_per_position() {
        let pulls = Arc::new(AtomicUsize::new(0));
        let list = LazyList::from_source(counting_source(10, Arc::clone(&pulls)));

        let _ = list.tail();
        let _ = list.tail();
        assert_eq!(pulls.load(Ordering::SeqCst), 2);

        let first: Vec<usize> = list.iter().take(4).collect();
        let second: Vec<usize> = list.iter().take(4).collect();
        assert_eq!(first, vec![0, 1, 2, 3]);
        assert_eq!(second, first);
        // Yielding an element forces the tail behind it.
        assert_eq!(pulls.load(Ordering::SeqCst), 5);
    }

    #[rstest]
    fn test_from_empty_source() {
        let list = LazyList::from_source(std::iter::empty::<i32>());
        assert!(list.is_empty());
        assert!(list.tail().is_none());
    }

    #[rstest]
    fn test_last_element_has_empty_tail() {
        let list = LazyList::from_source([7]);
        assert_eq!(list.head(), Some(&7));
        assert!(list.tail().is_some_and(|tail| tail.is_empty()));
    }
}
