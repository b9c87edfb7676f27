//! Pull-based iteration over lazy lists.

use std::iter::FusedIterator;

use super::LazyList;

/// An iterator over the elements of a [`LazyList`].
///
/// Yields clones of the shared head elements, forcing each tail as it
/// advances. It cannot be rewound; build a fresh one from the original list
/// to traverse again, which reuses every tail already forced.
#[derive(Clone)]
pub struct LazyListIterator<T> {
    current: LazyList<T>,
}

impl<T> LazyListIterator<T> {
    /// Returns the list of the elements not yet yielded.
    pub fn remaining(&self) -> &LazyList<T> {
        &self.current
    }
}

impl<T: Clone> Iterator for LazyListIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.current.head()?.clone();
        self.current = self.current.tail().unwrap_or_default();
        Some(head)
    }
}

impl<T: Clone> FusedIterator for LazyListIterator<T> {}

impl<T> LazyList<T> {
    /// Returns an iterator over the elements, starting at this node.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_list::sequence::LazyList;
    ///
    /// let list = LazyList::from_source(vec![1, 2, 3]);
    /// assert_eq!(list.iter().sum::<i32>(), 6);
    /// // The list is not consumed.
    /// assert_eq!(list.iter().count(), 3);
    /// ```
    #[inline]
    pub fn iter(&self) -> LazyListIterator<T> {
        LazyListIterator {
            current: self.clone(),
        }
    }
}

impl<T: Clone> IntoIterator for LazyList<T> {
    type Item = T;
    type IntoIter = LazyListIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        LazyListIterator { current: self }
    }
}

impl<T: Clone> IntoIterator for &LazyList<T> {
    type Item = T;
    type IntoIter = LazyListIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
