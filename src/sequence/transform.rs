//! `map` and `filter` over lazy lists.
//!
//! Both operators are written as a loop plus one deferred closure per step,
//! so neither long chains nor long runs of rejected elements grow the stack.

use super::LazyList;
use crate::control::{ReferenceCounter, Shareable};

impl<T: Shareable + 'static> LazyList<T> {
    /// Applies `function` to every element, lazily.
    ///
    /// The head of the result is computed eagerly, here. Every later element
    /// is computed when the tail leading to it is first forced, so mapping an
    /// infinite list is O(1).
    ///
    /// A terminal source node maps to a terminal node; an empty list maps to
    /// the empty list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_list::sequence::LazyList;
    ///
    /// let doubled = LazyList::from_source(1..=5).map(|value| value * 2);
    /// assert_eq!(doubled.iter().collect::<Vec<_>>(), vec![2, 4, 6, 8, 10]);
    ///
    /// let squares = LazyList::from_source(1u64..).map(|value| value * value);
    /// assert_eq!(squares.iter().take(3).collect::<Vec<_>>(), vec![1, 4, 9]);
    /// ```
    pub fn map<U, F>(&self, function: F) -> LazyList<U>
    where
        F: Fn(&T) -> U + Shareable + 'static,
        U: 'static,
    {
        map_shared(self, ReferenceCounter::new(function))
    }

    /// Keeps the elements satisfying `predicate`, in order.
    ///
    /// The search for the first accepted element is eager: rejected elements
    /// are pulled through synchronously, inside this call, until an element
    /// is accepted or the list ends. Filtering the rest is deferred to the
    /// tail of the result, where the same eager search repeats per accepted
    /// element. A predicate that no element of an infinite list satisfies
    /// therefore never returns.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazy_list::sequence::LazyList;
    ///
    /// let tags = LazyList::from_source(["html", "head", "title", "p", "div", "a", "b"]);
    /// let blocks = tags.filter(|name| *name == "p" || *name == "div");
    /// assert_eq!(blocks.head(), Some(&"p"));
    /// assert_eq!(blocks.iter().collect::<Vec<_>>(), vec!["p", "div"]);
    /// ```
    pub fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Shareable + 'static,
        T: Clone,
    {
        filter_shared(self.clone(), ReferenceCounter::new(predicate))
    }
}

fn map_shared<T, U, F>(list: &LazyList<T>, function: ReferenceCounter<F>) -> LazyList<U>
where
    T: Shareable + 'static,
    U: 'static,
    F: Fn(&T) -> U + Shareable + 'static,
{
    let Some(node) = list.node() else {
        return LazyList::empty();
    };
    let head = function(&node.head);
    if node.tail.is_none() {
        return LazyList::singleton(head);
    }

    let source = list.clone();
    LazyList::new(head, move || match source.tail() {
        Some(tail) => map_shared(&tail, function),
        None => LazyList::empty(),
    })
}

fn filter_shared<T, P>(mut current: LazyList<T>, predicate: ReferenceCounter<P>) -> LazyList<T>
where
    T: Clone + Shareable + 'static,
    P: Fn(&T) -> bool + Shareable + 'static,
{
    let mut skipped = 0usize;
    let filtered = loop {
        let (accepted, has_tail) = match current.node() {
            Some(node) => (
                predicate(&node.head).then(|| node.head.clone()),
                node.tail.is_some(),
            ),
            None => break LazyList::empty(),
        };

        match accepted {
            Some(head) if has_tail => {
                break LazyList::new(head, move || match current.tail() {
                    Some(tail) => filter_shared(tail, predicate),
                    None => LazyList::empty(),
                });
            }
            Some(head) => break LazyList::singleton(head),
            None => skipped += 1,
        }

        match current.tail() {
            Some(tail) => current = tail,
            None => break LazyList::empty(),
        }
    };

    if skipped > 0 {
        tracing::debug!(skipped, "filter skipped rejected elements");
    }
    filtered
}
