//! The `Stream` abstraction over lazily transformable sequences.
//!
//! # Laws
//!
//! For every `Stream` implementation:
//!
//! ```text
//! stream.map(|x| x.clone())     yields the same elements as stream
//! stream.map(f).map(g)          yields the same elements as stream.map(|x| g(&f(x)))
//! stream.filter(p).filter(q)    yields the same elements as stream.filter(|x| p(x) && q(x))
//! ```

use super::LazyList;
use crate::control::Shareable;

/// A sequence that can be iterated and transformed without being consumed.
///
/// `map` and `filter` derive new streams from a shared handle. How much work
/// they do up front is up to the implementation; [`LazyList`] computes one
/// element eagerly and defers the rest.
///
/// # Examples
///
/// ```rust
/// use lazy_list::sequence::{LazyList, Stream};
///
/// fn block_tags<S>(tags: &S) -> S::WithType<String>
/// where
///     S: Stream<Item = &'static str>,
/// {
///     Stream::filter(tags, |tag| *tag == "p" || *tag == "div").map(|tag| tag.to_uppercase())
/// }
///
/// let tags = LazyList::from_source(["html", "p", "a", "div"]);
/// let blocks: Vec<String> = block_tags(&tags).into_iter().collect();
/// assert_eq!(blocks, vec!["P", "DIV"]);
/// ```
pub trait Stream: IntoIterator + Sized {
    /// The same kind of stream over a different element type.
    type WithType<U>: Stream<Item = U>
    where
        U: Clone + Shareable + 'static;

    /// Applies `function` to every element.
    fn map<U, F>(&self, function: F) -> Self::WithType<U>
    where
        U: Clone + Shareable + 'static,
        F: Fn(&Self::Item) -> U + Shareable + 'static;

    /// Keeps the elements satisfying `predicate`, in order.
    fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&Self::Item) -> bool + Shareable + 'static;
}

impl<T: Clone + Shareable + 'static> Stream for LazyList<T> {
    type WithType<U>
        = LazyList<U>
    where
        U: Clone + Shareable + 'static;

    #[inline]
    fn map<U, F>(&self, function: F) -> LazyList<U>
    where
        U: Clone + Shareable + 'static,
        F: Fn(&T) -> U + Shareable + 'static,
    {
        Self::map(self, function)
    }

    #[inline]
    fn filter<P>(&self, predicate: P) -> Self
    where
        P: Fn(&T) -> bool + Shareable + 'static,
    {
        Self::filter(self, predicate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn doubled_evens<S: Stream<Item = i32>>(stream: &S) -> Vec<i32> {
        Stream::filter(stream, |value| value % 2 == 0)
            .map(|value| value * 2)
            .into_iter()
            .collect()
    }

    #[rstest]
    #[case(vec![1, 2, 3, 4], vec![4, 8])]
    #[case(vec![1, 3], vec![])]
    #[case(vec![], vec![])]
    fn test_stream_generic_pipeline(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(doubled_evens(&LazyList::from_source(input)), expected);
    }

    #[rstest]
    fn test_stream_map_matches_inherent_map() {
        let list = LazyList::from_source(1..=4);
        let through_trait: Vec<_> = Stream::map(&list, |value| value + 1).iter().collect();
        let inherent: Vec<_> = list.map(|value| value + 1).iter().collect();
        assert_eq!(through_trait, inherent);
    }

    #[rstest]
    fn test_stream_map_shares_source_nodes() {
        let list = LazyList::from_source(1..=3);
        let _ = Stream::map(&list, |value| value * 10).iter().count();
        assert!(list.is_tail_forced());
        assert_eq!(format!("{list:?}"), "LazyList[1, 2, 3]");
    }
}
