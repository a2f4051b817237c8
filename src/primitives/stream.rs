//! Helpers built on the push-based streaming protocol.
//!
//! Every query that has to walk a set (size, subset checks, formatting,
//! collection) goes through `for_each_distinct`, so early termination and
//! deduplication behave the same way everywhere.

use core::ops::ControlFlow;

use crate::capability::{Container, Enumerable};

/// Count the distinct elements of `set` by draining its stream.
pub fn count_distinct<T, S>(set: &S) -> usize
where
    S: Enumerable<T> + ?Sized,
{
    let mut count = 0;
    let _ = set.for_each_distinct(&mut |_| {
        count += 1;
        ControlFlow::Continue(())
    });
    count
}

/// `true` if `predicate` holds for every distinct element of `set`.
///
/// Stops at the first element that fails.
pub fn all_distinct<T, S, F>(set: &S, mut predicate: F) -> bool
where
    S: Enumerable<T> + ?Sized,
    F: FnMut(&T) -> bool,
{
    set.for_each_distinct(&mut |element| {
        if predicate(element) {
            ControlFlow::Continue(())
        } else {
            ControlFlow::Break(())
        }
    })
    .is_continue()
}

/// `true` if every distinct element of `set` is contained in `other`.
pub fn is_contained_in<T, S, O>(set: &S, other: &O) -> bool
where
    S: Enumerable<T> + ?Sized,
    O: Container<T> + ?Sized,
{
    all_distinct(set, |element| other.contains(element))
}
