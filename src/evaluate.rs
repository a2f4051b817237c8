//! # Layer 2: Materialization
//!
//! Snapshot a view into a fresh [`HashSet`] that shares nothing with the
//! expression it came from.

use core::hash::Hash;
use core::ops::ControlFlow;

use crate::capability::Enumerable;
use crate::store::HashSet;

/// Stream `source` once and insert every distinct element into a new store.
///
/// The result has the same size as `source` at the moment of the call.
/// Afterwards the two are independent: mutating a store inside `source` does
/// not change the snapshot, and mutating the snapshot does not change
/// `source`.
///
/// ```
/// use tola_sets::prelude::*;
/// use tola_sets::evaluate;
///
/// let a = hash_set![1, 2, 3];
/// let snapshot = evaluate(&a.union(&hash_set![4]));
///
/// a.add(5);
/// assert_eq!(snapshot.size(), 4);
/// assert!(!snapshot.contains(&5));
/// ```
pub fn evaluate<T, S>(source: &S) -> HashSet<T>
where
    T: Clone + Eq + Hash,
    S: Enumerable<T> + ?Sized,
{
    let snapshot = HashSet::new();
    let _ = source.for_each_distinct(&mut |element| {
        snapshot.add(element.clone());
        ControlFlow::Continue(())
    });
    tracing::trace!(elements = snapshot.len(), "evaluated set expression");
    snapshot
}
