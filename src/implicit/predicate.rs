//! Predicate-defined sets.

use alloc::rc::Rc;
use core::fmt;

use crate::capability::Container;
use super::ops::ImplicitOps;

/// A set defined only by its membership predicate.
///
/// An `ImplicitSet` can describe infinitely many elements, so it never
/// supports enumeration. The predicate runs on every `contains` call; if it
/// closes over shared mutable state (a `Cell` holding a search term, say),
/// the set follows that state live.
///
/// The predicate may borrow from its environment; the set then lives no
/// longer than that borrow.
///
/// ```
/// use tola_sets::prelude::*;
///
/// let even = ImplicitSet::new(|n: &u32| n % 2 == 0);
/// let multiple_of_three = ImplicitSet::new(|n: &u32| n % 3 == 0);
/// let both = even.intersect(&multiple_of_three);
///
/// assert!(both.contains(&6));
/// assert!(!both.contains(&4));
/// assert!(!both.contains(&9));
/// ```
pub struct ImplicitSet<'a, T> {
    predicate: Rc<dyn Fn(&T) -> bool + 'a>,
}

impl<'a, T> ImplicitSet<'a, T> {
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + 'a,
    {
        Self { predicate: Rc::new(predicate) }
    }
}

impl<T> Container<T> for ImplicitSet<'_, T> {
    #[inline]
    fn contains(&self, element: &T) -> bool {
        (self.predicate)(element)
    }
}

impl<T> ImplicitOps<T> for ImplicitSet<'_, T> {}

impl<T> Clone for ImplicitSet<'_, T> {
    fn clone(&self) -> Self {
        Self { predicate: Rc::clone(&self.predicate) }
    }
}

impl<T> fmt::Debug for ImplicitSet<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImplicitSet").finish_non_exhaustive()
    }
}
