//! Hash-based mutable store.

use alloc::rc::Rc;
use core::cell::RefCell;
use core::fmt;
use core::hash::Hash;
use core::ops::ControlFlow;

use rustc_hash::FxBuildHasher;

use crate::capability::{Container, Enumerable, Mutable, Visit};
use crate::primitives::display::impl_display_distinct;
use crate::view::EnumerableOps;

type Elements<T> = hashbrown::HashSet<T, FxBuildHasher>;

/// A mutable set backed by a hash table.
///
/// `HashSet` is a handle: [`Clone`] shares the underlying table instead of
/// copying it, so every view built from a store sees later `add` / `remove`
/// calls. Use [`evaluate`](EnumerableOps::evaluate) for an independent copy.
///
/// ```
/// use tola_sets::prelude::*;
///
/// let mammals = hash_set!["lion"];
/// let birds = hash_set!["eagle", "swan"];
/// let animals = mammals.union(&birds);
///
/// mammals.add("dog");
/// assert!(animals.contains(&"dog"));
/// assert_eq!(animals.size(), 4);
/// ```
///
/// # Panics
///
/// The table sits behind a `RefCell`. Calling `add`, `remove` or `clear` on
/// a store from inside a visitor that is currently enumerating the same store
/// panics.
pub struct HashSet<T> {
    elements: Rc<RefCell<Elements<T>>>,
}

impl<T> HashSet<T> {
    pub fn new() -> Self {
        Self::from_elements(Elements::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_elements(Elements::with_capacity_and_hasher(capacity, FxBuildHasher))
    }

    pub(crate) fn from_elements(elements: Elements<T>) -> Self {
        Self { elements: Rc::new(RefCell::new(elements)) }
    }

    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.elements.borrow_mut().clear();
    }

    /// `true` if both handles refer to the same store.
    ///
    /// This is identity, not structural equality; see
    /// [`equals`](EnumerableOps::equals) for the latter.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.elements, &other.elements)
    }
}

impl<T: Eq + Hash> HashSet<T> {
    /// Insert `element`. Returns `true` if the store changed.
    pub fn add(&self, element: T) -> bool {
        self.elements.borrow_mut().insert(element)
    }

    /// Remove `element`. Returns `true` if the store changed.
    pub fn remove(&self, element: &T) -> bool {
        self.elements.borrow_mut().remove(element)
    }
}

impl<T> Clone for HashSet<T> {
    fn clone(&self) -> Self {
        Self { elements: Rc::clone(&self.elements) }
    }
}

impl<T> Default for HashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash> Container<T> for HashSet<T> {
    #[inline]
    fn contains(&self, element: &T) -> bool {
        self.elements.borrow().contains(element)
    }
}

impl<T: Eq + Hash> Enumerable<T> for HashSet<T> {
    fn for_each_distinct(&self, visit: Visit<'_, T>) -> ControlFlow<()> {
        self.elements.borrow().iter().try_for_each(visit)
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T: Eq + Hash> Mutable<T> for HashSet<T> {
    fn add(&self, element: T) -> bool {
        HashSet::add(self, element)
    }

    fn remove(&self, element: &T) -> bool {
        HashSet::remove(self, element)
    }
}

impl<T: Eq + Hash> EnumerableOps<T> for HashSet<T> {}

impl<T: Eq + Hash> FromIterator<T> for HashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut elements = Elements::default();
        elements.extend(iter);
        Self::from_elements(elements)
    }
}

impl<T: Eq + Hash, const N: usize> From<[T; N]> for HashSet<T> {
    fn from(elements: [T; N]) -> Self {
        elements.into_iter().collect()
    }
}

impl<T: Eq + Hash> Extend<T> for HashSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.elements.borrow_mut().extend(iter);
    }
}

impl<T: fmt::Debug> fmt::Debug for HashSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.elements.borrow().iter()).finish()
    }
}

impl_display_distinct!(HashSet);
