//! Combinators for container-only sets.
//!
//! Each operation captures its operands and returns a new [`ImplicitSet`]
//! whose predicate re-asks them on every `contains` call.

use alloc::rc::Rc;

use crate::capability::Container;
use super::{Complement, ImplicitSet};

/// Set algebra over sets that only support membership tests.
///
/// Implemented by [`ImplicitSet`] and [`Complement`]. Results are always
/// container-only, even when `other` is enumerable; put an enumerable set on
/// the left of `intersect` to keep enumerability.
pub trait ImplicitOps<T>: Container<T> + Clone + Sized {
    /// Elements in `self` or in `other`.
    fn union<'a, O>(&self, other: &O) -> ImplicitSet<'a, T>
    where
        Self: 'a,
        T: 'a,
        O: Container<T> + Clone + 'a,
    {
        let (this, other) = (self.clone(), other.clone());
        ImplicitSet::new(move |element| this.contains(element) || other.contains(element))
    }

    /// Elements in both `self` and `other`.
    fn intersect<'a, O>(&self, other: &O) -> ImplicitSet<'a, T>
    where
        Self: 'a,
        T: 'a,
        O: Container<T> + Clone + 'a,
    {
        let (this, other) = (self.clone(), other.clone());
        ImplicitSet::new(move |element| this.contains(element) && other.contains(element))
    }

    /// Elements not in `self`.
    fn complement<'a>(&self) -> Complement<'a, T>
    where
        Self: 'a,
        T: 'a,
    {
        Complement::from_handle(Rc::new(self.clone()))
    }

    /// Elements in `self` but not in `other`.
    fn difference<'a, O>(&self, other: &O) -> ImplicitSet<'a, T>
    where
        Self: 'a,
        T: 'a,
        O: Container<T> + Clone + 'a,
    {
        let (this, other) = (self.clone(), other.clone());
        ImplicitSet::new(move |element| this.contains(element) && !other.contains(element))
    }

    /// Elements in exactly one of `self` and `other`.
    fn symmetric_difference<'a, O>(&self, other: &O) -> ImplicitSet<'a, T>
    where
        Self: 'a,
        T: 'a,
        O: Container<T> + Clone + 'a,
    {
        let (this, other) = (self.clone(), other.clone());
        ImplicitSet::new(move |element| this.contains(element) != other.contains(element))
    }
}
