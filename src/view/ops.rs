//! Combinators for enumerable sets.
//!
//! Results are views: they hold shared handles to their operands and
//! recompute on every query.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::hash::Hash;
use core::ops::ControlFlow;

use crate::capability::{Container, Enumerable};
use crate::implicit::Complement;
use crate::primitives::is_contained_in;
use crate::store::HashSet;
use super::{Intersection, Union};

/// Set algebra over enumerable sets.
///
/// Implemented by [`HashSet`], [`Union`] and [`Intersection`]. The left
/// operand is always the one that gets streamed, so every result here stays
/// enumerable.
///
/// A view borrows nothing from `self` or `other` but holds clones of them,
/// so its lifetime `'a` is bounded by whatever those operands borrow.
pub trait EnumerableOps<T>: Enumerable<T> + Clone + Sized {
    /// Elements in `self` or in `other`.
    fn union<'a, O>(&self, other: &O) -> Union<'a, T>
    where
        Self: 'a,
        T: 'a,
        O: Enumerable<T> + Clone + 'a,
    {
        Union::from_pair(Rc::new(self.clone()), Rc::new(other.clone()))
    }

    /// Elements of `self` that `other` contains.
    ///
    /// `other` only needs membership tests, so it may be infinite.
    fn intersect<'a, O>(&self, other: &O) -> Intersection<'a, T>
    where
        Self: 'a,
        T: 'a,
        O: Container<T> + Clone + 'a,
    {
        Intersection::new(Rc::new(self.clone()), Rc::new(other.clone()))
    }

    /// Every element not in `self`. The result cannot be enumerated.
    fn complement<'a>(&self) -> Complement<'a, T>
    where
        Self: 'a,
        T: 'a,
    {
        Complement::from_handle(Rc::new(self.clone()))
    }

    /// Elements of `self` that `other` does not contain.
    fn difference<'a, O>(&self, other: &O) -> Intersection<'a, T>
    where
        Self: 'a,
        T: 'a,
        O: Container<T> + Clone + 'a,
    {
        self.intersect(&Complement::from_handle(Rc::new(other.clone())))
    }

    /// Elements in exactly one of `self` and `other`.
    fn symmetric_difference<'a, O>(&self, other: &O) -> Union<'a, T>
    where
        Self: 'a,
        T: 'a,
        O: Enumerable<T> + Clone + 'a,
    {
        let this = Rc::new(self.clone());
        let other = Rc::new(other.clone());
        let left = Intersection::new(this.clone(), Rc::new(Complement::from_handle(other.clone())));
        let right = Intersection::new(other, Rc::new(Complement::from_handle(this)));
        Union::from_pair(Rc::new(left), Rc::new(right))
    }

    /// Snapshot the current elements into a new, independent store.
    fn evaluate(&self) -> HashSet<T>
    where
        T: Clone + Eq + Hash,
    {
        crate::evaluate::evaluate(self)
    }

    /// `true` if every element of `self` is in `other`.
    fn is_subset<O>(&self, other: &O) -> bool
    where
        O: Container<T> + ?Sized,
    {
        is_contained_in(self, other)
    }

    /// `true` if `self` is a subset of `other` and the two are not equal.
    fn is_strict_subset<O>(&self, other: &O) -> bool
    where
        O: Enumerable<T> + ?Sized,
    {
        self.is_subset(other) && !is_contained_in(other, self)
    }

    /// `true` if `self` and `other` hold exactly the same elements.
    ///
    /// This compares contents, not identity.
    fn equals<O>(&self, other: &O) -> bool
    where
        O: Enumerable<T> + ?Sized,
    {
        self.is_subset(other) && is_contained_in(other, self)
    }

    /// Collect the current elements in stream order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut elements = Vec::new();
        let _ = self.for_each_distinct(&mut |element| {
            elements.push(element.clone());
            ControlFlow::Continue(())
        });
        elements
    }
}
