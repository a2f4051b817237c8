//! # Capability Traits
//!
//! Every set in this crate declares which of three capability levels it
//! supports:
//!
//! ```text
//! Container  ⊂  Enumerable  ⊂  Mutable
//!  contains     + for_each_distinct, size
//!                              + add, remove
//! ```
//!
//! The level of a combinator's result is decided by its operands:
//!
//! | Operation | Operands | Result |
//! |-----------|----------|--------|
//! | `union` | Enumerable, Enumerable | Enumerable |
//! | `intersect` | Enumerable, Container | Enumerable |
//! | `difference` | Enumerable, Container | Enumerable |
//! | `symmetric_difference` | Enumerable, Enumerable | Enumerable |
//! | `complement` | any | Container |
//! | any | Container-only left operand | Container |
//!
//! A `Container` never regains enumerability. Asking a complement or a
//! predicate set for its size does not compile:
//!
//! ```compile_fail
//! use tola_sets::prelude::*;
//!
//! let odd = hash_set![1, 3, 5];
//! let _ = odd.complement().size();
//! ```
//!
//! ```compile_fail
//! use tola_sets::prelude::*;
//!
//! let even = ImplicitSet::new(|n: &i32| n % 2 == 0);
//! let _ = even.evaluate();
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::ops::ControlFlow;

/// Per-element callback of the streaming protocol.
///
/// Return `ControlFlow::Break(())` to stop the traversal immediately.
pub type Visit<'a, T> = &'a mut dyn FnMut(&T) -> ControlFlow<()>;

/// Membership test. Every set in the crate is at least a `Container`.
///
/// Implementations must be deterministic and free of observable side
/// effects; views call `contains` any number of times per query.
pub trait Container<T> {
    fn contains(&self, element: &T) -> bool;
}

/// A finite set whose distinct elements can be streamed.
///
/// `for_each_distinct` yields every element exactly once, and `size` equals
/// the number of yields.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be enumerated",
    label = "`{Self}` only supports membership tests",
    note = "complements and predicate sets may be infinite; intersect them with an enumerable set to get an enumerable result"
)]
pub trait Enumerable<T>: Container<T> {
    /// Push every distinct element into `visit`.
    ///
    /// Returns `Break` if and only if `visit` asked to stop. Nested views
    /// forward the `Break` without touching their remaining operands.
    fn for_each_distinct(&self, visit: Visit<'_, T>) -> ControlFlow<()>;

    /// Number of distinct elements. Views recount on every call.
    fn size(&self) -> usize {
        crate::primitives::count_distinct(self)
    }
}

/// An enumerable set that owns its elements and can change.
///
/// Mutation takes `&self`: stores are shared handles, and every view built
/// on top of a store observes the change on its next query.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is a view and cannot be mutated",
    label = "only stores accept `add` / `remove`",
    note = "mutate one of the underlying stores, or call `evaluate()` to get an independent store"
)]
pub trait Mutable<T>: Enumerable<T> {
    /// Insert `element`. Returns `true` if it was not present before.
    fn add(&self, element: T) -> bool;

    /// Remove `element`. Returns `true` if it was present before.
    fn remove(&self, element: &T) -> bool;
}

// =============================================================================
// Forwarding impls
// =============================================================================

macro_rules! forward_capabilities {
    ($($ptr:ty),* $(,)?) => {$(
        impl<T, S: Container<T> + ?Sized> Container<T> for $ptr {
            #[inline]
            fn contains(&self, element: &T) -> bool {
                (**self).contains(element)
            }
        }

        impl<T, S: Enumerable<T> + ?Sized> Enumerable<T> for $ptr {
            #[inline]
            fn for_each_distinct(&self, visit: Visit<'_, T>) -> ControlFlow<()> {
                (**self).for_each_distinct(visit)
            }

            #[inline]
            fn size(&self) -> usize {
                (**self).size()
            }
        }

        impl<T, S: Mutable<T> + ?Sized> Mutable<T> for $ptr {
            #[inline]
            fn add(&self, element: T) -> bool {
                (**self).add(element)
            }

            #[inline]
            fn remove(&self, element: &T) -> bool {
                (**self).remove(element)
            }
        }
    )*};
}

forward_capabilities!(&S, Rc<S>, Box<S>);

/// Shared handle to an operand that only needs membership tests.
pub(crate) type ContainerHandle<'a, T> = Rc<dyn Container<T> + 'a>;

/// Shared handle to an enumerable operand.
pub(crate) type EnumerableHandle<'a, T> = Rc<dyn Enumerable<T> + 'a>;

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    struct Evens(u32);

    impl Container<u32> for Evens {
        fn contains(&self, element: &u32) -> bool {
            *element < self.0 && element % 2 == 0
        }
    }

    impl Enumerable<u32> for Evens {
        fn for_each_distinct(&self, visit: Visit<'_, u32>) -> ControlFlow<()> {
            (0..self.0).step_by(2).try_for_each(|n| visit(&n))
        }
    }

    #[test]
    fn test_default_size_drains_stream() {
        assert_eq!(Evens(10).size(), 5);
        assert_eq!(Evens(0).size(), 0);
    }

    #[test]
    fn test_forwarding_through_pointers() {
        let boxed: Box<dyn Enumerable<u32>> = Box::new(Evens(6));
        let shared: Rc<dyn Enumerable<u32>> = Rc::new(Evens(6));

        assert!(boxed.contains(&4));
        assert!(!(&shared).contains(&5));
        assert_eq!(boxed.size(), 3);
        assert_eq!(shared.size(), 3);
    }

    #[test]
    fn test_break_stops_producer() {
        let mut seen = Vec::new();
        let flow = Evens(100).for_each_distinct(&mut |n| {
            seen.push(*n);
            if seen.len() == 2 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
        });

        assert_eq!(flow, ControlFlow::Break(()));
        assert_eq!(seen, [0, 2]);
    }
}
