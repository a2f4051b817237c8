//! Complement view.

use core::fmt;

use crate::capability::{Container, ContainerHandle};
use super::ops::ImplicitOps;

/// Every element the wrapped set does not contain.
///
/// The complement of a finite set is unbounded, so `Complement` is a
/// container only, whatever the capability of its operand.
pub struct Complement<'a, T> {
    inner: ContainerHandle<'a, T>,
}

impl<'a, T> Complement<'a, T> {
    pub(crate) fn from_handle(inner: ContainerHandle<'a, T>) -> Self {
        Self { inner }
    }
}

impl<T> Container<T> for Complement<'_, T> {
    #[inline]
    fn contains(&self, element: &T) -> bool {
        !self.inner.contains(element)
    }
}

impl<T> ImplicitOps<T> for Complement<'_, T> {}

impl<T> Clone for Complement<'_, T> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

impl<T> fmt::Debug for Complement<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Complement").finish_non_exhaustive()
    }
}
