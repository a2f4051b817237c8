//! Intersection view.

use alloc::rc::Rc;
use core::fmt;
use core::ops::ControlFlow;

use smallvec::SmallVec;

use crate::capability::{Container, ContainerHandle, Enumerable, EnumerableHandle, Visit};
use crate::primitives::display::impl_display_distinct;
use super::ops::EnumerableOps;

/// Elements of an enumerable driver that pass every filter.
///
/// Only the driver is streamed; filters are asked `contains`, so they may be
/// complements or predicate sets. The driver's stream is already distinct,
/// so no further deduplication happens here.
pub struct Intersection<'a, T> {
    driver: EnumerableHandle<'a, T>,
    filters: SmallVec<[ContainerHandle<'a, T>; 4]>,
}

impl<'a, T> Intersection<'a, T> {
    pub(crate) fn new(driver: EnumerableHandle<'a, T>, filter: ContainerHandle<'a, T>) -> Self {
        let mut filters = SmallVec::new();
        filters.push(filter);
        Self { driver, filters }
    }

    /// Number of filters applied to the driver.
    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    #[inline]
    fn passes_filters(&self, element: &T) -> bool {
        self.filters.iter().all(|filter| filter.contains(element))
    }
}

impl<T> Container<T> for Intersection<'_, T> {
    fn contains(&self, element: &T) -> bool {
        self.driver.contains(element) && self.passes_filters(element)
    }
}

impl<T> Enumerable<T> for Intersection<'_, T> {
    fn for_each_distinct(&self, visit: Visit<'_, T>) -> ControlFlow<()> {
        self.driver.for_each_distinct(&mut |element| {
            if self.passes_filters(element) {
                visit(element)
            } else {
                ControlFlow::Continue(())
            }
        })
    }
}

impl<T> EnumerableOps<T> for Intersection<'_, T> {
    /// Appends `other` to the filter list; the driver stays the same.
    fn intersect<'a, O>(&self, other: &O) -> Intersection<'a, T>
    where
        Self: 'a,
        T: 'a,
        O: Container<T> + Clone + 'a,
    {
        let mut filters: SmallVec<[ContainerHandle<'a, T>; 4]> = self
            .filters
            .iter()
            .map(|filter| -> ContainerHandle<'a, T> { filter.clone() })
            .collect();
        filters.push(Rc::new(other.clone()));
        tracing::trace!(filters = filters.len(), "extended intersection");
        let driver: EnumerableHandle<'a, T> = self.driver.clone();
        Intersection { driver, filters }
    }
}

impl<T> Clone for Intersection<'_, T> {
    fn clone(&self) -> Self {
        Self { driver: Rc::clone(&self.driver), filters: self.filters.clone() }
    }
}

impl<T> fmt::Debug for Intersection<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Intersection")
            .field("filters", &self.filters.len())
            .finish_non_exhaustive()
    }
}

impl_display_distinct!(Intersection<'a>);
