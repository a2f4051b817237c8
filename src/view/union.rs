//! Union view.

use alloc::rc::Rc;
use core::fmt;
use core::ops::ControlFlow;

use smallvec::SmallVec;

use crate::capability::{Container, Enumerable, EnumerableHandle, Visit};
use crate::primitives::display::impl_display_distinct;
use super::ops::EnumerableOps;

/// Elements contained in any of two or more enumerable operands.
///
/// Streaming deduplicates without a seen-set: elements of operand `i` are
/// skipped if any operand before `i` contains them. Operand order therefore
/// only affects cost; putting the largest operand first minimises the number
/// of membership checks.
pub struct Union<'a, T> {
    operands: SmallVec<[EnumerableHandle<'a, T>; 4]>,
}

impl<'a, T> Union<'a, T> {
    pub(crate) fn from_pair(first: EnumerableHandle<'a, T>, second: EnumerableHandle<'a, T>) -> Self {
        let mut operands = SmallVec::new();
        operands.push(first);
        operands.push(second);
        Self { operands }
    }

    /// Number of operands in the flattened operand list.
    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }
}

impl<T> Container<T> for Union<'_, T> {
    fn contains(&self, element: &T) -> bool {
        self.operands.iter().any(|operand| operand.contains(element))
    }
}

impl<T> Enumerable<T> for Union<'_, T> {
    fn for_each_distinct(&self, visit: Visit<'_, T>) -> ControlFlow<()> {
        for (index, operand) in self.operands.iter().enumerate() {
            let earlier = &self.operands[..index];
            operand.for_each_distinct(&mut |element| {
                if earlier.iter().any(|seen| seen.contains(element)) {
                    ControlFlow::Continue(())
                } else {
                    visit(element)
                }
            })?;
        }
        ControlFlow::Continue(())
    }
}

impl<T> EnumerableOps<T> for Union<'_, T> {
    /// Appends `other` to this union's operand list instead of nesting.
    fn union<'a, O>(&self, other: &O) -> Union<'a, T>
    where
        Self: 'a,
        T: 'a,
        O: Enumerable<T> + Clone + 'a,
    {
        let mut operands: SmallVec<[EnumerableHandle<'a, T>; 4]> = self
            .operands
            .iter()
            .map(|operand| -> EnumerableHandle<'a, T> { operand.clone() })
            .collect();
        operands.push(Rc::new(other.clone()));
        tracing::trace!(operands = operands.len(), "extended union");
        Union { operands }
    }
}

impl<T> Clone for Union<'_, T> {
    fn clone(&self) -> Self {
        Self { operands: self.operands.clone() }
    }
}

impl<T> fmt::Debug for Union<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Union")
            .field("operands", &self.operands.len())
            .finish()
    }
}

impl_display_distinct!(Union<'a>);

#[cfg(test)]
mod tests {
    use crate::hash_set;
    use crate::prelude::*;
    use alloc::vec::Vec;
    use core::ops::ControlFlow;

    #[test]
    fn test_union_contents() {
        let union = hash_set![1, 2, 3].union(&hash_set![3, 4, 5]);

        assert_eq!(union.size(), 5);
        for n in 1..=5 {
            assert!(union.contains(&n), "union did not contain {n}");
        }
        assert!(!union.contains(&6));
    }

    #[test]
    fn test_chaining_flattens() {
        let union = hash_set![1].union(&hash_set![2]).union(&hash_set![3]).union(&hash_set![1, 4]);

        assert_eq!(union.operand_count(), 4);
        assert_eq!(union.size(), 4);
    }

    #[test]
    fn test_streams_each_element_once() {
        let union = hash_set![1, 2, 3].union(&hash_set![2, 3, 4]).union(&hash_set![3, 4, 5]);
        let mut seen = Vec::new();

        let _ = union.for_each_distinct(&mut |n| {
            seen.push(*n);
            ControlFlow::Continue(())
        });
        seen.sort_unstable();
        assert_eq!(seen, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_break_skips_later_operands() {
        let first = hash_set![1, 2, 3];
        let second = hash_set![10, 20, 30];
        let union = first.union(&second);

        let mut calls = 0;
        let flow = union.for_each_distinct(&mut |_| {
            calls += 1;
            ControlFlow::Break(())
        });

        assert!(flow.is_break());
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_sees_store_changes() {
        let mammals = hash_set!["lion"];
        let birds = hash_set!["eagle"];
        let animals = mammals.union(&birds);

        assert!(!animals.contains(&"dog"));
        mammals.add("dog");
        assert!(animals.contains(&"dog"));
        assert_eq!(animals.size(), 3);

        birds.remove(&"eagle");
        assert_eq!(animals.size(), 2);
    }

    #[test]
    fn test_borrowed_elements() {
        let owned: Vec<alloc::string::String> = ["ant", "bee", "cat"].iter().map(|s| (*s).into()).collect();
        let insects: crate::HashSet<&str> = owned[..2].iter().map(|s| s.as_str()).collect();
        let pets: crate::HashSet<&str> = owned[1..].iter().map(|s| s.as_str()).collect();

        let union = insects.union(&pets).union(&insects);
        assert_eq!(union.operand_count(), 3);
        assert_eq!(union.size(), 3);
        assert!(union.contains(&"cat"));
    }
}
