//! Conformance suites shared by every set implementation.
//!
//! Each macro stamps out a family of `#[test]` functions for one
//! constructor. The constructor receives the wanted elements as `&[u8]` and
//! may build any set with those contents (a store, a union of two halves, an
//! intersection with a filter, ...).
//!
//! ```ignore
//! tola_sets::enumerable_set_suite!(store, |elements: &[u8]| {
//!     elements.iter().copied().collect::<tola_sets::HashSet<u8>>()
//! });
//! // Generates store_contains, store_size, store_union, ...
//! ```

/// Tests for everything an enumerable set must satisfy.
#[macro_export]
#[doc(hidden)]
macro_rules! enumerable_set_suite {
    ($name:ident, $constructor:expr) => {
        $crate::paste::paste! {
            #[test]
            fn [<$name _contains>]() {
                use $crate::prelude::*;
                let set = ($constructor)(&[1, 2]);
                assert!(set.contains(&1));
                assert!(set.contains(&2));
                assert!(!set.contains(&0));
            }

            #[test]
            fn [<$name _size>]() {
                use $crate::prelude::*;
                assert_eq!(($constructor)(&[1, 2, 3]).size(), 3);
                assert_eq!(($constructor)(&[]).size(), 0);
            }

            #[test]
            fn [<$name _distinct_elements>]() {
                use $crate::prelude::*;
                let reference = hash_set![1u8, 2, 3, 4, 5];
                let found = $crate::HashSet::new();

                let _ = ($constructor)(&[1, 2, 3, 4, 5]).for_each_distinct(&mut |element: &u8| {
                    assert!(found.add(*element), "duplicate element: {element}");
                    assert!(reference.contains(element), "unexpected element: {element}");
                    ::core::ops::ControlFlow::Continue(())
                });
                assert_eq!(found.size(), reference.size());
            }

            #[test]
            fn [<$name _break>]() {
                use $crate::prelude::*;
                let mut counter = 0;
                let flow = ($constructor)(&[1, 2, 3, 4, 5]).for_each_distinct(&mut |_: &u8| {
                    counter += 1;
                    if counter < 3 {
                        ::core::ops::ControlFlow::Continue(())
                    } else {
                        ::core::ops::ControlFlow::Break(())
                    }
                });
                assert!(flow.is_break());
                assert_eq!(counter, 3);
            }

            #[test]
            fn [<$name _union>]() {
                use $crate::prelude::*;
                let union = ($constructor)(&[1, 2, 3]).union(&($constructor)(&[3, 4, 5]));
                assert_eq!(union.size(), 5);
                for element in 1u8..=5 {
                    assert!(union.contains(&element), "union did not contain {element}");
                }
            }

            #[test]
            fn [<$name _intersect>]() {
                use $crate::prelude::*;
                let intersection = ($constructor)(&[1, 2, 3]).intersect(&($constructor)(&[2, 3, 4]));
                assert!(intersection.equals(&hash_set![2u8, 3]));
            }

            #[test]
            fn [<$name _complement>]() {
                use $crate::prelude::*;
                let complement = ($constructor)(&[1, 2, 3, 4, 5]).complement();
                for element in [1u8, 2, 3, 4, 5] {
                    assert!(!complement.contains(&element), "both set and complement contain {element}");
                }
                for element in [0u8, 6, 255] {
                    assert!(complement.contains(&element), "complement should contain {element}");
                }
            }

            #[test]
            fn [<$name _difference>]() {
                use $crate::prelude::*;
                let set = ($constructor)(&[1, 2, 3]);
                assert!(set.difference(&($constructor)(&[2, 3, 4])).equals(&hash_set![1u8]));
                assert!(set.difference(&($constructor)(&[])).equals(&hash_set![1u8, 2, 3]));
                assert_eq!(set.difference(&set).size(), 0);
            }

            #[test]
            fn [<$name _symmetric_difference>]() {
                use $crate::prelude::*;
                let set = ($constructor)(&[1, 2, 3]);
                let other = ($constructor)(&[2, 3, 4]);
                assert!(set.symmetric_difference(&other).equals(&hash_set![1u8, 4]));
                assert_eq!(set.symmetric_difference(&set).size(), 0);
            }

            #[test]
            fn [<$name _subset>]() {
                use $crate::prelude::*;
                assert!(($constructor)(&[1, 2]).is_subset(&hash_set![1u8, 2, 3]));
                assert!(!($constructor)(&[1, 2, 3]).is_subset(&($constructor)(&[2, 3, 4])));
                assert!(($constructor)(&[1, 2]).is_subset(&($constructor)(&[1, 2])));
            }

            #[test]
            fn [<$name _strict_subset>]() {
                use $crate::prelude::*;
                assert!(($constructor)(&[1, 2]).is_strict_subset(&hash_set![1u8, 2, 3]));
                assert!(!($constructor)(&[1, 2]).is_strict_subset(&($constructor)(&[1, 2])));
                assert!(!($constructor)(&[1, 2, 3]).is_strict_subset(&($constructor)(&[2, 3, 4])));
            }

            #[test]
            fn [<$name _equals>]() {
                use $crate::prelude::*;
                assert!(!($constructor)(&[1, 2, 3]).equals(&hash_set![1u8, 2]));
                assert!(!($constructor)(&[1, 2, 3]).equals(&($constructor)(&[2, 3, 4])));
                assert!(($constructor)(&[1, 2]).equals(&($constructor)(&[1, 2])));
            }

            #[test]
            fn [<$name _evaluate>]() {
                use $crate::prelude::*;
                let set = ($constructor)(&[1, 2, 3]);
                let evaluated = set.evaluate();
                assert_eq!(evaluated.size(), set.size());

                evaluated.add(4);
                assert!(!set.contains(&4), "evaluate should create independent sets");
            }

            #[test]
            fn [<$name _display>]() {
                let rendered = ($constructor)(&[1, 2]).to_string();
                assert!(rendered == "{1, 2}" || rendered == "{2, 1}", "invalid string: {rendered}");
            }
        }
    };
}

/// Tests for stores that accept `add` / `remove`, on top of
/// [`enumerable_set_suite!`].
#[macro_export]
#[doc(hidden)]
macro_rules! mutable_set_suite {
    ($name:ident, $constructor:expr) => {
        $crate::enumerable_set_suite!($name, $constructor);

        $crate::paste::paste! {
            #[test]
            fn [<$name _add>]() {
                use $crate::prelude::*;
                let set = ($constructor)(&[1, 2, 3]);
                assert!(!set.contains(&4));
                assert!(Mutable::add(&set, 4));
                assert!(set.contains(&4));
                assert!(!Mutable::add(&set, 4));
            }

            #[test]
            fn [<$name _remove>]() {
                use $crate::prelude::*;
                let set = ($constructor)(&[1, 2, 3]);
                assert!(Mutable::remove(&set, &3));
                assert!(!set.contains(&3));
                assert!(!Mutable::remove(&set, &3));
            }

            #[test]
            fn [<$name _views_follow_mutation>]() {
                use $crate::prelude::*;
                let set = ($constructor)(&[1]);
                let union = set.union(&hash_set![2u8]);
                let complement = set.complement();

                Mutable::add(&set, 3);
                assert!(union.contains(&3));
                assert_eq!(union.size(), 3);
                assert!(!complement.contains(&3));
            }
        }
    };
}
