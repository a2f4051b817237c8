//! Tests for set_expr! operator syntax

#![cfg(feature = "macros")]

use tola_sets::prelude::*;

// =============================================================================
// Single Operators
// =============================================================================

#[test]
fn test_union() {
    let a = hash_set![1, 2, 3];
    let b = hash_set![3, 4, 5];
    assert!(set_expr!(a | b).equals(&hash_set![1, 2, 3, 4, 5]));
}

#[test]
fn test_intersect() {
    let a = hash_set![1, 2, 3];
    let b = hash_set![3, 4, 5];
    assert!(set_expr!(a & b).equals(&hash_set![3]));
}

#[test]
fn test_difference_and_symmetric_difference() {
    let a = hash_set![1, 2, 3];
    let b = hash_set![2, 3, 4];
    assert!(set_expr!(a - b).equals(&hash_set![1]));
    assert!(set_expr!(a ^ b).equals(&hash_set![1, 4]));
}

#[test]
fn test_complement() {
    let a = hash_set![1, 2, 3];
    let not_a = set_expr!(!a);
    assert!(!not_a.contains(&1));
    assert!(not_a.contains(&99));
    assert!(set_expr!(!!a).contains(&1));
}

// =============================================================================
// Precedence
// =============================================================================

#[test]
fn test_intersect_binds_tighter_than_union() {
    let a = hash_set![1];
    let b = hash_set![2, 3];
    let c = hash_set![3];

    // a | (b & c)
    assert!(set_expr!(a | b & c).equals(&hash_set![1, 3]));
    // (a | b) & c
    assert!(set_expr!((a | b) & c).equals(&hash_set![3]));
}

#[test]
fn test_difference_binds_tighter_than_intersect() {
    let a = hash_set![1, 2, 3];
    let b = hash_set![2];
    let c = hash_set![1, 2];

    // (a - b) & c
    assert!(set_expr!(a - b & c).equals(&hash_set![1]));
}

#[test]
fn test_mixed_with_predicates() {
    let a = hash_set![1, 2, 3, 4];
    let b = hash_set![5, 6];
    let even = ImplicitSet::new(|n: &i32| n % 2 == 0);

    // a | (b & !even)
    assert!(set_expr!(a | b & !even).equals(&hash_set![1, 2, 3, 4, 5]));
    assert!(set_expr!((a | b) - even).equals(&hash_set![1, 3, 5]));

    // Predicate on the left stays a predicate
    let odd_or_small = set_expr!(!even | a);
    assert!(odd_or_small.contains(&4));
    assert!(odd_or_small.contains(&7));
    assert!(!odd_or_small.contains(&8));
}

// =============================================================================
// Operand Forms
// =============================================================================

struct Zoo {
    birds: HashSet<&'static str>,
    mammals: HashSet<&'static str>,
}

impl Zoo {
    fn flying(&self) -> HashSet<&'static str> {
        hash_set!["eagle", "bat"]
    }
}

#[test]
fn test_field_and_method_operands() {
    let zoo = Zoo { birds: hash_set!["eagle", "duck"], mammals: hash_set!["bat", "lion"] };

    let flying_mammals = set_expr!(zoo.mammals & zoo.flying());
    assert!(flying_mammals.equals(&hash_set!["bat"]));

    let grounded = set_expr!((zoo.birds | zoo.mammals) - zoo.flying());
    assert!(grounded.equals(&hash_set!["duck", "lion"]));
}

#[test]
fn test_block_operands() {
    let a = hash_set![1, 2, 3];
    let view = set_expr!(a - { hash_set![2] });
    assert!(view.equals(&hash_set![1, 3]));
}

#[test]
fn test_operands_are_borrowed() {
    let a = hash_set![1];
    let b = hash_set![2];
    let view = set_expr!(a | b);

    // Both leaves still usable, and the view stays live
    a.add(3);
    b.add(4);
    assert_eq!(view.size(), 4);
}
