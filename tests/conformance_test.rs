//! The shared conformance suites, run against every enumerable set shape.

use tola_sets::prelude::*;
use tola_sets::{enumerable_set_suite, mutable_set_suite};

fn store(elements: &[u8]) -> HashSet<u8> {
    elements.iter().copied().collect()
}

mutable_set_suite!(hash_set, store);

// Two overlapping halves
enumerable_set_suite!(union, |elements: &[u8]| {
    let middle = elements.len() / 2;
    let overlap = (middle + 1).min(elements.len());
    store(&elements[..overlap]).union(&store(&elements[middle..]))
});

// A store with extra elements filtered away
enumerable_set_suite!(intersection, |elements: &[u8]| {
    let wanted = store(elements);
    let mut noisy = store(elements);
    noisy.extend([200, 201, 202]);
    noisy.intersect(&wanted).intersect(&ImplicitSet::new(|n: &u8| *n < 200))
});

enumerable_set_suite!(difference, |elements: &[u8]| {
    let mut noisy = store(elements);
    noisy.extend([200, 201]);
    noisy.difference(&hash_set![200u8, 201])
});

enumerable_set_suite!(symmetric_difference, |elements: &[u8]| {
    let mut noisy = store(elements);
    noisy.extend([250]);
    noisy.symmetric_difference(&hash_set![250u8])
});

// Nested: a union whose second operand is itself an intersection
enumerable_set_suite!(nested, |elements: &[u8]| {
    let (front, back) = elements.split_at(elements.len() / 2);
    let mut back_with_noise = store(back);
    back_with_noise.extend([240]);
    store(front).union(&back_with_noise.difference(&hash_set![240u8]))
});

// Evaluated views behave like ordinary stores
mutable_set_suite!(evaluated, |elements: &[u8]| {
    store(elements).union(&store(elements)).evaluate()
});
