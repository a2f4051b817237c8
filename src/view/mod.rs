//! # Layer 1: Enumerable Views
//!
//! Composite sets that can still be streamed:
//!
//! - **Views**: [`Union`] (deduplicating, left to right) and [`Intersection`]
//!   (one enumerable driver, any number of container filters).
//! - **Operations**: [`EnumerableOps`], building views plus materialization
//!   and comparison.
//!
//! Difference and symmetric difference are expressed with these two nodes
//! and [`Complement`](crate::implicit::Complement).

pub mod intersection;
pub mod ops;
pub mod union;

pub use intersection::Intersection;
pub use ops::EnumerableOps;
pub use union::Union;
