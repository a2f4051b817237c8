//! # Layer 1: Implicit Sets
//!
//! Sets that can only answer membership queries:
//!
//! - **Leaf**: [`ImplicitSet`], defined by a predicate.
//! - **View**: [`Complement`], the negation of any container.
//! - **Operations**: [`ImplicitOps`], combining predicates with OR / AND /
//!   AND-NOT / XOR on every call.

pub mod complement;
pub mod ops;
pub mod predicate;

pub use complement::Complement;
pub use ops::ImplicitOps;
pub use predicate::ImplicitSet;
