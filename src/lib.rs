#![cfg_attr(not(feature = "std"), no_std)]

// Feature flags handled:
// - std: default, builds against std (otherwise no_std + alloc)
// - macros: default, re-exports `set_expr!`

//! # tola-sets
//!
//! Lazily evaluated set algebra over shared stores and predicates.
//!
//! **Set expressions are live views, not copies.**
//!
//! ## Architecture
//!
//! `tola-sets` lets you build expression trees of set operations. Every node
//! holds shared handles to its operands; queries walk the tree on demand, so
//! mutating a store is visible through every view built on it.
//!
//! ### 1. Capabilities
//! Each set declares what it can do:
//!
//! ```text
//! Container  (contains)
//!     ^
//! Enumerable (+ for_each_distinct, size)
//!     ^
//! Mutable    (+ add, remove)
//! ```
//!
//! The capability of a result is fixed by its operands: unions of enumerable
//! sets stay enumerable, an intersection only needs one enumerable driver, and
//! a complement is always a bare container.
//!
//! ### 2. Streaming
//! Enumeration is push-based. The visitor returns `ControlFlow::Break(())` to
//! stop, and the break unwinds through every nested view at once.
//!
//! ### 3. Materialization
//! `evaluate()` streams a view into a brand-new store with no link back to the
//! expression.
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Capabilities & Primitives                               |
//! |  - Container, Enumerable, Mutable, streaming helpers              |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Sets                                                    |
//! |  - HashSet (store), ImplicitSet, Complement, Union, Intersection  |
//! |  - EnumerableOps, ImplicitOps (combinators)                       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Materialization                                         |
//! |  - evaluate                                                       |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 3: Syntax                                                  |
//! |  - hash_set!, set_expr!                                           |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use tola_sets::prelude::*;
//!
//! let a = hash_set![1, 2, 3];
//! let b = hash_set![3, 4, 5];
//!
//! assert_eq!(a.union(&b).size(), 5);
//! assert_eq!(a.intersect(&b).size(), 1);
//! assert!(!a.complement().contains(&1));
//! assert!(a.complement().contains(&99));
//!
//! // Infinite filters are fine on the right of `intersect`
//! let even = ImplicitSet::new(|n: &i32| n % 2 == 0);
//! let even_members = a.union(&b).intersect(&even);
//! assert_eq!(even_members.size(), 2);
//!
//! // Views follow their stores
//! b.add(6);
//! assert_eq!(even_members.size(), 3);
//! ```
//!
//! ## Operator Syntax
//!
//! With the `macros` feature, `set_expr!` writes the same trees with
//! operators. `!` binds tightest, then `-`, `&`, `^` and `|`:
//!
//! ```
//! # #[cfg(feature = "macros")] {
//! use tola_sets::prelude::*;
//!
//! let a = hash_set![1, 2, 3];
//! let b = hash_set![2, 3];
//! let c = hash_set![3, 4];
//! let even = ImplicitSet::new(|n: &i32| n % 2 == 0);
//!
//! // a | (b & c)
//! assert!(set_expr!(a | b & c).equals(&hash_set![1, 2, 3]));
//! // (a - b) & c
//! assert_eq!(set_expr!(a - b & c).size(), 0);
//! assert!(set_expr!((a | c) - even).equals(&hash_set![1, 3]));
//! assert!(set_expr!(!even).contains(&5));
//! # }
//! ```

extern crate alloc;

// Allow `::tola_sets` to work inside the crate itself
extern crate self as tola_sets;

// Re-export paste for the conformance suite macros
#[doc(hidden)]
pub use paste;

// =============================================================================
// Layer 0: Capabilities & Primitives
// =============================================================================
pub mod capability;
pub mod primitives;

// =============================================================================
// Layer 1: Sets
// =============================================================================
pub mod implicit;
pub mod store;
pub mod view;

// =============================================================================
// Layer 2: Materialization
// =============================================================================
pub mod evaluate;

// =============================================================================
// Layer 3: Syntax
// =============================================================================
pub mod syntax_macros;

#[doc(hidden)]
pub mod testsuite;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use capability::{Container, Enumerable, Mutable, Visit};
pub use evaluate::evaluate;
pub use implicit::{Complement, ImplicitOps, ImplicitSet};
pub use store::HashSet;
pub use view::{EnumerableOps, Intersection, Union};

#[cfg(feature = "macros")]
pub use macros::set_expr;

/// Common items for building and querying set expressions.
pub mod prelude {
    pub use crate::capability::{Container, Enumerable, Mutable};
    pub use crate::implicit::{Complement, ImplicitOps, ImplicitSet};
    pub use crate::store::HashSet;
    pub use crate::view::{EnumerableOps, Intersection, Union};
    pub use crate::hash_set;
    #[cfg(feature = "macros")]
    pub use macros::set_expr;
}
