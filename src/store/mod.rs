//! # Layer 1: Stores
//!
//! Leaf sets that own their elements. Stores are the only mutable state in
//! the crate; every view reads them through shared handles.

pub mod hash_set;

pub use hash_set::HashSet;
