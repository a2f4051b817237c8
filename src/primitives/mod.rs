//! # Layer 0: Primitives
//!
//! Shared helpers over the streaming protocol:
//! - `stream.rs`: counting and universal checks.
//! - `display.rs`: `{a, b, c}` rendering.

pub mod display;
pub mod stream;

pub use display::fmt_distinct;
pub use stream::{all_distinct, count_distinct, is_contained_in};
