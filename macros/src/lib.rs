//! Procedural macros for the tola-sets set algebra
//!
//! ## Operators
//!
//! | Syntax | Expansion | Binds |
//! |--------|-----------|-------|
//! | `a \| b` | `a.union(&b)` | loosest |
//! | `a ^ b` | `a.symmetric_difference(&b)` | |
//! | `a & b` | `a.intersect(&b)` | |
//! | `a - b` | `a.difference(&b)` | |
//! | `!a` | `a.complement()` | tightest |
//!
//! ## Example
//!
//! ```ignore
//! let a = hash_set![1, 2, 3];
//! let b = hash_set![3, 4, 5];
//! let even = ImplicitSet::new(|n: &i32| n % 2 == 0);
//!
//! // a.union(&b.intersect(&even.complement()))
//! let view = set_expr!(a | b & !even);
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

mod common;

use common::{expand_set_expr, SetExpr};

/// Build a lazy set view with operator syntax.
///
/// Operands are borrowed, never moved, and may be paths (`a`,
/// `self.birds`, `zoo::mammals()`), `{ block }` expressions, or
/// parenthesized sub-expressions. Precedence follows Rust's bit operators:
/// `!` binds tightest, then `-`, `&`, `^` and finally `|`.
///
/// # Example
///
/// ```ignore
/// use tola_sets::prelude::*;
///
/// let a = hash_set![1, 2, 3];
/// let b = hash_set![2, 3, 4];
///
/// assert!(set_expr!(a ^ b).equals(&hash_set![1, 4]));
/// assert!(set_expr!(a - b).equals(&hash_set![1]));
/// assert!(set_expr!((a | b) & !{ hash_set![4] }).equals(&hash_set![1, 2, 3]));
/// ```
///
/// The usual capability rules still hold: `set_expr!(a | !b)` does not
/// compile, because a complement cannot be enumerated.
#[proc_macro]
pub fn set_expr(input: TokenStream) -> TokenStream {
    let expr = parse_macro_input!(input as SetExpr);
    expand_set_expr(&expr).into()
}
