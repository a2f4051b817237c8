//! Construction Macros
//!
//! Shorthand for building leaf sets. Operator syntax over existing sets is
//! provided by the `set_expr!` proc-macro.

/// Build a [`HashSet`](crate::HashSet) from a list of elements.
///
/// Duplicates are dropped.
///
/// # Example
///
/// ```
/// use tola_sets::prelude::*;
///
/// let set = hash_set![1, 2, 2, 3];
/// assert_eq!(set.size(), 3);
///
/// let empty: HashSet<u8> = hash_set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! hash_set {
    () => {
        $crate::HashSet::new()
    };
    ($($element:expr),+ $(,)?) => {
        $crate::HashSet::from([$($element),+])
    };
}
