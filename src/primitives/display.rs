//! `{a, b, c}` rendering for enumerable sets.

use core::fmt;
use core::ops::ControlFlow;

use crate::capability::Enumerable;

/// Write the distinct elements of `set` as `{e1, e2, ...}`.
///
/// Element order follows the set's stream and is not stable.
pub fn fmt_distinct<T, S>(set: &S, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    T: fmt::Display,
    S: Enumerable<T> + ?Sized,
{
    f.write_str("{")?;

    let mut first = true;
    let mut result = Ok(());
    let _ = set.for_each_distinct(&mut |element| {
        let separator = if first { "" } else { ", " };
        first = false;
        result = write!(f, "{separator}{element}");
        if result.is_err() {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    result?;

    f.write_str("}")
}

/// Implement `Display` for an enumerable node via [`fmt_distinct`].
macro_rules! impl_display_distinct {
    ($($node:ident $(<$lifetime:lifetime>)?),* $(,)?) => {$(
        impl<$($lifetime,)? T: core::fmt::Display> core::fmt::Display for $node<$($lifetime,)? T>
        where
            $node<$($lifetime,)? T>: $crate::capability::Enumerable<T>,
        {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                $crate::primitives::display::fmt_distinct::<T, Self>(self, f)
            }
        }
    )*};
}

pub(crate) use impl_display_distinct;
