//! Extension trait turning any `Result` into a raiser.
//!
//! # Examples
//!
//! ```
//! use catch_rail::{catch, wrap, BoxError, MustExt};
//!
//! let total: Result<i32, BoxError> = catch((), || {
//!     let a = "4".parse::<i32>().must().check()?;
//!     let b = "x".parse::<i32>().must().handle((wrap!("b: {err}"),))?;
//!     Ok(a + b)
//! });
//!
//! assert_eq!(total.unwrap_err().to_string(), "b: invalid digit found in string");
//! ```

use crate::must::{must2, Must};
use crate::types::BoxError;

/// Adds [`must`](MustExt::must) to `Result`.
pub trait MustExt<T> {
    /// Equivalent to [`must2`](crate::must2)`(self)`.
    fn must(self) -> Must<T>;
}

impl<T, E> MustExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    #[inline]
    fn must(self) -> Must<T> {
        must2(self)
    }
}
