//! Macros for building handlers.
//!
//! - [`macro@crate::wrap`] - Builds a handler that formats a new message around the
//!   incoming error, keeping the incoming error as the source.
//!
//! # Examples
//!
//! ```
//! use catch_rail::{catch, must2, wrap, BoxError};
//!
//! fn parse_b(i: i32) -> Result<i32, &'static str> {
//!     if (5..100).contains(&i) { Ok(i) } else { Err("must be in range 5-100") }
//! }
//!
//! let id = "test";
//! let result: Result<i32, BoxError> = catch((), || {
//!     Ok(must2(parse_b(101)).handle((wrap!("{0}: {err} (id:{1})", "b", id),))?)
//! });
//!
//! assert_eq!(result.unwrap_err().to_string(), "b: must be in range 5-100 (id:test)");
//! ```

/// Builds a handler wrapping the incoming error in a formatted message.
///
/// The format string follows [`format!`] rules. It must reference the incoming
/// error exactly through the named argument `{err}`; the remaining arguments
/// are positional. Each of them is evaluated once, when the handler is built,
/// and moved into the handler; pass a reference (`&name`) to keep using a
/// local afterwards. The produced [`Wrapped`](crate::Wrapped) error displays
/// the rendered message and keeps the incoming error as its source.
///
/// # Syntax
///
/// - `wrap!("context: {err}")`
/// - `wrap!("{}: {err}", field)`
/// - `wrap!("{0}: {err} (id:{1})", field, id)`
///
/// # Examples
///
/// ```
/// use catch_rail::{must, wrap};
/// use std::error::Error;
///
/// let field = String::from("a");
/// let abort = must(Err::<(), _>("length must be in range 3-10"))
///     .handle((wrap!("{}: {err}", &field),))
///     .unwrap_err();
///
/// assert_eq!(abort.to_string(), "a: length must be in range 3-10");
/// assert_eq!(abort.error().source().unwrap().to_string(), "length must be in range 3-10");
/// assert_eq!(field, "a");
/// ```
#[macro_export]
macro_rules! wrap {
    (@bind $fmt:literal; [$($name:ident = $value:expr,)*];) => {{
        $(let $name = $value;)*
        $crate::handlers::wrap_with(move |err: &$crate::BoxError| {
            $crate::__private::format!($fmt $(, $name)*, err = err)
        })
    }};
    (@bind $fmt:literal; [$($bound:tt)*]; $head:expr, $($tail:expr,)*) => {
        // every expansion step mints a distinct `arg` binding
        $crate::wrap!(@bind $fmt; [$($bound)* arg = $head,]; $($tail,)*)
    };
    ($fmt:literal $(, $arg:expr)* $(,)?) => {
        $crate::wrap!(@bind $fmt; []; $($arg,)*)
    };
}
