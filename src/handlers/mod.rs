//! Built-in handlers.
//!
//! | Handler | Effect |
//! |---------|--------|
//! | [`wrap!`](crate::wrap) / [`wrap_with`] | Replace the error with a formatted [`Wrapped`] error whose source is the incoming one |
//! | [`Collector::collect`] | Record the error and resolve it |
//! | [`resolve_if`] | Resolve errors matching a predicate, pass the rest |
//! | [`inspect`] | Run a side effect, pass the error through |
//! | [`log_error`] | Log at `error` level, pass the error through (`tracing` feature) |
//! | [`handler`] | Pin a closure to the handler signature |

use crate::types::alloc_type::{Box, String};
use crate::types::{BoxError, Wrapped};

mod collector;

pub use collector::Collector;

/// Returns `f` unchanged, fixing its signature to `FnMut(BoxError) -> Option<BoxError>`.
///
/// Closures placed directly in a tuple chain have no expected signature to be
/// inferred from; wrapping them in `handler` provides one.
///
/// # Examples
///
/// ```
/// use catch_rail::{handler, must};
///
/// let resolved = must(Err::<(), _>("ignored")).handle((handler(|_| None),));
/// assert!(resolved.is_ok());
/// ```
#[inline]
pub fn handler<F>(f: F) -> F
where
    F: FnMut(BoxError) -> Option<BoxError>,
{
    f
}

/// Builds a handler replacing the error with a [`Wrapped`] error.
///
/// `format` renders the new message from the incoming error, which becomes the
/// wrapped error's source. [`wrap!`](crate::wrap) builds the same handler from a
/// format string.
///
/// # Examples
///
/// ```
/// use catch_rail::{must, wrap_with};
///
/// let abort = must(Err::<(), _>("timed out"))
///     .handle((wrap_with(|err| format!("fetch failed ({err})")),))
///     .unwrap_err();
/// assert_eq!(abort.to_string(), "fetch failed (timed out)");
/// ```
pub fn wrap_with<F>(mut format: F) -> impl FnMut(BoxError) -> Option<BoxError>
where
    F: FnMut(&BoxError) -> String,
{
    move |error: BoxError| -> Option<BoxError> {
        let message = format(&error);
        let wrapped: BoxError = Box::new(Wrapped::new(message, error));
        Some(wrapped)
    }
}

/// Builds a handler that resolves every error for which `predicate` holds.
///
/// Use it for conditions that turn out not to be fatal; other errors keep
/// propagating.
///
/// # Examples
///
/// ```
/// use catch_rail::{catch, must, resolve_if, BoxError};
///
/// let result: Result<u32, BoxError> = catch((), || {
///     must(Err::<(), _>("cache miss"))
///         .handle((resolve_if(|e| e.to_string() == "cache miss"),))?;
///     Ok(7)
/// });
/// assert_eq!(result.unwrap(), 7);
/// ```
pub fn resolve_if<P>(mut predicate: P) -> impl FnMut(BoxError) -> Option<BoxError>
where
    P: FnMut(&BoxError) -> bool,
{
    move |error: BoxError| -> Option<BoxError> {
        if predicate(&error) {
            None
        } else {
            Some(error)
        }
    }
}

/// Builds a handler that calls `f` with the error and passes it on unchanged.
pub fn inspect<F>(mut f: F) -> impl FnMut(BoxError) -> Option<BoxError>
where
    F: FnMut(&BoxError),
{
    move |error: BoxError| -> Option<BoxError> {
        f(&error);
        Some(error)
    }
}

/// Builds a handler logging the error with `tracing::error!` and passing it on.
///
/// Typically the first handler of a top-level recovery routine, followed by
/// whatever terminates the program.
#[cfg(feature = "tracing")]
pub fn log_error() -> impl FnMut(BoxError) -> Option<BoxError> {
    |error: BoxError| -> Option<BoxError> {
        tracing::error!(error = %error, "unresolved error reached recovery routine");
        Some(error)
    }
}
