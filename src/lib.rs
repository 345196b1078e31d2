//! Early return with a transform, for functions made of many fallible steps.
//!
//! Each step goes through a raiser ([`must`] / [`must2`]) and an ordered chain
//! of handlers. The first step whose chain leaves an error unresolved returns
//! an [`Abort`], which `?` carries straight to the function's single recovery
//! routine ([`catch`]). That routine runs its own handler chain and hands the
//! final error back as an ordinary `Err`.
//!
//! Bodies raising with `?` should return [`RailResult`]. [`Abort`] is itself an
//! error, so a function returning `Result<_, BoxError>` without a recovery
//! routine also accepts `?` on a raiser, handing the caller the bare signal
//! and running no recovery chain.
//!
//! # Examples
//!
//! ## Wrapping each failure with its field
//!
//! ```
//! use catch_rail::{catch, must2, wrap, BoxError};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Ab {
//!     a: String,
//!     b: i32,
//! }
//!
//! fn parse_a(s: &str) -> Result<String, &'static str> {
//!     if (3..=10).contains(&s.len()) { Ok(s.to_string()) } else { Err("length must be in range 3-10") }
//! }
//!
//! fn parse_b(i: i32) -> Result<i32, &'static str> {
//!     if (5..100).contains(&i) { Ok(i) } else { Err("must be in range 5-100") }
//! }
//!
//! fn parse_ab(a: &str, b: i32) -> Result<Ab, BoxError> {
//!     catch((), || {
//!         Ok(Ab {
//!             a: must2(parse_a(a)).handle((wrap!("a: {err}"),))?,
//!             b: must2(parse_b(b)).handle((wrap!("b: {err}"),))?,
//!         })
//!     })
//! }
//!
//! assert_eq!(parse_ab("", 5).unwrap_err().to_string(), "a: length must be in range 3-10");
//! assert_eq!(parse_ab("good", 101).unwrap_err().to_string(), "b: must be in range 5-100");
//! assert_eq!(parse_ab("good", 10).unwrap(), Ab { a: "good".into(), b: 10 });
//! ```
//!
//! ## Collecting instead of stopping
//!
//! ```
//! use catch_rail::{catch, must, BoxError, Collector};
//!
//! let mut collector = Collector::new();
//! let result: Result<(), BoxError> = catch((), || {
//!     must(Err::<(), _>("first")).handle((collector.collect(),))?;
//!     must(Err::<(), _>("second")).handle((collector.collect(),))?;
//!     Ok(())
//! });
//!
//! assert!(result.is_ok());
//! assert_eq!(collector.err().unwrap().to_string(), "first\nsecond");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Recovery routines
pub mod catch;
/// Error chain inspection helpers
pub mod chain;
/// Built-in handlers
pub mod handlers;
/// Handler-building macros
pub mod macros;
/// Raisers
pub mod must;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Handler and raiser traits
pub mod traits;
/// Abort signal and error types
pub mod types;

/// Abort signals carried by unwinding (requires `std` feature)
#[cfg(feature = "std")]
pub mod unwind;

/// Async extensions (requires `async` feature)
#[cfg(feature = "async")]
pub mod async_ext;

/// Async prelude (requires `async` feature)
#[cfg(feature = "async")]
pub mod prelude_async;

mod trace;

pub use catch::{catch, catch_or_raise, catch_or_raise_with, catch_with, rescue, Catch};
pub use chain::{error_chain, find_cause, Chain};
pub use handlers::{handler, inspect, resolve_if, wrap_with, Collector};
pub use must::{must, must2, Must};
pub use traits::{resolve, Handler, HandlerChain, MustExt};
pub use types::{
    Abort, BoxError, ErrorReport, ErrorVec, Joined, RailResult, SharedError, Wrapped,
};

#[cfg(feature = "tracing")]
pub use handlers::log_error;

#[doc(hidden)]
pub mod __private {
    pub use alloc::format;
}
