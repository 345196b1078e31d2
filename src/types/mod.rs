//! Error types and aliases.
//!
//! This module provides the values that travel between raisers, handlers and
//! recovery routines:
//!
//! - [`Abort`]: the signal a raiser returns when its handler chain leaves an error unresolved
//! - [`Wrapped`]: the error produced by the [`wrap!`](crate::wrap) handler
//! - [`Joined`]: the aggregate returned by [`Collector::err`](crate::Collector::err)
//! - [`ErrorReport`]: a flattened snapshot of an error chain for structured logs
//!
//! # Examples
//!
//! ```
//! use catch_rail::{catch, must, wrap, BoxError};
//!
//! fn connect() -> Result<(), &'static str> {
//!     Err("connection refused")
//! }
//!
//! let result: Result<(), BoxError> = catch((), || {
//!     must(connect()).handle((wrap!("database: {err}"),))?;
//!     Ok(())
//! });
//!
//! assert_eq!(result.unwrap_err().to_string(), "database: connection refused");
//! ```
use core::error::Error;

use smallvec::SmallVec;

use crate::types::alloc_type::{Arc, Box};

pub mod abort;
pub mod alloc_type;
pub mod error_report;
pub mod joined;
pub mod wrapped;

pub use abort::Abort;
pub use error_report::ErrorReport;
pub use joined::{Joined, JoinedDisplay};
pub use wrapped::Wrapped;

/// Type-erased error flowing through handler chains.
pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// Reference-counted error, used where the same error must be reachable from
/// several owners (collector snapshots).
pub type SharedError = Arc<dyn Error + Send + Sync + 'static>;

/// SmallVec-backed collection used for accumulating errors.
///
/// Uses inline storage for up to 2 elements, which covers the common case of a
/// handful of failed fields without touching the heap.
pub type ErrorVec<E> = SmallVec<[E; 2]>;

/// Result of a guarded body: either a value or an abort signal on its way to
/// the enclosing recovery routine.
pub type RailResult<T> = Result<T, Abort>;
