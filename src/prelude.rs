//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use catch_rail::prelude::*;
//!
//! fn parse_level(s: &str) -> Result<u8, BoxError> {
//!     catch((), || {
//!         let level = s.parse::<u8>().must().handle((wrap!("level: {err}"),))?;
//!         Ok(level)
//!     })
//! }
//!
//! assert_eq!(parse_level("3").unwrap(), 3);
//! assert!(parse_level("high").is_err());
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`wrap!`]
//! - **Functions**: [`must`], [`must2`], [`catch`], [`catch_or_raise`], [`rescue`], [`handler`], [`resolve_if`]
//! - **Types**: [`Abort`], [`BoxError`], [`Catch`], [`Collector`], [`Must`]
//! - **Traits**: [`HandlerChain`], [`MustExt`]

// Macros
pub use crate::wrap;

// Raise and recover
pub use crate::catch::{catch, catch_or_raise, rescue, Catch};
pub use crate::must::{must, must2, Must};

// Handlers
pub use crate::handlers::{handler, resolve_if, Collector};

// Types and traits
pub use crate::traits::{HandlerChain, MustExt};
pub use crate::types::{Abort, BoxError};
