//! Core traits.
//!
//! - [`Handler`]: one step of error transformation
//! - [`HandlerChain`]: an ordered sequence of handlers with short-circuit evaluation
//! - [`MustExt`]: turns any `Result` into a raiser

pub mod handler;
pub mod must_ext;

pub use handler::{resolve, Handler, HandlerChain};
pub use must_ext::MustExt;
