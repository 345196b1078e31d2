//! Async extensions for catch-rail.
//!
//! An async body raises exactly like a sync one (`must(..).handle(..)?`); its
//! recovery routine is installed by wrapping the future with
//! [`FutureCatchExt::catch`]. The signal travels by return value, so it stays
//! within the task that raised it.
//!
//! # Feature Flag
//!
//! Requires the `async` feature to be enabled:
//!
//! ```toml
//! [dependencies]
//! catch-rail = { version = "0.1", features = ["async"] }
//! ```

mod catch_future;
mod future_ext;

pub use catch_future::CatchFuture;
pub use future_ext::FutureCatchExt;
