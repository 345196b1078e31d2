//! Async prelude - the sync [`prelude`](crate::prelude) plus async items.
//!
//! # What's Included
//!
//! - Everything from [`prelude`](crate::prelude)
//! - **Traits**: [`FutureCatchExt`](crate::async_ext::FutureCatchExt) - `.catch()` for futures
//! - **Types**: [`CatchFuture`](crate::async_ext::CatchFuture)

pub use crate::prelude::*;

pub use crate::async_ext::{CatchFuture, FutureCatchExt};
