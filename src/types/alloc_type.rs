//! Allocation types used across the crate.
//!
//! The crate always links `alloc`, so these resolve to the same items with or
//! without the `std` feature.

pub use alloc::boxed::Box;
pub use alloc::string::{String, ToString};
pub use alloc::sync::Arc;
pub use alloc::vec::Vec;
