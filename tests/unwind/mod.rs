//! Integration tests for the unwinding tunnel.

#[cfg(feature = "std")]
mod unwind_tests;
