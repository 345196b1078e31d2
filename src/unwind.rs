//! Abort signals carried by unwinding instead of by return value.
//!
//! For call stacks whose signatures cannot change to `Result<T, Abort>`,
//! [`Must::unwind`] raises the [`Abort`] with [`std::panic::resume_unwind`] and
//! [`Catch::run_unwind`] / [`catch`] claim it with [`std::panic::catch_unwind`].
//! The semantics match the return-value forms:
//!
//! - the raiser unwinds only when its chain leaves the error unresolved;
//! - the recovery routine claims only [`Abort`] payloads; any other panic is
//!   resumed with its original payload;
//! - without an output slot an unresolved error is raised again as a new signal.
//!
//! `resume_unwind` does not invoke the panic hook, so raising prints nothing.
//! This module requires `panic = "unwind"`; with `panic = "abort"` a raise
//! terminates the process.
//!
//! # Examples
//!
//! ```
//! use catch_rail::{must2, unwind, wrap};
//!
//! fn parse_a(s: &str) -> Result<String, &'static str> {
//!     if (3..=10).contains(&s.len()) { Ok(s.to_string()) } else { Err("length must be in range 3-10") }
//! }
//!
//! let result = unwind::catch((), || must2(parse_a("")).unwind((wrap!("a: {err}"),)));
//! assert_eq!(result.unwrap_err().to_string(), "a: length must be in range 3-10");
//! ```

use std::panic::{self, AssertUnwindSafe};

use crate::catch::Catch;
use crate::must::Must;
use crate::traits::HandlerChain;
use crate::types::alloc_type::Box;
use crate::types::{Abort, BoxError};

fn raise(abort: Abort) -> ! {
    panic::resume_unwind(Box::new(abort))
}

impl<T> Must<T> {
    /// Like [`handle`](Must::handle), but an unresolved error unwinds to the
    /// nearest [`Catch::run_unwind`] instead of being returned.
    #[inline]
    pub fn unwind<C>(self, chain: C) -> T
    where
        T: Default,
        C: HandlerChain,
    {
        self.unwind_or_else(T::default, chain)
    }

    /// Like [`handle_or_else`](Must::handle_or_else), unwinding on an
    /// unresolved error.
    pub fn unwind_or_else<C, F>(self, fallback: F, chain: C) -> T
    where
        C: HandlerChain,
        F: FnOnce() -> T,
    {
        match self.handle_or_else(fallback, chain) {
            Ok(value) => value,
            Err(abort) => raise(abort),
        }
    }

    /// Like [`check`](Must::check), unwinding on error. `T` may be any type.
    pub fn check_unwind(self) -> T {
        match self.check() {
            Ok(value) => value,
            Err(abort) => raise(abort),
        }
    }
}

impl<'s, C> Catch<'s, C>
where
    C: HandlerChain,
{
    /// Runs `body`, claiming abort signals that unwind out of it.
    ///
    /// Returns `Some(value)` on normal exit and `None` when a signal was
    /// resolved or stored in the slot. Without a slot, an unresolved signal
    /// keeps unwinding. Panics that are not abort signals are resumed
    /// unchanged.
    pub fn run_unwind<T, F>(self, body: F) -> Option<T>
    where
        F: FnOnce() -> T,
    {
        let payload = match panic::catch_unwind(AssertUnwindSafe(body)) {
            Ok(value) => return Some(value),
            Err(payload) => payload,
        };

        match payload.downcast::<Abort>() {
            Ok(abort) => match self.recover::<T>(Err(*abort)) {
                Ok(value) => value,
                Err(abort) => raise(abort),
            },
            Err(payload) => panic::resume_unwind(payload),
        }
    }
}

/// Runs `body`, turning an unwinding abort signal into the returned error.
///
/// On a resolved signal the result is `Ok(T::default())`.
#[inline]
pub fn catch<T, C, F>(chain: C, body: F) -> Result<T, BoxError>
where
    T: Default,
    C: HandlerChain,
    F: FnOnce() -> T,
{
    catch_with(chain, T::default, body)
}

/// Like [`catch`], computing the value with `fallback` when `chain` resolves
/// the signal.
pub fn catch_with<T, C, D, F>(chain: C, fallback: D, body: F) -> Result<T, BoxError>
where
    C: HandlerChain,
    D: FnOnce() -> T,
    F: FnOnce() -> T,
{
    let mut slot = None;
    let outcome = Catch::new(&mut slot).handlers(chain).run_unwind(body);

    match (outcome, slot) {
        (Some(value), _) => Ok(value),
        (None, Some(error)) => Err(error),
        (None, None) => Ok(fallback()),
    }
}

/// Runs `body` without an output slot: unresolved signals keep unwinding.
#[inline]
pub fn catch_or_raise<T, C, F>(chain: C, body: F) -> T
where
    T: Default,
    C: HandlerChain,
    F: FnOnce() -> T,
{
    Catch::without_slot().handlers(chain).run_unwind(body).unwrap_or_default()
}
