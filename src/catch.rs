//! Recovery routines: where abort signals turn back into ordinary errors.
//!
//! A recovery routine guards a body returning `Result<T, Abort>`. When the body
//! finishes it runs exactly once:
//!
//! 1. `Ok(value)`: nothing to do, the value flows out.
//! 2. `Err(abort)`: the carried error goes through the routine's own handler
//!    chain. If the chain resolves it, the signal is discarded. Otherwise the
//!    final error is written to the output slot, or, when there is no slot,
//!    re-raised as a new [`Abort`] for an enclosing routine.
//!
//! Panics are never intercepted; they unwind through the routine untouched.
//!
//! [`catch`] is the usual form, using the function's own `Err` as the output
//! slot. [`catch_or_raise`] has no slot. Both fill in `T::default()` when the
//! chain resolves a signal; the `_with` variants take a fallback instead, and
//! [`rescue`] runs no chain at all. [`Catch`] exposes the routine with an
//! explicit slot.
//!
//! # Examples
//!
//! ```
//! use catch_rail::{catch, catch_or_raise, must, wrap, Abort, BoxError};
//!
//! fn inner() -> Result<(), Abort> {
//!     catch_or_raise((wrap!("inner: {err}"),), || {
//!         must(Err::<(), _>("boom")).check()?;
//!         Ok(())
//!     })
//! }
//!
//! fn outer() -> Result<(), BoxError> {
//!     catch((wrap!("outer: {err}"),), || {
//!         inner()?;
//!         Ok(())
//!     })
//! }
//!
//! assert_eq!(outer().unwrap_err().to_string(), "outer: inner: boom");
//! ```

use crate::traits::HandlerChain;
use crate::types::{Abort, BoxError};

/// A recovery routine with an optional output slot and its own handler chain.
///
/// # Examples
///
/// ```
/// use catch_rail::{must, BoxError, Catch};
///
/// let mut slot: Option<BoxError> = None;
/// let value = Catch::new(&mut slot).run(|| {
///     must(Err::<(), _>("boom")).check()?;
///     Ok(1)
/// });
///
/// assert!(matches!(value, Ok(None)));
/// assert_eq!(slot.unwrap().to_string(), "boom");
/// ```
#[must_use = "a recovery routine does nothing until `run` or `recover` is called"]
pub struct Catch<'s, C = ()> {
    slot: Option<&'s mut Option<BoxError>>,
    chain: C,
}

impl<'s> Catch<'s> {
    /// Creates a recovery routine that stores unresolved errors in `slot`.
    #[inline]
    pub fn new(slot: &'s mut Option<BoxError>) -> Self {
        Self { slot: Some(slot), chain: () }
    }

    /// Creates a recovery routine without an output slot.
    ///
    /// Unresolved errors are re-raised as a new [`Abort`].
    #[inline]
    pub fn without_slot() -> Self {
        Self { slot: None, chain: () }
    }
}

impl<'s, C> Catch<'s, C>
where
    C: HandlerChain,
{
    /// Replaces the handler chain run on claimed signals.
    #[inline]
    pub fn handlers<D>(self, chain: D) -> Catch<'s, D>
    where
        D: HandlerChain,
    {
        Catch { slot: self.slot, chain }
    }

    /// Applies the routine to a finished body.
    ///
    /// Returns `Ok(Some(value))` on normal exit and `Ok(None)` when a signal
    /// was resolved or stored in the slot. Returns `Err` only when there is no
    /// slot and the chain left the error unresolved.
    pub fn recover<T>(self, outcome: Result<T, Abort>) -> Result<Option<T>, Abort> {
        let abort = match outcome {
            Ok(value) => return Ok(Some(value)),
            Err(abort) => abort,
        };

        crate::trace::claimed(abort.error());
        let Some(error) = self.chain.resolve(abort.into_error()) else {
            crate::trace::resolved();
            return Ok(None);
        };

        match self.slot {
            Some(slot) => {
                *slot = Some(error);
                Ok(None)
            },
            None => {
                crate::trace::reraised(&*error);
                Err(Abort::new(error))
            },
        }
    }

    /// Runs `body` and applies the routine to its outcome.
    #[inline]
    pub fn run<T, F>(self, body: F) -> Result<Option<T>, Abort>
    where
        F: FnOnce() -> Result<T, Abort>,
    {
        self.recover(body())
    }
}

/// Runs `body`, turning an abort signal into the function's own error.
///
/// On a resolved signal the result is `Ok(T::default())`, matching a body that
/// never got to produce its value. [`catch_with`] takes the fallback explicitly.
#[inline]
pub fn catch<T, C, F>(chain: C, body: F) -> Result<T, BoxError>
where
    T: Default,
    C: HandlerChain,
    F: FnOnce() -> Result<T, Abort>,
{
    catch_with(chain, T::default, body)
}

/// Like [`catch`], computing the value with `fallback` when `chain` resolves
/// the signal.
pub fn catch_with<T, C, D, F>(chain: C, fallback: D, body: F) -> Result<T, BoxError>
where
    C: HandlerChain,
    D: FnOnce() -> T,
    F: FnOnce() -> Result<T, Abort>,
{
    let mut slot = None;
    let outcome = Catch::new(&mut slot).handlers(chain).run(body);

    match outcome {
        Ok(Some(value)) => Ok(value),
        Ok(None) => slot.map_or_else(|| Ok(fallback()), Err),
        Err(abort) => Err(abort.into_error()),
    }
}

/// Runs `body` with an empty recovery chain: every abort signal becomes the
/// returned error.
///
/// Nothing can resolve the signal, so `T` may be any type.
///
/// # Examples
///
/// ```
/// use catch_rail::{must2, rescue, BoxError};
///
/// struct Conn(u16);
///
/// fn connect(port: &str) -> Result<Conn, BoxError> {
///     rescue(|| Ok(Conn(must2(port.parse::<u16>()).check()?)))
/// }
///
/// assert_eq!(connect("5432").unwrap().0, 5432);
/// assert!(connect("x").is_err());
/// ```
#[inline]
pub fn rescue<T, F>(body: F) -> Result<T, BoxError>
where
    F: FnOnce() -> Result<T, Abort>,
{
    body().map_err(|abort| {
        crate::trace::claimed(abort.error());
        abort.into_error()
    })
}

/// Runs `body` without an output slot: unresolved signals are re-raised.
///
/// Use this in functions that cannot absorb a failure themselves and return
/// `Result<T, Abort>` to their caller's recovery routine.
#[inline]
pub fn catch_or_raise<T, C, F>(chain: C, body: F) -> Result<T, Abort>
where
    T: Default,
    C: HandlerChain,
    F: FnOnce() -> Result<T, Abort>,
{
    catch_or_raise_with(chain, T::default, body)
}

/// Like [`catch_or_raise`], computing the value with `fallback` when `chain`
/// resolves the signal.
pub fn catch_or_raise_with<T, C, D, F>(chain: C, fallback: D, body: F) -> Result<T, Abort>
where
    C: HandlerChain,
    D: FnOnce() -> T,
    F: FnOnce() -> Result<T, Abort>,
{
    Catch::without_slot()
        .handlers(chain)
        .run(body)
        .map(|value| value.unwrap_or_else(fallback))
}
