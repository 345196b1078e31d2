//! Raisers: the entry point of the short-circuit for one fallible step.
//!
//! [`must`] takes a `Result<(), E>`, [`must2`] a `Result<T, E>` whose value is
//! threaded through. Both return a [`Must`] that does nothing until
//! [`handle`](Must::handle) (or [`check`](Must::check) for an empty chain) is
//! called:
//!
//! - no error: the value is returned and the chain is never invoked;
//! - error resolved by the chain: the carried value, or a fallback, is returned;
//! - error left unresolved: an [`Abort`] is returned, which `?` hands straight to
//!   the enclosing recovery routine.
//!
//! # Examples
//!
//! ```
//! use catch_rail::{catch, must2, wrap, BoxError};
//!
//! fn parse_port(s: &str) -> Result<u16, std::num::ParseIntError> {
//!     s.parse()
//! }
//!
//! fn load(host: &str, port: &str) -> Result<(String, u16), BoxError> {
//!     catch((), || {
//!         let port = must2(parse_port(port)).handle((wrap!("port: {err}"),))?;
//!         Ok((host.to_string(), port))
//!     })
//! }
//!
//! assert_eq!(load("db", "5432").unwrap(), ("db".to_string(), 5432));
//! assert_eq!(
//!     load("db", "x").unwrap_err().to_string(),
//!     "port: invalid digit found in string"
//! );
//! ```

use crate::traits::HandlerChain;
use crate::types::{Abort, BoxError};

/// A pending fallible step, created by [`must`], [`must2`] or [`Must::new`].
#[must_use = "a raiser does nothing until `handle` or `check` is called"]
#[derive(Debug)]
pub struct Must<T> {
    step: Step<T>,
}

#[derive(Debug)]
enum Step<T> {
    Done(T),
    Failed { value: Option<T>, error: BoxError },
}

impl<T> Must<T> {
    /// Creates a raiser from a value and an optional error.
    ///
    /// The value is returned when `error` is `None` and when the handler chain
    /// resolves the error.
    #[inline]
    pub fn new<E>(value: T, error: Option<E>) -> Self
    where
        E: Into<BoxError>,
    {
        let step = match error {
            None => Step::Done(value),
            Some(error) => Step::Failed { value: Some(value), error: error.into() },
        };
        Self { step }
    }

    /// Returns `true` if invoking this raiser may raise.
    #[inline]
    pub fn is_err(&self) -> bool {
        matches!(self.step, Step::Failed { .. })
    }

    /// Runs `chain` on the error, if any.
    ///
    /// Returns the value when there is no error. When the chain resolves the
    /// error, returns the value given to [`Must::new`], or `T::default()` for a
    /// raiser built from an `Err`. Otherwise returns an [`Abort`] wrapping the
    /// chain's final error.
    #[inline]
    pub fn handle<C>(self, chain: C) -> Result<T, Abort>
    where
        T: Default,
        C: HandlerChain,
    {
        self.handle_or_else(T::default, chain)
    }

    /// Like [`handle`](Must::handle), returning `value` when the chain resolves
    /// an error that carried no value.
    #[inline]
    pub fn handle_or<C>(self, value: T, chain: C) -> Result<T, Abort>
    where
        C: HandlerChain,
    {
        self.handle_or_else(move || value, chain)
    }

    /// Like [`handle`](Must::handle), computing the value with `fallback` when
    /// the chain resolves an error that carried no value.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use catch_rail::{handler, must2};
    ///
    /// let ports = HashMap::from([("db", 5432)]);
    /// let fallback = 80;
    /// let port = must2(ports.get("web").ok_or("no port"))
    ///     .handle_or_else(|| &fallback, (handler(|_| None),))
    ///     .unwrap();
    /// assert_eq!(*port, 80);
    /// ```
    pub fn handle_or_else<C, F>(self, fallback: F, chain: C) -> Result<T, Abort>
    where
        C: HandlerChain,
        F: FnOnce() -> T,
    {
        let (value, error) = match self.step {
            Step::Done(value) => return Ok(value),
            Step::Failed { value, error } => (value, error),
        };

        match chain.resolve(error) {
            None => Ok(value.unwrap_or_else(fallback)),
            Some(error) => Err(raise(error)),
        }
    }

    /// Runs the raiser with an empty chain.
    ///
    /// An empty chain never resolves, so no fallback value is needed and `T`
    /// may be any type.
    #[inline]
    pub fn check(self) -> Result<T, Abort> {
        match self.step {
            Step::Done(value) => Ok(value),
            Step::Failed { error, .. } => Err(raise(error)),
        }
    }
}

fn raise(error: BoxError) -> Abort {
    crate::trace::raised(&*error);
    Abort::new(error)
}

/// Creates a raiser for a step that produces no value.
///
/// # Examples
///
/// ```
/// use catch_rail::{catch, must, BoxError};
///
/// let mut last = 0;
/// let result: Result<(), BoxError> = catch((), || {
///     for i in 0..5 {
///         last = i;
///         must(if i >= 3 { Err(format!("number {i} not ok")) } else { Ok(()) }).check()?;
///     }
///     Ok(())
/// });
///
/// assert_eq!(result.unwrap_err().to_string(), "number 3 not ok");
/// assert_eq!(last, 3);
/// ```
#[inline]
pub fn must<E>(result: Result<(), E>) -> Must<()>
where
    E: Into<BoxError>,
{
    Must::new((), result.err())
}

/// Creates a raiser for a step that produces a value.
///
/// An `Err` carries no value. If a handler resolves it, the step yields
/// `T::default()` through [`handle`](Must::handle), or the fallback given to
/// [`handle_or`](Must::handle_or) / [`handle_or_else`](Must::handle_or_else).
///
/// # Examples
///
/// ```
/// use std::fs::File;
/// use catch_rail::{must2, rescue, BoxError};
///
/// let opened: Result<File, BoxError> =
///     rescue(|| Ok(must2(File::open("/nonexistent/config.toml")).check()?));
/// assert!(opened.is_err());
/// ```
#[inline]
pub fn must2<T, E>(result: Result<T, E>) -> Must<T>
where
    E: Into<BoxError>,
{
    let step = match result {
        Ok(value) => Step::Done(value),
        Err(error) => Step::Failed { value: None, error: error.into() },
    };
    Must { step }
}
