use core::error::Error;
use core::fmt;

use crate::types::BoxError;

/// Signal carrying an unresolved error from a raiser to the nearest recovery routine.
///
/// An `Abort` is only created by [`Must::handle`](crate::Must::handle) after its
/// handler chain failed to resolve the error, or by a slot-less
/// [`Catch`](crate::Catch) re-raising a still unresolved error. Callers cannot
/// build one, so every `Abort` a body returns came from a raiser.
///
/// The wrapped error stays reachable through [`Error::source`], so chain
/// walking ([`error_chain`](crate::error_chain)) and downcasting
/// ([`find_cause`](crate::find_cause)) work across the tunnel.
///
/// # Bypassing the recovery routine
///
/// `Abort` implements [`Error`] + `Send` + `Sync`, so `?` also converts it into
/// a [`BoxError`] (or any error with a matching `From` impl). In a function
/// returning `Result<_, BoxError>` directly, `must(..).check()?` therefore
/// skips the recovery routine entirely: no claiming chain runs and the
/// returned error is the `Abort` itself. Guard such bodies with
/// [`catch`](crate::catch) or [`rescue`](crate::rescue) so the signal is
/// claimed; [`RailResult`](crate::RailResult) as the body's return type keeps
/// the conversion from happening silently.
///
/// ```
/// use catch_rail::{must, rescue, Abort, BoxError};
///
/// fn unguarded() -> Result<(), BoxError> {
///     must(Err::<(), _>("boom")).check()?;
///     Ok(())
/// }
///
/// fn guarded() -> Result<(), BoxError> {
///     rescue(|| {
///         must(Err::<(), _>("boom")).check()?;
///         Ok(())
///     })
/// }
///
/// assert!(unguarded().unwrap_err().downcast_ref::<Abort>().is_some());
/// assert!(guarded().unwrap_err().downcast_ref::<Abort>().is_none());
/// ```
///
/// # Examples
///
/// ```
/// use catch_rail::{must, Abort};
/// use std::error::Error;
///
/// let abort: Abort = must(Err::<(), _>("disk full")).check().unwrap_err();
///
/// assert_eq!(abort.to_string(), "disk full");
/// assert_eq!(abort.source().unwrap().to_string(), "disk full");
/// ```
#[must_use = "an abort signal must reach a recovery routine"]
pub struct Abort {
    error: BoxError,
}

impl Abort {
    #[inline]
    pub(crate) fn new(error: BoxError) -> Self {
        Self { error }
    }

    /// Returns the error carried by this signal.
    #[inline]
    pub fn error(&self) -> &(dyn Error + Send + Sync + 'static) {
        &*self.error
    }

    #[inline]
    pub(crate) fn into_error(self) -> BoxError {
        self.error
    }
}

impl fmt::Debug for Abort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Abort").field(&self.error).finish()
    }
}

impl fmt::Display for Abort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.error, f)
    }
}

impl Error for Abort {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.error)
    }
}
