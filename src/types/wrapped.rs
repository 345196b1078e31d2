use core::error::Error;
use core::fmt;

use crate::types::alloc_type::String;
use crate::types::BoxError;

/// Error produced by the [`wrap!`](crate::wrap) handler.
///
/// Displays only its formatted message; the incoming error is kept as the
/// [`source`](Error::source) so the original cause stays inspectable.
///
/// # Examples
///
/// ```
/// use catch_rail::Wrapped;
/// use std::error::Error;
///
/// let err = Wrapped::new("a: too short", "too short");
///
/// assert_eq!(err.to_string(), "a: too short");
/// assert_eq!(err.source().unwrap().to_string(), "too short");
/// ```
#[derive(Debug)]
pub struct Wrapped {
    message: String,
    source: BoxError,
}

impl Wrapped {
    /// Creates a wrapped error from a rendered message and its cause.
    #[inline]
    pub fn new<M, E>(message: M, source: E) -> Self
    where
        M: Into<String>,
        E: Into<BoxError>,
    {
        Self { message: message.into(), source: source.into() }
    }

    /// Returns the rendered message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the wrapper, returning the cause.
    #[inline]
    pub fn into_source(self) -> BoxError {
        self.source
    }
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for Wrapped {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.source)
    }
}
