//! Error inspection helpers that see through wrappers, abort signals and joined errors.
//!
//! - [`error_chain`] iterates an error followed by each [`source`](Error::source).
//! - [`find_cause`] returns the first link that downcasts to a requested type,
//!   descending into [`Joined`] members along the way.
//!
//! # Examples
//!
//! ```
//! use catch_rail::{error_chain, find_cause, Wrapped};
//! use std::fmt;
//!
//! #[derive(Debug)]
//! struct TooShort;
//!
//! impl fmt::Display for TooShort {
//!     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
//!         f.write_str("too short")
//!     }
//! }
//!
//! impl std::error::Error for TooShort {}
//!
//! let err = Wrapped::new("name: too short", TooShort);
//!
//! let messages: Vec<String> = error_chain(&err).map(|e| e.to_string()).collect();
//! assert_eq!(messages, ["name: too short", "too short"]);
//! assert!(find_cause::<TooShort>(&err).is_some());
//! ```

use core::error::Error;
use core::iter::FusedIterator;

use crate::types::Joined;

/// Iterator over an error and its sources, outermost first.
///
/// Created by [`error_chain`].
#[derive(Clone)]
pub struct Chain<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

impl FusedIterator for Chain<'_> {}

/// Iterates `error` followed by each of its sources.
#[inline]
pub fn error_chain<'a>(error: &'a (dyn Error + 'static)) -> Chain<'a> {
    Chain { next: Some(error) }
}

/// Returns the first error of type `T` in the chain of `error`.
///
/// [`Joined`] links have no single source; each of their members is searched
/// in insertion order instead.
pub fn find_cause<'a, T>(error: &'a (dyn Error + 'static)) -> Option<&'a T>
where
    T: Error + 'static,
{
    for link in error_chain(error) {
        if let Some(found) = link.downcast_ref::<T>() {
            return Some(found);
        }
        if let Some(found) = link.downcast_ref::<Joined>().and_then(Joined::find::<T>) {
            return Some(found);
        }
    }
    None
}
