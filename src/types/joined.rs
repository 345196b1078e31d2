use core::error::Error;
use core::fmt;

use crate::types::{ErrorVec, SharedError};

/// A single error standing for one or more accumulated errors.
///
/// Produced by [`Collector::err`](crate::Collector::err). Every member keeps its
/// identity: the same `Arc` the collector holds is shared with each snapshot.
///
/// `Display` renders the members in insertion order separated by newlines; use
/// [`display_with`](Joined::display_with) for another separator.
///
/// # Examples
///
/// ```
/// use catch_rail::{catch, must, BoxError, Collector};
///
/// let mut collector = Collector::new();
/// let _: Result<(), BoxError> = catch((), || {
///     must(Err::<(), _>("first")).handle((collector.collect(),))?;
///     must(Err::<(), _>("second")).handle((collector.collect(),))?;
///     Ok(())
/// });
///
/// let joined = collector.err().unwrap();
/// assert_eq!(joined.len(), 2);
/// assert_eq!(joined.to_string(), "first\nsecond");
/// assert_eq!(joined.display_with("; ").to_string(), "first; second");
/// ```
#[derive(Clone)]
pub struct Joined {
    errors: ErrorVec<SharedError>,
}

impl Joined {
    #[inline]
    pub(crate) fn new(errors: ErrorVec<SharedError>) -> Self {
        Self { errors }
    }

    /// Returns the number of joined errors. Never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Always `false`; an empty collection is reported as no error at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the joined errors in insertion order.
    #[inline]
    pub fn errors(&self) -> &[SharedError] {
        &self.errors
    }

    /// Iterates the joined errors in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &(dyn Error + Send + Sync + 'static)> {
        self.errors.iter().map(|error| &**error)
    }

    /// Returns the first error of type `T` found in any member's source chain.
    pub fn find<T>(&self) -> Option<&T>
    where
        T: Error + 'static,
    {
        self.errors.iter().find_map(|error| crate::chain::find_cause::<T>(&**error))
    }

    /// Formats the members with a custom separator.
    #[inline]
    pub fn display_with<'a>(&'a self, separator: &'a str) -> JoinedDisplay<'a> {
        JoinedDisplay { joined: self, separator }
    }
}

/// Display adapter returned by [`Joined::display_with`].
pub struct JoinedDisplay<'a> {
    joined: &'a Joined,
    separator: &'a str,
}

impl fmt::Display for JoinedDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.joined.errors.iter().enumerate() {
            if i > 0 {
                f.write_str(self.separator)?;
            }
            fmt::Display::fmt(error, f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Joined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with("\n"), f)
    }
}

impl fmt::Debug for Joined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Joined").field(&self.errors).finish()
    }
}

impl Error for Joined {}
