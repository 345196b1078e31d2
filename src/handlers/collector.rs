use crate::types::alloc_type::Arc;
use crate::types::{BoxError, ErrorVec, Joined, SharedError};

/// Accumulates errors instead of stopping at the first one.
///
/// [`collect`](Collector::collect) returns a handler that records the incoming
/// error and resolves it, so the raiser does not abort and later steps still
/// run. [`err`](Collector::err) then reports everything recorded as one
/// [`Joined`] error.
///
/// Mutation goes through `&mut self`; sharing a collector between threads
/// needs external synchronisation.
///
/// # Examples
///
/// ```
/// use catch_rail::{catch, must, wrap, BoxError, Collector};
///
/// fn validate(name: &str, age: i32) -> Result<(), BoxError> {
///     let mut collector = Collector::new();
///     catch((), || {
///         let short = if name.len() < 3 { Err("too short") } else { Ok(()) };
///         must(short).handle((wrap!("name: {err}"), collector.collect()))?;
///         let range = if age < 0 { Err("negative") } else { Ok(()) };
///         must(range).handle((wrap!("age: {err}"), collector.collect()))?;
///         Ok(())
///     })?;
///     match collector.err() {
///         Some(joined) => Err(joined.into()),
///         None => Ok(()),
///     }
/// }
///
/// assert!(validate("alice", 30).is_ok());
/// assert_eq!(
///     validate("al", -1).unwrap_err().to_string(),
///     "name: too short\nage: negative"
/// );
/// ```
#[derive(Debug, Default)]
pub struct Collector {
    errors: ErrorVec<SharedError>,
}

impl Collector {
    /// Creates an empty collector.
    #[inline]
    pub fn new() -> Self {
        Self { errors: ErrorVec::new() }
    }

    /// Returns a handler that appends the incoming error and resolves it.
    pub fn collect(&mut self) -> impl FnMut(BoxError) -> Option<BoxError> + '_ {
        move |error: BoxError| -> Option<BoxError> {
            self.errors.push(Arc::from(error));
            None
        }
    }

    /// Returns every recorded error joined into one, or `None` if nothing was recorded.
    ///
    /// Each call reflects the current contents; the collector is left unchanged.
    pub fn err(&self) -> Option<Joined> {
        if self.errors.is_empty() {
            return None;
        }
        Some(Joined::new(self.errors.clone()))
    }
}
