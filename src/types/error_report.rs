use core::error::Error;
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::chain::error_chain;
use crate::types::alloc_type::{String, ToString, Vec};

/// Flattened snapshot of an error and its causes.
///
/// Useful for structured logging once the error has left the recovery routine:
/// with the `serde` feature the report serializes to
/// `{"message": ..., "causes": [...]}`.
///
/// # Examples
///
/// ```
/// use catch_rail::{ErrorReport, Wrapped};
///
/// let err = Wrapped::new("loading config: not found", "not found");
/// let report = ErrorReport::new(&err);
///
/// assert_eq!(report.message, "loading config: not found");
/// assert_eq!(report.causes, vec!["not found".to_string()]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ErrorReport {
    /// Message of the outermost error.
    pub message: String,
    /// Messages of every source below it, outermost first.
    pub causes: Vec<String>,
}

impl ErrorReport {
    /// Walks `error` and its sources into a report.
    pub fn new(error: &(dyn Error + 'static)) -> Self {
        let mut links = error_chain(error).map(|link| link.to_string());
        let message = links.next().unwrap_or_default();
        Self { message, causes: links.collect() }
    }
}

impl fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return f.write_str(&self.message);
        }

        writeln!(f, "Error: {}", self.message)?;
        if !self.causes.is_empty() {
            writeln!(f, "Caused by:")?;
            for cause in &self.causes {
                writeln!(f, "  - {}", cause)?;
            }
        }
        Ok(())
    }
}
