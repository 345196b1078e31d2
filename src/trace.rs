//! Tracing hooks for raise and recovery events. No-ops without the `tracing` feature.

use core::error::Error;

#[inline]
pub(crate) fn raised(error: &(dyn Error + 'static)) {
    #[cfg(feature = "tracing")]
    tracing::trace!(error = %error, "raising abort signal");
    #[cfg(not(feature = "tracing"))]
    let _ = error;
}

#[inline]
pub(crate) fn claimed(error: &(dyn Error + 'static)) {
    #[cfg(feature = "tracing")]
    tracing::debug!(error = %error, "abort signal claimed by recovery routine");
    #[cfg(not(feature = "tracing"))]
    let _ = error;
}

#[inline]
pub(crate) fn resolved() {
    #[cfg(feature = "tracing")]
    tracing::debug!("abort signal resolved by recovery handlers");
}

#[inline]
pub(crate) fn reraised(error: &(dyn Error + 'static)) {
    #[cfg(feature = "tracing")]
    tracing::debug!(error = %error, "no output slot, re-raising abort signal");
    #[cfg(not(feature = "tracing"))]
    let _ = error;
}
