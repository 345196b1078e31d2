//! Extension trait for `Future<Output = Result<T, Abort>>`.
//!
//! Provides `.catch()` for async bodies, mirroring the sync
//! [`catch`](crate::catch) function.

use core::future::Future;

use crate::traits::HandlerChain;
use crate::types::Abort;

use super::catch_future::CatchFuture;

/// Extension trait installing a recovery routine on an async body.
///
/// # Examples
///
/// ```rust,no_run
/// use catch_rail::prelude_async::*;
///
/// async fn fetch(id: u64) -> Result<String, &'static str> {
///     if id == 0 { Err("not found") } else { Ok(format!("user-{id}")) }
/// }
///
/// async fn load(id: u64) -> Result<String, BoxError> {
///     async move {
///         let user = must2(fetch(id).await).handle((wrap!("user {}: {err}", id),))?;
///         Ok::<_, Abort>(user)
///     }
///     .catch(())
///     .await
/// }
/// ```
pub trait FutureCatchExt<T>: Future<Output = Result<T, Abort>> + Sized {
    /// Claims the abort signal this future resolves to, if any.
    ///
    /// Resolves to `Ok(value)` on normal completion, `Ok(T::default())` when
    /// `chain` resolves the signal, and `Err(error)` otherwise.
    #[inline]
    fn catch<C>(self, chain: C) -> CatchFuture<Self, C, fn() -> T>
    where
        C: HandlerChain,
        T: Default,
    {
        CatchFuture::new(self, chain, T::default as fn() -> T)
    }

    /// Like [`catch`](FutureCatchExt::catch), resolving to `Ok(fallback())`
    /// when `chain` resolves the signal. `T` may be any type.
    #[inline]
    fn catch_with<C, D>(self, chain: C, fallback: D) -> CatchFuture<Self, C, D>
    where
        C: HandlerChain,
        D: FnOnce() -> T,
    {
        CatchFuture::new(self, chain, fallback)
    }
}

impl<F, T> FutureCatchExt<T> for F where F: Future<Output = Result<T, Abort>> {}
