//! Future wrapper installing a recovery routine around an async body.

use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};

use futures_core::future::FusedFuture;

use pin_project_lite::pin_project;

use crate::catch::catch_with;
use crate::traits::HandlerChain;
use crate::types::{Abort, BoxError};

pin_project! {
    /// A Future wrapper that applies [`catch`](crate::catch) to its inner
    /// future's outcome.
    ///
    /// The handler chain runs only when the inner future resolves to an
    /// [`Abort`]. Each wrapped future owns its recovery routine, so a signal
    /// raised inside one task never reaches a routine installed by another.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use catch_rail::async_ext::FutureCatchExt;
    /// use catch_rail::{must, wrap, Abort};
    ///
    /// let rt = tokio::runtime::Runtime::new().unwrap();
    /// let result = rt.block_on(
    ///     async {
    ///         must(Err::<(), _>("connection reset")).check()?;
    ///         Ok::<(), Abort>(())
    ///     }
    ///     .catch((wrap!("sync task: {err}"),)),
    /// );
    /// assert_eq!(result.unwrap_err().to_string(), "sync task: connection reset");
    /// ```
    #[must_use = "futures do nothing unless polled"]
    pub struct CatchFuture<Fut, C, D> {
        #[pin]
        future: Fut,
        recovery: Option<(C, D)>,
    }
}

impl<Fut, C, D> CatchFuture<Fut, C, D> {
    /// Creates a new `CatchFuture` running `chain` on claimed signals and
    /// `fallback` when the chain resolves one.
    #[inline]
    pub fn new(future: Fut, chain: C, fallback: D) -> Self {
        Self { future, recovery: Some((chain, fallback)) }
    }
}

impl<Fut, C, D, T> Future for CatchFuture<Fut, C, D>
where
    Fut: Future<Output = Result<T, Abort>>,
    C: HandlerChain,
    D: FnOnce() -> T,
{
    type Output = Result<T, BoxError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.project();

        this.future.poll(cx).map(|outcome| {
            let (chain, fallback) = this
                .recovery
                .take()
                .expect("CatchFuture polled after completion; this is a bug");
            catch_with(chain, fallback, move || outcome)
        })
    }
}

impl<Fut, C, D, T> FusedFuture for CatchFuture<Fut, C, D>
where
    Fut: FusedFuture<Output = Result<T, Abort>>,
    C: HandlerChain,
    D: FnOnce() -> T,
{
    fn is_terminated(&self) -> bool {
        // The recovery is taken when the inner future completes
        self.recovery.is_none() || self.future.is_terminated()
    }
}
