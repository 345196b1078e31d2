//! Handlers and handler chains.
//!
//! A [`Handler`] maps an error to a new error, or to `None` meaning "resolved,
//! stop propagating". A [`HandlerChain`] runs handlers left to right, feeding
//! each one the previous output, and stops at the first `None`.
//!
//! Chains are written as tuples (`(h1, h2)`), arrays or `Vec`s of handlers;
//! `()` is the empty chain and returns its input unchanged.
//!
//! # Examples
//!
//! ```
//! use catch_rail::{handler, resolve, wrap, BoxError};
//!
//! let err: BoxError = "boom".into();
//! let out = resolve((wrap!("step 1: {err}"), wrap!("job: {err}")), err);
//! assert_eq!(out.unwrap().to_string(), "job: step 1: boom");
//!
//! let err: BoxError = "boom".into();
//! assert!(resolve((handler(|_| None),), err).is_none());
//! ```

use crate::types::alloc_type::Vec;
use crate::types::BoxError;

/// Transforms an error on its way to the recovery point.
///
/// Returning `None` resolves the error: no abort is raised and later handlers
/// in the same chain are not invoked.
///
/// Implemented for every `FnMut(BoxError) -> Option<BoxError>`; use
/// [`handler`](crate::handler) to pin a closure to that signature.
pub trait Handler {
    /// Handles `error`, returning the error to pass on or `None` if resolved.
    fn handle(&mut self, error: BoxError) -> Option<BoxError>;
}

impl<F> Handler for F
where
    F: FnMut(BoxError) -> Option<BoxError>,
{
    #[inline]
    fn handle(&mut self, error: BoxError) -> Option<BoxError> {
        self(error)
    }
}

/// Ordered sequence of handlers evaluated left to right.
pub trait HandlerChain {
    /// Runs the chain on `error`.
    ///
    /// Returns `None` as soon as a handler resolves the error, otherwise the
    /// output of the last handler.
    fn resolve(self, error: BoxError) -> Option<BoxError>;
}

impl HandlerChain for () {
    #[inline]
    fn resolve(self, error: BoxError) -> Option<BoxError> {
        Some(error)
    }
}

impl<H> HandlerChain for Vec<H>
where
    H: Handler,
{
    fn resolve(self, mut error: BoxError) -> Option<BoxError> {
        for mut handler in self {
            error = handler.handle(error)?;
        }
        Some(error)
    }
}

impl<H, const N: usize> HandlerChain for [H; N]
where
    H: Handler,
{
    fn resolve(self, mut error: BoxError) -> Option<BoxError> {
        for mut handler in self {
            error = handler.handle(error)?;
        }
        Some(error)
    }
}

macro_rules! impl_handler_chain_for_tuple {
    ($($handler:ident),+) => {
        impl<$($handler),+> HandlerChain for ($($handler,)+)
        where
            $($handler: Handler,)+
        {
            #[allow(non_snake_case)]
            #[inline]
            fn resolve(self, error: BoxError) -> Option<BoxError> {
                let ($(mut $handler,)+) = self;
                $(let error = $handler.handle(error)?;)+
                Some(error)
            }
        }
    };
}

impl_handler_chain_for_tuple!(H1);
impl_handler_chain_for_tuple!(H1, H2);
impl_handler_chain_for_tuple!(H1, H2, H3);
impl_handler_chain_for_tuple!(H1, H2, H3, H4);
impl_handler_chain_for_tuple!(H1, H2, H3, H4, H5);
impl_handler_chain_for_tuple!(H1, H2, H3, H4, H5, H6);
impl_handler_chain_for_tuple!(H1, H2, H3, H4, H5, H6, H7);
impl_handler_chain_for_tuple!(H1, H2, H3, H4, H5, H6, H7, H8);

/// Evaluates `chain` on `error`.
///
/// This is the single evaluation rule shared by raisers and recovery routines.
#[inline]
pub fn resolve<C>(chain: C, error: BoxError) -> Option<BoxError>
where
    C: HandlerChain,
{
    chain.resolve(error)
}
