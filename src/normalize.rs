//! Mapping of arbitrary host errors onto [`SystemError`].
//!
//! Only errors that already are a [`SystemError`] or one of its payload types (held
//! directly or in a `Box`) are representable. Everything else, including errors that
//! merely wrap one of those as their `source()`, is reported as not representable.
//! Deciding what to do with such an error (wrap it as [`Unknown`], drop it, escalate)
//! is left to the caller; nothing here ever produces an `Unknown` that was not
//! already in the input.

use std::error::Error as StdError;

use crate::system_error::SystemError;
use crate::types::{InvalidRequest, NoSuchContract, Unknown, UnsupportedRequest};

type BoxedError = Box<dyn StdError + Send + Sync>;

fn wrap<T>(err: &(dyn StdError + 'static)) -> Option<SystemError>
where
    T: StdError + Clone + Into<SystemError> + 'static,
{
    err.downcast_ref::<T>()
        .or_else(|| err.downcast_ref::<Box<T>>().map(|boxed| &**boxed))
        .cloned()
        .map(Into::into)
}

/// Converts a borrowed host error into a [`SystemError`], or `None` when its shape is
/// not one of ours.
pub fn to_system_error(err: &(dyn StdError + 'static)) -> Option<SystemError> {
    wrap::<SystemError>(err)
        .or_else(|| wrap::<InvalidRequest>(err))
        .or_else(|| wrap::<NoSuchContract>(err))
        .or_else(|| wrap::<Unknown>(err))
        .or_else(|| wrap::<UnsupportedRequest>(err))
}

/// `None` in means "no error" and gives `None` back; callers that need to tell that
/// apart from "not representable" should match on the input first or use
/// [`to_system_error`].
pub fn normalize(err: Option<&(dyn StdError + 'static)>) -> Option<SystemError> {
    err.and_then(to_system_error)
}

fn take<T>(err: BoxedError) -> Result<SystemError, BoxedError>
where
    T: StdError + Into<SystemError> + 'static,
{
    let err = match err.downcast::<T>() {
        Ok(inner) => return Ok((*inner).into()),
        Err(err) => err,
    };
    err.downcast::<Box<T>>().map(|outer| {
        let inner: Box<T> = *outer;
        (*inner).into()
    })
}

/// Owning form of [`to_system_error`]. Representable errors are moved out of the box
/// without cloning; anything else is handed back untouched in `Err`.
pub fn normalize_boxed(err: BoxedError) -> Result<SystemError, BoxedError> {
    take::<SystemError>(err)
        .or_else(take::<InvalidRequest>)
        .or_else(take::<NoSuchContract>)
        .or_else(take::<Unknown>)
        .or_else(take::<UnsupportedRequest>)
}
