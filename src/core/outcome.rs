//! Outcome: success or failure, tagged at construction.
//!
//! The variant is whichever constructor ran. An empty `Ok` payload (`()`,
//! `""`, `None`) is still `Ok`, and an empty `Err` payload is still `Err`.

use core::fmt;

use super::error::ConstructionError;
use super::maybe::Maybe;
use super::tag::{OutcomeTag, Variants};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome<T, E> {
    Ok(T),
    Err(E),
}

impl<T, E> Outcome<T, E> {
    /// `Ok` from a payload that may be missing.
    ///
    /// A missing payload is reported here, at construction. It is never
    /// turned into an `Err`.
    pub fn try_ok(value: Option<T>) -> Result<Self, ConstructionError> {
        match value {
            Some(value) => Ok(Outcome::Ok(value)),
            None => Err(rejected(ConstructionError::MissingOk)),
        }
    }

    /// `Err` from a payload that may be missing.
    pub fn try_err(error: Option<E>) -> Result<Self, ConstructionError> {
        match error {
            Some(error) => Ok(Outcome::Err(error)),
            None => Err(rejected(ConstructionError::MissingErr)),
        }
    }

    #[inline(always)]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    #[inline(always)]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    #[inline(always)]
    pub const fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    /// Runs exactly one handler, now, and returns what it returns.
    #[inline]
    pub fn match_with<R, O, F>(self, on_ok: O, on_err: F) -> R
    where
        O: FnOnce(T) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Outcome::Ok(value) => on_ok(value),
            Outcome::Err(error) => on_err(error),
        }
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(f(value)),
            Outcome::Err(error) => Outcome::Err(error),
        }
    }

    #[inline]
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Ok(value) => Outcome::Ok(value),
            Outcome::Err(error) => Outcome::Err(f(error)),
        }
    }

    /// The `Ok` payload as a [`Maybe`].
    #[inline]
    pub fn ok(self) -> Maybe<T> {
        match self {
            Outcome::Ok(value) => Maybe::Some(value),
            Outcome::Err(_) => Maybe::None,
        }
    }

    /// The `Err` payload as a [`Maybe`].
    #[inline]
    pub fn err(self) -> Maybe<E> {
        match self {
            Outcome::Ok(_) => Maybe::None,
            Outcome::Err(error) => Maybe::Some(error),
        }
    }
}

#[inline]
fn rejected(error: ConstructionError) -> ConstructionError {
    #[cfg(feature = "tracing")]
    tracing::debug!(variant = error.variant(), "rejected outcome construction: {}", error);
    error
}

impl<T, E> Variants for Outcome<T, E> {
    type Tag = OutcomeTag;

    const ARITY: u8 = 2;

    #[inline(always)]
    fn tag(&self) -> OutcomeTag {
        match self {
            Outcome::Ok(_) => OutcomeTag::Ok,
            Outcome::Err(_) => OutcomeTag::Err,
        }
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    #[inline]
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(value) => Outcome::Ok(value),
            Err(error) => Outcome::Err(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    #[inline]
    fn from(value: Outcome<T, E>) -> Self {
        match value {
            Outcome::Ok(value) => Ok(value),
            Outcome::Err(error) => Err(error),
        }
    }
}

impl<T: fmt::Display, E: fmt::Display> fmt::Display for Outcome<T, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ok(value) => write!(f, "Ok({})", value),
            Outcome::Err(error) => write!(f, "Err({})", error),
        }
    }
}
