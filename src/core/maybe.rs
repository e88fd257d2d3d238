//! Maybe: a value, or nothing. The tag decides, never the payload.
//!
//! `Maybe::Some(())`, `Maybe::Some(None::<u8>)` and `Maybe::Some("")` are all
//! `Some`. Only [`Maybe::None`] is absent.
//!
//! Alternatives come in two forms:
//! - value form (`value_or`, `or`, `and`, `match_values`): the caller already
//!   evaluated the argument.
//! - closure form (`value_or_else`, `or_else`, `and_then`, `match_with`): the
//!   closure runs only if its branch is selected.

use core::any::type_name;
use core::fmt;

use super::outcome::Outcome;
use super::tag::{MaybeTag, Variants};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Maybe<T> {
    Some(T),
    None,
}

impl<T> Maybe<T> {
    #[inline(always)]
    pub const fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    #[inline(always)]
    pub const fn none() -> Self {
        Maybe::None
    }

    #[inline(always)]
    pub const fn is_some(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    #[inline(always)]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    #[inline(always)]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Runs exactly one handler, now, and returns what it returns.
    ///
    /// For side effects only, return `()` from both.
    #[inline]
    pub fn match_with<R, S, N>(self, on_some: S, on_none: N) -> R
    where
        S: FnOnce(T) -> R,
        N: FnOnce() -> R,
    {
        match self {
            Maybe::Some(value) => on_some(value),
            Maybe::None => on_none(),
        }
    }

    /// Handler for `Some`, ready value for `None`.
    #[inline]
    pub fn match_or<R, S>(self, on_some: S, none_value: R) -> R
    where
        S: FnOnce(T) -> R,
    {
        match self {
            Maybe::Some(value) => on_some(value),
            Maybe::None => none_value,
        }
    }

    /// Ready value for `Some`, handler for `None`. The payload is dropped.
    #[inline]
    pub fn match_else<R, N>(self, some_value: R, on_none: N) -> R
    where
        N: FnOnce() -> R,
    {
        match self {
            Maybe::Some(_) => some_value,
            Maybe::None => on_none(),
        }
    }

    /// Picks one of two ready values by tag.
    #[inline]
    pub fn match_values<R>(self, some_value: R, none_value: R) -> R {
        match self {
            Maybe::Some(_) => some_value,
            Maybe::None => none_value,
        }
    }

    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(f(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// `Some(x) → Ok(x)`, `None → Err(err)`.
    #[inline]
    pub fn okay_or<E>(self, err: E) -> Outcome<T, E> {
        match self {
            Maybe::Some(value) => Outcome::Ok(value),
            Maybe::None => Outcome::Err(err),
        }
    }

    #[inline]
    pub fn okay_or_else<E, F>(self, err: F) -> Outcome<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Maybe::Some(value) => Outcome::Ok(value),
            Maybe::None => Outcome::Err(err()),
        }
    }

    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => default,
        }
    }

    #[inline]
    pub fn value_or_else<F>(self, default: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => default(),
        }
    }

    /// Payload, or `T::default()` when empty.
    ///
    /// The return value alone cannot tell `None` apart from
    /// `Some(T::default())`. Check [`is_some`](Self::is_some) first if that
    /// matters.
    #[inline]
    pub fn value_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => T::default(),
        }
    }

    /// `None` stays `None`; `Some` yields `other`.
    #[inline]
    pub fn and<U>(self, other: Maybe<U>) -> Maybe<U> {
        match self {
            Maybe::Some(_) => other,
            Maybe::None => Maybe::None,
        }
    }

    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => Maybe::None,
        }
    }

    /// `Some` stays itself; `None` yields `other`.
    #[inline]
    pub fn or(self, other: Maybe<T>) -> Maybe<T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => other,
        }
    }

    #[inline]
    pub fn or_else<F>(self, f: F) -> Maybe<T>
    where
        F: FnOnce() -> Maybe<T>,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => f(),
        }
    }

    /// Hands a present payload to `on_some` and yields `None`; an empty
    /// receiver yields `other` untouched.
    #[inline]
    pub fn consume_or<U, F>(self, other: Maybe<U>, on_some: F) -> Maybe<U>
    where
        F: FnOnce(T),
    {
        match self {
            Maybe::Some(value) => {
                on_some(value);
                Maybe::None
            }
            Maybe::None => other,
        }
    }

    /// A fresh `Some(value)`, whatever the receiver holds.
    #[inline(always)]
    pub fn as_some(&self, value: T) -> Maybe<T> {
        Maybe::Some(value)
    }

    /// A fresh `None`, whatever the receiver holds.
    #[inline(always)]
    pub fn as_none(&self) -> Maybe<T> {
        Maybe::None
    }
}

impl<T> Default for Maybe<T> {
    #[inline(always)]
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> Variants for Maybe<T> {
    type Tag = MaybeTag;

    const ARITY: u8 = 2;

    #[inline(always)]
    fn tag(&self) -> MaybeTag {
        match self {
            Maybe::Some(_) => MaybeTag::Some,
            Maybe::None => MaybeTag::None,
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    #[inline]
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Maybe<{}> [", type_name::<T>())?;
        match self {
            Maybe::Some(value) => write!(f, "Some({})", value)?,
            Maybe::None => f.write_str("None()")?,
        }
        f.write_str("]")
    }
}
