//! Union3: exactly one of three slots, fixed at construction.
//!
//! Dispatch is a single exhaustive `match`, tried in declaration order.
//! There is no "nothing matched" state to fall into.

use core::fmt;

use super::maybe::Maybe;
use super::tag::{Union3Tag, Variants};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Union3<A, B, C> {
    First(A),
    Second(B),
    Third(C),
}

impl<A, B, C> Union3<A, B, C> {
    #[inline(always)]
    pub const fn first(value: A) -> Self {
        Union3::First(value)
    }

    #[inline(always)]
    pub const fn second(value: B) -> Self {
        Union3::Second(value)
    }

    #[inline(always)]
    pub const fn third(value: C) -> Self {
        Union3::Third(value)
    }

    #[inline(always)]
    pub const fn is_first(&self) -> bool {
        matches!(self, Union3::First(_))
    }

    #[inline(always)]
    pub const fn is_second(&self) -> bool {
        matches!(self, Union3::Second(_))
    }

    #[inline(always)]
    pub const fn is_third(&self) -> bool {
        matches!(self, Union3::Third(_))
    }

    #[inline(always)]
    pub const fn as_ref(&self) -> Union3<&A, &B, &C> {
        match self {
            Union3::First(value) => Union3::First(value),
            Union3::Second(value) => Union3::Second(value),
            Union3::Third(value) => Union3::Third(value),
        }
    }

    /// Runs the handler for the populated slot, and only that one.
    #[inline]
    pub fn match_with<R, F1, F2, F3>(self, f1: F1, f2: F2, f3: F3) -> R
    where
        F1: FnOnce(A) -> R,
        F2: FnOnce(B) -> R,
        F3: FnOnce(C) -> R,
    {
        match self {
            Union3::First(value) => f1(value),
            Union3::Second(value) => f2(value),
            Union3::Third(value) => f3(value),
        }
    }

    #[inline]
    pub fn into_first(self) -> Maybe<A> {
        match self {
            Union3::First(value) => Maybe::Some(value),
            _ => Maybe::None,
        }
    }

    #[inline]
    pub fn into_second(self) -> Maybe<B> {
        match self {
            Union3::Second(value) => Maybe::Some(value),
            _ => Maybe::None,
        }
    }

    #[inline]
    pub fn into_third(self) -> Maybe<C> {
        match self {
            Union3::Third(value) => Maybe::Some(value),
            _ => Maybe::None,
        }
    }
}

impl<A, B, C> Variants for Union3<A, B, C> {
    type Tag = Union3Tag;

    const ARITY: u8 = 3;

    #[inline(always)]
    fn tag(&self) -> Union3Tag {
        match self {
            Union3::First(_) => Union3Tag::First,
            Union3::Second(_) => Union3Tag::Second,
            Union3::Third(_) => Union3Tag::Third,
        }
    }
}

impl<A: fmt::Display, B: fmt::Display, C: fmt::Display> fmt::Display for Union3<A, B, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Union3::First(value) => write!(f, "First({})", value),
            Union3::Second(value) => write!(f, "Second({})", value),
            Union3::Third(value) => write!(f, "Third({})", value),
        }
    }
}
