//! Discriminants. Every variant is named by a tag set at construction, never inferred.

/// Which side of a [`Maybe`](super::Maybe) is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum MaybeTag {
    /// A payload is present.
    Some = 0,
    /// Nothing.
    None = 1,
}

/// Which side of an [`Outcome`](super::Outcome) is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum OutcomeTag {
    /// Success payload.
    Ok = 0,
    /// Failure payload.
    Err = 1,
}

/// Which slot of a [`Union3`](super::Union3) is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Union3Tag {
    /// Slot `A`.
    First = 0,
    /// Slot `B`.
    Second = 1,
    /// Slot `C`.
    Third = 2,
}

impl MaybeTag {
    #[inline(always)]
    pub const fn index(&self) -> u8 {
        *self as u8
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            MaybeTag::Some => "Some",
            MaybeTag::None => "None",
        }
    }
}

impl OutcomeTag {
    #[inline(always)]
    pub const fn index(&self) -> u8 {
        *self as u8
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            OutcomeTag::Ok => "Ok",
            OutcomeTag::Err => "Err",
        }
    }
}

impl Union3Tag {
    #[inline(always)]
    pub const fn index(&self) -> u8 {
        *self as u8
    }

    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        match self {
            Union3Tag::First => "First",
            Union3Tag::Second => "Second",
            Union3Tag::Third => "Third",
        }
    }
}

macro_rules! tag_into_index {
    ($($tag:ty),*) => {
        $(
            impl From<$tag> for u8 {
                #[inline(always)]
                fn from(tag: $tag) -> u8 {
                    tag.index()
                }
            }
        )*
    };
}

tag_into_index!(MaybeTag, OutcomeTag, Union3Tag);

/// A closed sum type with a runtime-queryable discriminant.
///
/// Rules:
/// - `tag()` is pure and total. It reads the variant, never the payload.
/// - `tag().index()` is always `< ARITY`.
/// - Exactly one variant is active for the whole life of the value.
pub trait Variants {
    type Tag: Copy + Eq + core::fmt::Debug + Into<u8>;

    /// Number of variants.
    const ARITY: u8;

    fn tag(&self) -> Self::Tag;

    /// Position of the active variant, in declaration order.
    #[inline(always)]
    fn variant_index(&self) -> u8 {
        self.tag().into()
    }
}
