//! Law witnesses. Runtime-verifiable algebraic properties of the sum types.
//!
//! A witness records both sides of a law for one concrete input. It proves
//! nothing in general; feed it many inputs (proptest does) and it becomes
//! evidence.

use core::cell::Cell;

use crate::core::maybe::Maybe;
use crate::core::outcome::Outcome;
use crate::core::tag::Variants;
use crate::core::union3::Union3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Law {
    /// m.map(id) = m
    MapIdentity = 0,
    /// m.map(f).map(g) = m.map(g ∘ f)
    MapComposition = 1,
    /// some(x).and_then(f) = f(x)
    LeftIdentity = 2,
    /// m.and_then(some) = m
    RightIdentity = 3,
    /// m.and_then(f).and_then(g) = m.and_then(|x| f(x).and_then(g))
    Associativity = 4,
    /// Ok(v).ok().value_or(d) = v, Err(e).err().value_or(d) = e
    RoundTrip = 5,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawWitness<V> {
    pub law: Law,
    pub lhs: V,
    pub rhs: V,
    pub holds: bool,
}

impl<V> LawWitness<V> {
    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

impl<V: PartialEq> LawWitness<V> {
    pub fn compare(law: Law, lhs: V, rhs: V) -> Self {
        let holds = lhs == rhs;
        Self {
            law,
            lhs,
            rhs,
            holds,
        }
    }

    pub fn ok_round_trip(value: V, default: V) -> Self
    where
        V: Clone,
    {
        let lhs = Outcome::<V, ()>::Ok(value.clone()).ok().value_or(default);
        Self::compare(Law::RoundTrip, lhs, value)
    }

    pub fn err_round_trip(error: V, default: V) -> Self
    where
        V: Clone,
    {
        let lhs = Outcome::<(), V>::Err(error.clone()).err().value_or(default);
        Self::compare(Law::RoundTrip, lhs, error)
    }
}

impl<V: Clone + PartialEq> LawWitness<Maybe<V>> {
    pub fn maybe_map_identity(m: &Maybe<V>) -> Self {
        Self::compare(Law::MapIdentity, m.clone().map(|x| x), m.clone())
    }

    pub fn maybe_map_composition<T, U, F, G>(m: &Maybe<T>, f: F, g: G) -> Self
    where
        T: Clone,
        F: Fn(T) -> U,
        G: Fn(U) -> V,
    {
        let stepwise = m.clone().map(&f).map(&g);
        let fused = m.clone().map(|x| g(f(x)));
        Self::compare(Law::MapComposition, stepwise, fused)
    }

    pub fn maybe_left_identity<T, F>(value: T, f: F) -> Self
    where
        T: Clone,
        F: Fn(T) -> Maybe<V>,
    {
        let lhs = Maybe::Some(value.clone()).and_then(&f);
        Self::compare(Law::LeftIdentity, lhs, f(value))
    }

    pub fn maybe_right_identity(m: &Maybe<V>) -> Self {
        Self::compare(Law::RightIdentity, m.clone().and_then(Maybe::Some), m.clone())
    }

    pub fn maybe_associativity<T, U, F, G>(m: &Maybe<T>, f: F, g: G) -> Self
    where
        T: Clone,
        F: Fn(T) -> Maybe<U>,
        G: Fn(U) -> Maybe<V>,
    {
        let lhs = m.clone().and_then(&f).and_then(&g);
        let rhs = m.clone().and_then(|x| f(x).and_then(&g));
        Self::compare(Law::Associativity, lhs, rhs)
    }
}

impl<V: Clone + PartialEq, E: Clone + PartialEq> LawWitness<Outcome<V, E>> {
    pub fn outcome_map_identity(o: &Outcome<V, E>) -> Self {
        Self::compare(Law::MapIdentity, o.clone().map(|x| x), o.clone())
    }

    pub fn outcome_map_composition<T, U, F, G>(o: &Outcome<T, E>, f: F, g: G) -> Self
    where
        T: Clone,
        F: Fn(T) -> U,
        G: Fn(U) -> V,
    {
        let stepwise = o.clone().map(&f).map(&g);
        let fused = o.clone().map(|x| g(f(x)));
        Self::compare(Law::MapComposition, stepwise, fused)
    }
}

/// Exactly one handler ran, and it was the one the tag selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchWitness {
    pub expected: u8,
    pub arity: u8,
    pub calls: [u32; 3],
    pub holds: bool,
}

impl DispatchWitness {
    fn settle(expected: u8, arity: u8, calls: [u32; 3]) -> Self {
        let total: u32 = calls.iter().sum();
        let holds = total == 1
            && expected < arity
            && calls[expected as usize] == 1
            && calls[arity as usize..].iter().all(|&c| c == 0);

        Self {
            expected,
            arity,
            calls,
            holds,
        }
    }

    pub fn for_maybe<T>(value: &Maybe<T>) -> Self {
        let calls = Cell::new([0u32; 3]);
        let hit = |slot: usize| {
            let mut c = calls.get();
            c[slot] += 1;
            calls.set(c);
        };

        value.as_ref().match_with(|_| hit(0), || hit(1));

        Self::settle(value.variant_index(), <Maybe<T> as Variants>::ARITY, calls.get())
    }

    pub fn for_outcome<T, E>(value: &Outcome<T, E>) -> Self {
        let calls = Cell::new([0u32; 3]);
        let hit = |slot: usize| {
            let mut c = calls.get();
            c[slot] += 1;
            calls.set(c);
        };

        value.as_ref().match_with(|_| hit(0), |_| hit(1));

        Self::settle(
            value.variant_index(),
            <Outcome<T, E> as Variants>::ARITY,
            calls.get(),
        )
    }

    pub fn for_union3<A, B, C>(value: &Union3<A, B, C>) -> Self {
        let calls = Cell::new([0u32; 3]);
        let hit = |slot: usize| {
            let mut c = calls.get();
            c[slot] += 1;
            calls.set(c);
        };

        value
            .as_ref()
            .match_with(|_| hit(0), |_| hit(1), |_| hit(2));

        Self::settle(
            value.variant_index(),
            <Union3<A, B, C> as Variants>::ARITY,
            calls.get(),
        )
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}

/// Combinators whose closure argument may be skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Combinator {
    Map = 0,
    MapErr = 1,
    AndThen = 2,
    OrElse = 3,
    ValueOrElse = 4,
    OkayOrElse = 5,
}

/// The closure ran iff the receiver's state required it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortCircuitWitness {
    pub combinator: Combinator,
    pub invoked: bool,
    pub expected_invoked: bool,
    pub holds: bool,
}

impl ShortCircuitWitness {
    fn settle(combinator: Combinator, invoked: bool, expected_invoked: bool) -> Self {
        Self {
            combinator,
            invoked,
            expected_invoked,
            holds: invoked == expected_invoked,
        }
    }

    pub fn maybe_map<T>(m: &Maybe<T>) -> Self {
        let invoked = Cell::new(false);
        let _ = m.as_ref().map(|_| invoked.set(true));
        Self::settle(Combinator::Map, invoked.get(), m.is_some())
    }

    pub fn maybe_and_then<T>(m: &Maybe<T>) -> Self {
        let invoked = Cell::new(false);
        let _ = m.as_ref().and_then(|_| {
            invoked.set(true);
            Maybe::<()>::None
        });
        Self::settle(Combinator::AndThen, invoked.get(), m.is_some())
    }

    pub fn maybe_or_else<T>(m: &Maybe<T>) -> Self {
        let invoked = Cell::new(false);
        let _ = m.as_ref().or_else(|| {
            invoked.set(true);
            Maybe::None
        });
        Self::settle(Combinator::OrElse, invoked.get(), m.is_none())
    }

    pub fn maybe_value_or_else<T>(m: &Maybe<T>) -> Self {
        let invoked = Cell::new(false);
        let _ = m.as_ref().map(Some).value_or_else(|| {
            invoked.set(true);
            None
        });
        Self::settle(Combinator::ValueOrElse, invoked.get(), m.is_none())
    }

    pub fn maybe_okay_or_else<T>(m: &Maybe<T>) -> Self {
        let invoked = Cell::new(false);
        let _ = m.as_ref().okay_or_else(|| invoked.set(true));
        Self::settle(Combinator::OkayOrElse, invoked.get(), m.is_none())
    }

    pub fn outcome_map<T, E>(o: &Outcome<T, E>) -> Self {
        let invoked = Cell::new(false);
        let _ = o.as_ref().map(|_| invoked.set(true));
        Self::settle(Combinator::Map, invoked.get(), o.is_ok())
    }

    pub fn outcome_map_err<T, E>(o: &Outcome<T, E>) -> Self {
        let invoked = Cell::new(false);
        let _ = o.as_ref().map_err(|_| invoked.set(true));
        Self::settle(Combinator::MapErr, invoked.get(), o.is_err())
    }

    pub const fn is_valid(&self) -> bool {
        self.holds
    }
}
