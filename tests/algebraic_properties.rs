//! Algebraic properties of the sum types, checked through law witnesses:
//! - Functor identity and composition
//! - Monadic identities and associativity
//! - Round trips through the Maybe projections
//! - Short-circuiting of closure arguments

use std::cell::RefCell;

use unions::algebra::laws::{Combinator, DispatchWitness, Law, LawWitness, ShortCircuitWitness};
use unions::core::{Maybe, Outcome, Union3};

// ============================================================================
// Functor laws
// ============================================================================

#[test]
fn test_maybe_map_identity() {
    let cases = [Maybe::Some(0), Maybe::Some(-7), Maybe::Some(i64::MAX), Maybe::None];

    for m in cases {
        let w = LawWitness::maybe_map_identity(&m);
        assert!(w.is_valid(), "map(id) should be identity for {:?}", m);
        assert_eq!(w.law, Law::MapIdentity);
    }
}

#[test]
fn test_maybe_map_composition() {
    let cases = [Maybe::Some(3u32), Maybe::Some(0), Maybe::None];

    for m in cases {
        let w = LawWitness::maybe_map_composition(&m, |x: u32| x as u64 * 2, |y: u64| y + 1);
        assert!(w.is_valid(), "map composition should hold for {:?}", m);
    }
}

#[test]
fn test_outcome_map_laws() {
    let cases: [Outcome<i32, &str>; 3] = [Outcome::Ok(1), Outcome::Ok(-1), Outcome::Err("e")];

    for o in cases {
        assert!(LawWitness::outcome_map_identity(&o).is_valid());
        let w = LawWitness::outcome_map_composition(&o, |x: i32| x * 10, |y: i32| y.to_string());
        assert!(w.is_valid(), "outcome map composition should hold for {:?}", o);
    }
}

// ============================================================================
// Monad laws (and_then)
// ============================================================================

fn checked_half(x: i32) -> Maybe<i32> {
    if x % 2 == 0 {
        Maybe::Some(x / 2)
    } else {
        Maybe::None
    }
}

fn positive(x: i32) -> Maybe<u32> {
    if x > 0 {
        Maybe::Some(x as u32)
    } else {
        Maybe::None
    }
}

#[test]
fn test_left_identity() {
    for x in [-4, -1, 0, 1, 8, 9] {
        assert!(LawWitness::maybe_left_identity(x, checked_half).is_valid());
    }
}

#[test]
fn test_right_identity() {
    for m in [Maybe::Some("a"), Maybe::Some(""), Maybe::None] {
        assert!(LawWitness::maybe_right_identity(&m).is_valid());
    }
}

#[test]
fn test_associativity() {
    for m in [Maybe::Some(8), Maybe::Some(6), Maybe::Some(-4), Maybe::Some(3), Maybe::None] {
        let w = LawWitness::maybe_associativity(&m, checked_half, positive);
        assert!(w.is_valid(), "and_then should associate for {:?}", m);
    }
}

// ============================================================================
// Round trips
// ============================================================================

#[test]
fn test_ok_round_trip() {
    for (v, d) in [(7, -1), (0, 0), (-5, 99)] {
        assert!(LawWitness::ok_round_trip(v, d).is_valid());
    }
}

#[test]
fn test_err_round_trip() {
    for (e, d) in [("bad", "default"), ("", "x")] {
        assert!(LawWitness::err_round_trip(e, d).is_valid());
    }
}

// ============================================================================
// Dispatch and short-circuit
// ============================================================================

#[test]
fn test_single_dispatch_across_types() {
    assert!(DispatchWitness::for_maybe(&Maybe::Some(1)).is_valid());
    assert!(DispatchWitness::for_maybe(&Maybe::<i32>::None).is_valid());
    assert!(DispatchWitness::for_outcome(&Outcome::<(), ()>::Ok(())).is_valid());
    assert!(DispatchWitness::for_outcome(&Outcome::<(), ()>::Err(())).is_valid());

    type U = Union3<i32, &'static str, bool>;
    for (u, slot) in [(U::first(1), 0u8), (U::second("hi"), 1), (U::third(true), 2)] {
        let w = DispatchWitness::for_union3(&u);
        assert!(w.is_valid());
        assert_eq!(w.expected, slot);
        assert_eq!(w.calls[slot as usize], 1);
    }
}

#[test]
fn test_short_circuit_on_none() {
    let none = Maybe::<String>::None;

    let w = ShortCircuitWitness::maybe_and_then(&none);
    assert_eq!(w.combinator, Combinator::AndThen);
    assert!(!w.invoked);
    assert!(w.is_valid());

    assert!(!ShortCircuitWitness::maybe_map(&none).invoked);
    assert!(ShortCircuitWitness::maybe_or_else(&none).invoked);
    assert!(ShortCircuitWitness::maybe_value_or_else(&none).invoked);
}

#[test]
fn test_short_circuit_on_some() {
    let some = Maybe::Some(String::from("x"));

    assert!(!ShortCircuitWitness::maybe_or_else(&some).invoked);
    assert!(!ShortCircuitWitness::maybe_value_or_else(&some).invoked);
    assert!(!ShortCircuitWitness::maybe_okay_or_else(&some).invoked);
    assert!(ShortCircuitWitness::maybe_and_then(&some).invoked);
}

#[test]
fn test_cross_variant_maps_are_skipped() {
    let ok = Outcome::<i32, String>::Ok(1);
    let err = Outcome::<i32, String>::Err("e".into());

    assert!(!ShortCircuitWitness::outcome_map_err(&ok).invoked);
    assert!(!ShortCircuitWitness::outcome_map(&err).invoked);
    assert!(ShortCircuitWitness::outcome_map(&ok).is_valid());
    assert!(ShortCircuitWitness::outcome_map_err(&err).is_valid());
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn test_scenario_maybe_map_then_value_or() {
    assert_eq!(Maybe::Some(5).map(|x| x * 2).value_or(0), 10);
}

#[test]
fn test_scenario_none_value_or_else() {
    assert_eq!(Maybe::<i32>::None.value_or_else(|| 42), 42);
}

#[test]
fn test_scenario_outcome_ok_map() {
    let out = Outcome::<i32, String>::Ok(7).map(|x| x + 1).ok().value_or(-1);
    assert_eq!(out, 8);
}

#[test]
fn test_scenario_outcome_err_map_err() {
    let out = Outcome::<i32, String>::Err("bad".into())
        .map_err(|s| s.len() as i32)
        .err()
        .value_or(-1);
    assert_eq!(out, 3);
}

#[test]
fn test_scenario_union3_second() {
    let fired = RefCell::new(Vec::new());
    Union3::<i32, &str, bool>::second("hi").match_with(
        |i| fired.borrow_mut().push(format!("f1({})", i)),
        |s| fired.borrow_mut().push(format!("f2({})", s)),
        |b| fired.borrow_mut().push(format!("f3({})", b)),
    );
    assert_eq!(fired.into_inner(), vec!["f2(hi)".to_string()]);
}
