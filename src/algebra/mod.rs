//! Sum-type algebra. Laws as witnesses you can check at runtime.

pub mod laws;

pub use laws::{Combinator, DispatchWitness, Law, LawWitness, ShortCircuitWitness};
