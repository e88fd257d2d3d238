//! The guts. Three sum types, their tags, and the one construction error.

pub mod error;
pub mod maybe;
pub mod outcome;
pub mod tag;
pub mod union3;

pub use error::ConstructionError;
pub use maybe::Maybe;
pub use outcome::Outcome;
pub use tag::{MaybeTag, OutcomeTag, Union3Tag, Variants};
pub use union3::Union3;
