#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]

pub mod core;
pub mod algebra;

/// Prelude for convenient imports of primary API types.
pub mod prelude {
    pub use crate::core::{
        ConstructionError, Maybe, MaybeTag, Outcome, OutcomeTag, Union3, Union3Tag, Variants,
    };
}

// Re-export primary types at crate root for convenience.
pub use crate::core::{
    ConstructionError, Maybe, MaybeTag, Outcome, OutcomeTag, Union3, Union3Tag, Variants,
};
