//! Construction misuse. The only fault a caller can trigger.

/// A payload required by the requested variant was missing.
///
/// Returned at the construction call. The value is never reclassified into
/// the other variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[repr(u8)]
pub enum ConstructionError {
    /// `Ok` requested without a payload.
    #[error("cannot construct Ok: payload is missing")]
    MissingOk = 1,
    /// `Err` requested without a payload.
    #[error("cannot construct Err: payload is missing")]
    MissingErr = 2,
}

impl ConstructionError {
    /// Name of the variant that could not be built.
    #[inline(always)]
    pub const fn variant(&self) -> &'static str {
        match self {
            ConstructionError::MissingOk => "Ok",
            ConstructionError::MissingErr => "Err",
        }
    }
}
