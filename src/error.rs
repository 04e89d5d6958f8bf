//! Error kinds surfaced across the decimal-text and arithmetic boundaries.

/// Errors produced by [`crate::BigInt`] construction and arithmetic.
///
/// Programmer errors (out-of-range limb index, malformed shift amount) are not
/// represented here; those remain panics, matching the contract in the design
/// notes.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum BigIntError {
    /// Decimal text was empty, or contained a non-digit after the optional sign.
    #[error("invalid decimal integer: {0}")]
    ParseError(String),

    /// Division or remainder with a zero divisor.
    #[error("division by zero")]
    DivisionByZero,

    /// The allocator could not satisfy a limb buffer growth request.
    #[error("out of memory growing limb buffer to {requested} limbs")]
    OutOfMemory {
        /// Requested limb count that could not be allocated.
        requested: usize,
    },
}

pub type Result<T> = std::result::Result<T, BigIntError>;
