use thiserror::Error;

/// Violations of the resource buffer contract.
///
/// None of these are recoverable inside a trader: they mean the exchange
/// handed over more than was asked for, or a trader tried to ship something
/// it does not hold.
#[derive(Debug, Error, PartialEq)]
pub enum MaterialError {
    #[error("pushing {pushed} would exceed buffer capacity (space left: {space})")]
    CapacityExceeded { pushed: f64, space: f64 },

    #[error("cannot pop from an empty buffer")]
    Empty,

    #[error("buffer capacity must be positive and finite, got {0}")]
    InvalidCapacity(f64),

    #[error("material quantity must be non-negative, got {0}")]
    NegativeQuantity(f64),
}

pub type MaterialResult<T> = Result<T, MaterialError>;
