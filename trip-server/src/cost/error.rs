//! Cost estimation error types.

/// Reasons a cost estimate cannot be produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CostError {
    #[error("party must have at least one participant")]
    InvalidParty,

    #[error("trip must last at least one day")]
    InvalidDuration,
}
