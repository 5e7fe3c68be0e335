//! Unified error types for the Atoll AMM engine.
//!
//! Every fallible operation in the crate returns [`AmmError`].  Each
//! precondition violation has its own named variant so callers and tests
//! can assert on the exact failure; none of them is retryable, and every
//! error aborts the whole operation before any state change.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, AmmError>;

/// The unified error enum for all engine operations.
///
/// Variants fall into three groups:
///
/// - **Precondition violations** — bad caller input, detected before any
///   transfer or state write (`PoolAlreadyExists` through `MinAmountIssue`).
/// - **Arithmetic faults** — `Overflow`, `Underflow`, `DivisionByZero`,
///   each carrying a static description of the failing computation.
/// - **Collaborator faults** — `InsufficientBalance`, surfaced by a
///   [`ShareLedger`](crate::traits::ShareLedger) or
///   [`AssetMover`](crate::traits::AssetMover) implementation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AmmError {
    /// Initialization attempted on a pool that already exists.
    #[error("pool already exists for this asset pair")]
    PoolAlreadyExists,

    /// A liquidity or swap operation referenced an uninitialized pool.
    #[error("pool does not exist for this asset pair")]
    PoolNotExist,

    /// Initialization with the same asset on both sides.
    #[error("a pool requires two distinct assets")]
    SameAssetNotAllowed,

    /// A computed optimal deposit amount exceeds the caller's stated bound.
    #[error("optimal deposit amount exceeds the caller's bound")]
    IncorrectAmount,

    /// Zero liquidity supplied to a removal, or a deposit that would mint
    /// zero shares.
    #[error("liquidity must be not zero")]
    LiquidityMustBeNotZero,

    /// Zero input amount supplied to a swap.
    #[error("swap input amount must be non-zero")]
    InvalidAmount,

    /// The computed swap output would violate the constant-product
    /// invariant.
    #[error("insufficient liquidity for the requested swap")]
    InsufficientLiquidity,

    /// The computed swap output falls below the caller's minimum.
    #[error("swap output is below the caller's minimum")]
    MinAmountIssue,

    /// An intermediate computation exceeded the representable range.
    #[error("arithmetic overflow: {0}")]
    Overflow(&'static str),

    /// A subtraction would have produced a negative quantity.
    #[error("arithmetic underflow: {0}")]
    Underflow(&'static str),

    /// A divisor was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// A ledger or mover balance was too low to settle the operation.
    #[error("insufficient balance: {0}")]
    InsufficientBalance(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_condition() {
        assert_eq!(
            AmmError::PoolNotExist.to_string(),
            "pool does not exist for this asset pair"
        );
        assert_eq!(
            AmmError::Overflow("reserve overflow").to_string(),
            "arithmetic overflow: reserve overflow"
        );
    }

    #[test]
    fn variants_are_distinguishable() {
        assert_ne!(AmmError::PoolAlreadyExists, AmmError::PoolNotExist);
        assert_ne!(
            AmmError::Overflow("a"),
            AmmError::Overflow("b"),
            "context strings participate in equality"
        );
    }

    #[test]
    fn copy_semantics() {
        let e = AmmError::MinAmountIssue;
        let f = e;
        assert_eq!(e, f);
    }
}
