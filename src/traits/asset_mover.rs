//! External asset transfer seam.

use crate::domain::{Account, Amount, AssetId};
use crate::error::AmmError;

/// Moves traded assets between accounts on the engine's behalf.
///
/// The mover custodies every account's asset balances, including the
/// pool treasury account the engine settles through.  Fee-on-transfer or
/// otherwise non-standard assets are the mover's problem to normalize;
/// the engine credits reserves with exactly the amounts it requested.
///
/// # Contract
///
/// - Transfers are atomic: they either move the full amount or fail with
///   no effect.
/// - A failed transfer must leave both balances untouched.
pub trait AssetMover {
    /// Pulls `amount` of `asset` from `from` into `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientBalance`] if `from` cannot cover
    /// `amount` (balance or allowance).
    fn pull_from(
        &mut self,
        asset: AssetId,
        from: Account,
        to: Account,
        amount: Amount,
    ) -> Result<(), AmmError>;

    /// Pushes `amount` of `asset` out of the pool treasury to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientBalance`] if the pool treasury
    /// cannot cover `amount`.
    fn push_to(&mut self, asset: AssetId, to: Account, amount: Amount) -> Result<(), AmmError>;
}
