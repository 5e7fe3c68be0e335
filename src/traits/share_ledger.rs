//! Fungible multi-class share ledger seam.

use crate::domain::{Account, PoolKey, Shares};
use crate::error::AmmError;

/// Bookkeeping for LP shares across all pools.
///
/// One fungible ledger holds every pool's shares, keyed by share class —
/// the pool's [`PoolKey`].  The engine is the only minter and burner;
/// holder-to-holder transfers, if the ledger supports them, are invisible
/// to the engine because only [`ShareLedger::balance_of`] and the total
/// supply (tracked by the engine's store) matter to pool accounting.
///
/// # Contract
///
/// - `mint` then `burn` of the same amount restores the holder's balance.
/// - `burn` must fail, without effect, if the holder's balance is short.
/// - Balances never go negative.
pub trait ShareLedger {
    /// Credits `amount` shares of `class` to `holder`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::Overflow`] if the holder balance would wrap.
    fn mint(&mut self, holder: Account, class: PoolKey, amount: Shares) -> Result<(), AmmError>;

    /// Debits `amount` shares of `class` from `holder`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::InsufficientBalance`] if `holder` holds fewer
    /// than `amount` shares of `class`.
    fn burn(&mut self, holder: Account, class: PoolKey, amount: Shares) -> Result<(), AmmError>;

    /// Returns the holder's balance in the given share class.
    ///
    /// Unknown holders and classes read as zero.
    fn balance_of(&self, holder: &Account, class: &PoolKey) -> Shares;
}
