//! Constant-product swaps.

use crate::domain::{Account, Amount, AssetId, OrientedPair, PoolView, Rounding};
use crate::error::AmmError;
use crate::math;
use crate::traits::{AssetMover, EventSink, ShareLedger};

use super::Amm;

impl<L, M, E> Amm<L, M, E>
where
    L: ShareLedger,
    M: AssetMover,
    E: EventSink,
{
    /// Swaps an exact input of `asset_in` for `asset_out`.
    ///
    /// Reserves are read once at entry, and the whole swap prices against
    /// that snapshot:
    ///
    /// ```text
    /// amount_out = ⌊reserve_out × amount_in / (reserve_in + amount_in)⌋
    /// ```
    ///
    /// The 256-bit intermediate in [`math::mul_div`] replaces the usual
    /// fixed-factor scale-up/scale-down; rounding is down, never up — a
    /// trader must not extract more than the curve allows.  The
    /// constant-product guard is then re-checked explicitly on the new
    /// reserves, so a rounding edge or a future pricing change cannot
    /// leak value.  Only after every check passes does the engine pull
    /// the input, pay `recipient`, and write the new reserves back.
    ///
    /// # Errors
    ///
    /// - [`AmmError::SameAssetNotAllowed`] if `asset_in == asset_out`.
    /// - [`AmmError::PoolNotExist`] if the pool is uninitialized.
    /// - [`AmmError::InvalidAmount`] if `amount_in` is zero.
    /// - [`AmmError::InsufficientLiquidity`] if the computed output would
    ///   break `k_new ≥ k_old`.
    /// - [`AmmError::MinAmountIssue`] if the output is below
    ///   `amount_out_min`.
    /// - Arithmetic faults from reserve updates.
    pub fn swap(
        &mut self,
        caller: Account,
        asset_in: AssetId,
        amount_in: Amount,
        asset_out: AssetId,
        amount_out_min: Amount,
        recipient: Account,
    ) -> Result<Amount, AmmError> {
        let pair = OrientedPair::new(asset_in, asset_out)?;
        let key = pair.key();

        let pool = self.store.get(&pair);
        if !pool.initialized() {
            return Err(AmmError::PoolNotExist);
        }
        if amount_in.is_zero() {
            return Err(AmmError::InvalidAmount);
        }

        let reserve_in = pool.reserve_first();
        let reserve_out = pool.reserve_second();

        let new_reserve_in = reserve_in
            .checked_add(&amount_in)
            .ok_or(AmmError::Overflow("reserve overflow on swap input"))?;
        let amount_out = Amount::new(math::mul_div(
            reserve_out.get(),
            amount_in.get(),
            new_reserve_in.get(),
            Rounding::Down,
        )?);
        let new_reserve_out = reserve_out
            .checked_sub(&amount_out)
            .ok_or(AmmError::Underflow("reserve underflow on swap output"))?;

        if !math::invariant_holds(
            reserve_in.get(),
            reserve_out.get(),
            new_reserve_in.get(),
            new_reserve_out.get(),
        ) {
            return Err(AmmError::InsufficientLiquidity);
        }
        if amount_out < amount_out_min {
            return Err(AmmError::MinAmountIssue);
        }

        self.mover
            .pull_from(asset_in, caller, self.treasury, amount_in)?;
        self.mover.push_to(asset_out, recipient, amount_out)?;
        self.store
            .put(&pair, PoolView::new(true, new_reserve_in, new_reserve_out));

        tracing::debug!(%key, %amount_in, %amount_out, "swap settled");
        Ok(amount_out)
    }
}
