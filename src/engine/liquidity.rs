//! Deposits and withdrawals.

use crate::domain::{Account, Amount, AssetId, OrientedPair, PoolView, Rounding, Shares};
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
    /// Deposits both assets and mints LP shares to the caller.
    ///
    /// On the first deposit (both reserves zero — the seed mint consumed
    /// none) the supplied amounts are taken as-is and the mint is
    /// `⌊√(amount_a × amount_b)⌋`.  On every later deposit the engine
    /// computes, per side, the *optimal* amount that preserves the
    /// current reserve ratio:
    ///
    /// ```text
    /// optimal_a = ⌊amount_a_in × reserve_a / reserve_b⌋
    /// optimal_b = ⌊amount_b_in × reserve_b / reserve_a⌋
    /// ```
    ///
    /// and it is the optimal amounts — not the raw requests — that are
    /// pulled from the caller and credited to reserves.  Each optimal
    /// amount must not exceed the caller's corresponding `*_in_min`
    /// bound.  Despite the name, the bound is an upper cap on what the
    /// engine may pull; callers rely on it as their slippage guard.
    /// The mint is `⌊min(optimal_a, optimal_b scaled by supply/reserve)⌋`.
    ///
    /// # Errors
    ///
    /// - [`AmmError::SameAssetNotAllowed`] if both assets are equal.
    /// - [`AmmError::PoolNotExist`] if the pool is uninitialized.
    /// - [`AmmError::IncorrectAmount`] if an optimal amount exceeds its
    ///   bound.
    /// - [`AmmError::LiquidityMustBeNotZero`] if the deposit would mint
    ///   zero shares.
    /// - [`AmmError::InsufficientBalance`] if the caller cannot cover an
    ///   asset pull.  If the second pull fails after the first settled,
    ///   the first leg is refunded before the error propagates.
    /// - Arithmetic faults from reserve or supply updates.
    ///
    /// All validation errors are raised before any transfer or state
    /// write; a failed transfer leaves every balance as it found it.
    #[allow(clippy::too_many_arguments)]
    pub fn add_liquidity(
        &mut self,
        caller: Account,
        asset_a: AssetId,
        asset_b: AssetId,
        amount_a_in: Amount,
        amount_b_in: Amount,
        amount_a_in_min: Amount,
        amount_b_in_min: Amount,
    ) -> Result<Shares, AmmError> {
        let pair = OrientedPair::new(asset_a, asset_b)?;
        let key = pair.key();

        let pool = self.store.get(&pair);
        if !pool.initialized() {
            return Err(AmmError::PoolNotExist);
        }

        let reserve_a = pool.reserve_first();
        let reserve_b = pool.reserve_second();
        let supply = self.store.share_supply(&key);

        let (pull_a, pull_b, minted) = if reserve_a.is_zero() && reserve_b.is_zero() {
            let minted = math::isqrt_product(amount_a_in.get(), amount_b_in.get());
            (amount_a_in, amount_b_in, Shares::new(minted))
        } else {
            let optimal_a = Amount::new(math::mul_div(
                amount_a_in.get(),
                reserve_a.get(),
                reserve_b.get(),
                Rounding::Down,
            )?);
            let optimal_b = Amount::new(math::mul_div(
                amount_b_in.get(),
                reserve_b.get(),
                reserve_a.get(),
                Rounding::Down,
            )?);
            if optimal_a > amount_a_in_min {
                return Err(AmmError::IncorrectAmount);
            }
            if optimal_b > amount_b_in_min {
                return Err(AmmError::IncorrectAmount);
            }

            let by_a = math::mul_div(
                optimal_a.get(),
                supply.get(),
                reserve_a.get(),
                Rounding::Down,
            )?;
            let by_b = math::mul_div(
                optimal_b.get(),
                supply.get(),
                reserve_b.get(),
                Rounding::Down,
            )?;
            (optimal_a, optimal_b, Shares::new(by_a.min(by_b)))
        };

        if minted.is_zero() {
            return Err(AmmError::LiquidityMustBeNotZero);
        }

        let new_reserve_a = reserve_a
            .checked_add(&pull_a)
            .ok_or(AmmError::Overflow("reserve overflow on deposit"))?;
        let new_reserve_b = reserve_b
            .checked_add(&pull_b)
            .ok_or(AmmError::Overflow("reserve overflow on deposit"))?;
        let new_supply = supply
            .checked_add(&minted)
            .ok_or(AmmError::Overflow("share supply overflow on deposit"))?;

        self.mover
            .pull_from(pair.first(), caller, self.treasury, pull_a)?;
        if let Err(unpaid) = self
            .mover
            .pull_from(pair.second(), caller, self.treasury, pull_b)
        {
            // Refund the settled first leg; the treasury holds at least
            // pull_a here, so the push cannot come up short.
            self.mover.push_to(pair.first(), caller, pull_a)?;
            return Err(unpaid);
        }
        self.ledger.mint(caller, key, minted)?;
        self.store.set_share_supply(&key, new_supply);
        self.store
            .put(&pair, PoolView::new(true, new_reserve_a, new_reserve_b));

        tracing::debug!(%key, %pull_a, %pull_b, %minted, "liquidity added");
        Ok(minted)
    }

    /// Burns `shares` from the caller and pays out both reserves pro rata
    /// to `recipient`.
    ///
    /// Each side pays `⌊shares × reserve / supply⌋`.  Effects precede
    /// interactions: reserves and supply are written down and the shares
    /// burned before any asset leaves the treasury.  The seed shares held
    /// by [`Account::BURN`](crate::domain::Account::BURN) can never be
    /// burned, so a pool is never drained to zero.
    ///
    /// # Errors
    ///
    /// - [`AmmError::SameAssetNotAllowed`] if both assets are equal.
    /// - [`AmmError::PoolNotExist`] if the pool is uninitialized.
    /// - [`AmmError::LiquidityMustBeNotZero`] if `shares` is zero.
    /// - [`AmmError::InsufficientBalance`] if the caller holds fewer
    ///   than `shares`.
    /// - Arithmetic faults from reserve or supply updates.
    pub fn remove_liquidity(
        &mut self,
        caller: Account,
        recipient: Account,
        asset_a: AssetId,
        asset_b: AssetId,
        shares: Shares,
    ) -> Result<(Amount, Amount), AmmError> {
        let pair = OrientedPair::new(asset_a, asset_b)?;
        let key = pair.key();

        let pool = self.store.get(&pair);
        if !pool.initialized() {
            return Err(AmmError::PoolNotExist);
        }
        if shares.is_zero() {
            return Err(AmmError::LiquidityMustBeNotZero);
        }
        // Checked up front so the burn below cannot fail after the state
        // writes.
        if self.ledger.balance_of(&caller, &key) < shares {
            return Err(AmmError::InsufficientBalance(
                "share balance too low to burn",
            ));
        }

        let reserve_a = pool.reserve_first();
        let reserve_b = pool.reserve_second();
        let supply = self.store.share_supply(&key);

        let amount_a_out = Amount::new(math::mul_div(
            shares.get(),
            reserve_a.get(),
            supply.get(),
            Rounding::Down,
        )?);
        let amount_b_out = Amount::new(math::mul_div(
            shares.get(),
            reserve_b.get(),
            supply.get(),
            Rounding::Down,
        )?);

        let new_reserve_a = reserve_a
            .checked_sub(&amount_a_out)
            .ok_or(AmmError::Underflow("reserve underflow on withdrawal"))?;
        let new_reserve_b = reserve_b
            .checked_sub(&amount_b_out)
            .ok_or(AmmError::Underflow("reserve underflow on withdrawal"))?;
        let new_supply = supply
            .checked_sub(&shares)
            .ok_or(AmmError::Underflow("share supply underflow on withdrawal"))?;

        self.store
            .put(&pair, PoolView::new(true, new_reserve_a, new_reserve_b));
        self.store.set_share_supply(&key, new_supply);
        self.ledger.burn(caller, key, shares)?;
        // The treasury custodies every pool's reserves and the payouts
        // are bounded by this pool's, so neither push can come up short.
        self.mover.push_to(pair.first(), recipient, amount_a_out)?;
        self.mover.push_to(pair.second(), recipient, amount_b_out)?;

        tracing::debug!(%key, %shares, %amount_a_out, %amount_b_out, "liquidity removed");
        Ok((amount_a_out, amount_b_out))
    }
}
