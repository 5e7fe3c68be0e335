//! Pool creation.

use crate::domain::{Account, Amount, AssetId, OrientedPair, PoolView, Shares};
use crate::error::AmmError;
use crate::traits::{AssetMover, EventSink, ShareLedger};

use super::Amm;

/// Seed shares minted to [`Account::BURN`] at pool creation.
///
/// The seed fixes a non-zero share price floor: a first depositor cannot
/// mint disproportionate shares for a dust deposit by donating reserves
/// first, because these 1000 shares always exist and are never
/// withdrawable.
pub const MINIMUM_LIQUIDITY: Shares = Shares::new(1_000);

impl<L, M, E> Amm<L, M, E>
where
    L: ShareLedger,
    M: AssetMover,
    E: EventSink,
{
    /// Creates the pool for an unordered asset pair, exactly once.
    ///
    /// Marks the canonical pool initialized with zero reserves, mints the
    /// [`MINIMUM_LIQUIDITY`] seed to [`Account::BURN`], sets the share
    /// supply to the seed, and notifies the event sink.  The first
    /// deposit afterwards finds both reserves zero — the seed consumed
    /// none.
    ///
    /// # Errors
    ///
    /// - [`AmmError::SameAssetNotAllowed`] if both assets are equal, in
    ///   either argument order.
    /// - [`AmmError::PoolAlreadyExists`] if the pool was created before,
    ///   under either argument order.
    pub fn initialize_pool(&mut self, asset_a: AssetId, asset_b: AssetId) -> Result<(), AmmError> {
        let pair = OrientedPair::new(asset_a, asset_b)?;
        let key = pair.key();

        if self.store.get(&pair).initialized() {
            return Err(AmmError::PoolAlreadyExists);
        }

        self.store
            .put(&pair, PoolView::new(true, Amount::ZERO, Amount::ZERO));
        self.ledger.mint(Account::BURN, key, MINIMUM_LIQUIDITY)?;
        self.store.set_share_supply(&key, MINIMUM_LIQUIDITY);
        self.events.pool_initialized(asset_a, asset_b, key);
        tracing::info!(%key, "pool initialized");
        Ok(())
    }
}
