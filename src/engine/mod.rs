//! The pool state machine: lifecycle, liquidity, and swaps.
//!
//! [`Amm`] hosts every pool behind one [`PoolStore`] and settles value
//! through injected collaborators.  Each public operation runs to
//! completion under `&mut self` — the single-writer discipline the
//! accounting requires, since deltas are computed from a reserve snapshot
//! that must stay valid until the write-back.  Embedders on concurrent
//! runtimes wrap the engine (or a per-pool shard of engines) in their own
//! lock; operations on different pools are independent.
//!
//! Every operation validates fully against its snapshot before issuing
//! any ledger or mover call, so an error never leaves partial state.

mod lifecycle;
mod liquidity;
mod swap;

#[cfg(test)]
mod proptest_properties;

use crate::domain::{Account, AssetId, OrientedPair, PoolView, Shares};
use crate::error::AmmError;
use crate::store::PoolStore;
use crate::traits::{AssetMover, EventSink, ShareLedger};

pub use lifecycle::MINIMUM_LIQUIDITY;

/// A multi-pool constant-product AMM engine.
///
/// Generic over its collaborators: `L` keeps LP share balances, `M`
/// moves the traded assets, and `E` observes pool lifecycle events (the
/// unit type is the no-op sink).
///
/// # Example
///
/// ```
/// use atoll_amm::adapters::{MemoryAssetMover, MemoryShareLedger};
/// use atoll_amm::domain::{Account, Amount, AssetId};
/// use atoll_amm::engine::Amm;
///
/// let asset_a = AssetId::from_bytes([1u8; 32]);
/// let asset_b = AssetId::from_bytes([2u8; 32]);
/// let lp = Account::from_bytes([7u8; 32]);
/// let treasury = Account::from_bytes([0xffu8; 32]);
///
/// let mut mover = MemoryAssetMover::new(treasury);
/// mover.credit(asset_a, lp, Amount::new(1_000_000));
/// mover.credit(asset_b, lp, Amount::new(1_000_000));
///
/// let mut amm = Amm::new(MemoryShareLedger::new(), mover, treasury);
/// amm.initialize_pool(asset_a, asset_b).expect("fresh pool");
///
/// let minted = amm
///     .add_liquidity(
///         lp,
///         asset_a,
///         asset_b,
///         Amount::new(1_000_000),
///         Amount::new(1_000_000),
///         Amount::ZERO,
///         Amount::ZERO,
///     )
///     .expect("first deposit");
/// assert_eq!(minted.get(), 1_000_000);
/// ```
#[derive(Debug)]
pub struct Amm<L, M, E = ()> {
    pub(crate) store: PoolStore,
    pub(crate) ledger: L,
    pub(crate) mover: M,
    pub(crate) events: E,
    /// The treasury account the mover settles pool-side transfers against.
    pub(crate) treasury: Account,
}

impl<L, M> Amm<L, M, ()>
where
    L: ShareLedger,
    M: AssetMover,
{
    /// Creates an engine with the no-op event sink.
    pub fn new(ledger: L, mover: M, treasury: Account) -> Self {
        Self::with_events(ledger, mover, (), treasury)
    }
}

impl<L, M, E> Amm<L, M, E>
where
    L: ShareLedger,
    M: AssetMover,
    E: EventSink,
{
    /// Creates an engine with an explicit event sink.
    pub fn with_events(ledger: L, mover: M, events: E, treasury: Account) -> Self {
        Self {
            store: PoolStore::new(),
            ledger,
            mover,
            events,
            treasury,
        }
    }

    /// Reads one pool's state, reserves in the caller's asset order.
    ///
    /// `pool_info(A, B)` and `pool_info(B, A)` report the same pool with
    /// the reserves swapped to match the argument order.  An absent pool
    /// reads as uninitialized with zero reserves.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::SameAssetNotAllowed`] if both assets are equal.
    pub fn pool_info(&self, asset_a: AssetId, asset_b: AssetId) -> Result<PoolView, AmmError> {
        let pair = OrientedPair::new(asset_a, asset_b)?;
        Ok(self.store.get(&pair))
    }

    /// Returns the total outstanding LP shares of one pool.
    ///
    /// Zero exactly when the pool is uninitialized; at least the seed
    /// amount afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::SameAssetNotAllowed`] if both assets are equal.
    pub fn share_supply(&self, asset_a: AssetId, asset_b: AssetId) -> Result<Shares, AmmError> {
        let pair = OrientedPair::new(asset_a, asset_b)?;
        Ok(self.store.share_supply(&pair.key()))
    }

    /// Borrows the share ledger collaborator.
    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    /// Borrows the asset mover collaborator.
    pub fn mover(&self) -> &M {
        &self.mover
    }

    /// Borrows the event sink collaborator.
    pub fn events(&self) -> &E {
        &self.events
    }
}


#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::testkit::{asset, empty_amm, seeded_amm};
    use crate::domain::Amount;
    use crate::error::AmmError;

    #[test]
    fn pool_info_absent_pool_reads_uninitialized() {
        let amm = empty_amm();
        let Ok(view) = amm.pool_info(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        assert!(!view.initialized());
        assert_eq!(view.reserve_first(), Amount::ZERO);
    }

    #[test]
    fn pool_info_same_asset_rejected() {
        let amm = empty_amm();
        assert_eq!(
            amm.pool_info(asset(1), asset(1)),
            Err(AmmError::SameAssetNotAllowed)
        );
    }

    #[test]
    fn pool_info_is_order_respecting() {
        let amm = seeded_amm(100, 200);
        let (Ok(forward), Ok(reversed)) = (
            amm.pool_info(asset(1), asset(2)),
            amm.pool_info(asset(2), asset(1)),
        ) else {
            panic!("expected Ok");
        };
        assert!(forward.initialized());
        assert!(reversed.initialized());
        assert_eq!(forward.reserve_first(), reversed.reserve_second());
        assert_eq!(forward.reserve_second(), reversed.reserve_first());
        assert_eq!(forward.reserve_first(), Amount::new(100));
    }

    #[test]
    fn share_supply_tracks_seed_plus_mint() {
        let amm = seeded_amm(1_000_000, 1_000_000);
        let Ok(supply) = amm.share_supply(asset(1), asset(2)) else {
            panic!("expected Ok");
        };
        // 1000 seed + sqrt(1e6 * 1e6)
        assert_eq!(supply.get(), 1_000 + 1_000_000);
    }
}
