//! Sparse, order-agnostic pool state storage.
//!
//! One [`PoolStore`] hosts every pool: a map from [`PoolKey`] to the
//! canonical pool record plus a parallel map of total outstanding LP
//! shares.  The store's public contract is order-agnostic — callers read
//! and write [`PoolView`]s in *their* asset order, and the store remaps
//! to and from canonical sorted order at the boundary.  No validation
//! lives here; the store is pure addressing and retrieval.

use std::collections::HashMap;

use crate::domain::{Amount, OrientedPair, PoolKey, PoolView, Shares};

/// Canonical storage record: reserves in sorted asset order.
#[derive(Debug, Clone, Copy, Default)]
struct PoolState {
    initialized: bool,
    reserve_lo: Amount,
    reserve_hi: Amount,
}

/// The shared store for all pools and their share supplies.
///
/// Absent entries read as the zero record (uninitialized, zero reserves,
/// zero supply); writes replace the whole record.  Entries are never
/// removed — pools live for the store's lifetime.
#[derive(Debug, Default)]
pub struct PoolStore {
    pools: HashMap<PoolKey, PoolState>,
    supplies: HashMap<PoolKey, Shares>,
}

impl PoolStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads the pool addressed by `pair`, reserves in the caller's order.
    ///
    /// Returns the zero view if the pool does not exist — never an error.
    #[must_use]
    pub fn get(&self, pair: &OrientedPair) -> PoolView {
        let state = self.pools.get(&pair.key()).copied().unwrap_or_default();
        if pair.is_canonical() {
            PoolView::new(state.initialized, state.reserve_lo, state.reserve_hi)
        } else {
            PoolView::new(state.initialized, state.reserve_hi, state.reserve_lo)
        }
    }

    /// Replaces the pool record addressed by `pair`.
    ///
    /// `view` is interpreted in the caller's order and remapped to
    /// canonical order before it lands in storage.
    pub fn put(&mut self, pair: &OrientedPair, view: PoolView) {
        let (reserve_lo, reserve_hi) = if pair.is_canonical() {
            (view.reserve_first(), view.reserve_second())
        } else {
            (view.reserve_second(), view.reserve_first())
        };
        self.pools.insert(
            pair.key(),
            PoolState {
                initialized: view.initialized(),
                reserve_lo,
                reserve_hi,
            },
        );
    }

    /// Returns the total outstanding LP shares for a pool.
    ///
    /// Zero exactly when the pool is uninitialized.
    #[must_use]
    pub fn share_supply(&self, key: &PoolKey) -> Shares {
        self.supplies.get(key).copied().unwrap_or(Shares::ZERO)
    }

    /// Replaces the total outstanding LP shares for a pool.
    pub fn set_share_supply(&mut self, key: &PoolKey, supply: Shares) {
        self.supplies.insert(*key, supply);
    }
}
