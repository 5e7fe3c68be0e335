//! Pool lifecycle notification seam.

use crate::domain::{AssetId, PoolKey};

/// Observer hook for pool lifecycle events.
///
/// Exactly one event exists: pool initialization.  The unit type is a
/// no-op sink, so embedders that don't observe events pay nothing.
pub trait EventSink {
    /// Called after a pool has been successfully initialized.
    ///
    /// `asset_a` and `asset_b` arrive in the initializer's argument
    /// order; `key` is the canonical pool key both orders share.
    fn pool_initialized(&mut self, asset_a: AssetId, asset_b: AssetId, key: PoolKey);
}

impl EventSink for () {
    fn pool_initialized(&mut self, _asset_a: AssetId, _asset_b: AssetId, _key: PoolKey) {}
}
