//! Caller-oriented projection of one pool's state.

use super::Amount;

/// One pool's state, with reserves in the caller's asset order.
///
/// The backing store keeps reserves in canonical sorted order; a
/// `PoolView` is what comes out of — and goes back into — the store for a
/// given [`OrientedPair`](super::OrientedPair), with `reserve_first`
/// matching the caller's first asset.
///
/// An uninitialized pool reads as the zero view: `initialized == false`
/// and both reserves zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PoolView {
    initialized: bool,
    reserve_first: Amount,
    reserve_second: Amount,
}

impl PoolView {
    /// Creates a view from its parts.
    #[must_use]
    pub const fn new(initialized: bool, reserve_first: Amount, reserve_second: Amount) -> Self {
        Self {
            initialized,
            reserve_first,
            reserve_second,
        }
    }

    /// Returns `true` once the pool has been created.
    ///
    /// Pools are never destroyed, so this never reverts to `false`.
    #[must_use]
    pub const fn initialized(&self) -> bool {
        self.initialized
    }

    /// Reserve of the caller's first asset.
    #[must_use]
    pub const fn reserve_first(&self) -> Amount {
        self.reserve_first
    }

    /// Reserve of the caller's second asset.
    #[must_use]
    pub const fn reserve_second(&self) -> Amount {
        self.reserve_second
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_uninitialized_zero() {
        let view = PoolView::default();
        assert!(!view.initialized());
        assert_eq!(view.reserve_first(), Amount::ZERO);
        assert_eq!(view.reserve_second(), Amount::ZERO);
    }

    #[test]
    fn accessors() {
        let view = PoolView::new(true, Amount::new(10), Amount::new(20));
        assert!(view.initialized());
        assert_eq!(view.reserve_first(), Amount::new(10));
        assert_eq!(view.reserve_second(), Amount::new(20));
    }
}
