//! Canonical and caller-oriented asset pairs.

use super::{AssetId, PoolKey};
use crate::error::AmmError;

/// A canonically sorted pair of distinct assets.
///
/// The constructor sorts its arguments so that `lo() < hi()` by
/// [`AssetId`] byte order, which makes the pair — and everything keyed by
/// it — independent of the order a caller supplied the assets in.
///
/// # Examples
///
/// ```
/// use atoll_amm::domain::{AssetId, AssetPair};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
///
/// let pair = AssetPair::new(b, a).expect("distinct assets");
/// assert_eq!(pair.lo(), a);
/// assert_eq!(pair.hi(), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssetPair {
    lo: AssetId,
    hi: AssetId,
}

impl AssetPair {
    /// Creates a new canonically sorted `AssetPair`.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::SameAssetNotAllowed`] if both sides are the
    /// same asset.
    pub fn new(asset_1: AssetId, asset_2: AssetId) -> Result<Self, AmmError> {
        if asset_1 == asset_2 {
            return Err(AmmError::SameAssetNotAllowed);
        }
        let (lo, hi) = if asset_1 < asset_2 {
            (asset_1, asset_2)
        } else {
            (asset_2, asset_1)
        };
        Ok(Self { lo, hi })
    }

    /// Returns the lower asset of the canonical order.
    #[must_use]
    pub const fn lo(&self) -> AssetId {
        self.lo
    }

    /// Returns the higher asset of the canonical order.
    #[must_use]
    pub const fn hi(&self) -> AssetId {
        self.hi
    }

    /// Returns `true` if the given asset is part of this pair.
    #[must_use]
    pub fn contains(&self, asset: &AssetId) -> bool {
        self.lo == *asset || self.hi == *asset
    }
}

/// An [`AssetPair`] that remembers the caller's supplied order.
///
/// The engine and store work in the caller's orientation — "first" and
/// "second" are whatever the caller passed — while storage stays
/// canonical.  The pool key is derived once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientedPair {
    pair: AssetPair,
    key: PoolKey,
    /// `true` when the caller's first asset is the canonical `lo`.
    canonical: bool,
}

impl OrientedPair {
    /// Creates an oriented pair from the caller's argument order.
    ///
    /// # Errors
    ///
    /// Returns [`AmmError::SameAssetNotAllowed`] if both sides are the
    /// same asset.
    pub fn new(first: AssetId, second: AssetId) -> Result<Self, AmmError> {
        let pair = AssetPair::new(first, second)?;
        let key = PoolKey::derive(&pair);
        Ok(Self {
            pair,
            key,
            canonical: first == pair.lo(),
        })
    }

    /// Returns the canonical pair.
    #[must_use]
    pub const fn pair(&self) -> &AssetPair {
        &self.pair
    }

    /// Returns the pool key shared by both orientations.
    #[must_use]
    pub const fn key(&self) -> PoolKey {
        self.key
    }

    /// Returns the caller's first asset.
    #[must_use]
    pub const fn first(&self) -> AssetId {
        if self.canonical {
            self.pair.lo()
        } else {
            self.pair.hi()
        }
    }

    /// Returns the caller's second asset.
    #[must_use]
    pub const fn second(&self) -> AssetId {
        if self.canonical {
            self.pair.hi()
        } else {
            self.pair.lo()
        }
    }

    /// Returns `true` if the caller's order matches the canonical order.
    #[must_use]
    pub const fn is_canonical(&self) -> bool {
        self.canonical
    }
}
