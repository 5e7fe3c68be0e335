//! Deterministic, order-independent pool addressing.

use core::fmt;

use sha2::{Digest, Sha256};

use super::AssetPair;

/// The storage key of one pool.
///
/// A `PoolKey` is the SHA-256 digest of the canonically sorted pair's
/// concatenated bytes, so deriving from `(A, B)` and `(B, A)` yields the
/// identical key.  The key doubles as the identifier of the pool's LP
/// share class in the [`ShareLedger`](crate::traits::ShareLedger).
///
/// # Examples
///
/// ```
/// use atoll_amm::domain::{AssetId, AssetPair, PoolKey};
///
/// let a = AssetId::from_bytes([1u8; 32]);
/// let b = AssetId::from_bytes([2u8; 32]);
/// let ab = PoolKey::derive(&AssetPair::new(a, b).expect("distinct"));
/// let ba = PoolKey::derive(&AssetPair::new(b, a).expect("distinct"));
/// assert_eq!(ab, ba);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PoolKey([u8; 32]);

impl PoolKey {
    /// Derives the key for a canonical pair.
    ///
    /// The digest preimage is `lo ‖ hi`, which is already order-free
    /// because [`AssetPair`] sorts on construction.
    #[must_use]
    pub fn derive(pair: &AssetPair) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(pair.lo().as_bytes());
        hasher.update(pair.hi().as_bytes());
        Self(hasher.finalize().into())
    }

    /// Returns the underlying 32-byte digest.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for PoolKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
