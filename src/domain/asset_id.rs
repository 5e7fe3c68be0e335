//! Chain-agnostic asset identifier.

use core::fmt;

/// A generic, chain-agnostic identifier for a tradable asset.
///
/// Wraps a fixed-size `[u8; 32]` byte array.  All 32-byte sequences are
/// valid identifiers, so construction is infallible.  The derived `Ord`
/// is lexicographic on the bytes; it defines the canonical pair order
/// used for pool addressing.
///
/// # Examples
///
/// ```
/// use atoll_amm::domain::AssetId;
///
/// let id = AssetId::from_bytes([1u8; 32]);
/// assert_eq!(id.as_bytes(), [1u8; 32]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AssetId([u8; 32]);

impl AssetId {
    /// Creates an `AssetId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the underlying 32-byte representation.
    #[must_use]
    pub const fn as_bytes(&self) -> [u8; 32] {
        self.0
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
