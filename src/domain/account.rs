//! Holder identity for assets and LP shares.

use core::fmt;

/// An opaque account identity.
///
/// Accounts appear as the counterparty of every asset transfer and as the
/// holder side of every share mint and burn.  The engine itself owns one
/// account (the pool treasury) and never interprets account bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Account([u8; 32]);

impl Account {
    /// The permanently inaccessible holder.
    ///
    /// Seed liquidity is minted here at pool initialization; no key can
    /// sign for the all-zero account, so those shares are never burnable
    /// and the share supply of an initialized pool never drops below the
    /// seed.
    pub const BURN: Self = Self([0u8; 32]);

    /// Creates an `Account` from raw bytes.
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

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}
