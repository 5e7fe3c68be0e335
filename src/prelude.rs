//! Convenience re-exports for common types and traits.
//!
//! The prelude provides a single import to bring all commonly used items
//! into scope:
//!
//! ```rust
//! use atoll_amm::prelude::*;
//! ```
//!
//! This re-exports the domain value types, the engine, the collaborator
//! traits, the in-memory adapters, and the error types so that consumers
//! don't need to import from individual submodules.

// Re-export domain types
pub use crate::domain::{
    Account, Amount, AssetId, AssetPair, OrientedPair, PoolKey, PoolView, Rounding, Shares,
};

// Re-export the engine
pub use crate::engine::{Amm, MINIMUM_LIQUIDITY};

// Re-export collaborator traits
pub use crate::traits::{AssetMover, EventSink, ShareLedger};

// Re-export in-memory adapters
pub use crate::adapters::{MemoryAssetMover, MemoryShareLedger, PoolInitialized, RecordingSink};

// Re-export error types
pub use crate::error::{AmmError, Result};
