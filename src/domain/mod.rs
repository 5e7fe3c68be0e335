//! Fundamental domain value types for the AMM engine.
//!
//! Newtypes with validated constructors enforce the engine's invariants at
//! the type level: quantities ([`Amount`], [`Shares`]) carry checked
//! arithmetic, identities ([`AssetId`], [`Account`]) are opaque 32-byte
//! values, and pair addressing ([`AssetPair`], [`OrientedPair`],
//! [`PoolKey`]) guarantees that both orderings of the same two assets
//! resolve to one pool.

mod account;
mod amount;
mod asset_id;
mod asset_pair;
mod pool_key;
mod pool_view;
mod rounding;
mod shares;

pub use account::Account;
pub use amount::Amount;
pub use asset_id::AssetId;
pub use asset_pair::{AssetPair, OrientedPair};
pub use pool_key::PoolKey;
pub use pool_view::PoolView;
pub use rounding::Rounding;
pub use shares::Shares;
