//! Reference implementations of the collaborator traits.
//!
//! In-memory, single-process implementations of
//! [`ShareLedger`](crate::traits::ShareLedger),
//! [`AssetMover`](crate::traits::AssetMover) and
//! [`EventSink`](crate::traits::EventSink).  They back the crate's tests
//! and give embedders a working engine out of the box; production
//! deployments substitute their own ledger and custody layers.

mod memory;

pub use memory::{MemoryAssetMover, MemoryShareLedger, PoolInitialized, RecordingSink};
