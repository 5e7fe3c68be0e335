//! Collaborator seams consumed by the engine.
//!
//! The engine owns pool state and pricing; everything that touches value
//! outside the pool record is delegated through these traits: the
//! [`ShareLedger`] (fungible multi-class LP share bookkeeping), the
//! [`AssetMover`] (external asset custody and transfer), and the
//! [`EventSink`] (pool lifecycle notifications).  Implementations are
//! assumed correct; the engine orders its calls so that no trait call is
//! issued before all engine-level validation has passed.

mod asset_mover;
mod event_sink;
mod share_ledger;

pub use asset_mover::AssetMover;
pub use event_sink::EventSink;
pub use share_ledger::ShareLedger;
