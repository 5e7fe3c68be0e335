//! # Atoll AMM
//!
//! Multi-pool constant-product market maker: one engine instance hosts
//! any number of `x · y = k` pools, addressed canonically so every
//! asset pair maps to exactly one pool regardless of argument order.
//!
//! The engine owns pricing and accounting only.  Asset custody and LP
//! share bookkeeping live behind injected traits, so the same core runs
//! against in-memory test doubles or a real settlement layer.
//!
//! - **Canonical addressing** — pools are keyed by the SHA-256 digest of
//!   the pair's sorted asset ids; `(A, B)` and `(B, A)` reach one pool.
//! - **Floor pricing** — swap output is
//!   `⌊reserve_out × amount_in / (reserve_in + amount_in)⌋`, checked
//!   against the constant-product invariant before settlement.
//! - **Share accounting** — the first deposit mints the floor square
//!   root of the deposited product; later deposits mint pro rata; a
//!   1 000-share seed held by the burn address keeps every pool's share
//!   supply positive for its lifetime.
//! - **Checked arithmetic** — all products and quotients run through
//!   256-bit intermediates and surface overflow as typed errors.
//!
//! # Quick Start
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! atoll-amm = "0.1"
//! ```
//!
//! ## Initialize a pool, deposit, and swap
//!
//! ```rust
//! use atoll_amm::prelude::*;
//!
//! let usdc = AssetId::from_bytes([1u8; 32]);
//! let weth = AssetId::from_bytes([2u8; 32]);
//! let trader = Account::from_bytes([7u8; 32]);
//! let treasury = Account::from_bytes([0xffu8; 32]);
//!
//! // 1. Fund the trader in the in-memory settlement double
//! let mut mover = MemoryAssetMover::new(treasury);
//! mover.credit(usdc, trader, Amount::new(2_000_000));
//! mover.credit(weth, trader, Amount::new(2_000_000));
//!
//! // 2. Create the engine and the pool
//! let mut amm = Amm::new(MemoryShareLedger::new(), mover, treasury);
//! amm.initialize_pool(usdc, weth).expect("fresh pool");
//!
//! // 3. First deposit mints floor(sqrt(a × b)) shares
//! let minted = amm
//!     .add_liquidity(
//!         trader,
//!         usdc,
//!         weth,
//!         Amount::new(1_000_000),
//!         Amount::new(1_000_000),
//!         Amount::ZERO,
//!         Amount::ZERO,
//!     )
//!     .expect("first deposit");
//! assert_eq!(minted.get(), 1_000_000);
//!
//! // 4. Swap 100 000 USDC for WETH at the constant-product price
//! let out = amm
//!     .swap(
//!         trader,
//!         usdc,
//!         Amount::new(100_000),
//!         weth,
//!         Amount::ZERO,
//!         trader,
//!     )
//!     .expect("swap succeeded");
//! assert_eq!(out.get(), 90_909);
//! ```
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Consumer   │  calls initialize_pool / add_liquidity / swap / …
//! └──────┬──────┘
//!        │ &mut self, caller-oriented assets
//!        ▼
//! ┌─────────────┐
//! │   Engine     │  validates, prices against a reserve snapshot
//! └──────┬──────┘
//!        │ ShareLedger + AssetMover + EventSink traits
//!        ▼
//! ┌─────────────┐
//! │  Adapters    │  MemoryShareLedger, MemoryAssetMover, RecordingSink
//! └──────┬──────┘
//!        │ PoolKey = SHA-256(sorted pair)
//!        ▼
//! ┌─────────────┐
//! │    Store     │  canonical reserves + share supplies per pool
//! └─────────────┘
//! ```
//!
//! # Module Guide
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`domain`] | Newtype value types: [`Amount`](domain::Amount), [`Shares`](domain::Shares), [`AssetId`](domain::AssetId), [`PoolKey`](domain::PoolKey), … |
//! | [`traits`] | Collaborator seams: [`ShareLedger`](traits::ShareLedger), [`AssetMover`](traits::AssetMover), [`EventSink`](traits::EventSink) |
//! | [`engine`] | [`Amm`](engine::Amm): pool lifecycle, liquidity, and swap operations |
//! | [`store`]  | [`PoolStore`](store::PoolStore): canonical per-pool reserves and share supply |
//! | [`adapters`] | In-memory trait implementations for tests and embedding |
//! | [`math`]   | Checked 256-bit-intermediate arithmetic |
//! | [`error`]  | [`AmmError`](error::AmmError) unified error enum |
//! | [`prelude`] | Convenience re-exports for common types and traits |

pub mod adapters;
pub mod domain;
pub mod engine;
pub mod error;
pub mod math;
pub mod prelude;
pub mod store;
pub mod traits;
