//! HashMap-backed ledger, mover, and event recorder.

use std::collections::HashMap;

use crate::domain::{Account, Amount, AssetId, PoolKey, Shares};
use crate::error::AmmError;
use crate::traits::{AssetMover, EventSink, ShareLedger};

/// An in-memory multi-class share ledger.
///
/// Balances are keyed by `(holder, class)`; unknown entries read as zero.
#[derive(Debug, Default)]
pub struct MemoryShareLedger {
    balances: HashMap<(Account, PoolKey), Shares>,
}

impl MemoryShareLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ShareLedger for MemoryShareLedger {
    fn mint(&mut self, holder: Account, class: PoolKey, amount: Shares) -> Result<(), AmmError> {
        let slot = self.balances.entry((holder, class)).or_insert(Shares::ZERO);
        *slot = slot
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("share balance overflow on mint"))?;
        Ok(())
    }

    fn burn(&mut self, holder: Account, class: PoolKey, amount: Shares) -> Result<(), AmmError> {
        let slot = self.balances.entry((holder, class)).or_insert(Shares::ZERO);
        *slot = slot
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientBalance("share balance too low to burn"))?;
        Ok(())
    }

    fn balance_of(&self, holder: &Account, class: &PoolKey) -> Shares {
        self.balances
            .get(&(*holder, *class))
            .copied()
            .unwrap_or(Shares::ZERO)
    }
}

/// An in-memory asset custodian.
///
/// Holds per-`(asset, account)` balances and knows which account is the
/// pool treasury, so [`AssetMover::push_to`] can debit it.  Tests fund
/// accounts through [`MemoryAssetMover::credit`].
#[derive(Debug)]
pub struct MemoryAssetMover {
    treasury: Account,
    balances: HashMap<(AssetId, Account), Amount>,
}

impl MemoryAssetMover {
    /// Creates a mover settling against the given treasury account.
    #[must_use]
    pub fn new(treasury: Account) -> Self {
        Self {
            treasury,
            balances: HashMap::new(),
        }
    }

    /// Credits `amount` of `asset` to `account` out of thin air.
    ///
    /// Funding helper for tests and examples; saturates rather than
    /// erroring because it models an external faucet, not a transfer.
    pub fn credit(&mut self, asset: AssetId, account: Account, amount: Amount) {
        let slot = self.balances.entry((asset, account)).or_insert(Amount::ZERO);
        *slot = slot.checked_add(&amount).unwrap_or(Amount::MAX);
    }

    /// Returns the current balance of `account` in `asset`.
    #[must_use]
    pub fn balance(&self, asset: &AssetId, account: &Account) -> Amount {
        self.balances
            .get(&(*asset, *account))
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    fn transfer(
        &mut self,
        asset: AssetId,
        from: Account,
        to: Account,
        amount: Amount,
        short: &'static str,
    ) -> Result<(), AmmError> {
        let from_balance = self.balance(&asset, &from);
        let remaining = from_balance
            .checked_sub(&amount)
            .ok_or(AmmError::InsufficientBalance(short))?;
        if from == to {
            return Ok(());
        }
        let to_balance = self
            .balance(&asset, &to)
            .checked_add(&amount)
            .ok_or(AmmError::Overflow("asset balance overflow on transfer"))?;
        self.balances.insert((asset, from), remaining);
        self.balances.insert((asset, to), to_balance);
        Ok(())
    }
}

impl AssetMover for MemoryAssetMover {
    fn pull_from(
        &mut self,
        asset: AssetId,
        from: Account,
        to: Account,
        amount: Amount,
    ) -> Result<(), AmmError> {
        self.transfer(asset, from, to, amount, "sender asset balance too low")
    }

    fn push_to(&mut self, asset: AssetId, to: Account, amount: Amount) -> Result<(), AmmError> {
        let treasury = self.treasury;
        self.transfer(asset, treasury, to, amount, "pool asset balance too low")
    }
}

/// A pool-initialization event captured by [`RecordingSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolInitialized {
    /// First asset, in the initializer's argument order.
    pub asset_a: AssetId,
    /// Second asset, in the initializer's argument order.
    pub asset_b: AssetId,
    /// Canonical key of the new pool.
    pub key: PoolKey,
}

/// An [`EventSink`] that appends every notification to a vector.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Vec<PoolInitialized>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the captured events in emission order.
    #[must_use]
    pub fn events(&self) -> &[PoolInitialized] {
        &self.events
    }
}

impl EventSink for RecordingSink {
    fn pool_initialized(&mut self, asset_a: AssetId, asset_b: AssetId, key: PoolKey) {
        self.events.push(PoolInitialized {
            asset_a,
            asset_b,
            key,
        });
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::AssetPair;

    fn asset(byte: u8) -> AssetId {
        AssetId::from_bytes([byte; 32])
    }

    fn account(byte: u8) -> Account {
        Account::from_bytes([byte; 32])
    }

    fn class() -> PoolKey {
        let Ok(pair) = AssetPair::new(asset(1), asset(2)) else {
            panic!("distinct assets expected");
        };
        PoolKey::derive(&pair)
    }

    // -- MemoryShareLedger --------------------------------------------------

    #[test]
    fn mint_then_burn_round_trips() {
        let mut ledger = MemoryShareLedger::new();
        let holder = account(7);
        let Ok(()) = ledger.mint(holder, class(), Shares::new(500)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(&holder, &class()), Shares::new(500));
        let Ok(()) = ledger.burn(holder, class(), Shares::new(500)) else {
            panic!("expected Ok");
        };
        assert_eq!(ledger.balance_of(&holder, &class()), Shares::ZERO);
    }

    #[test]
    fn burn_beyond_balance_rejected_without_effect() {
        let mut ledger = MemoryShareLedger::new();
        let holder = account(7);
        let Ok(()) = ledger.mint(holder, class(), Shares::new(100)) else {
            panic!("expected Ok");
        };
        let result = ledger.burn(holder, class(), Shares::new(101));
        assert!(matches!(result, Err(AmmError::InsufficientBalance(_))));
        assert_eq!(ledger.balance_of(&holder, &class()), Shares::new(100));
    }

    #[test]
    fn unknown_holder_reads_zero() {
        let ledger = MemoryShareLedger::new();
        assert_eq!(ledger.balance_of(&account(9), &class()), Shares::ZERO);
    }

    // -- MemoryAssetMover ---------------------------------------------------

    #[test]
    fn pull_moves_between_accounts() {
        let treasury = account(0xff);
        let mut mover = MemoryAssetMover::new(treasury);
        mover.credit(asset(1), account(7), Amount::new(1_000));

        let Ok(()) = mover.pull_from(asset(1), account(7), treasury, Amount::new(400)) else {
            panic!("expected Ok");
        };
        assert_eq!(mover.balance(&asset(1), &account(7)), Amount::new(600));
        assert_eq!(mover.balance(&asset(1), &treasury), Amount::new(400));
    }

    #[test]
    fn pull_beyond_balance_rejected_without_effect() {
        let treasury = account(0xff);
        let mut mover = MemoryAssetMover::new(treasury);
        mover.credit(asset(1), account(7), Amount::new(100));

        let result = mover.pull_from(asset(1), account(7), treasury, Amount::new(101));
        assert!(matches!(result, Err(AmmError::InsufficientBalance(_))));
        assert_eq!(mover.balance(&asset(1), &account(7)), Amount::new(100));
        assert_eq!(mover.balance(&asset(1), &treasury), Amount::ZERO);
    }

    #[test]
    fn push_debits_the_treasury() {
        let treasury = account(0xff);
        let mut mover = MemoryAssetMover::new(treasury);
        mover.credit(asset(1), treasury, Amount::new(1_000));

        let Ok(()) = mover.push_to(asset(1), account(7), Amount::new(250)) else {
            panic!("expected Ok");
        };
        assert_eq!(mover.balance(&asset(1), &treasury), Amount::new(750));
        assert_eq!(mover.balance(&asset(1), &account(7)), Amount::new(250));

        let result = mover.push_to(asset(1), account(7), Amount::new(751));
        assert!(matches!(result, Err(AmmError::InsufficientBalance(_))));
    }

    // -- RecordingSink ------------------------------------------------------

    #[test]
    fn records_in_emission_order() {
        let mut sink = RecordingSink::new();
        sink.pool_initialized(asset(1), asset(2), class());
        sink.pool_initialized(asset(2), asset(1), class());
        assert_eq!(sink.events().len(), 2);
        assert_eq!(sink.events()[0].asset_a, asset(1));
        assert_eq!(sink.events()[1].asset_a, asset(2));
        assert_eq!(sink.events()[0].key, sink.events()[1].key);
    }
}
