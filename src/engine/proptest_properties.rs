//! Property-based tests for the engine's accounting invariants.
//!
//! 1. **First-deposit mint** — the initial mint is exactly the floor
//!    square root of the deposited product.
//! 2. **Invariant preservation** — `k` never decreases across a swap.
//! 3. **Output bound** — a swap never pays out a full reserve.
//! 4. **Output monotonicity** — more input never buys less output.
//! 5. **Round trip** — swapping out and back never profits the trader.
//! 6. **Liquidity conservation** — withdrawing a mint returns at most
//!    the deposited amounts.
//! 7. **Order independence** — both orientations read one pool.

use primitive_types::U256;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

use super::testkit::{account, asset, funded_amm, seeded_amm};
use crate::domain::{Amount, Shares};

/// Reserve values wide enough to exercise 256-bit intermediates.
fn reserve_strategy() -> impl Strategy<Value = u128> {
    1_000u128..=u128::from(u64::MAX)
}

/// Deposit values for the first-deposit property, up to full width.
fn deposit_strategy() -> impl Strategy<Value = u128> {
    1u128..=u128::MAX / 2
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_first_deposit_mints_floor_sqrt(
        amount_1 in deposit_strategy(),
        amount_2 in deposit_strategy(),
    ) {
        let mut amm = funded_amm(u128::MAX);
        prop_assert!(amm.initialize_pool(asset(1), asset(2)).is_ok());

        let Ok(minted) = amm.add_liquidity(
            account(7),
            asset(1),
            asset(2),
            Amount::new(amount_1),
            Amount::new(amount_2),
            Amount::ZERO,
            Amount::ZERO,
        ) else {
            // Only a zero mint is a legal failure here.
            let product = U256::from(amount_1) * U256::from(amount_2);
            prop_assert!(product.is_zero());
            return Ok(());
        };

        // minted² ≤ amount_1 × amount_2 < (minted + 1)²
        let product = U256::from(amount_1) * U256::from(amount_2);
        let root = U256::from(minted.get());
        prop_assert!(root * root <= product);
        prop_assert!((root + 1) * (root + 1) > product);

        let Ok(view) = amm.pool_info(asset(1), asset(2)) else {
            return Err(TestCaseError::fail("pool_info failed"));
        };
        prop_assert_eq!(view.reserve_first(), Amount::new(amount_1));
        prop_assert_eq!(view.reserve_second(), Amount::new(amount_2));
    }

    #[test]
    fn prop_swap_preserves_k_and_reserve_bound(
        reserve_1 in reserve_strategy(),
        reserve_2 in reserve_strategy(),
        amount_in in 1u128..=u128::from(u64::MAX),
    ) {
        let mut amm = seeded_amm(reserve_1, reserve_2);

        let Ok(out) = amm.swap(
            account(7),
            asset(1),
            Amount::new(amount_in),
            asset(2),
            Amount::ZERO,
            account(7),
        ) else {
            return Ok(());
        };
        prop_assert!(out.get() < reserve_2, "a swap drained a reserve");

        let Ok(view) = amm.pool_info(asset(1), asset(2)) else {
            return Err(TestCaseError::fail("pool_info failed"));
        };
        let k_before = U256::from(reserve_1) * U256::from(reserve_2);
        let k_after = U256::from(view.reserve_first().get())
            * U256::from(view.reserve_second().get());
        prop_assert!(k_after >= k_before, "constant product decreased");
    }

    #[test]
    fn prop_swap_output_is_monotone_in_input(
        reserve_1 in reserve_strategy(),
        reserve_2 in reserve_strategy(),
        amount_in in 1u128..=u128::from(u32::MAX),
        extra in 1u128..=u128::from(u32::MAX),
    ) {
        let mut small = seeded_amm(reserve_1, reserve_2);
        let mut large = seeded_amm(reserve_1, reserve_2);

        let (Ok(out_small), Ok(out_large)) = (
            small.swap(
                account(7),
                asset(1),
                Amount::new(amount_in),
                asset(2),
                Amount::ZERO,
                account(7),
            ),
            large.swap(
                account(7),
                asset(1),
                Amount::new(amount_in + extra),
                asset(2),
                Amount::ZERO,
                account(7),
            ),
        ) else {
            return Ok(());
        };
        prop_assert!(out_large >= out_small);
    }

    #[test]
    fn prop_round_trip_never_profits(
        reserve_1 in reserve_strategy(),
        reserve_2 in reserve_strategy(),
        amount_in in 1u128..=u128::from(u32::MAX),
    ) {
        let mut amm = seeded_amm(reserve_1, reserve_2);

        let Ok(received) = amm.swap(
            account(7),
            asset(1),
            Amount::new(amount_in),
            asset(2),
            Amount::ZERO,
            account(7),
        ) else {
            return Ok(());
        };
        if received.is_zero() {
            return Ok(());
        }
        let Ok(returned) = amm.swap(
            account(7),
            asset(2),
            received,
            asset(1),
            Amount::ZERO,
            account(7),
        ) else {
            return Ok(());
        };
        prop_assert!(
            returned.get() <= amount_in,
            "round trip profited: {} in, {} back",
            amount_in,
            returned.get()
        );
    }

    #[test]
    fn prop_withdrawal_returns_at_most_the_deposit(
        reserve_1 in reserve_strategy(),
        reserve_2 in reserve_strategy(),
    ) {
        let mut amm = seeded_amm(reserve_1, reserve_2);
        let Ok(supply) = amm.share_supply(asset(1), asset(2)) else {
            return Err(TestCaseError::fail("share_supply failed"));
        };
        let minted = Shares::new(supply.get() - 1_000);

        let Ok((out_1, out_2)) = amm.remove_liquidity(
            account(7),
            account(7),
            asset(1),
            asset(2),
            minted,
        ) else {
            return Err(TestCaseError::fail("full withdrawal failed"));
        };
        prop_assert!(out_1.get() <= reserve_1);
        prop_assert!(out_2.get() <= reserve_2);

        // The seed's share of the reserves stays behind.
        let Ok(view) = amm.pool_info(asset(1), asset(2)) else {
            return Err(TestCaseError::fail("pool_info failed"));
        };
        prop_assert!(!view.reserve_first().is_zero());
        prop_assert!(!view.reserve_second().is_zero());
    }

    #[test]
    fn prop_orientations_read_one_pool(
        reserve_1 in reserve_strategy(),
        reserve_2 in reserve_strategy(),
    ) {
        let mut amm = funded_amm(u128::MAX);
        prop_assert!(amm.initialize_pool(asset(1), asset(2)).is_ok());

        // Deposit through the reversed orientation.
        let deposit = amm.add_liquidity(
            account(7),
            asset(2),
            asset(1),
            Amount::new(reserve_2),
            Amount::new(reserve_1),
            Amount::ZERO,
            Amount::ZERO,
        );
        prop_assert!(deposit.is_ok());

        let (Ok(forward), Ok(reversed)) = (
            amm.pool_info(asset(1), asset(2)),
            amm.pool_info(asset(2), asset(1)),
        ) else {
            return Err(TestCaseError::fail("pool_info failed"));
        };
        prop_assert_eq!(forward.reserve_first(), Amount::new(reserve_1));
        prop_assert_eq!(forward.reserve_second(), Amount::new(reserve_2));
        prop_assert_eq!(forward.reserve_first(), reversed.reserve_second());
        prop_assert_eq!(forward.reserve_second(), reversed.reserve_first());
    }
}
