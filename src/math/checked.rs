//! Widening multiply-divide, integer square root, and the invariant guard.

use primitive_types::U256;

use crate::domain::Rounding;
use crate::error::AmmError;

/// Computes `a × b / divisor` with a 256-bit intermediate product.
///
/// The product of two `u128` values always fits in a `U256`, so the only
/// failure modes are a zero divisor and a quotient that does not fit back
/// into `u128`.
///
/// # Errors
///
/// - [`AmmError::DivisionByZero`] if `divisor` is zero.
/// - [`AmmError::Overflow`] if the quotient exceeds `u128::MAX`.
pub fn mul_div(a: u128, b: u128, divisor: u128, rounding: Rounding) -> Result<u128, AmmError> {
    if divisor == 0 {
        return Err(AmmError::DivisionByZero);
    }
    let numerator = U256::from(a) * U256::from(b);
    let divisor = U256::from(divisor);

    let quotient = match rounding {
        Rounding::Down => numerator / divisor,
        Rounding::Up => {
            // (n + d - 1) / d; n is at most (2^128 - 1)^2 so the addition
            // cannot wrap a U256.
            (numerator + divisor - U256::one()) / divisor
        }
    };

    if quotient > U256::from(u128::MAX) {
        return Err(AmmError::Overflow("mul_div quotient exceeds 128 bits"));
    }
    Ok(quotient.low_u128())
}

/// Floor square root of `a × b`.
///
/// Newton's method over the 256-bit product; the root of any 256-bit
/// value fits in `u128`, so this never fails.
#[must_use]
pub fn isqrt_product(a: u128, b: u128) -> u128 {
    let n = U256::from(a) * U256::from(b);
    if n.is_zero() {
        return 0;
    }
    let mut x = n;
    let mut y = (x + U256::one()) >> 1;
    while y < x {
        x = y;
        y = (x + n / x) >> 1;
    }
    x.low_u128()
}

/// Checks the constant-product guard for a swap.
///
/// Returns `true` iff `new_in × new_out ≥ reserve_in × reserve_out`,
/// compared over full-width products.  Floor-rounded pricing is expected
/// to satisfy this already; the engine still checks it on every swap so a
/// rounding edge or a future pricing change cannot leak reserves.
#[must_use]
pub fn invariant_holds(reserve_in: u128, reserve_out: u128, new_in: u128, new_out: u128) -> bool {
    U256::from(new_in) * U256::from(new_out) >= U256::from(reserve_in) * U256::from(reserve_out)
}
