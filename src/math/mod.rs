//! Integer arithmetic over 256-bit intermediates.
//!
//! All pricing and share accounting reduces to three primitives:
//! [`mul_div`] (full-width multiply then divide with explicit rounding),
//! [`isqrt_product`] (floor square root of a full-width product), and
//! [`invariant_holds`] (the constant-product guard compared over
//! full-width products).  Running the intermediates through `U256` means
//! no valid `u128` operands can overflow mid-computation; only a final
//! quotient too large for `u128` is an error.

mod checked;

pub use checked::{invariant_holds, isqrt_product, mul_div};
