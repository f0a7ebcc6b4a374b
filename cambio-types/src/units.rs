//! Fixed-point scale constants.

use alloy_primitives::U256;

/// One unit in 18-decimal fixed point (`10^18`).
pub const ONE: U256 = U256::from_limbs([1_000_000_000_000_000_000, 0, 0, 0]);

/// `ONE * ONE` (`10^36`), the divisor after multiplying three scaled values.
pub const ONE_SQUARED: U256 = U256::from_limbs([0xb34b_9f10_0000_0000, 0x00c0_97ce_7bc9_0715, 0, 0]);
