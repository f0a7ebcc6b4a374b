//! Test doubles for cambio.
//!
//! [`DynamicMockOracle`] answers each `(src, dst, connector)` query according to
//! rules set through its [`MockOracleController`], and can fail or hang on
//! demand. [`StaticResolver`] expands assets from a fixed table.
#![warn(missing_docs)]

mod dynamic;
mod resolver;

pub use dynamic::{DynamicMockOracle, MockBehavior, MockOracleController, QueryKey};
pub use resolver::StaticResolver;

use cambio_core::{Address, Asset, U256};

/// Asset whose address is `byte` repeated twenty times.
#[must_use]
pub fn asset(byte: u8) -> Asset {
    Asset::new(Address::repeat_byte(byte))
}

/// `units` whole tokens in 18-decimal fixed point.
#[must_use]
pub fn units(units: u64) -> U256 {
    U256::from(units) * cambio_core::ONE
}
