//! Assets, oracle classification, wrapped forms and price samples.

use core::fmt;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::units::ONE;

/// Opaque asset identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Asset(pub Address);

impl Asset {
    /// The chain's base asset. Distinct from its wrapped token.
    pub const NATIVE: Self = Self(Address::ZERO);

    /// Connector value oracles read as "quote directly, no intermediate hop".
    pub const NONE: Self = Self(Address::new([0xff; 20]));

    /// Wrap a raw address.
    #[must_use]
    pub const fn new(address: Address) -> Self {
        Self(address)
    }

    /// Returns the inner address.
    #[must_use]
    pub const fn address(self) -> Address {
        self.0
    }

    /// True for the native-asset sentinel.
    #[must_use]
    pub fn is_native(self) -> bool {
        self == Self::NATIVE
    }
}

impl From<Address> for Asset {
    fn from(address: Address) -> Self {
        Self(address)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Which quote set(s) an oracle belongs to.
///
/// Membership in the native-quoted and wrapped-native-quoted sets is independent;
/// `Both` means the oracle is a member of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum OracleKind {
    /// Quotes against the native asset.
    NativeQuoted,
    /// Quotes against the wrapped native token.
    WrappedNativeQuoted,
    /// Member of both sets.
    Both,
}

impl OracleKind {
    /// Whether this kind requires membership in the native-quoted set.
    #[must_use]
    pub const fn includes_native(self) -> bool {
        matches!(self, Self::NativeQuoted | Self::Both)
    }

    /// Whether this kind requires membership in the wrapped-native-quoted set.
    #[must_use]
    pub const fn includes_wrapped(self) -> bool {
        matches!(self, Self::WrappedNativeQuoted | Self::Both)
    }

    /// Combine set membership flags into a kind. `None` when in neither set.
    #[must_use]
    pub const fn from_membership(native: bool, wrapped: bool) -> Option<Self> {
        match (native, wrapped) {
            (true, true) => Some(Self::Both),
            (true, false) => Some(Self::NativeQuoted),
            (false, true) => Some(Self::WrappedNativeQuoted),
            (false, false) => None,
        }
    }
}

impl fmt::Display for OracleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NativeQuoted => "native-quoted",
            Self::WrappedNativeQuoted => "wrapped-native-quoted",
            Self::Both => "both",
        };
        f.write_str(s)
    }
}

/// A representative form of an asset and its conversion rate.
///
/// One unit of the original asset is worth `rate / 1e18` units of `asset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WrappedForm {
    /// Representative asset used for price lookups.
    pub asset: Asset,
    /// Conversion rate from the original asset, 18-decimal fixed point.
    pub rate: U256,
}

impl WrappedForm {
    /// Construct a form.
    #[must_use]
    pub const fn new(asset: Asset, rate: U256) -> Self {
        Self { asset, rate }
    }

    /// The asset itself at a 1:1 rate.
    #[must_use]
    pub const fn identity(asset: Asset) -> Self {
        Self { asset, rate: ONE }
    }
}

/// One oracle observation: a destination-per-source rate and its confidence weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PriceSample {
    /// Rate in 18-decimal fixed point.
    pub rate: U256,
    /// Unscaled confidence; only relative comparisons are meaningful.
    pub weight: U256,
}

impl PriceSample {
    /// Zero rate, zero weight. Never contributes to an aggregate.
    pub const NULL: Self = Self {
        rate: U256::ZERO,
        weight: U256::ZERO,
    };

    /// Construct a sample.
    #[must_use]
    pub const fn new(rate: U256, weight: U256) -> Self {
        Self { rate, weight }
    }

    /// Samples with zero weight are discarded before aggregation.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.weight.is_zero()
    }
}
