use core::fmt;

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Registry set an entry lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum EntrySet {
    /// Oracles quoting against the native asset.
    NativeQuotedOracles,
    /// Oracles quoting against the wrapped native token.
    WrappedNativeQuotedOracles,
    /// Intermediate connector assets.
    Connectors,
}

impl fmt::Display for EntrySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NativeQuotedOracles => "native-quoted oracles",
            Self::WrappedNativeQuotedOracles => "wrapped-native-quoted oracles",
            Self::Connectors => "connectors",
        };
        f.write_str(s)
    }
}

/// Unified error type for the cambio workspace.
///
/// Oracle faults are deliberately absent: they are absorbed per query and only
/// ever lower the weight distribution of an aggregate.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CambioError {
    /// The request was rejected before any oracle was queried.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// The entry is already a member of the target set.
    #[error("duplicate entry {entry} in {set}")]
    DuplicateEntry {
        /// Set that already holds the entry.
        set: EntrySet,
        /// Oracle or connector address.
        entry: Address,
    },

    /// The entry is not a member of the target set.
    #[error("unknown entry {entry} in {set}")]
    UnknownEntry {
        /// Set that was expected to hold the entry.
        set: EntrySet,
        /// Oracle or connector address.
        entry: Address,
    },

    /// The caller is not the registry owner.
    #[error("not authorized: {caller}")]
    NotAuthorized {
        /// Address that attempted the mutation.
        caller: Address,
    },

    /// A fixed-point computation left the representable range.
    #[error("arithmetic overflow in {op}")]
    ArithmeticOverflow {
        /// Operation label (e.g. "sample scaling", "weighted sum").
        op: String,
    },

    /// Builder or configuration validation failed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// The overall aggregation exceeded the configured deadline.
    #[error("request timed out: {operation}")]
    RequestTimeout {
        /// Entry point that timed out.
        operation: String,
    },
}

impl CambioError {
    /// Helper: build an `InvalidRequest` error.
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::InvalidRequest(msg.into())
    }

    /// Helper: build an `ArithmeticOverflow` error for an operation label.
    pub fn overflow(op: impl Into<String>) -> Self {
        Self::ArithmeticOverflow { op: op.into() }
    }

    /// Helper: build a `RequestTimeout` error.
    pub fn request_timeout(operation: impl Into<String>) -> Self {
        Self::RequestTimeout {
            operation: operation.into(),
        }
    }

    /// Returns true for registry misuse (`DuplicateEntry`, `UnknownEntry`, `NotAuthorized`).
    #[must_use]
    pub const fn is_registry_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateEntry { .. } | Self::UnknownEntry { .. } | Self::NotAuthorized { .. }
        )
    }
}

/// Failure reported by a single oracle query.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum OracleError {
    /// The oracle rejected the query (no pool, unsupported pair, ...).
    #[error("oracle reverted: {0}")]
    Reverted(String),

    /// The oracle answered with data that could not be decoded.
    #[error("malformed oracle response: {0}")]
    Malformed(String),

    /// The oracle could not be reached.
    #[error("oracle unavailable: {0}")]
    Unavailable(String),
}
