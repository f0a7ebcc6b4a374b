use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::asset::{Asset, OracleKind};

/// Change notification published after every successful registry mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum RegistryEvent {
    /// An oracle joined the set(s) selected by `kind`.
    OracleAdded {
        /// Oracle address.
        oracle: Address,
        /// Classification it was added under.
        kind: OracleKind,
    },
    /// An oracle left the set(s) selected by `kind`.
    OracleRemoved {
        /// Oracle address.
        oracle: Address,
        /// Classification it was removed under.
        kind: OracleKind,
    },
    /// A connector asset was registered.
    ConnectorAdded {
        /// Connector asset.
        connector: Asset,
    },
    /// A connector asset was unregistered.
    ConnectorRemoved {
        /// Connector asset.
        connector: Asset,
    },
    /// The wrapping resolver was replaced.
    ResolverUpdated {
        /// Name reported by the new resolver.
        resolver: String,
    },
    /// Registry ownership moved to a new address.
    OwnershipTransferred {
        /// Previous owner.
        previous: Address,
        /// New owner.
        owner: Address,
    },
}
