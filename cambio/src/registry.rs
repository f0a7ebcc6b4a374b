//! Owner-gated registry of oracles, connectors and the wrapping resolver.
//!
//! Readers take an immutable [`RegistrySnapshot`]; writers are serialized and
//! publish a fresh snapshot on success, so an aggregation in flight keeps the view
//! it started with.

use std::fmt;
use std::sync::{Arc, RwLock};

use cambio_core::{
    Address, Asset, CambioError, EntrySet, IdentityResolver, Oracle, OracleKind, RegistryEvent,
    WrappingResolver,
};
use tokio::sync::broadcast;

const EVENT_CAPACITY: usize = 64;

/// Immutable, versioned view of the registry.
#[derive(Clone)]
pub struct RegistrySnapshot {
    version: u64,
    native: Vec<Arc<dyn Oracle>>,
    wrapped: Vec<Arc<dyn Oracle>>,
    connectors: Vec<Asset>,
    resolver: Arc<dyn WrappingResolver>,
}

impl RegistrySnapshot {
    fn empty(resolver: Arc<dyn WrappingResolver>) -> Self {
        Self {
            version: 0,
            native: Vec::new(),
            wrapped: Vec::new(),
            connectors: Vec::new(),
            resolver,
        }
    }

    /// Monotonic counter bumped by every successful mutation.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Oracles quoting against the native asset, in set order.
    #[must_use]
    pub fn native_quoted(&self) -> &[Arc<dyn Oracle>] {
        &self.native
    }

    /// Oracles quoting against the wrapped native token, in set order.
    #[must_use]
    pub fn wrapped_native_quoted(&self) -> &[Arc<dyn Oracle>] {
        &self.wrapped
    }

    /// Registered connectors, in set order.
    #[must_use]
    pub fn connectors(&self) -> &[Asset] {
        &self.connectors
    }

    /// Current wrapping resolver.
    #[must_use]
    pub fn resolver(&self) -> &Arc<dyn WrappingResolver> {
        &self.resolver
    }

    /// Union of both oracle sets, each oracle once.
    ///
    /// Native-quoted oracles come first (tagged `Both` when also wrapped-quoted),
    /// followed by oracles only present in the wrapped-native-quoted set.
    #[must_use]
    pub fn oracles(&self) -> Vec<(Arc<dyn Oracle>, OracleKind)> {
        let mut out: Vec<(Arc<dyn Oracle>, OracleKind)> =
            Vec::with_capacity(self.native.len() + self.wrapped.len());
        for o in &self.native {
            let kind = if position(&self.wrapped, o.address()).is_some() {
                OracleKind::Both
            } else {
                OracleKind::NativeQuoted
            };
            out.push((Arc::clone(o), kind));
        }
        for o in &self.wrapped {
            if position(&self.native, o.address()).is_none() {
                out.push((Arc::clone(o), OracleKind::WrappedNativeQuoted));
            }
        }
        out
    }

    /// Classification of a registered oracle, if any.
    #[must_use]
    pub fn kind_of(&self, oracle: Address) -> Option<OracleKind> {
        OracleKind::from_membership(
            position(&self.native, oracle).is_some(),
            position(&self.wrapped, oracle).is_some(),
        )
    }

    fn set(&self, set: EntrySet) -> &Vec<Arc<dyn Oracle>> {
        match set {
            EntrySet::WrappedNativeQuotedOracles => &self.wrapped,
            _ => &self.native,
        }
    }

    fn set_mut(&mut self, set: EntrySet) -> &mut Vec<Arc<dyn Oracle>> {
        match set {
            EntrySet::WrappedNativeQuotedOracles => &mut self.wrapped,
            _ => &mut self.native,
        }
    }
}

impl fmt::Debug for RegistrySnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let addrs = |v: &[Arc<dyn Oracle>]| v.iter().map(|o| o.address()).collect::<Vec<_>>();
        f.debug_struct("RegistrySnapshot")
            .field("version", &self.version)
            .field("native", &addrs(&self.native))
            .field("wrapped", &addrs(&self.wrapped))
            .field("connectors", &self.connectors)
            .field("resolver", &self.resolver.name())
            .finish()
    }
}

fn position(set: &[Arc<dyn Oracle>], oracle: Address) -> Option<usize> {
    set.iter().position(|o| o.address() == oracle)
}

fn oracle_sets(kind: OracleKind) -> impl Iterator<Item = EntrySet> {
    [
        kind.includes_native()
            .then_some(EntrySet::NativeQuotedOracles),
        kind.includes_wrapped()
            .then_some(EntrySet::WrappedNativeQuotedOracles),
    ]
    .into_iter()
    .flatten()
}

struct State {
    owner: Address,
    current: Arc<RegistrySnapshot>,
}

/// Registry of price sources and connector assets.
///
/// Sets behave like enumerable sets: additions append, removals move the last
/// element into the freed slot. Every mutation requires the caller to be the
/// owner and publishes a [`RegistryEvent`] to subscribers.
pub struct Registry {
    state: RwLock<State>,
    events: broadcast::Sender<RegistryEvent>,
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("owner", &self.owner())
            .field("snapshot", &self.snapshot())
            .finish()
    }
}

impl Registry {
    /// Empty registry owned by `owner`, resolving every asset to itself.
    #[must_use]
    pub fn new(owner: Address) -> Self {
        Self::with_resolver(owner, Arc::new(IdentityResolver))
    }

    /// Empty registry owned by `owner` using `resolver` for wrapped forms.
    #[must_use]
    pub fn with_resolver(owner: Address, resolver: Arc<dyn WrappingResolver>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            state: RwLock::new(State {
                owner,
                current: Arc::new(RegistrySnapshot::empty(resolver)),
            }),
            events,
        }
    }

    /// Current owner.
    #[must_use]
    pub fn owner(&self) -> Address {
        self.state.read().expect("registry lock poisoned").owner
    }

    /// Cheap handle to the current state. Later mutations do not affect it.
    #[must_use]
    pub fn snapshot(&self) -> Arc<RegistrySnapshot> {
        Arc::clone(&self.state.read().expect("registry lock poisoned").current)
    }

    /// Registered oracles with their classification. See [`RegistrySnapshot::oracles`].
    #[must_use]
    pub fn oracles(&self) -> Vec<(Arc<dyn Oracle>, OracleKind)> {
        self.snapshot().oracles()
    }

    /// Registered connectors in set order.
    #[must_use]
    pub fn connectors(&self) -> Vec<Asset> {
        self.snapshot().connectors().to_vec()
    }

    /// Receive change notifications for subsequent mutations.
    ///
    /// Slow receivers observe `RecvError::Lagged` once more than 64 events queue up.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<RegistryEvent> {
        self.events.subscribe()
    }

    /// Add an oracle to the set(s) selected by `kind`.
    ///
    /// `OracleKind::Both` is atomic: if either set already holds the oracle,
    /// neither set changes.
    ///
    /// # Errors
    /// `NotAuthorized` for non-owners; `DuplicateEntry` if a target set already
    /// contains the oracle's address.
    pub fn add_oracle(
        &self,
        caller: Address,
        oracle: Arc<dyn Oracle>,
        kind: OracleKind,
    ) -> Result<(), CambioError> {
        let address = oracle.address();
        self.mutate(caller, |next| {
            for set in oracle_sets(kind) {
                if position(next.set(set), address).is_some() {
                    return Err(CambioError::DuplicateEntry {
                        set,
                        entry: address,
                    });
                }
            }
            for set in oracle_sets(kind) {
                next.set_mut(set).push(Arc::clone(&oracle));
            }
            Ok(RegistryEvent::OracleAdded {
                oracle: address,
                kind,
            })
        })
    }

    /// Remove an oracle from the set(s) selected by `kind`.
    ///
    /// # Errors
    /// `NotAuthorized` for non-owners; `UnknownEntry` if a target set does not
    /// contain the address.
    pub fn remove_oracle(
        &self,
        caller: Address,
        oracle: Address,
        kind: OracleKind,
    ) -> Result<(), CambioError> {
        self.mutate(caller, |next| {
            let mut found = Vec::with_capacity(2);
            for set in oracle_sets(kind) {
                let idx = position(next.set(set), oracle).ok_or(CambioError::UnknownEntry {
                    set,
                    entry: oracle,
                })?;
                found.push((set, idx));
            }
            for (set, idx) in found {
                next.set_mut(set).swap_remove(idx);
            }
            Ok(RegistryEvent::OracleRemoved { oracle, kind })
        })
    }

    /// Register a connector asset.
    ///
    /// # Errors
    /// `NotAuthorized` for non-owners; `DuplicateEntry` if already registered.
    pub fn add_connector(&self, caller: Address, connector: Asset) -> Result<(), CambioError> {
        self.mutate(caller, |next| {
            if next.connectors.contains(&connector) {
                return Err(CambioError::DuplicateEntry {
                    set: EntrySet::Connectors,
                    entry: connector.address(),
                });
            }
            next.connectors.push(connector);
            Ok(RegistryEvent::ConnectorAdded { connector })
        })
    }

    /// Unregister a connector asset.
    ///
    /// # Errors
    /// `NotAuthorized` for non-owners; `UnknownEntry` if not registered.
    pub fn remove_connector(&self, caller: Address, connector: Asset) -> Result<(), CambioError> {
        self.mutate(caller, |next| {
            let idx = next
                .connectors
                .iter()
                .position(|c| *c == connector)
                .ok_or(CambioError::UnknownEntry {
                    set: EntrySet::Connectors,
                    entry: connector.address(),
                })?;
            next.connectors.swap_remove(idx);
            Ok(RegistryEvent::ConnectorRemoved { connector })
        })
    }

    /// Replace the wrapping resolver.
    ///
    /// # Errors
    /// `NotAuthorized` for non-owners.
    pub fn set_resolver(
        &self,
        caller: Address,
        resolver: Arc<dyn WrappingResolver>,
    ) -> Result<(), CambioError> {
        self.mutate(caller, |next| {
            let name = resolver.name().to_string();
            next.resolver = Arc::clone(&resolver);
            Ok(RegistryEvent::ResolverUpdated { resolver: name })
        })
    }

    /// Hand ownership to `new_owner`.
    ///
    /// # Errors
    /// `NotAuthorized` for non-owners.
    pub fn transfer_ownership(&self, caller: Address, new_owner: Address) -> Result<(), CambioError> {
        let event = {
            let mut state = self.state.write().expect("registry lock poisoned");
            if caller != state.owner {
                return Err(CambioError::NotAuthorized { caller });
            }
            let previous = std::mem::replace(&mut state.owner, new_owner);
            RegistryEvent::OwnershipTransferred {
                previous,
                owner: new_owner,
            }
        };
        self.publish(event);
        Ok(())
    }

    /// Apply `f` to a copy of the current snapshot and publish it on success.
    fn mutate<F>(&self, caller: Address, f: F) -> Result<(), CambioError>
    where
        F: FnOnce(&mut RegistrySnapshot) -> Result<RegistryEvent, CambioError>,
    {
        let event = {
            let mut state = self.state.write().expect("registry lock poisoned");
            if caller != state.owner {
                return Err(CambioError::NotAuthorized { caller });
            }
            let mut next = RegistrySnapshot::clone(&state.current);
            let event = f(&mut next)?;
            next.version += 1;
            state.current = Arc::new(next);
            event
        };
        self.publish(event);
        Ok(())
    }

    fn publish(&self, event: RegistryEvent) {
        #[cfg(feature = "tracing")]
        tracing::info!(event = ?event, "registry updated");
        // No subscribers is fine.
        let _ = self.events.send(event);
    }
}
