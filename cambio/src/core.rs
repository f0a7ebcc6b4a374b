use std::sync::Arc;
use std::time::Duration;

use cambio_core::{
    Asset, CambioConfig, CambioError, Oracle, OracleKind, ThresholdRounding, ThresholdRule,
};

use crate::adapter::OracleAdapter;
use crate::registry::{Registry, RegistrySnapshot};

/// Aggregation engine computing consensus rates from a [`Registry`].
pub struct Cambio {
    pub(crate) registry: Arc<Registry>,
    pub(crate) wrapped_native: Asset,
    pub(crate) adapter: OracleAdapter,
    pub(crate) cfg: CambioConfig,
}

/// Builder for constructing a `Cambio` engine with custom configuration.
pub struct CambioBuilder {
    registry: Option<Arc<Registry>>,
    wrapped_native: Option<Asset>,
    cfg: CambioConfig,
}

impl Default for CambioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CambioBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts without a registry or wrapped-native token; both are required by [`build`].
    /// - Defaults: 5s per-oracle timeout, no overall deadline, threshold rounding
    ///   per entry point.
    ///
    /// [`build`]: CambioBuilder::build
    #[must_use]
    pub fn new() -> Self {
        Self {
            registry: None,
            wrapped_native: None,
            cfg: CambioConfig::default(),
        }
    }

    /// Use `registry` as the source of oracles, connectors and the resolver.
    ///
    /// The engine reads a snapshot per request; the registry can keep changing
    /// through its owner while the engine is in use.
    #[must_use]
    pub fn registry(mut self, registry: Arc<Registry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Tokenized counterpart of the native asset.
    ///
    /// It is the second destination form of [`Cambio::rate_to_reference`], quoted
    /// by the wrapped-native-quoted oracle set.
    #[must_use]
    pub const fn wrapped_native(mut self, asset: Asset) -> Self {
        self.wrapped_native = Some(asset);
        self
    }

    /// Replace the whole configuration.
    #[must_use]
    pub fn config(mut self, cfg: CambioConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Set the per-oracle query timeout.
    ///
    /// Behavior and trade-offs:
    /// - A query exceeding it counts as a failed oracle (zero weight), so the
    ///   aggregate degrades instead of stalling.
    /// - Too short a bound silently drops slow but healthy sources.
    #[must_use]
    pub const fn oracle_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.oracle_timeout = timeout;
        self
    }

    /// Set an overall deadline for one aggregation.
    ///
    /// Behavior and trade-offs:
    /// - Bounds total latency when many connectors and oracles are scanned.
    /// - When exceeded the request fails with `RequestTimeout`; partial
    ///   aggregates are never returned.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Select the threshold rounding rule.
    ///
    /// Behavior and trade-offs:
    /// - `PerEntryPoint` reproduces the historical behavior: multiply-first for
    ///   pairwise rates, truncating divide-first for reference rates.
    /// - `MultiplyFirst` makes both entry points agree at boundary weights.
    #[must_use]
    pub const fn threshold_rounding(mut self, rounding: ThresholdRounding) -> Self {
        self.cfg.threshold_rounding = rounding;
        self
    }

    /// Build the `Cambio` engine.
    ///
    /// # Errors
    /// Returns `InvalidConfig` if the registry or wrapped-native token is missing,
    /// if the wrapped-native token is the native sentinel, or if the oracle
    /// timeout is zero.
    pub fn build(self) -> Result<Cambio, CambioError> {
        let registry = self.registry.ok_or_else(|| {
            CambioError::InvalidConfig("no registry set; add one via registry(...)".to_string())
        })?;
        let wrapped_native = self.wrapped_native.ok_or_else(|| {
            CambioError::InvalidConfig(
                "no wrapped native token set; add one via wrapped_native(...)".to_string(),
            )
        })?;
        if wrapped_native.is_native() {
            return Err(CambioError::InvalidConfig(
                "wrapped native token must differ from the native sentinel".to_string(),
            ));
        }
        if self.cfg.oracle_timeout.is_zero() {
            return Err(CambioError::InvalidConfig(
                "oracle timeout must be non-zero".to_string(),
            ));
        }

        Ok(Cambio {
            registry,
            wrapped_native,
            adapter: OracleAdapter::new(self.cfg.oracle_timeout),
            cfg: self.cfg,
        })
    }
}

/// Entry point whose threshold rule is being resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EntryPoint {
    Pairwise,
    Reference,
}

impl Cambio {
    /// Start building a new `Cambio` instance.
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    /// use cambio::{Asset, Cambio, OracleKind, Registry};
    ///
    /// let registry = Arc::new(Registry::new(owner));
    /// registry.add_oracle(owner, uniswap, OracleKind::WrappedNativeQuoted)?;
    /// registry.add_connector(owner, Asset::NONE)?;
    ///
    /// let cambio = Cambio::builder()
    ///     .registry(registry)
    ///     .wrapped_native(weth)
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> CambioBuilder {
        CambioBuilder::new()
    }

    /// Registry backing this engine.
    #[must_use]
    pub const fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &CambioConfig {
        &self.cfg
    }

    /// Wrapped counterpart of the native asset.
    #[must_use]
    pub const fn wrapped_native(&self) -> Asset {
        self.wrapped_native
    }

    /// Registered oracles with their classification.
    #[must_use]
    pub fn oracles(&self) -> Vec<(Arc<dyn Oracle>, OracleKind)> {
        self.registry.oracles()
    }

    /// Registered connectors.
    #[must_use]
    pub fn connectors(&self) -> Vec<Asset> {
        self.registry.connectors()
    }

    pub(crate) fn snapshot(&self) -> Arc<RegistrySnapshot> {
        self.registry.snapshot()
    }

    pub(crate) const fn threshold_rule(&self, entry: EntryPoint) -> ThresholdRule {
        match (self.cfg.threshold_rounding, entry) {
            (ThresholdRounding::PerEntryPoint, EntryPoint::Reference) => {
                ThresholdRule::DivideFirst
            }
            _ => ThresholdRule::MultiplyFirst,
        }
    }
}

/// Bound `fut` by an optional deadline, mapping expiry to `RequestTimeout`.
pub(crate) async fn with_request_deadline<T, Fut>(
    deadline: Option<Duration>,
    operation: &'static str,
    fut: Fut,
) -> Result<T, CambioError>
where
    Fut: std::future::Future<Output = Result<T, CambioError>>,
{
    match deadline {
        Some(d) => (tokio::time::timeout(d, fut).await)
            .unwrap_or_else(|_| Err(CambioError::request_timeout(operation))),
        None => fut.await,
    }
}
