use std::time::Duration;

use cambio_core::{Asset, Oracle, PriceSample};

/// Isolates a single oracle query.
///
/// Errors and timeouts become [`PriceSample::NULL`]; a misbehaving source can
/// only lower its own contribution, never abort the aggregation.
#[derive(Debug, Clone, Copy)]
pub struct OracleAdapter {
    timeout: Duration,
}

impl OracleAdapter {
    /// Adapter bounding each query by `timeout`.
    #[must_use]
    pub const fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    /// Per-query bound.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Ask `oracle` for the rate of `src` in `dst` via `connector`.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cambio::adapter::query_sample",
            level = "trace",
            skip(self, oracle),
            fields(oracle = %oracle.address(), src = %src, dst = %dst, connector = %connector),
        )
    )]
    pub async fn query_sample(
        &self,
        oracle: &dyn Oracle,
        src: Asset,
        dst: Asset,
        connector: Asset,
    ) -> PriceSample {
        match tokio::time::timeout(self.timeout, oracle.get_rate(src, dst, connector)).await {
            Ok(Ok(sample)) => sample,
            Ok(Err(_e)) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(oracle = %oracle.address(), name = oracle.name(), error = %_e, "oracle query failed");
                PriceSample::NULL
            }
            Err(_) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(oracle = %oracle.address(), name = oracle.name(), "oracle query timed out");
                PriceSample::NULL
            }
        }
    }
}
