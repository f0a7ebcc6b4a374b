use std::sync::Arc;

use cambio_core::{
    CambioError, Oracle, Outcome, PriceSample, RateReport, RateRequest, U256, WeightedSamples,
    expand, fixed,
};

use crate::Cambio;
use crate::core::{EntryPoint, with_request_deadline};
use crate::registry::RegistrySnapshot;
use crate::router::util::ConnectorPool;

impl Cambio {
    /// Consensus rate of `req.src` expressed in `req.dst`, 18-decimal fixed point.
    ///
    /// Zero means no oracle produced a usable sample.
    ///
    /// # Errors
    /// See [`Cambio::rate_report`].
    pub async fn rate(&self, req: &RateRequest) -> Result<U256, CambioError> {
        Ok(self.rate_report(req).await?.rate)
    }

    /// Consensus rate between two assets with derivation details.
    ///
    /// Behavior and trade-offs:
    /// - Both assets are expanded into wrapped forms (when `use_wrapping`), and
    ///   source forms are walked outer, destination forms inner, in resolver order.
    /// - The first pair sharing a representative asset answers immediately with
    ///   `src.rate * dst.rate / 1e18`; it is the first match, not the best one.
    /// - Otherwise every oracle is asked through every registered and custom
    ///   connector; failing oracles contribute nothing.
    /// - Samples weaker than `threshold` percent of the strongest are dropped
    ///   before the weighted average.
    ///
    /// # Errors
    /// `InvalidRequest` for `src == dst` or `threshold >= 100`;
    /// `ArithmeticOverflow` if scaling or summing leaves the 256-bit range;
    /// `RequestTimeout` if a configured request deadline expires.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cambio::router::rate",
            skip(self, req),
            fields(src = %req.src, dst = %req.dst, wrapping = req.use_wrapping, threshold = req.threshold),
        )
    )]
    pub async fn rate_report(&self, req: &RateRequest) -> Result<RateReport, CambioError> {
        req.validate()?;
        let snapshot = self.snapshot();
        with_request_deadline(
            self.cfg.request_timeout,
            "rate",
            self.rate_with_snapshot(&snapshot, req),
        )
        .await
    }

    /// Same as [`Cambio::rate_report`] against an explicit registry snapshot.
    ///
    /// The result depends only on `req`, `snapshot` and the answers of the
    /// snapshot's oracles and resolver. No request deadline is applied.
    ///
    /// # Errors
    /// `InvalidRequest` and `ArithmeticOverflow` as for [`Cambio::rate_report`].
    pub async fn rate_with_snapshot(
        &self,
        snapshot: &RegistrySnapshot,
        req: &RateRequest,
    ) -> Result<RateReport, CambioError> {
        req.validate()?;

        let oracles: Vec<Arc<dyn Oracle>> =
            snapshot.oracles().into_iter().map(|(o, _)| o).collect();
        let resolver = snapshot.resolver().as_ref();
        let src_forms = expand(resolver, req.src, req.use_wrapping).await;
        let dst_forms = expand(resolver, req.dst, req.use_wrapping).await;
        let pool = ConnectorPool::new(snapshot.connectors(), &req.custom_connectors);

        let mut samples = WeightedSamples::new();
        for s in &src_forms {
            for d in &dst_forms {
                if s.asset == d.asset {
                    let rate = fixed::combine_forms(s.rate, d.rate)?;
                    #[cfg(feature = "tracing")]
                    tracing::debug!(asset = %s.asset, rate = %rate, "shared wrapped form");
                    return Ok(RateReport {
                        rate,
                        outcome: Outcome::Direct { src: *s, dst: *d },
                    });
                }

                let connectors = pool.candidates(s.asset, d.asset);
                for sample in self.scan(&connectors, &oracles, s.asset, d.asset).await {
                    if !sample.is_usable() {
                        continue;
                    }
                    let rate = fixed::scale_sample(sample.rate, s.rate, d.rate)?;
                    samples.push(PriceSample::new(rate, sample.weight));
                }
            }
        }

        samples.finish(req.threshold, self.threshold_rule(EntryPoint::Pairwise))
    }
}
