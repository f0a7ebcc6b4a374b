use std::sync::Arc;

use cambio_core::{
    Asset, CambioError, Oracle, Outcome, PriceSample, RateReport, ReferenceRateRequest, U256,
    WeightedSamples, WrappedForm, expand, fixed,
};

use crate::Cambio;
use crate::core::{EntryPoint, with_request_deadline};
use crate::registry::RegistrySnapshot;
use crate::router::util::ConnectorPool;

impl Cambio {
    /// Rate of `req.src` expressed in the native asset, 18-decimal fixed point.
    ///
    /// # Errors
    /// See [`Cambio::rate_to_reference_report`].
    pub async fn rate_to_reference(&self, req: &ReferenceRateRequest) -> Result<U256, CambioError> {
        Ok(self.rate_to_reference_report(req).await?.rate)
    }

    /// Rate to the native asset with derivation details.
    ///
    /// Behavior and trade-offs:
    /// - The destination is fixed to two forms, the native sentinel and the
    ///   wrapped native token, both at 1:1 and never expanded.
    /// - The native form is quoted only by native-quoted oracles and the wrapped
    ///   form only by wrapped-native-quoted oracles; `Both` oracles serve each.
    /// - A source form equal to either destination answers with its own rate.
    /// - Under the default rounding the threshold keeps samples with
    ///   `weight >= max * threshold / 100` (truncating), which can admit a sample
    ///   the pairwise entry point would reject.
    ///
    /// # Errors
    /// `InvalidRequest` for `threshold >= 100`; `ArithmeticOverflow` if scaling or
    /// summing leaves the 256-bit range; `RequestTimeout` if a configured request
    /// deadline expires.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "cambio::router::rate_to_reference",
            skip(self, req),
            fields(src = %req.src, wrapping = req.use_wrapping, threshold = req.threshold),
        )
    )]
    pub async fn rate_to_reference_report(
        &self,
        req: &ReferenceRateRequest,
    ) -> Result<RateReport, CambioError> {
        req.validate()?;
        let snapshot = self.snapshot();
        with_request_deadline(
            self.cfg.request_timeout,
            "rate_to_reference",
            self.rate_to_reference_with_snapshot(&snapshot, req),
        )
        .await
    }

    /// Same as [`Cambio::rate_to_reference_report`] against an explicit snapshot.
    ///
    /// # Errors
    /// `InvalidRequest` and `ArithmeticOverflow` as for
    /// [`Cambio::rate_to_reference_report`].
    pub async fn rate_to_reference_with_snapshot(
        &self,
        snapshot: &RegistrySnapshot,
        req: &ReferenceRateRequest,
    ) -> Result<RateReport, CambioError> {
        req.validate()?;

        let destinations: [(Asset, &[Arc<dyn Oracle>]); 2] = [
            (Asset::NATIVE, snapshot.native_quoted()),
            (self.wrapped_native, snapshot.wrapped_native_quoted()),
        ];
        let src_forms = expand(snapshot.resolver().as_ref(), req.src, req.use_wrapping).await;
        let pool = ConnectorPool::new(snapshot.connectors(), &req.custom_connectors);

        let mut samples = WeightedSamples::new();
        for s in &src_forms {
            for (dst, oracles) in destinations {
                if s.asset == dst {
                    return Ok(RateReport {
                        rate: s.rate,
                        outcome: Outcome::Direct {
                            src: *s,
                            dst: WrappedForm::identity(dst),
                        },
                    });
                }

                let connectors = pool.candidates(s.asset, dst);
                for sample in self.scan(&connectors, oracles, s.asset, dst).await {
                    if !sample.is_usable() {
                        continue;
                    }
                    let rate = fixed::scale_sample_single(sample.rate, s.rate)?;
                    samples.push(PriceSample::new(rate, sample.weight));
                }
            }
        }

        samples.finish(req.threshold, self.threshold_rule(EntryPoint::Reference))
    }
}
