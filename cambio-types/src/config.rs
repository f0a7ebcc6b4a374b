//! Configuration types for the aggregation engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How the relative threshold filter rounds at boundary weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum ThresholdRounding {
    /// Pairwise rates keep `weight * 100 >= max * threshold`; reference rates keep
    /// `weight >= max * threshold / 100` with truncating division.
    #[default]
    PerEntryPoint,
    /// Both entry points keep `weight * 100 >= max * threshold`.
    MultiplyFirst,
}

/// Global configuration for the `Cambio` engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CambioConfig {
    /// Bound on a single oracle query; an expired query counts as a failed oracle.
    pub oracle_timeout: Duration,
    /// Optional bound on a whole aggregation. Exceeding it fails the request.
    pub request_timeout: Option<Duration>,
    /// Rounding rule for the threshold filter.
    pub threshold_rounding: ThresholdRounding,
}

impl Default for CambioConfig {
    fn default() -> Self {
        Self {
            oracle_timeout: Duration::from_secs(5),
            request_timeout: None,
            threshold_rounding: ThresholdRounding::default(),
        }
    }
}
