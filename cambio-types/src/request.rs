//! Aggregation requests.

use serde::{Deserialize, Serialize};

use crate::asset::Asset;
use crate::error::CambioError;

/// Threshold applied when a request does not set one explicitly.
pub const DEFAULT_THRESHOLD: u8 = 10;

fn check_threshold(threshold: u8) -> Result<(), CambioError> {
    if threshold >= 100 {
        return Err(CambioError::invalid_request(format!(
            "threshold filter must be below 100, got {threshold}"
        )));
    }
    Ok(())
}

/// Request for the rate between two arbitrary assets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateRequest {
    /// Asset being priced.
    pub src: Asset,
    /// Asset the price is expressed in.
    pub dst: Asset,
    /// Expand both sides through the wrapping resolver.
    pub use_wrapping: bool,
    /// Extra connectors scanned after the registered ones. Not deduplicated.
    pub custom_connectors: Vec<Asset>,
    /// Percentage (0-99) of the strongest weight below which samples are dropped.
    pub threshold: u8,
}

impl RateRequest {
    /// Request with wrapping enabled, no custom connectors and [`DEFAULT_THRESHOLD`].
    #[must_use]
    pub const fn new(src: Asset, dst: Asset) -> Self {
        Self {
            src,
            dst,
            use_wrapping: true,
            custom_connectors: Vec::new(),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Toggle wrapped-form expansion.
    #[must_use]
    pub const fn use_wrapping(mut self, yes: bool) -> Self {
        self.use_wrapping = yes;
        self
    }

    /// Append custom connectors, preserving order and duplicates.
    #[must_use]
    pub fn custom_connectors(mut self, connectors: &[Asset]) -> Self {
        self.custom_connectors.extend_from_slice(connectors);
        self
    }

    /// Set the threshold filter percentage.
    #[must_use]
    pub const fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Reject same-asset pairs and thresholds of 100 or more.
    ///
    /// # Errors
    /// Returns `InvalidRequest` describing the first violated constraint.
    pub fn validate(&self) -> Result<(), CambioError> {
        if self.src == self.dst {
            return Err(CambioError::invalid_request(format!(
                "source and destination are both {}",
                self.src
            )));
        }
        check_threshold(self.threshold)
    }
}

/// Request for the rate of an asset expressed in the native asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceRateRequest {
    /// Asset being priced.
    pub src: Asset,
    /// Expand the source through the wrapping resolver.
    pub use_wrapping: bool,
    /// Extra connectors scanned after the registered ones. Not deduplicated.
    pub custom_connectors: Vec<Asset>,
    /// Percentage (0-99) of the strongest weight below which samples are dropped.
    pub threshold: u8,
}

impl ReferenceRateRequest {
    /// Request with wrapping enabled, no custom connectors and [`DEFAULT_THRESHOLD`].
    #[must_use]
    pub const fn new(src: Asset) -> Self {
        Self {
            src,
            use_wrapping: true,
            custom_connectors: Vec::new(),
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Toggle wrapped-form expansion of the source.
    #[must_use]
    pub const fn use_wrapping(mut self, yes: bool) -> Self {
        self.use_wrapping = yes;
        self
    }

    /// Append custom connectors, preserving order and duplicates.
    #[must_use]
    pub fn custom_connectors(mut self, connectors: &[Asset]) -> Self {
        self.custom_connectors.extend_from_slice(connectors);
        self
    }

    /// Set the threshold filter percentage.
    #[must_use]
    pub const fn threshold(mut self, threshold: u8) -> Self {
        self.threshold = threshold;
        self
    }

    /// Reject thresholds of 100 or more.
    ///
    /// # Errors
    /// Returns `InvalidRequest` when the threshold is out of range.
    pub fn validate(&self) -> Result<(), CambioError> {
        check_threshold(self.threshold)
    }
}
