use crate::fixed::{add, mul};
use crate::{CambioError, Outcome, PriceSample, RateReport, U256};

/// Evaluation order of the relative threshold comparison.
///
/// The two orders disagree only at boundary weights where `max * threshold` is
/// not a multiple of 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdRule {
    /// Keep iff `weight * 100 >= max * threshold`.
    MultiplyFirst,
    /// Keep iff `weight >= max * threshold / 100`, truncating the division.
    DivideFirst,
}

impl ThresholdRule {
    /// Whether a sample of `weight` survives a `threshold` percent filter
    /// relative to `max_weight`.
    ///
    /// # Errors
    /// Returns `ArithmeticOverflow` if a product leaves the 256-bit range.
    pub fn keeps(self, weight: U256, max_weight: U256, threshold: u8) -> Result<bool, CambioError> {
        let hundred = U256::from(100u8);
        let threshold = U256::from(threshold);
        match self {
            Self::MultiplyFirst => {
                let lhs = mul(weight, hundred, "threshold filter")?;
                let rhs = mul(max_weight, threshold, "threshold filter")?;
                Ok(lhs >= rhs)
            }
            Self::DivideFirst => {
                let floor = mul(max_weight, threshold, "threshold filter")? / hundred;
                Ok(weight >= floor)
            }
        }
    }
}

/// Samples collected during a scan, already scaled for wrapping rates.
///
/// Zero-weight samples are dropped on push and never counted.
#[derive(Debug, Clone, Default)]
pub struct WeightedSamples {
    samples: Vec<PriceSample>,
    max_weight: U256,
}

impl WeightedSamples {
    /// Empty collection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            samples: Vec::new(),
            max_weight: U256::ZERO,
        }
    }

    /// Record a sample. Returns false if it was discarded for having zero weight.
    pub fn push(&mut self, sample: PriceSample) -> bool {
        if !sample.is_usable() {
            return false;
        }
        if sample.weight > self.max_weight {
            self.max_weight = sample.weight;
        }
        self.samples.push(sample);
        true
    }

    /// Number of recorded samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Strongest weight recorded so far.
    #[must_use]
    pub const fn max_weight(&self) -> U256 {
        self.max_weight
    }

    /// Apply the threshold filter and compute `Σ(rate·weight) / Σ(weight)`.
    ///
    /// A filter that keeps nothing, including the no-sample case, yields a zero rate.
    ///
    /// # Errors
    /// Returns `ArithmeticOverflow` if a product or running sum overflows.
    pub fn finish(self, threshold: u8, rule: ThresholdRule) -> Result<RateReport, CambioError> {
        let considered = self.samples.len();
        let mut included = 0usize;
        let mut weighted_sum = U256::ZERO;
        let mut total_weight = U256::ZERO;

        for sample in &self.samples {
            if !rule.keeps(sample.weight, self.max_weight, threshold)? {
                continue;
            }
            let product = mul(sample.rate, sample.weight, "weighted sum")?;
            weighted_sum = add(weighted_sum, product, "weighted sum")?;
            total_weight = add(total_weight, sample.weight, "total weight")?;
            included += 1;
        }

        let rate = if total_weight.is_zero() {
            U256::ZERO
        } else {
            weighted_sum / total_weight
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            considered,
            included,
            threshold,
            max_weight = %self.max_weight,
            rate = %rate,
            "weighted aggregate"
        );

        Ok(RateReport {
            rate,
            outcome: Outcome::Weighted {
                considered,
                included,
                max_weight: self.max_weight,
                total_weight,
            },
        })
    }
}

impl Extend<PriceSample> for WeightedSamples {
    fn extend<I: IntoIterator<Item = PriceSample>>(&mut self, iter: I) {
        for sample in iter {
            self.push(sample);
        }
    }
}
