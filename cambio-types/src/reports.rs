//! Report envelopes produced by the engine.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};

use crate::asset::WrappedForm;

/// How an aggregation reached its answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Outcome {
    /// A source form and a destination form shared their representative asset;
    /// the rate came from the wrapping rates alone and no oracle was consulted
    /// for the remaining combinations.
    Direct {
        /// Matching source form.
        src: WrappedForm,
        /// Matching destination form.
        dst: WrappedForm,
    },
    /// Oracle samples were combined into a weighted average.
    Weighted {
        /// Samples with non-zero weight collected during the scan.
        considered: usize,
        /// Samples that passed the threshold filter.
        included: usize,
        /// Strongest weight observed.
        max_weight: U256,
        /// Sum of the included weights.
        total_weight: U256,
    },
}

/// Result of an aggregation: the rate plus how it was derived.
///
/// A zero `rate` with a `Weighted` outcome means no usable consensus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateReport {
    /// Destination-per-source rate, 18-decimal fixed point.
    pub rate: U256,
    /// Derivation details.
    pub outcome: Outcome,
}

impl RateReport {
    /// Number of samples that contributed to the rate (zero for `Direct`).
    #[must_use]
    pub const fn included(&self) -> usize {
        match &self.outcome {
            Outcome::Direct { .. } => 0,
            Outcome::Weighted { included, .. } => *included,
        }
    }

    /// True when the equality short circuit produced the rate.
    #[must_use]
    pub const fn is_direct(&self) -> bool {
        matches!(self.outcome, Outcome::Direct { .. })
    }
}
