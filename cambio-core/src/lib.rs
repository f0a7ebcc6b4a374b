//! cambio-core
//!
//! Contracts and arithmetic shared across the cambio workspace.
//!
//! - `oracle`: the `Oracle` capability every price source implements.
//! - `resolver`: the `WrappingResolver` capability and wrapped-form expansion.
//! - `fixed`: checked 18-decimal fixed-point helpers.
//! - `aggregate`: threshold filtering and the confidence-weighted average.
//!
//! Manipulation
//! ------------
//! Rates produced from these building blocks reflect whatever the underlying
//! sources report at query time. Pool-based sources can be moved within a single
//! transaction, so an aggregate must not be used as a security-critical input by
//! code that runs in the same execution context as a potential manipulator.
#![warn(missing_docs)]

/// Sample collection, threshold filter and weighted average.
pub mod aggregate;
/// Checked fixed-point arithmetic.
pub mod fixed;
/// Oracle capability trait.
pub mod oracle;
/// Wrapping resolver capability trait.
pub mod resolver;
pub mod types;

pub use aggregate::{ThresholdRule, WeightedSamples};
pub use oracle::Oracle;
pub use resolver::{IdentityResolver, WrappingResolver, expand};
pub use types::*;
