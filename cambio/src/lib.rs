//! Cambio computes consensus exchange rates from a registry of price oracles.
//!
//! Overview
//! - Oracles are queried for every combination of source form, destination form
//!   and connector asset; each answers with a rate and a confidence weight.
//! - Samples are rescaled for wrapping rates, filtered against a percentage of
//!   the strongest weight, and combined into a weighted average.
//! - A source and destination sharing a wrapped form short-circuit the search.
//! - Failing or slow oracles are absorbed as zero-weight samples; only request
//!   validation, registry misuse and fixed-point overflow surface as errors.
//!
//! Key behaviors and trade-offs
//! - Connectors: registered connectors are scanned, then the request's custom
//!   connectors, with no deduplication. Listing a registered connector again
//!   doubles the weight of that hop.
//! - Short circuit: the first matching pair in resolver order wins, even if a
//!   later pair would match too.
//! - Threshold rounding: by default pairwise rates use a multiply-first
//!   comparison and reference rates a truncating divide-first one; see
//!   [`ThresholdRounding`].
//! - Concurrency: each aggregation reads one registry snapshot. Concurrent
//!   mutations are not observed by requests already in flight.
//!
//! Manipulation
//! ------------
//! The returned rate is only as trustworthy as the sources at query time. Pool
//! reserve oracles can be moved atomically within a single transaction, so the
//! rate must not be used as a security-critical input by anything executing in
//! the same context as a potential manipulator.
//!
//! Examples
//! ```rust,ignore
//! use std::sync::Arc;
//! use cambio::{Asset, Cambio, OracleKind, RateRequest, Registry};
//!
//! let registry = Arc::new(Registry::new(owner));
//! registry.add_oracle(owner, pool_oracle, OracleKind::WrappedNativeQuoted)?;
//! registry.add_connector(owner, Asset::NONE)?;
//! registry.add_connector(owner, usdc)?;
//!
//! let cambio = Cambio::builder()
//!     .registry(registry)
//!     .wrapped_native(weth)
//!     .build()?;
//!
//! let rate = cambio
//!     .rate(&RateRequest::new(dai, usdc).threshold(10))
//!     .await?;
//! ```
#![warn(missing_docs)]

mod adapter;
pub(crate) mod core;
mod registry;
mod router;

pub use adapter::OracleAdapter;
pub use crate::core::{Cambio, CambioBuilder};
pub use registry::{Registry, RegistrySnapshot};
pub use router::util::ConnectorPool;

// Re-export core types for convenience
pub use cambio_core::{
    Address, Asset, CambioConfig, CambioError, EntrySet, IdentityResolver, ONE, Oracle,
    OracleError, OracleKind, Outcome, PriceSample, RateReport, RateRequest, ReferenceRateRequest,
    RegistryEvent, ThresholdRounding, U256, WrappedForm, WrappingResolver, fixed,
};
pub use cambio_core::DEFAULT_THRESHOLD;
