//! Cambio-specific data transfer objects and configuration primitives built on top of
//! `alloy-primitives` integers and addresses.
#![warn(missing_docs)]

mod asset;
mod config;
mod error;
mod events;
mod reports;
mod request;
mod units;

pub use alloy_primitives::{Address, U256};
pub use asset::{Asset, OracleKind, PriceSample, WrappedForm};
pub use config::{CambioConfig, ThresholdRounding};
pub use error::{CambioError, EntrySet, OracleError};
pub use events::RegistryEvent;
pub use reports::{Outcome, RateReport};
pub use request::{DEFAULT_THRESHOLD, RateRequest, ReferenceRateRequest};
pub use units::{ONE, ONE_SQUARED};
