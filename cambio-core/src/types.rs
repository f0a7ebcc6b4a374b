//! Re-export of foundational types from `cambio-types`.
// Consolidated re-exports so downstream crates can depend on `cambio-core` only

pub use cambio_types::{Address, U256};
pub use cambio_types::{Asset, OracleKind, PriceSample, WrappedForm};
pub use cambio_types::{CambioConfig, ThresholdRounding};
pub use cambio_types::{CambioError, EntrySet, OracleError};
pub use cambio_types::{DEFAULT_THRESHOLD, RateRequest, ReferenceRateRequest};
pub use cambio_types::{ONE, ONE_SQUARED};
pub use cambio_types::{Outcome, RateReport, RegistryEvent};
