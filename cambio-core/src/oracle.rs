use async_trait::async_trait;

use crate::{Address, Asset, OracleError, PriceSample};

/// A price source queried through an intermediate connector asset.
///
/// Implementations wrap pool-reserve ratios, external feeds, and so on. The
/// engine treats every call as potentially failing; errors never abort an
/// aggregation.
#[async_trait]
pub trait Oracle: Send + Sync {
    /// Stable identity of the source. Registry sets are keyed by this address.
    fn address(&self) -> Address;

    /// Human-readable label for logs (e.g. "uniswap-v2", "chainlink").
    fn name(&self) -> &'static str {
        "unknown"
    }

    /// Rate of `src` in `dst` routed through `connector`.
    ///
    /// The returned rate is 18-decimal fixed point; the weight is an unscaled
    /// confidence or liquidity figure. A zero weight means "no opinion".
    /// `Asset::NONE` as connector asks for a direct quote.
    async fn get_rate(
        &self,
        src: Asset,
        dst: Asset,
        connector: Asset,
    ) -> Result<PriceSample, OracleError>;
}
