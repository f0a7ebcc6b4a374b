use std::sync::Arc;
use std::time::Duration;

use cambio::{
    Address, Asset, Cambio, OracleKind, RateRequest, ReferenceRateRequest, Registry, U256, fixed,
};
use cambio_mock::{DynamicMockOracle, MockBehavior, asset, units};
use tracing_subscriber::fmt::format::FmtSpan;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Suggested: RUST_LOG=debug and `--features tracing`
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let owner = Address::repeat_byte(0x01);
    let (weth, dai, usdc) = (asset(0xee), asset(0x0d), asset(0x0c));

    // Two scripted pool oracles quoting DAI in USDC.
    let registry = Arc::new(Registry::new(owner));
    let (deep, deep_ctrl) = DynamicMockOracle::new_with_controller(Address::repeat_byte(0xa1));
    let (thin, thin_ctrl) = DynamicMockOracle::new_with_controller(Address::repeat_byte(0xa2));
    deep_ctrl
        .set_fallback(MockBehavior::rate(units(1), U256::from(1_000_000u64)))
        .await;
    thin_ctrl
        .set_fallback(MockBehavior::rate(units(2), U256::from(1_000u64)))
        .await;
    registry.add_oracle(owner, deep, OracleKind::Both)?;
    registry.add_oracle(owner, thin, OracleKind::WrappedNativeQuoted)?;
    registry.add_connector(owner, Asset::NONE)?;
    registry.add_connector(owner, weth)?;

    let cambio = Cambio::builder()
        .registry(registry)
        .wrapped_native(weth)
        .oracle_timeout(Duration::from_secs(1))
        .build()?;

    let report = cambio
        .rate_report(&RateRequest::new(dai, usdc).threshold(10))
        .await?;
    println!(
        "DAI/USDC = {} ({} samples kept)",
        fixed::to_decimal(report.rate).unwrap_or_default(),
        report.included()
    );

    let native = cambio
        .rate_to_reference(&ReferenceRateRequest::new(dai))
        .await?;
    println!(
        "DAI/ETH = {}",
        fixed::to_decimal(native).unwrap_or_default()
    );

    Ok(())
}
