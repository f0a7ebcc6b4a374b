use cambio::{Asset, OracleKind, RateRequest};
use cambio_mock::MockBehavior;

use crate::helpers::{dai, engine, mock_oracle, owner, registry, units, usdc, w, wbtc, weighted};

#[tokio::test]
async fn every_connector_is_asked_and_endpoints_are_skipped() {
    let reg = registry();
    reg.add_connector(owner(), usdc()).unwrap();
    reg.add_connector(owner(), wbtc()).unwrap();
    let ctrl = mock_oracle(&reg, 0xa1, OracleKind::WrappedNativeQuoted);
    ctrl.set_behavior(dai(), usdc(), Asset::NONE, MockBehavior::rate(units(1), w(10)))
        .await;
    ctrl.set_behavior(dai(), usdc(), wbtc(), MockBehavior::rate(units(3), w(10)))
        .await;
    let cambio = engine(&reg);

    let rate = cambio
        .rate(&RateRequest::new(dai(), usdc()).threshold(0))
        .await
        .unwrap();
    assert_eq!(rate, weighted(&[(1, 10), (3, 10)]));

    let connectors: Vec<_> = ctrl.queries().await.into_iter().map(|(_, _, c)| c).collect();
    assert_eq!(connectors, vec![Asset::NONE, wbtc()]);
}

#[tokio::test]
async fn custom_connectors_follow_registered_ones_without_dedup() {
    let reg = registry();
    let ctrl = mock_oracle(&reg, 0xa1, OracleKind::WrappedNativeQuoted);
    ctrl.set_behavior(dai(), usdc(), Asset::NONE, MockBehavior::rate(units(1), w(10)))
        .await;
    ctrl.set_behavior(dai(), usdc(), wbtc(), MockBehavior::rate(units(4), w(10)))
        .await;
    let cambio = engine(&reg);

    let req = RateRequest::new(dai(), usdc())
        .custom_connectors(&[wbtc(), Asset::NONE])
        .threshold(0);
    let report = cambio.rate_report(&req).await.unwrap();

    // NONE is registered and listed again, so its hop counts twice.
    assert_eq!(report.included(), 3);
    assert_eq!(report.rate, weighted(&[(1, 10), (4, 10), (1, 10)]));
    let connectors: Vec<_> = ctrl.queries().await.into_iter().map(|(_, _, c)| c).collect();
    assert_eq!(connectors, vec![Asset::NONE, wbtc(), Asset::NONE]);
}

#[tokio::test]
async fn oracles_are_queried_connector_major() {
    let reg = registry();
    reg.add_connector(owner(), wbtc()).unwrap();
    let first = mock_oracle(&reg, 0xa1, OracleKind::NativeQuoted);
    let second = mock_oracle(&reg, 0xa2, OracleKind::WrappedNativeQuoted);
    first
        .set_fallback(MockBehavior::rate(units(2), w(1)))
        .await;
    second
        .set_fallback(MockBehavior::rate(units(2), w(1)))
        .await;
    let cambio = engine(&reg);

    let report = cambio
        .rate_report(&RateRequest::new(dai(), usdc()))
        .await
        .unwrap();
    assert_eq!(report.included(), 4);
    assert_eq!(first.call_count().await, 2);
    assert_eq!(second.call_count().await, 2);
}
