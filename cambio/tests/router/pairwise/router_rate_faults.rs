use std::time::Duration;

use cambio::{CambioError, OracleError, OracleKind, RateRequest, U256};
use cambio_mock::MockBehavior;

use crate::helpers::{builder, dai, engine, flat_oracle, mock_oracle, registry, units, usdc, w};

#[tokio::test]
async fn failing_oracle_is_absorbed() {
    let reg = registry();
    let broken = mock_oracle(&reg, 0xa1, OracleKind::WrappedNativeQuoted);
    broken
        .set_fallback(MockBehavior::Fail(OracleError::Reverted("no pool".into())))
        .await;
    flat_oracle(&reg, 0xa2, OracleKind::WrappedNativeQuoted, 3, 10).await;
    let cambio = engine(&reg);

    let rate = cambio.rate(&RateRequest::new(dai(), usdc())).await.unwrap();
    assert_eq!(rate, units(3));
    assert_eq!(broken.call_count().await, 1);
}

#[tokio::test]
async fn all_failing_oracles_yield_zero() {
    let reg = registry();
    for byte in [0xa1, 0xa2] {
        let ctrl = mock_oracle(&reg, byte, OracleKind::Both);
        ctrl.set_fallback(MockBehavior::Fail(OracleError::Malformed("bad return".into())))
            .await;
    }
    let cambio = engine(&reg);

    let report = cambio
        .rate_report(&RateRequest::new(dai(), usdc()))
        .await
        .unwrap();
    assert_eq!(report.rate, U256::ZERO);
    assert_eq!(report.included(), 0);
}

#[tokio::test(start_paused = true)]
async fn hanging_oracle_is_cut_off_by_oracle_timeout() {
    let reg = registry();
    let slow = mock_oracle(&reg, 0xa1, OracleKind::WrappedNativeQuoted);
    slow.set_fallback(MockBehavior::Hang).await;
    flat_oracle(&reg, 0xa2, OracleKind::WrappedNativeQuoted, 5, 10).await;
    let cambio = builder(&reg)
        .oracle_timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let report = cambio
        .rate_report(&RateRequest::new(dai(), usdc()))
        .await
        .unwrap();
    assert_eq!(report.rate, units(5));
    assert_eq!(report.included(), 1);
}

#[tokio::test(start_paused = true)]
async fn request_deadline_surfaces_as_timeout() {
    let reg = registry();
    let slow = mock_oracle(&reg, 0xa1, OracleKind::WrappedNativeQuoted);
    slow.set_fallback(MockBehavior::Hang).await;
    let cambio = builder(&reg)
        .oracle_timeout(Duration::from_secs(30))
        .request_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = cambio
        .rate(&RateRequest::new(dai(), usdc()))
        .await
        .unwrap_err();
    assert_eq!(err, CambioError::request_timeout("rate"));
}

#[tokio::test]
async fn overflowing_sample_is_an_error() {
    let reg = registry();
    let ctrl = mock_oracle(&reg, 0xa1, OracleKind::WrappedNativeQuoted);
    ctrl.set_fallback(MockBehavior::rate(U256::MAX, w(2))).await;
    let cambio = engine(&reg);

    let err = cambio
        .rate(&RateRequest::new(dai(), usdc()))
        .await
        .unwrap_err();
    assert!(matches!(err, CambioError::ArithmeticOverflow { .. }));
}
