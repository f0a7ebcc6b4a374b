use cambio::{CambioError, RateRequest};

use crate::helpers::{dai, engine, registry, usdc};

#[tokio::test]
async fn same_asset_is_rejected() {
    let reg = registry();
    let cambio = engine(&reg);
    let err = cambio.rate(&RateRequest::new(dai(), dai())).await.unwrap_err();
    assert!(matches!(err, CambioError::InvalidRequest(_)));
}

#[tokio::test]
async fn threshold_of_one_hundred_is_rejected() {
    let reg = registry();
    let cambio = engine(&reg);
    let err = cambio
        .rate(&RateRequest::new(dai(), usdc()).threshold(100))
        .await
        .unwrap_err();
    assert!(matches!(err, CambioError::InvalidRequest(_)));

    let ok = cambio
        .rate(&RateRequest::new(dai(), usdc()).threshold(99))
        .await;
    assert!(ok.is_ok());
}

#[tokio::test]
async fn no_oracles_yield_zero() {
    let reg = registry();
    let cambio = engine(&reg);
    let report = cambio
        .rate_report(&RateRequest::new(dai(), usdc()))
        .await
        .unwrap();
    assert!(report.rate.is_zero());
    assert_eq!(report.included(), 0);
    assert!(!report.is_direct());
}
