use cambio::{OracleKind, Outcome, RateRequest};
use cambio_mock::MockBehavior;

use crate::helpers::{dai, engine, flat_oracle, mock_oracle, registry, units, usdc, w, weighted};

#[tokio::test]
async fn weak_sample_is_dropped_above_its_share() {
    let reg = registry();
    flat_oracle(&reg, 0xa1, OracleKind::WrappedNativeQuoted, 2, 100).await;
    flat_oracle(&reg, 0xa2, OracleKind::WrappedNativeQuoted, 4, 40).await;
    let cambio = engine(&reg);

    // 40 is below 50% of 100.
    let strict = cambio
        .rate_report(&RateRequest::new(dai(), usdc()).threshold(50))
        .await
        .unwrap();
    assert_eq!(strict.rate, units(2));
    assert_eq!(strict.included(), 1);

    let loose = cambio
        .rate_report(&RateRequest::new(dai(), usdc()).threshold(30))
        .await
        .unwrap();
    assert_eq!(loose.rate, weighted(&[(2, 100), (4, 40)]));
    assert_eq!(loose.included(), 2);
    match loose.outcome {
        Outcome::Weighted {
            considered,
            max_weight,
            total_weight,
            ..
        } => {
            assert_eq!(considered, 2);
            assert_eq!(max_weight, w(100));
            assert_eq!(total_weight, w(140));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }
}

#[tokio::test]
async fn included_count_never_grows_with_threshold() {
    let reg = registry();
    flat_oracle(&reg, 0xa1, OracleKind::WrappedNativeQuoted, 1, 10).await;
    flat_oracle(&reg, 0xa2, OracleKind::NativeQuoted, 2, 55).await;
    flat_oracle(&reg, 0xa3, OracleKind::WrappedNativeQuoted, 3, 100).await;
    let cambio = engine(&reg);

    let mut previous = usize::MAX;
    for threshold in 0..100u8 {
        let report = cambio
            .rate_report(&RateRequest::new(dai(), usdc()).threshold(threshold))
            .await
            .unwrap();
        assert!(report.included() <= previous, "threshold {threshold}");
        assert!(report.included() >= 1);
        previous = report.included();
    }
    assert_eq!(previous, 1);
}

#[tokio::test]
async fn pairwise_boundary_uses_multiply_first() {
    let reg = registry();
    flat_oracle(&reg, 0xa1, OracleKind::WrappedNativeQuoted, 1, 199).await;
    flat_oracle(&reg, 0xa2, OracleKind::WrappedNativeQuoted, 3, 99).await;
    let cambio = engine(&reg);

    // 99 * 100 < 199 * 50
    let report = cambio
        .rate_report(&RateRequest::new(dai(), usdc()).threshold(50))
        .await
        .unwrap();
    assert_eq!(report.included(), 1);
    assert_eq!(report.rate, units(1));
}

#[tokio::test]
async fn zero_weight_samples_do_not_count() {
    let reg = registry();
    let ctrl = mock_oracle(&reg, 0xa1, OracleKind::WrappedNativeQuoted);
    ctrl.set_fallback(MockBehavior::rate(units(7), w(0))).await;
    flat_oracle(&reg, 0xa2, OracleKind::WrappedNativeQuoted, 2, 5).await;
    let cambio = engine(&reg);

    let report = cambio
        .rate_report(&RateRequest::new(dai(), usdc()).threshold(0))
        .await
        .unwrap();
    assert_eq!(report.rate, units(2));
    assert!(matches!(report.outcome, Outcome::Weighted { considered: 1, .. }));
}
