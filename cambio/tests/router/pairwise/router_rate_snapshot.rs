use cambio::{OracleKind, RateRequest};

use crate::helpers::{dai, engine, flat_oracle, owner, registry, units, usdc, weighted};

#[tokio::test]
async fn repeated_requests_agree() {
    let reg = registry();
    flat_oracle(&reg, 0xa1, OracleKind::WrappedNativeQuoted, 2, 30).await;
    flat_oracle(&reg, 0xa2, OracleKind::NativeQuoted, 3, 70).await;
    let cambio = engine(&reg);

    let req = RateRequest::new(dai(), usdc()).threshold(0);
    let first = cambio.rate_report(&req).await.unwrap();
    let second = cambio.rate_report(&req).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.rate, weighted(&[(2, 30), (3, 70)]));
}

#[tokio::test]
async fn snapshot_is_unaffected_by_later_mutations() {
    let reg = registry();
    let gone = flat_oracle(&reg, 0xa1, OracleKind::WrappedNativeQuoted, 2, 50).await;
    flat_oracle(&reg, 0xa2, OracleKind::WrappedNativeQuoted, 4, 50).await;
    let cambio = engine(&reg);
    let before = reg.snapshot();

    reg.remove_oracle(owner(), cambio::Address::repeat_byte(0xa1), OracleKind::WrappedNativeQuoted)
        .unwrap();

    let req = RateRequest::new(dai(), usdc()).threshold(0);
    let old = cambio.rate_with_snapshot(&before, &req).await.unwrap();
    let new = cambio.rate(&req).await.unwrap();
    assert_eq!(old.rate, units(3));
    assert_eq!(new, units(4));
    assert_eq!(gone.call_count().await, 1);
}
