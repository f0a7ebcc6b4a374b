use cambio::{Asset, OracleKind, Outcome, RateRequest, WrappedForm};

use crate::helpers::{
    StaticResolver, asset, engine, flat_oracle, registry_with, units, usdc,
};

fn half() -> cambio::U256 {
    units(1) / cambio::U256::from(2u8)
}

#[tokio::test]
async fn shared_form_answers_without_aggregating() {
    let wrapper = asset(0x51);
    let base = asset(0x52);
    let other = asset(0x53);
    let resolver = StaticResolver::new()
        .with_forms(
            wrapper,
            vec![
                WrappedForm::identity(wrapper),
                WrappedForm::new(base, units(2)),
            ],
        )
        .with_forms(
            other,
            vec![WrappedForm::identity(other), WrappedForm::new(base, units(3))],
        );
    let reg = registry_with(resolver);
    let ctrl = flat_oracle(&reg, 0xa1, OracleKind::WrappedNativeQuoted, 100, 1_000).await;
    let cambio = engine(&reg);

    let report = cambio
        .rate_report(&RateRequest::new(wrapper, other))
        .await
        .unwrap();
    assert_eq!(report.rate, units(6));
    match report.outcome {
        Outcome::Direct { src, dst } => {
            assert_eq!(src.asset, base);
            assert_eq!(dst.asset, base);
        }
        other => panic!("expected direct outcome, got {other:?}"),
    }

    // Pairs before the match were still scanned; their samples are discarded.
    let queried: Vec<_> = ctrl.queries().await.into_iter().map(|(s, d, _)| (s, d)).collect();
    assert_eq!(
        queried,
        vec![(wrapper, other), (wrapper, base), (base, other)]
    );
}

#[tokio::test]
async fn first_match_in_resolver_order_wins() {
    let a = asset(0x61);
    let b = asset(0x62);
    let x = asset(0x70);
    let y = asset(0x71);
    let resolver = StaticResolver::new()
        .with_forms(a, vec![WrappedForm::new(y, units(1)), WrappedForm::new(x, units(2))])
        .with_forms(b, vec![WrappedForm::new(x, units(5)), WrappedForm::new(y, units(7))]);
    let reg = registry_with(resolver);
    let cambio = engine(&reg);

    // (y, y) is reached before (x, x) even though the latter would give 10.
    let rate = cambio.rate(&RateRequest::new(a, b)).await.unwrap();
    assert_eq!(rate, units(7));
}

#[tokio::test]
async fn fractional_wrapping_rates_compose() {
    let a = asset(0x61);
    let b = asset(0x62);
    let x = asset(0x70);
    let resolver = StaticResolver::new()
        .with_forms(a, vec![WrappedForm::new(x, half())])
        .with_forms(b, vec![WrappedForm::new(x, units(3))]);
    let reg = registry_with(resolver);
    let cambio = engine(&reg);

    let rate = cambio.rate(&RateRequest::new(a, b)).await.unwrap();
    assert_eq!(rate, units(3) / cambio::U256::from(2u8));
}

#[tokio::test]
async fn disabling_wrapping_skips_the_resolver() {
    let a = asset(0x61);
    let b = asset(0x62);
    let x = asset(0x70);
    let resolver = StaticResolver::new()
        .with_forms(a, vec![WrappedForm::new(x, units(2))])
        .with_forms(b, vec![WrappedForm::new(x, units(3))]);
    let reg = registry_with(resolver);
    flat_oracle(&reg, 0xa1, OracleKind::WrappedNativeQuoted, 4, 10).await;
    let cambio = engine(&reg);

    let report = cambio
        .rate_report(&RateRequest::new(a, b).use_wrapping(false))
        .await
        .unwrap();
    assert!(!report.is_direct());
    assert_eq!(report.rate, units(4));
}

#[tokio::test]
async fn wrapping_rates_scale_oracle_samples() {
    let a = asset(0x61);
    let x = asset(0x70);
    let resolver = StaticResolver::new().with_forms(a, vec![WrappedForm::new(x, units(2))]);
    let reg = registry_with(resolver);
    let ctrl = flat_oracle(&reg, 0xa1, OracleKind::WrappedNativeQuoted, 5, 10).await;
    let cambio = engine(&reg);

    let rate = cambio.rate(&RateRequest::new(a, usdc())).await.unwrap();
    assert_eq!(rate, units(10));
    assert_eq!(ctrl.queries().await, vec![(x, usdc(), Asset::NONE)]);
}
