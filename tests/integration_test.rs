//! Integration Tests - Registry and Collector
//!
//! Tests the interaction between the collector use case, the registry
//! and mocked metric sources. Uses mockall for trait mocking and
//! tokio::test for async tests.

use std::sync::Arc;

use mockall::mock;
use rust_decimal_macros::dec;

use chain_metric_adapters::domain::chain::Chain;
use chain_metric_adapters::domain::metric::{AdapterMeta, FetchOptions, MetricRecord};
use chain_metric_adapters::error::AdapterError;
use chain_metric_adapters::ports::MetricSource;
use chain_metric_adapters::usecases::{AdapterKind, AdapterRegistry, Collector, Outcome};

// ---- Mock Definitions ----

mock! {
    pub Source {}

    #[async_trait::async_trait]
    impl MetricSource for Source {
        async fn start(&self) -> Result<i64, AdapterError>;
        async fn fetch(&self, options: &FetchOptions) -> Result<MetricRecord, AdapterError>;
        fn meta(&self) -> AdapterMeta;
    }
}

// 2024-09-09 10:00:00 UTC
const TARGET: i64 = 1_725_876_000;
const TARGET_DAY: i64 = 1_725_840_000;

fn registry_with(entries: Vec<(&str, AdapterKind, Chain, MockSource)>) -> Arc<AdapterRegistry> {
    let mut registry = AdapterRegistry::new();
    for (protocol, kind, chain, source) in entries {
        registry.register(protocol, kind, chain, Arc::new(source));
    }
    Arc::new(registry)
}

// ---- Integration Tests ----

#[tokio::test]
async fn test_collects_every_entry_for_the_day() {
    let mut volume = MockSource::new();
    volume.expect_start().returning(|| Ok(1_600_000_000));
    volume
        .expect_fetch()
        .withf(|opts| {
            opts.timestamp == TARGET
                && opts.start_timestamp == Some(TARGET_DAY)
                && opts.end_timestamp == Some(TARGET_DAY + 86_400)
        })
        .times(1)
        .returning(|_| Ok(MetricRecord::volume(TARGET_DAY, Some(dec!(42.5)))));

    let mut fees = MockSource::new();
    fees.expect_start().returning(|| Ok(1_725_741_586));
    fees.expect_fetch()
        .times(1)
        .returning(|_| Ok(MetricRecord::fees(TARGET_DAY, "3".into(), "3".into())));

    let registry = registry_with(vec![
        ("native", AdapterKind::Dexs, Chain::Ethereum, volume),
        ("filament", AdapterKind::Fees, Chain::Sei, fees),
    ]);

    let reports = Collector::new(registry).collect_day(TARGET).await;
    assert_eq!(reports.len(), 2);

    let native = reports.iter().find(|r| r.protocol == "native").unwrap();
    match &native.outcome {
        Outcome::Collected(record) => {
            assert_eq!(record.timestamp, TARGET_DAY);
            assert_eq!(record.daily_volume, Some(dec!(42.5)));
        }
        other => panic!("unexpected outcome: {other:?}"),
    }

    let filament = reports.iter().find(|r| r.protocol == "filament").unwrap();
    assert_eq!(filament.kind, AdapterKind::Fees);
    assert!(matches!(&filament.outcome, Outcome::Collected(r) if r.daily_fees.as_deref() == Some("3")));
}

#[tokio::test]
async fn test_day_before_start_is_skipped() {
    let mut late = MockSource::new();
    late.expect_start().returning(|| Ok(TARGET_DAY + 86_400));
    late.expect_fetch().never();

    let registry = registry_with(vec![("filament", AdapterKind::Fees, Chain::Sei, late)]);
    let reports = Collector::new(registry).collect_day(TARGET).await;

    assert!(matches!(
        reports[0].outcome,
        Outcome::NotStarted { start } if start == TARGET_DAY + 86_400
    ));
}

#[tokio::test]
async fn test_start_later_the_same_day_still_fetches() {
    let mut same_day = MockSource::new();
    same_day.expect_start().returning(|| Ok(TARGET_DAY + 3_600));
    same_day
        .expect_fetch()
        .times(1)
        .returning(|_| Ok(MetricRecord::fees(TARGET_DAY, "0".into(), "0".into())));

    let registry = registry_with(vec![("filament", AdapterKind::Fees, Chain::Sei, same_day)]);
    let reports = Collector::new(registry).collect_day(TARGET).await;

    assert!(matches!(reports[0].outcome, Outcome::Collected(_)));
}

#[tokio::test]
async fn test_one_failure_does_not_affect_others() {
    let mut broken = MockSource::new();
    broken
        .expect_start()
        .returning(|| Err(AdapterError::NoData { chain: Chain::Bsc }));
    broken.expect_fetch().never();

    let mut healthy = MockSource::new();
    healthy.expect_start().returning(|| Ok(0));
    healthy
        .expect_fetch()
        .returning(|_| Ok(MetricRecord::volume(TARGET_DAY, None)));

    let registry = registry_with(vec![
        ("native", AdapterKind::Dexs, Chain::Bsc, broken),
        ("native", AdapterKind::Dexs, Chain::Ethereum, healthy),
    ]);
    let reports = Collector::new(registry).collect_day(TARGET).await;

    let bsc = reports.iter().find(|r| r.chain == Chain::Bsc).unwrap();
    let eth = reports.iter().find(|r| r.chain == Chain::Ethereum).unwrap();
    assert!(matches!(bsc.outcome, Outcome::Failed(AdapterError::NoData { .. })));
    assert!(matches!(&eth.outcome, Outcome::Collected(r) if r.daily_volume.is_none()));
}

#[tokio::test]
async fn test_fetch_error_is_reported() {
    let mut source = MockSource::new();
    source.expect_start().returning(|| Ok(0));
    source
        .expect_fetch()
        .returning(|_| Err(AdapterError::MissingTimestamps));

    let registry = registry_with(vec![("filament", AdapterKind::Fees, Chain::Sei, source)]);
    let reports = Collector::new(registry).collect_day(TARGET).await;

    let line = reports[0].to_json();
    assert_eq!(line["status"], "failed");
    assert_eq!(line["protocol"], "filament");
    assert_eq!(line["chain"], "sei");
    assert_eq!(line["error"], "startTimestamp and endTimestamp must be provided");
}

#[tokio::test]
async fn test_report_json_for_collected_record() {
    let mut source = MockSource::new();
    source.expect_start().returning(|| Ok(0));
    source
        .expect_fetch()
        .returning(|_| Ok(MetricRecord::volume(TARGET_DAY, Some(dec!(1234.5)))));

    let registry = registry_with(vec![("native", AdapterKind::Dexs, Chain::Ethereum, source)]);
    let reports = Collector::new(registry).collect_day(TARGET).await;

    let line = reports[0].to_json();
    assert_eq!(line["status"], "collected");
    assert_eq!(line["kind"], "dexs");
    assert_eq!(line["record"]["timestamp"], TARGET_DAY);
    assert_eq!(line["record"]["dailyVolume"], 1234.5);
}

#[tokio::test]
async fn test_registry_lookup_by_protocol_and_chain() {
    let mut source = MockSource::new();
    source
        .expect_meta()
        .returning(|| AdapterMeta::with_methodology([("dailyVolume", "Swap volume")]));

    let registry = registry_with(vec![("native", AdapterKind::Dexs, Chain::Bsc, source)]);

    let found = registry.get("native", Chain::Bsc).unwrap();
    assert_eq!(found.meta().methodology["dailyVolume"], "Swap volume");
    assert!(registry.get("native", Chain::Ethereum).is_none());
    assert!(registry.get("filament", Chain::Bsc).is_none());
}
