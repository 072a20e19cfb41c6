// 比較実行とレポート出力の統合テスト
use dispatch_bench::{
    benchmarks::{ComparisonReport, ComparisonRunner},
    services::{BenchConfig, NoOpReporter},
    FixtureConfig, LengthPolicy, Strategy,
};
use tempfile::TempDir;

fn small_config() -> BenchConfig {
    BenchConfig::new()
        .with_fixture(FixtureConfig::default().with_len(256).with_seed(99))
        .with_iterations(10)
}

#[test]
fn test_full_comparison_covers_every_strategy() {
    let mut runner = ComparisonRunner::new(small_config(), NoOpReporter::new()).unwrap();
    let summary = runner.run_all();

    assert_eq!(summary.strategy_count, Strategy::ALL.len());
    assert_eq!(summary.error_count, 0);

    let names: Vec<&str> = runner.results().iter().map(|m| m.strategy.as_str()).collect();
    let expected: Vec<&str> = Strategy::ALL.iter().map(|s| s.name()).collect();
    assert_eq!(names, expected);

    for metrics in runner.results() {
        assert_eq!(metrics.iterations, 10);
        assert_eq!(metrics.items_per_round, 256);
        assert_eq!(metrics.items_processed(), 2560);
    }

    let fastest = runner.fastest().unwrap();
    assert_eq!(summary.fastest.as_deref(), Some(fastest.strategy.as_str()));
}

#[test]
fn test_masked_comparison_on_unaligned_length() {
    let config = small_config()
        .with_fixture(FixtureConfig::default().with_len(1000))
        .with_policy(LengthPolicy::MaskTrailing)
        .with_strategies(vec![Strategy::Unswitched, Strategy::VirtualDispatch]);
    let mut runner = ComparisonRunner::new(config, NoOpReporter::new()).unwrap();

    let summary = runner.run_all();
    assert_eq!(summary.error_count, 0);
    assert_eq!(runner.results()[0].items_per_round, 1000);
}

#[test]
fn test_json_report_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("performance_report.json");

    let config = small_config().with_strategies(vec![Strategy::StaticInline, Strategy::Unswitched]);
    let mut runner = ComparisonRunner::new(config.clone(), NoOpReporter::new()).unwrap();
    runner.run_all();
    runner.export_json_report(&path).unwrap();

    let report: ComparisonReport =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(report.config, config);
    assert_eq!(report.results.len(), 2);
    assert!(report.errors.is_empty());
    assert!(chrono::DateTime::parse_from_rfc3339(&report.timestamp).is_ok());
}
