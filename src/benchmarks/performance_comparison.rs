//! ディスパッチ戦略のパフォーマンス測定
//!
//! 各戦略を同じ種別列のフィクスチャで指定ラウンド数だけ実行し、スループットを比較する

use crate::core::{BenchReporter, ComparisonSummary, DispatchResult, StrategyMetrics};
use crate::fixture::Fixture;
use crate::services::BenchConfig;
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};
use std::hint::black_box;
use std::path::Path;
use std::time::{Duration, Instant};

/// JSON レポートの形式
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub timestamp: String,
    pub config: BenchConfig,
    pub results: Vec<StrategyMetrics>,
    pub errors: Vec<StrategyFailure>,
}

/// 計測に失敗した戦略
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyFailure {
    pub strategy: Strategy,
    pub error: String,
}

/// 戦略比較の実行器
pub struct ComparisonRunner<R: BenchReporter> {
    config: BenchConfig,
    reporter: R,
    results: Vec<StrategyMetrics>,
    failures: Vec<StrategyFailure>,
}

impl<R: BenchReporter> ComparisonRunner<R> {
    pub fn new(config: BenchConfig, reporter: R) -> DispatchResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            reporter,
            results: Vec::new(),
            failures: Vec::new(),
        })
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    pub fn results(&self) -> &[StrategyMetrics] {
        &self.results
    }

    pub fn failures(&self) -> &[StrategyFailure] {
        &self.failures
    }

    /// 1戦略を計測して結果を記録
    pub fn run_strategy(&mut self, strategy: Strategy) -> DispatchResult<StrategyMetrics> {
        let mut fixture = Fixture::build(&self.config.fixture)?;
        let unswitcher = self.config.unswitcher();
        let iterations = self.config.iterations;

        // ウォームアップ（長さ検証もここで行われる）
        strategy.run_once(&mut fixture, &unswitcher)?;

        let start = Instant::now();
        for _ in 0..iterations {
            strategy.run_once(black_box(&mut fixture), &unswitcher)?;
        }
        let elapsed = start.elapsed();
        black_box(&fixture);

        let metrics = StrategyMetrics::new(strategy.name(), iterations, fixture.len(), elapsed);
        self.reporter.report_strategy(&metrics);
        self.results.push(metrics.clone());
        Ok(metrics)
    }

    /// 選択された全戦略を計測
    ///
    /// 個々の戦略の失敗は記録して続行する
    pub fn run_all(&mut self) -> ComparisonSummary {
        let strategies = self.config.selected_strategies();
        self.reporter.report_started(strategies.len(), self.config.fixture.len);

        let start = Instant::now();
        for strategy in &strategies {
            if let Err(error) = self.run_strategy(*strategy) {
                self.reporter.report_error(strategy.name(), &error.to_string());
                self.failures.push(StrategyFailure {
                    strategy: *strategy,
                    error: error.to_string(),
                });
            }
        }

        let summary = self.summary(start.elapsed());
        self.reporter.report_completed(&summary);
        summary
    }

    /// スループットが最も高い戦略
    pub fn fastest(&self) -> Option<&StrategyMetrics> {
        self.results
            .iter()
            .max_by(|a, b| a.items_per_second.total_cmp(&b.items_per_second))
    }

    pub fn report(&self) -> ComparisonReport {
        ComparisonReport {
            timestamp: chrono::Utc::now().to_rfc3339(),
            config: self.config.clone(),
            results: self.results.clone(),
            errors: self.failures.clone(),
        }
    }

    /// JSON形式でのレポート出力
    pub fn export_json_report(&self, path: &Path) -> DispatchResult<()> {
        let json = serde_json::to_string_pretty(&self.report())?;
        std::fs::write(path, json)?;
        Ok(())
    }

    fn summary(&self, total_time: Duration) -> ComparisonSummary {
        ComparisonSummary {
            strategy_count: self.results.len() + self.failures.len(),
            error_count: self.failures.len(),
            fastest: self.fastest().map(|metrics| metrics.strategy.clone()),
            total_time,
        }
    }
}
