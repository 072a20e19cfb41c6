// 進捗監視の具象実装

use crate::core::{BenchReporter, ComparisonSummary, StrategyMetrics};

/// コンソール出力による進捗報告実装
#[derive(Debug, Default, Clone)]
pub struct ConsoleReporter {
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quiet() -> Self {
        Self { quiet: true }
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }
}

impl BenchReporter for ConsoleReporter {
    fn report_started(&self, strategy_count: usize, items_per_round: usize) {
        if !self.quiet {
            println!("🚀 Benchmarking {strategy_count} strategies over {items_per_round} objects...");
        }
    }

    fn report_strategy(&self, metrics: &StrategyMetrics) {
        if !self.quiet {
            println!(
                "  📊 {:<18} {:>10.3} ns/item  {:>14.0} items/s  ({} rounds, {:?})",
                metrics.strategy,
                metrics.nanos_per_item,
                metrics.items_per_second,
                metrics.iterations,
                metrics.total_time
            );
        }
    }

    fn report_error(&self, strategy: &str, error: &str) {
        if !self.quiet {
            eprintln!("❌ Error in {strategy}: {error}");
        }
    }

    fn report_completed(&self, summary: &ComparisonSummary) {
        if !self.quiet {
            match &summary.fastest {
                Some(fastest) => println!(
                    "✅ Completed {} strategies in {:?}. Fastest: {fastest}, Errors: {}",
                    summary.strategy_count, summary.total_time, summary.error_count
                ),
                None => println!(
                    "✅ Completed {} strategies in {:?}. Errors: {}",
                    summary.strategy_count, summary.total_time, summary.error_count
                ),
            }
        }
    }
}

/// 何もしない進捗報告実装（テスト・ベンチマーク用）
#[derive(Debug, Default, Clone)]
pub struct NoOpReporter;

impl NoOpReporter {
    pub fn new() -> Self {
        Self
    }
}

impl BenchReporter for NoOpReporter {
    fn report_started(&self, _strategy_count: usize, _items_per_round: usize) {
        // 何もしない
    }

    fn report_strategy(&self, _metrics: &StrategyMetrics) {
        // 何もしない
    }

    fn report_error(&self, _strategy: &str, _error: &str) {
        // 何もしない
    }

    fn report_completed(&self, _summary: &ComparisonSummary) {
        // 何もしない
    }
}
