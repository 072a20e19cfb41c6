// ベンチマーク実行系のトレイト定義

use super::types::{ComparisonSummary, StrategyMetrics};
use mockall::automock;

/// 計測進捗の報告を抽象化するトレイト
#[automock]
pub trait BenchReporter {
    /// 計測開始時の報告
    fn report_started(&self, strategy_count: usize, items_per_round: usize);

    /// 戦略ごとの計測結果の報告
    fn report_strategy(&self, metrics: &StrategyMetrics);

    /// エラー発生時の報告
    fn report_error(&self, strategy: &str, error: &str);

    /// 全計測完了時の報告
    fn report_completed(&self, summary: &ComparisonSummary);
}

// 実行時に選んだレポーターをそのまま渡せるようにする
impl BenchReporter for Box<dyn BenchReporter> {
    fn report_started(&self, strategy_count: usize, items_per_round: usize) {
        self.as_ref().report_started(strategy_count, items_per_round)
    }

    fn report_strategy(&self, metrics: &StrategyMetrics) {
        self.as_ref().report_strategy(metrics)
    }

    fn report_error(&self, strategy: &str, error: &str) {
        self.as_ref().report_error(strategy, error)
    }

    fn report_completed(&self, summary: &ComparisonSummary) {
        self.as_ref().report_completed(summary)
    }
}
