// 計測結果に関連するデータ型定義

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// 1戦略分の計測結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyMetrics {
    pub strategy: String,
    pub iterations: u64,
    pub items_per_round: usize,
    pub total_time: Duration,
    pub nanos_per_item: f64,
    pub items_per_second: f64,
}

impl StrategyMetrics {
    /// 総処理時間からスループットを算出して作成
    pub fn new(
        strategy: impl Into<String>,
        iterations: u64,
        items_per_round: usize,
        total_time: Duration,
    ) -> Self {
        let items_processed = iterations as f64 * items_per_round as f64;
        let seconds = total_time.as_secs_f64();

        let nanos_per_item = if items_processed > 0.0 {
            total_time.as_nanos() as f64 / items_processed
        } else {
            0.0
        };

        let items_per_second = if seconds > 0.0 {
            items_processed / seconds
        } else {
            0.0
        };

        Self {
            strategy: strategy.into(),
            iterations,
            items_per_round,
            total_time,
            nanos_per_item,
            items_per_second,
        }
    }

    /// 処理した要素の総数
    pub fn items_processed(&self) -> u64 {
        self.iterations.saturating_mul(self.items_per_round as u64)
    }
}

/// 比較全体のサマリー
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonSummary {
    pub strategy_count: usize,
    pub error_count: usize,
    pub fastest: Option<String>,
    pub total_time: Duration,
}
