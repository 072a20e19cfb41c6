//! パフォーマンス測定とベンチマークモジュール
//!
//! 動的ディスパッチ、静的ディスパッチ、アンスイッチの性能比較を提供

pub mod performance_comparison;

pub use performance_comparison::{ComparisonReport, ComparisonRunner, StrategyFailure};
