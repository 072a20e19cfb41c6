// サービス層 - 設定と進捗報告
// 計測ロジックから切り離された周辺機能を提供

pub mod config;
pub mod monitoring;

// 公開API
pub use config::BenchConfig;
pub use monitoring::{ConsoleReporter, NoOpReporter};
