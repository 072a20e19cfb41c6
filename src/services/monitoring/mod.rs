// 進捗監視機能
// 計測開始、戦略ごとの結果、エラー、完了の通知

pub mod implementations;

// 公開API
pub use implementations::{ConsoleReporter, NoOpReporter};
