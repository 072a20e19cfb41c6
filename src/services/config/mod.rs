// 設定管理機能
// ベンチマーク全体の設定、JSONファイルからの読み込み、妥当性検証

pub mod implementations;

// 公開API
pub use implementations::BenchConfig;
