// ディスパッチベンチマーク用のカスタムエラー型定義

use thiserror::Error;

/// ディスパッチ処理固有のエラー型
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("長さエラー: 要素数 {len} はブロック幅 {block_width} の倍数ではありません")]
    InvalidLength { len: usize, block_width: usize },

    #[error("判別子エラー: {value} は有効な種別ではありません (0 または 1)")]
    InvalidDiscriminant { value: u8 },

    #[error("設定エラー: {field} - {reason}")]
    ConfigurationError { field: String, reason: String },

    #[error("レポートエラー: {source}")]
    ReportError {
        #[source]
        source: anyhow::Error,
    },

    #[error("入出力エラー: {source}")]
    IoError {
        #[from]
        source: std::io::Error,
    },
}

impl DispatchError {
    /// 長さエラーの作成
    pub fn invalid_length(len: usize, block_width: usize) -> Self {
        Self::InvalidLength { len, block_width }
    }

    /// 判別子エラーの作成
    pub fn invalid_discriminant(value: u8) -> Self {
        Self::InvalidDiscriminant { value }
    }

    /// 設定エラーの作成
    pub fn configuration(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// レポートエラーの作成
    pub fn report(source: anyhow::Error) -> Self {
        Self::ReportError { source }
    }

    /// エラーの重要度を取得
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidLength { .. } | Self::InvalidDiscriminant { .. } => {
                ErrorSeverity::Critical
            }
            Self::ConfigurationError { .. } => ErrorSeverity::High,
            Self::ReportError { .. } | Self::IoError { .. } => ErrorSeverity::Medium,
        }
    }

    /// エラーが回復可能かどうかを判定
    ///
    /// 計測自体は完了しているレポート出力失敗のみ回復可能
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::InvalidLength { .. }
            | Self::InvalidDiscriminant { .. }
            | Self::ConfigurationError { .. } => false,
            Self::ReportError { .. } | Self::IoError { .. } => true,
        }
    }
}

/// エラーの重要度レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    /// 中重要度 - 警告レベル
    Medium,
    /// 高重要度 - 要対応
    High,
    /// 致命的 - 計測不能
    Critical,
}

impl ErrorSeverity {
    /// 重要度の文字列表現を取得
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

impl From<serde_json::Error> for DispatchError {
    fn from(error: serde_json::Error) -> Self {
        DispatchError::ReportError {
            source: error.into(),
        }
    }
}

/// ディスパッチ処理の結果型
pub type DispatchResult<T> = std::result::Result<T, DispatchError>;
