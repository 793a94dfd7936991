//! エラー型定義

use thiserror::Error;

/// 入力検証エラーのメッセージ
pub const MSG_REQUIRED_FIELDS: &str = "Please fill in all required fields";
pub const MSG_NO_FILES: &str = "Please upload at least one PDF file";
pub const MSG_PDF_ONLY: &str = "Please drop PDF files only";

/// サービスエラーのフォールバックメッセージ
pub const MSG_ANALYSIS_FAILED: &str = "Analysis failed";
pub const MSG_REQUEST_FAILED: &str = "Failed to analyze documents";

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 必須項目の未入力・ファイル未選択（状態は変化しない）
    #[error("{0}")]
    Validation(&'static str),

    /// ドロップされたファイルに受け付け可能な形式がない
    #[error("{}", MSG_PDF_ONLY)]
    UnsupportedFile,

    /// 非OKレスポンスまたは通信失敗
    #[error("{0}")]
    Service(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    /// ブロッキングアラートで通知すべきエラーか
    pub fn is_alert(&self) -> bool {
        matches!(self, Error::Validation(_) | Error::UnsupportedFile)
    }

    /// 非OKレスポンスからサービスエラーを作る（メッセージ無しはフォールバック）
    pub fn from_response(message: Option<String>) -> Self {
        match message {
            Some(m) if !m.trim().is_empty() => Error::Service(m),
            _ => Error::Service(MSG_ANALYSIS_FAILED.to_string()),
        }
    }

    /// 通信失敗からサービスエラーを作る
    pub fn from_transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Error::Service(MSG_REQUEST_FAILED.to_string())
        } else {
            Error::Service(message)
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
