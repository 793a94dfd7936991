use thiserror::Error;

#[derive(Error, Debug)]
pub enum PersonaAiError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("{0}")]
    Analysis(#[from] persona_ai_common::Error),

    #[error("解析に失敗しました: {0}")]
    Service(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("詳細番号が範囲外です: {0}（1〜{1}）")]
    DetailOutOfRange(usize, usize),
}

pub type Result<T> = std::result::Result<T, PersonaAiError>;
