//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use persona_ai::error::PersonaAiError;
use persona_ai::scanner;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

/// 存在しないフォルダをスキャンした場合
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(matches!(result, Err(PersonaAiError::FolderNotFound(_))));
}

/// 存在しないファイルを指定した場合
#[test]
fn test_scan_inputs_nonexistent_file() {
    let result = scanner::scan_inputs(&[PathBuf::from("/nonexistent/report.pdf")]);
    assert!(matches!(result, Err(PersonaAiError::FileNotFound(_))));
}

/// 空のフォルダをスキャンした場合
#[test]
fn test_scan_empty_folder() {
    let dir = tempdir().expect("Failed to create temp dir");
    let result = scanner::scan_folder(dir.path());

    // 空フォルダはエラーではなく空のVecを返す
    assert!(result.unwrap().is_empty());
}

/// PersonaAiErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        PersonaAiError::Config("テスト設定エラー".to_string()),
        PersonaAiError::FileNotFound("report.pdf".to_string()),
        PersonaAiError::FolderNotFound("/path/to/folder".to_string()),
        PersonaAiError::Service("Model not loaded".to_string()),
        PersonaAiError::Prompt("not a terminal".to_string()),
        PersonaAiError::DetailOutOfRange(7, 5),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 詳細番号エラーのメッセージ確認
#[test]
fn test_detail_out_of_range_message() {
    let display = PersonaAiError::DetailOutOfRange(7, 5).to_string();
    assert!(display.contains('7'));
    assert!(display.contains("1〜5"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: PersonaAiError = io_err.into();

    assert!(matches!(err, PersonaAiError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: PersonaAiError = json_err.into();

    assert!(matches!(err, PersonaAiError::JsonParse(_)));
}

/// common::Errorからの変換（メッセージはそのまま）
#[test]
fn test_common_error_conversion() {
    let common_err = persona_ai_common::Error::Validation("Please upload at least one PDF file");
    let err: PersonaAiError = common_err.into();

    assert!(matches!(err, PersonaAiError::Analysis(_)));
    assert_eq!(err.to_string(), "Please upload at least one PDF file");
}
