//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use livestock_scanner::error::ScannerError;

/// ScannerErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        ScannerError::Config("テスト設定エラー".to_string()),
        ScannerError::NotFound("scan-1".to_string()),
        ScannerError::InvalidLanguage("fr".to_string()),
        ScannerError::InvalidAnimalType("goat".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// 言語エラーに選択肢が含まれる
#[test]
fn test_invalid_language_message() {
    let err = ScannerError::InvalidLanguage("fr".to_string());
    let display = format!("{}", err);

    assert!(display.contains("fr"));
    assert!(display.contains("en/hi/gu/mr/pa/te"));
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: ScannerError = io_err.into();

    assert!(matches!(err, ScannerError::Io(_)));
    let display = format!("{}", err);
    assert!(display.contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: ScannerError = json_err.into();

    assert!(matches!(err, ScannerError::JsonParse(_)));
}

/// common::Errorからの変換（透過的エラー）
#[test]
fn test_common_error_conversion() {
    let common_err = livestock_scanner_common::Error::Storage("QuotaExceededError".to_string());
    let err: ScannerError = common_err.into();

    assert!(matches!(err, ScannerError::Common(_)));
    let display = format!("{}", err);
    assert!(display.contains("QuotaExceededError"));
}
