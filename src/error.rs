use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScannerError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("スキャン結果が見つかりません: {0}")]
    NotFound(String),

    #[error("未対応の言語コードです: {0}（en/hi/gu/mr/pa/te のいずれか）")]
    InvalidLanguage(String),

    #[error("未対応の家畜の種類です: {0}（cow/buffalo/bull/calf のいずれか）")]
    InvalidAnimalType(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error(transparent)]
    Common(#[from] livestock_scanner_common::Error),
}

pub type Result<T> = std::result::Result<T, ScannerError>;
