//! 永続化データのエンコード/デコード
//!
//! 保存データは信用しない: serdeで型付きに読み込んだ上で
//! 不変条件（健康区分・推定幅）を検証する。
//! デコード失敗時のフォールバックは呼び出し側（Store）の責務。

use crate::error::{Error, Result};
use crate::types::{AppSettings, HealthStatus, ScanResult};
use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer};

/// タイムスタンプの保存形式（RFC 3339文字列 またはUnixミリ秒）
#[derive(Deserialize)]
#[serde(untagged)]
enum RawTimestamp {
    Text(String),
    Millis(i64),
    Float(f64),
}

/// `timestamp` フィールドを時刻型へ復元
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error as _;

    match RawTimestamp::deserialize(deserializer)? {
        RawTimestamp::Text(text) => DateTime::parse_from_rfc3339(&text)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| D::Error::custom(format!("invalid timestamp {text:?}: {e}"))),
        RawTimestamp::Millis(millis) => Utc
            .timestamp_millis_opt(millis)
            .single()
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {millis}"))),
        RawTimestamp::Float(millis) => Utc
            .timestamp_millis_opt(millis as i64)
            .single()
            .ok_or_else(|| D::Error::custom(format!("timestamp out of range: {millis}"))),
    }
}

pub fn encode_settings(settings: &AppSettings) -> Result<String> {
    Ok(serde_json::to_string(settings)?)
}

pub fn decode_settings(raw: &str) -> Result<AppSettings> {
    Ok(serde_json::from_str(raw)?)
}

pub fn encode_history(history: &[ScanResult]) -> Result<String> {
    Ok(serde_json::to_string(history)?)
}

/// 履歴をデコードし、全レコードを検証する
///
/// 1件でも不正なら全体をエラーとする。
pub fn decode_history(raw: &str) -> Result<Vec<ScanResult>> {
    let history: Vec<ScanResult> = serde_json::from_str(raw)?;
    for result in &history {
        validate_result(result)?;
    }
    Ok(history)
}

pub fn encode_onboarding(completed: bool) -> String {
    completed.to_string()
}

/// `"true"` / `"false"` 以外は不正
pub fn decode_onboarding(raw: &str) -> Result<bool> {
    match raw.trim() {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(Error::InvalidRecord(format!("onboarding flag: {other:?}"))),
    }
}

/// スキャン結果の不変条件を検証
pub fn validate_result(result: &ScanResult) -> Result<()> {
    if result.id.is_empty() {
        return Err(Error::InvalidRecord("empty id".into()));
    }
    if result.breed.confidence > 100 {
        return Err(Error::InvalidRecord(format!(
            "{}: confidence {} out of range",
            result.id, result.breed.confidence
        )));
    }
    if result.health.score > 100 {
        return Err(Error::InvalidRecord(format!(
            "{}: health score {} out of range",
            result.id, result.health.score
        )));
    }
    if HealthStatus::from_score(result.health.score) != result.health.status {
        return Err(Error::InvalidRecord(format!(
            "{}: status {} does not match score {}",
            result.id,
            result.health.status.as_str(),
            result.health.score
        )));
    }
    if result.weight.estimated == 0 || !result.weight.is_bracketed() {
        return Err(Error::InvalidRecord(format!("{}: weight range", result.id)));
    }
    if result.price.estimated == 0 || !result.price.is_bracketed() {
        return Err(Error::InvalidRecord(format!("{}: price range", result.id)));
    }
    Ok(())
}
