//! スキャン結果・設定の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - ScanResult: 1回のスキャン（模擬解析）の結果。生成後は不変
//! - AppSettings: 表示言語・音声読み上げの設定
//! - Language / AnimalType / HealthStatus: 固定の列挙値とラベル表

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 画像が無いときに使うプレースホルダ
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

/// 表示言語（6言語固定）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Hi,
    Gu,
    Mr,
    Pa,
    Te,
}

impl Language {
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Hi,
        Language::Gu,
        Language::Mr,
        Language::Pa,
        Language::Te,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Gu => "gu",
            Language::Mr => "mr",
            Language::Pa => "pa",
            Language::Te => "te",
        }
    }

    /// 英語名
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "Hindi",
            Language::Gu => "Gujarati",
            Language::Mr => "Marathi",
            Language::Pa => "Punjabi",
            Language::Te => "Telugu",
        }
    }

    /// 現地語での表記
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिन्दी",
            Language::Gu => "ગુજરાતી",
            Language::Mr => "मराठी",
            Language::Pa => "ਪੰਜਾਬੀ",
            Language::Te => "తెలుగు",
        }
    }

    /// 言語コードから変換（未知のコードはNone）
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

/// 家畜の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalType {
    Cow,
    Buffalo,
    Bull,
    Calf,
}

impl AnimalType {
    pub const ALL: [AnimalType; 4] = [
        AnimalType::Cow,
        AnimalType::Buffalo,
        AnimalType::Bull,
        AnimalType::Calf,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimalType::Cow => "cow",
            AnimalType::Buffalo => "buffalo",
            AnimalType::Bull => "bull",
            AnimalType::Calf => "calf",
        }
    }

    /// 表示ラベル
    pub fn label(&self) -> &'static str {
        match self {
            AnimalType::Cow => "Cow",
            AnimalType::Buffalo => "Buffalo",
            AnimalType::Bull => "Bull",
            AnimalType::Calf => "Calf",
        }
    }

    pub fn from_str_opt(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// 健康状態の区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Good,
    Moderate,
    Poor,
}

impl HealthStatus {
    /// スコアから区分を導出（80以上: good / 60以上: moderate / それ未満: poor）
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            HealthStatus::Good
        } else if score >= 60 {
            HealthStatus::Moderate
        } else {
            HealthStatus::Poor
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Good => "good",
            HealthStatus::Moderate => "moderate",
            HealthStatus::Poor => "poor",
        }
    }
}

/// 品種判定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breed {
    pub name: String,
    /// 信頼度（0-100）
    pub confidence: u8,
}

/// 健康評価
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    pub score: u8,
    pub status: HealthStatus,
    pub notes: Vec<String>,
}

/// 推定値の上下限
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> ValueRange<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.min <= *value && *value <= self.max
    }
}

/// 推定値と幅
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Estimate<T> {
    pub estimated: T,
    pub range: ValueRange<T>,
}

impl<T: PartialOrd> Estimate<T> {
    /// 幅が推定値を挟んでいるか
    pub fn is_bracketed(&self) -> bool {
        self.range.contains(&self.estimated)
    }
}

/// 給餌の推奨
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feed {
    #[serde(rename = "daily", alias = "dailySummary")]
    pub daily_summary: String,
    pub recommendations: Vec<String>,
}

/// スキャン結果
///
/// 永続化キーは元アプリの形式（`imageUrl` / `timestamp`）に合わせる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub id: String,

    #[serde(rename = "imageUrl", alias = "imageReference")]
    pub image_reference: String,

    #[serde(
        rename = "timestamp",
        alias = "createdAt",
        deserialize_with = "crate::codec::deserialize_timestamp"
    )]
    pub created_at: DateTime<Utc>,

    pub breed: Breed,
    pub animal_type: AnimalType,
    pub health: Health,

    /// 体重（kg）
    pub weight: Estimate<u32>,

    /// 価格（ルピー）
    pub price: Estimate<u64>,

    pub feed: Feed,
}

impl ScanResult {
    /// 画像が実際に添付されているか
    pub fn has_image(&self) -> bool {
        self.image_reference != PLACEHOLDER_IMAGE && !self.image_reference.is_empty()
    }
}

/// アプリケーション設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    pub language: Language,
    pub voice_enabled: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: Language::En,
            voice_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_thresholds() {
        assert_eq!(HealthStatus::from_score(100), HealthStatus::Good);
        assert_eq!(HealthStatus::from_score(80), HealthStatus::Good);
        assert_eq!(HealthStatus::from_score(79), HealthStatus::Moderate);
        assert_eq!(HealthStatus::from_score(60), HealthStatus::Moderate);
        assert_eq!(HealthStatus::from_score(59), HealthStatus::Poor);
        assert_eq!(HealthStatus::from_score(0), HealthStatus::Poor);
    }

    #[test]
    fn test_language_codes() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code("EN"), None);
        assert_eq!(Language::Hi.native_name(), "हिन्दी");
    }

    #[test]
    fn test_language_serialize_as_code() {
        let json = serde_json::to_string(&Language::Gu).expect("シリアライズ失敗");
        assert_eq!(json, "\"gu\"");
    }

    #[test]
    fn test_settings_default() {
        let settings = AppSettings::default();
        assert_eq!(settings.language, Language::En);
        assert!(settings.voice_enabled);
    }

    #[test]
    fn test_settings_serialize() {
        let settings = AppSettings {
            language: Language::Te,
            voice_enabled: false,
        };
        let json = serde_json::to_string(&settings).expect("シリアライズ失敗");
        assert_eq!(json, r#"{"language":"te","voiceEnabled":false}"#);
    }

    #[test]
    fn test_animal_type_parse() {
        assert_eq!(AnimalType::from_str_opt("Calf"), Some(AnimalType::Calf));
        assert_eq!(AnimalType::from_str_opt(" bull "), Some(AnimalType::Bull));
        assert_eq!(AnimalType::from_str_opt("goat"), None);
        assert_eq!(AnimalType::Buffalo.label(), "Buffalo");
    }

    #[test]
    fn test_estimate_bracketed() {
        let ok = Estimate { estimated: 300u32, range: ValueRange { min: 280, max: 320 } };
        let ng = Estimate { estimated: 300u32, range: ValueRange { min: 310, max: 320 } };
        assert!(ok.is_bracketed());
        assert!(!ng.is_bracketed());
    }

    #[test]
    fn test_feed_accepts_both_keys() {
        let a: Feed = serde_json::from_str(r#"{"daily":"x","recommendations":[]}"#)
            .expect("デシリアライズ失敗");
        let b: Feed = serde_json::from_str(r#"{"dailySummary":"x","recommendations":[]}"#)
            .expect("デシリアライズ失敗");
        assert_eq!(a, b);
    }
}
