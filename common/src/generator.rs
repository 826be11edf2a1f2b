//! 模擬解析結果の生成
//!
//! 実際の画像認識は行わない。品種・健康・体重・価格・給餌を
//! 乱数で組み立て、ScanResultの不変条件を満たす結果を返す。

use crate::types::{
    AnimalType, Breed, Estimate, Feed, Health, HealthStatus, ScanResult, ValueRange,
    PLACEHOLDER_IMAGE,
};
use chrono::{DateTime, Duration, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

/// 品種カタログのエントリ
#[derive(Debug, Clone, Copy)]
pub struct BreedInfo {
    pub name: &'static str,
    /// 原産地（表示には使わない）
    pub origin: &'static str,
}

pub const BREEDS: [BreedInfo; 8] = [
    BreedInfo { name: "Gir", origin: "Gujarat" },
    BreedInfo { name: "Sahiwal", origin: "Punjab" },
    BreedInfo { name: "Red Sindhi", origin: "Sindh" },
    BreedInfo { name: "Tharparkar", origin: "Rajasthan" },
    BreedInfo { name: "Murrah Buffalo", origin: "Haryana" },
    BreedInfo { name: "Jaffarabadi", origin: "Gujarat" },
    BreedInfo { name: "Ongole", origin: "Andhra Pradesh" },
    BreedInfo { name: "Kankrej", origin: "Gujarat" },
];

pub const FEED_RECOMMENDATIONS: [&str; 5] = [
    "Green fodder: 25-30 kg/day",
    "Dry fodder: 5-6 kg/day",
    "Concentrate feed: 2-3 kg/day",
    "Mineral mixture: 50g/day",
    "Clean drinking water: 40-50 liters/day",
];

/// 解析中に表示する段階メッセージ
pub const ANALYSIS_STAGES: [&str; 6] = [
    "Detecting cattle...",
    "Analyzing breed...",
    "Assessing health...",
    "Estimating weight...",
    "Calculating price...",
    "Generating recommendations...",
];

const GOOD_NOTES: [&str; 4] = [
    "Coat appears shiny and healthy",
    "Good body condition score",
    "Alert and active behavior",
    "No visible signs of disease",
];

const MODERATE_NOTES: [&str; 4] = [
    "Slight dullness in coat",
    "Body condition could improve",
    "Consider deworming schedule",
    "Monitor feeding patterns",
];

const POOR_NOTES: [&str; 4] = [
    "Coat appears rough and dull",
    "Underweight for breed standard",
    "Consult veterinarian recommended",
    "Check for parasites",
];

/// 健康区分ごとの所見リスト
pub fn health_notes(status: HealthStatus) -> &'static [&'static str] {
    match status {
        HealthStatus::Good => &GOOD_NOTES,
        HealthStatus::Moderate => &MODERATE_NOTES,
        HealthStatus::Poor => &POOR_NOTES,
    }
}

/// 種類ごとの基準体重の範囲（kg）
pub fn base_weight_bounds(animal_type: AnimalType) -> (u32, u32) {
    match animal_type {
        AnimalType::Calf => (80, 150),
        AnimalType::Bull => (500, 800),
        AnimalType::Cow | AnimalType::Buffalo => (300, 500),
    }
}

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_RANDOM_LEN: usize = 9;

/// `scan-<unixミリ秒>-<base36乱数9桁>` 形式のIDを生成
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R, now: DateTime<Utc>) -> String {
    let suffix: String = (0..ID_RANDOM_LEN)
        .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
        .collect();
    format!("scan-{}-{}", now.timestamp_millis(), suffix)
}

/// 模擬解析結果を生成（スレッドローカル乱数・現在時刻）
///
/// `image_reference` が無い・空のときはプレースホルダを使う。
pub fn generate_mock_result(image_reference: Option<&str>) -> ScanResult {
    generate_with_rng(&mut rand::thread_rng(), image_reference, None, Utc::now())
}

/// 種類を固定して生成
pub fn generate_mock_result_for(
    image_reference: Option<&str>,
    animal_type: AnimalType,
) -> ScanResult {
    generate_with_rng(
        &mut rand::thread_rng(),
        image_reference,
        Some(animal_type),
        Utc::now(),
    )
}

/// 乱数源・種類・時刻を指定して生成
///
/// `animal_type` がNoneなら種類も乱数で選ぶ。
pub fn generate_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    image_reference: Option<&str>,
    animal_type: Option<AnimalType>,
    now: DateTime<Utc>,
) -> ScanResult {
    let breed = BREEDS.choose(rng).copied().unwrap_or(BREEDS[0]);
    let animal_type = animal_type
        .unwrap_or_else(|| *AnimalType::ALL.choose(rng).unwrap_or(&AnimalType::Cow));

    let health_score: u8 = rng.gen_range(40..=100);
    let health_status = HealthStatus::from_score(health_score);
    let note_count = rng.gen_range(2..=4);
    let notes = health_notes(health_status)[..note_count]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let (low, high) = base_weight_bounds(animal_type);
    let base_weight: u32 = rng.gen_range(low..=high);
    let base_price: u64 = u64::from(base_weight) * rng.gen_range(80..=150u64);

    let weight = Estimate {
        estimated: base_weight,
        range: ValueRange {
            min: base_weight.saturating_sub(rng.gen_range(10..=30)),
            max: base_weight + rng.gen_range(10..=30),
        },
    };

    let price = Estimate {
        estimated: base_price,
        range: ValueRange {
            min: base_price.saturating_sub(rng.gen_range(3000..=8000)),
            max: base_price + rng.gen_range(3000..=8000),
        },
    };

    let daily_summary = format!(
        "{}kg green fodder + {}kg concentrate",
        rng.gen_range(20..=35),
        rng.gen_range(2..=4)
    );
    let recommendation_count = rng.gen_range(3..=5);
    let recommendations = FEED_RECOMMENDATIONS[..recommendation_count]
        .iter()
        .map(|s| s.to_string())
        .collect();

    let image_reference = image_reference
        .filter(|s| !s.is_empty())
        .unwrap_or(PLACEHOLDER_IMAGE)
        .to_string();

    ScanResult {
        id: generate_id(rng, now),
        image_reference,
        created_at: now,
        breed: Breed {
            name: breed.name.to_string(),
            confidence: rng.gen_range(85..=99),
        },
        animal_type,
        health: Health {
            score: health_score,
            status: health_status,
            notes,
        },
        weight,
        price,
        feed: Feed {
            daily_summary,
            recommendations,
        },
    }
}

/// デモ用のサンプル履歴を生成（新しい順）
pub fn generate_sample_history(count: usize) -> Vec<ScanResult> {
    generate_sample_history_with_rng(&mut rand::thread_rng(), count, Utc::now())
}

/// i番目のエントリは `now - i日 - (0〜12時間)` の日時を持つ
pub fn generate_sample_history_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    now: DateTime<Utc>,
) -> Vec<ScanResult> {
    (0..count)
        .map(|i| {
            let offset_hours = rng.gen_range(0..=12);
            let created_at = now - Duration::days(i as i64) - Duration::hours(offset_hours);
            generate_with_rng(rng, None, None, created_at)
        })
        .collect()
}
