//! 端末表示用の整形

use chrono::{DateTime, Local, Utc};
use livestock_scanner_common::summary::format_thousands;
use livestock_scanner_common::{HealthStatus, ScanResult};

/// ローカル時刻で `YYYY-MM-DD at HH:MM`
pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d at %H:%M").to_string()
}

fn health_marker(status: HealthStatus) -> &'static str {
    match status {
        HealthStatus::Good => "🟢",
        HealthStatus::Moderate => "🟡",
        HealthStatus::Poor => "🔴",
    }
}

/// 一覧の1行
pub fn history_line(result: &ScanResult) -> String {
    format!(
        "{} {} • {}  ⚖️ {} kg  💰 ₹{}  {}  [{}]",
        health_marker(result.health.status),
        result.breed.name,
        result.animal_type.label(),
        result.weight.estimated,
        format_thousands(result.price.estimated),
        format_timestamp(&result.created_at),
        result.id
    )
}

/// 詳細表示
pub fn detail(result: &ScanResult) -> String {
    let mut lines = vec![
        format!("{} ({})", result.breed.name, result.animal_type.label()),
        format!("  ID: {}", result.id),
        format!("  日時: {}", format_timestamp(&result.created_at)),
        format!(
            "  画像: {}",
            if result.has_image() { result.image_reference.as_str() } else { "なし" }
        ),
        format!("  品種信頼度: {}%", result.breed.confidence),
        format!(
            "  健康: {} {}/100 ({})",
            health_marker(result.health.status),
            result.health.score,
            result.health.status.as_str()
        ),
    ];
    lines.extend(result.health.notes.iter().map(|n| format!("    - {n}")));
    lines.push(format!(
        "  体重: {} kg（{}〜{} kg）",
        result.weight.estimated, result.weight.range.min, result.weight.range.max
    ));
    lines.push(format!(
        "  価格: ₹{}（₹{}〜₹{}）",
        format_thousands(result.price.estimated),
        format_thousands(result.price.range.min),
        format_thousands(result.price.range.max)
    ));
    lines.push(format!("  給餌: {}", result.feed.daily_summary));
    lines.extend(result.feed.recommendations.iter().map(|r| format!("    - {r}")));
    lines.join("\n")
}
