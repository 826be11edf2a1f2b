//! 結果の共有テキスト・読み上げ文

use crate::types::ScanResult;

/// 3桁区切り（12345 -> "12,345"）
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 共有用の複数行テキスト
pub fn share_text(result: &ScanResult) -> String {
    format!(
        "AI Livestock Scan Result:\n🐄 Breed: {}\n⚖️ Weight: {}kg\n💰 Price: ₹{}\n❤️ Health: {}%",
        result.breed.name,
        result.weight.estimated,
        format_thousands(result.price.estimated),
        result.health.score
    )
}

/// 結果画面で読み上げる文
pub fn speech_text(result: &ScanResult) -> String {
    format!(
        "This is a {} {}. The estimated weight is {} kilograms. \
         The health score is {} percent, which is {}. The estimated market price is {} rupees.",
        result.breed.name,
        result.animal_type.label(),
        result.weight.estimated,
        result.health.score,
        result.health.status.as_str(),
        result.price.estimated
    )
}
