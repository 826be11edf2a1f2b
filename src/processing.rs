//! 模擬解析の実行
//!
//! 一定時間の待機（段階メッセージ付き）のあと、結果を1件だけ生成して履歴へ追加する。

use crate::error::Result;
use indicatif::{ProgressBar, ProgressStyle};
use livestock_scanner_common::generator::{
    generate_mock_result, generate_mock_result_for, ANALYSIS_STAGES as STAGES,
};
use livestock_scanner_common::{AnimalType, ScanResult, StorageBackend, Store};
use std::time::Duration;

/// 進捗2%刻み
const STEPS: u64 = 50;

/// 経過ステップに対応する段階メッセージ
pub fn stage_for_step(step: u64) -> &'static str {
    let index = (step * STAGES.len() as u64 / STEPS) as usize;
    STAGES[index.min(STAGES.len() - 1)]
}

/// 解析を模擬し、生成した結果を履歴の先頭へ追加して返す
pub async fn run_scan<B: StorageBackend>(
    store: &mut Store<B>,
    image_reference: Option<&str>,
    animal_type: Option<AnimalType>,
    duration: Duration,
    show_progress: bool,
) -> Result<ScanResult> {
    let bar = if show_progress {
        let bar = ProgressBar::new(100);
        bar.set_style(
            ProgressStyle::with_template("{bar:40.green/white} {pos:>3}% {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        bar
    } else {
        ProgressBar::hidden()
    };

    let step_delay = duration / STEPS as u32;
    bar.set_message(stage_for_step(0));
    for step in 1..=STEPS {
        if !step_delay.is_zero() {
            tokio::time::sleep(step_delay).await;
        }
        bar.set_position(step * 100 / STEPS);
        bar.set_message(stage_for_step(step));
    }
    bar.finish_and_clear();

    let result = match animal_type {
        Some(animal_type) => generate_mock_result_for(image_reference, animal_type),
        None => generate_mock_result(image_reference),
    };
    tracing::debug!(id = %result.id, breed = %result.breed.name, "scan completed");

    store.add_to_history(result.clone())?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use livestock_scanner_common::MemoryBackend;

    #[test]
    fn test_stage_progression() {
        assert_eq!(stage_for_step(0), "Detecting cattle...");
        assert_eq!(stage_for_step(STEPS / 2), "Estimating weight...");
        assert_eq!(stage_for_step(STEPS), "Generating recommendations...");
    }

    #[tokio::test]
    async fn test_run_scan_adds_exactly_one_result() {
        let mut store = Store::open(MemoryBackend::new());
        let result = run_scan(&mut store, None, Some(AnimalType::Calf), Duration::ZERO, false)
            .await
            .expect("スキャン失敗");

        assert_eq!(store.history().len(), 1);
        assert_eq!(store.history()[0], result);
        assert_eq!(result.animal_type, AnimalType::Calf);
    }

    #[tokio::test]
    async fn test_run_scan_keeps_image_reference() {
        let mut store = Store::open(MemoryBackend::new());
        let result = run_scan(&mut store, Some("photos/cow.jpg"), None, Duration::from_millis(5), false)
            .await
            .expect("スキャン失敗");
        assert_eq!(result.image_reference, "photos/cow.jpg");
    }
}
