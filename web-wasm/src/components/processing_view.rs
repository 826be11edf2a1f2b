//! 解析中画面
//!
//! 一定時間プログレスを進めたあと、結果を1件生成して履歴に追加する。

use gloo::timers::callback::Interval;
use leptos::prelude::*;
use livestock_scanner_common::generator::{generate_mock_result, ANALYSIS_STAGES};
use crate::components::progress_bar::ProgressBar;
use crate::context::use_app;

const TICK_MS: u32 = 60;
const STAGE_MS: u32 = 500;
const TOTAL_MS: u32 = 3500;

#[component]
pub fn ProcessingView<F>(image_reference: Option<String>, on_done: F) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    let app = use_app();
    let (progress, set_progress) = signal(0u32);
    let (stage, set_stage) = signal(ANALYSIS_STAGES[0]);

    let mut elapsed = 0u32;
    let mut finished = false;
    let interval = Interval::new(TICK_MS, move || {
        if finished {
            return;
        }
        elapsed += TICK_MS;
        set_progress.set((elapsed / TICK_MS * 2).min(100));
        let index = (elapsed / STAGE_MS) as usize;
        set_stage.set(ANALYSIS_STAGES[index.min(ANALYSIS_STAGES.len() - 1)]);

        if elapsed >= TOTAL_MS {
            finished = true;
            let result = generate_mock_result(image_reference.as_deref());
            let id = result.id.clone();
            app.add_to_history(result);
            on_done(id);
        }
    });

    // 画面を離れたらタイマーを止める
    let handle = StoredValue::new_local(Some(interval));
    on_cleanup(move || {
        handle.update_value(|interval| {
            interval.take();
        });
    });

    view! {
        <div class="processing">
            <div class="processing-icon">"🐄"</div>
            <ProgressBar progress=progress stage=stage />
        </div>
    }
}
