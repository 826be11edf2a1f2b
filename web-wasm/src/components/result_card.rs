//! 解析結果カード

use chrono::Local;
use leptos::prelude::*;
use livestock_scanner_common::summary::format_thousands;
use livestock_scanner_common::{share_text, speech_text, HealthStatus, ScanResult};
use crate::context::use_app;
use crate::share::{share_text as share_with_browser, ShareOutcome};
use crate::speech::speak;

#[component]
pub fn ResultCard<F>(id: String, on_deleted: F) -> impl IntoView
where
    F: Fn(()) + Send + Sync + 'static + Copy,
{
    let app = use_app();
    let lookup_id = id.clone();
    let result = Memo::new(move |_| app.find(&lookup_id));

    move || match result.get() {
        Some(result) => view! { <ResultDetail result=result on_deleted=on_deleted /> }.into_any(),
        None => view! {
            <div class="result-card not-found">
                <p>"結果が見つかりません"</p>
                <p class="text-muted">{id.clone()}</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ResultDetail<F>(result: ScanResult, on_deleted: F) -> impl IntoView
where
    F: Fn(()) + Send + Sync + 'static + Copy,
{
    let app = use_app();
    let (share_status, set_share_status) = signal(None::<ShareOutcome>);

    let speak_text = speech_text(&result);
    let on_speak = move |_| speak(&speak_text);

    let share_body = share_text(&result);
    let fallback_text = share_body.clone();
    let on_share = move |_| {
        let text = share_body.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let outcome = share_with_browser(&text).await;
            set_share_status.set(Some(outcome));
        });
    };

    let delete_id = result.id.clone();
    let on_delete = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("この結果を削除しますか？").ok())
            .unwrap_or(false);
        if confirmed && app.remove_from_history(&delete_id) {
            on_deleted(());
        }
    };

    let status_class = match result.health.status {
        HealthStatus::Good => "status status-good",
        HealthStatus::Moderate => "status status-moderate",
        HealthStatus::Poor => "status status-poor",
    };
    let created = result
        .created_at
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string();

    view! {
        <div class="result-card">
            <img class="result-image" src=result.image_reference.clone() alt="scan" />
            <p class="text-muted">{created}</p>

            <section class="result-section">
                <h2>{result.breed.name.clone()}</h2>
                <p>{format!("{} · 信頼度 {}%", result.animal_type.label(), result.breed.confidence)}</p>
            </section>

            <section class="result-section">
                <h3>"Health"</h3>
                <p>
                    <span class=status_class>{result.health.status.as_str()}</span>
                    {format!(" {}/100", result.health.score)}
                </p>
                <ul>
                    {result.health.notes.iter().map(|note| view! { <li>{note.clone()}</li> }).collect_view()}
                </ul>
            </section>

            <section class="result-section">
                <h3>"Weight"</h3>
                <p>{format!(
                    "{} kg ({}-{} kg)",
                    result.weight.estimated, result.weight.range.min, result.weight.range.max
                )}</p>
            </section>

            <section class="result-section">
                <h3>"Market Price"</h3>
                <p>{format!(
                    "₹{} (₹{} - ₹{})",
                    format_thousands(result.price.estimated),
                    format_thousands(result.price.range.min),
                    format_thousands(result.price.range.max)
                )}</p>
            </section>

            <section class="result-section">
                <h3>"Feed"</h3>
                <p>{result.feed.daily_summary.clone()}</p>
                <ul>
                    {result.feed.recommendations.iter().map(|rec| view! { <li>{rec.clone()}</li> }).collect_view()}
                </ul>
            </section>

            <div class="result-actions">
                <Show when=move || app.settings().voice_enabled>
                    <button class="btn btn-secondary" on:click=on_speak.clone()>"🔊 読み上げ"</button>
                </Show>
                <button class="btn btn-secondary" on:click=on_share>"共有"</button>
                <button class="btn btn-tertiary" on:click=on_delete>"削除"</button>
            </div>

            {move || match share_status.get() {
                Some(ShareOutcome::Copied) => view! {
                    <p class="text-muted">"クリップボードにコピーしました"</p>
                }.into_any(),
                // 共有もコピーもできない場合は手動でコピーしてもらう
                Some(ShareOutcome::Unavailable) => view! {
                    <textarea class="share-text" readonly=true>{fallback_text.clone()}</textarea>
                }.into_any(),
                Some(ShareOutcome::Shared) | None => ().into_any(),
            }}
        </div>
    }
}
