//! 履歴一覧コンポーネント

use chrono::Local;
use leptos::prelude::*;
use livestock_scanner_common::HealthStatus;
use crate::context::use_app;

#[component]
pub fn HistoryList<FS, FN>(on_select: FS, on_scan: FN) -> impl IntoView
where
    FS: Fn(String) + Send + Sync + 'static + Copy,
    FN: Fn(()) + Send + Sync + 'static + Copy,
{
    let app = use_app();

    let on_clear = move |_| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("すべての履歴を削除しますか？").ok())
            .unwrap_or(false);
        if confirmed {
            app.clear_history();
        }
    };

    view! {
        <div class="history-list">
            <Show
                when=move || { app.history_len() > 0 }
                fallback=move || view! {
                    <div class="empty-state">
                        <p>"まだスキャンがありません"</p>
                        <button class="btn btn-primary" on:click=move |_| on_scan(())>
                            "Scan Cattle"
                        </button>
                    </div>
                }
            >
                <div class="history-header">
                    <span>{move || format!("{}件", app.history_len())}</span>
                    <button class="btn btn-tertiary btn-small" on:click=on_clear>
                        "すべて削除"
                    </button>
                </div>
                <ul class="history-items">
                    <For
                        each=move || app.history()
                        key=|result| result.id.clone()
                        let:result
                    >
                        {
                            let id = result.id.clone();
                            let marker = match result.health.status {
                                HealthStatus::Good => "🟢",
                                HealthStatus::Moderate => "🟡",
                                HealthStatus::Poor => "🔴",
                            };
                            let created = result
                                .created_at
                                .with_timezone(&Local)
                                .format("%Y-%m-%d %H:%M")
                                .to_string();
                            view! {
                                <li class="history-item" on:click=move |_| on_select(id.clone())>
                                    <img class="thumb" src=result.image_reference.clone() alt="" />
                                    <div class="history-body">
                                        <strong>{result.breed.name.clone()}</strong>
                                        <span class="text-muted">{created}</span>
                                    </div>
                                    <span class="history-status">
                                        {format!("{} {}", marker, result.health.score)}
                                    </span>
                                </li>
                            }
                        }
                    </For>
                </ul>
            </Show>
        </div>
    }
}
