//! 設定パネルと初回の言語選択

use leptos::prelude::*;
use livestock_scanner_common::Language;
use crate::context::use_app;

/// 初回起動時の言語選択
///
/// 選択すると言語を保存し、オンボーディング完了として記録する。
#[component]
pub fn LanguagePicker<F>(on_done: F) -> impl IntoView
where
    F: Fn(()) + 'static + Copy,
{
    let app = use_app();

    view! {
        <div class="onboarding">
            <h1>"AI Livestock Scanner"</h1>
            <p>"Choose your language"</p>
            <div class="language-grid">
                {Language::ALL
                    .into_iter()
                    .map(|language| view! {
                        <button
                            class="btn btn-secondary language-option"
                            on:click=move |_| {
                                app.set_language(language);
                                app.set_has_completed_onboarding(true);
                                on_done(());
                            }
                        >
                            <span class="native">{language.native_name()}</span>
                            <span class="text-muted">{language.name()}</span>
                        </button>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn SettingsPanel() -> impl IntoView {
    let app = use_app();

    view! {
        <div class="settings-panel">
            <div class="settings-grid">
                <div class="form-group">
                    <label for="language">"言語"</label>
                    <select
                        id="language"
                        on:change=move |ev| {
                            if let Some(language) = Language::from_code(&event_target_value(&ev)) {
                                app.set_language(language);
                            }
                        }
                    >
                        {Language::ALL
                            .into_iter()
                            .map(|language| view! {
                                <option
                                    value=language.code()
                                    selected=move || app.settings().language == language
                                >
                                    {format!("{} ({})", language.native_name(), language.name())}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="voice">"音声読み上げ"</label>
                    <input
                        type="checkbox"
                        id="voice"
                        prop:checked=move || app.settings().voice_enabled
                        on:change=move |ev| app.set_voice_enabled(event_target_checked(&ev))
                    />
                </div>

                <div class="form-group">
                    <span class="text-muted">
                        {move || format!("保存済みスキャン: {}件", app.history_len())}
                    </span>
                </div>
            </div>
        </div>
    }
}
