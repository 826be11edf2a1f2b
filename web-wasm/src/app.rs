//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use livestock_scanner_common::Route;
use crate::components::{
    header::Header,
    history_list::HistoryList,
    processing_view::ProcessingView,
    result_card::ResultCard,
    settings_panel::{LanguagePicker, SettingsPanel},
    upload_area::UploadArea,
    voice_panel::VoicePanel,
};
use crate::context::{use_app, AppProvider};

/// 表示中の画面
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    Onboarding,
    Home,
    Scan,
    Processing { image_reference: Option<String> },
    Result { id: String },
    History,
    Settings,
    Voice,
}

impl From<Route> for Screen {
    fn from(route: Route) -> Self {
        match route {
            Route::Home => Screen::Home,
            Route::Scan => Screen::Scan,
            Route::History => Screen::History,
            Route::Settings => Screen::Settings,
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    view! {
        <AppProvider>
            <Shell />
        </AppProvider>
    }
}

/// 画面の切り替え
#[component]
fn Shell() -> impl IntoView {
    let app = use_app();
    let initial = if app.has_completed_onboarding() {
        Screen::Home
    } else {
        Screen::Onboarding
    };
    let (screen, set_screen) = signal(initial);

    let navigate = move |next: Screen| set_screen.set(next);

    view! {
        <div class="container">
            <Show when=move || screen.get() != Screen::Onboarding>
                <Header on_navigate=navigate />
            </Show>

            {move || match screen.get() {
                Screen::Onboarding => view! {
                    <LanguagePicker on_done=move |_| navigate(Screen::Home) />
                }.into_any(),
                Screen::Home => view! {
                    <div class="home">
                        <p class="text-muted">
                            {move || format!("{}件のスキャン", app.history_len())}
                        </p>
                        <button class="btn btn-primary" on:click=move |_| navigate(Screen::Scan)>
                            "Scan Cattle"
                        </button>
                        <button class="btn btn-secondary" on:click=move |_| navigate(Screen::Voice)>
                            "Voice Assistant"
                        </button>
                    </div>
                }.into_any(),
                Screen::Scan => view! {
                    <UploadArea on_image_selected=move |image_reference| {
                        navigate(Screen::Processing { image_reference })
                    } />
                }.into_any(),
                Screen::Processing { image_reference } => view! {
                    <ProcessingView
                        image_reference=image_reference
                        on_done=move |id| navigate(Screen::Result { id })
                    />
                }.into_any(),
                Screen::Result { id } => view! {
                    <ResultCard id=id on_deleted=move |_| navigate(Screen::History) />
                }.into_any(),
                Screen::History => view! {
                    <HistoryList
                        on_select=move |id| navigate(Screen::Result { id })
                        on_scan=move |_| navigate(Screen::Scan)
                    />
                }.into_any(),
                Screen::Settings => view! { <SettingsPanel /> }.into_any(),
                Screen::Voice => view! {
                    <VoicePanel on_route=move |route: Route| navigate(route.into()) />
                }.into_any(),
            }}
        </div>
    }
}
