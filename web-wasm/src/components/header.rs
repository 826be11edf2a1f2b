//! ヘッダーコンポーネント

use leptos::prelude::*;
use crate::app::Screen;

#[component]
pub fn Header<F>(on_navigate: F) -> impl IntoView
where
    F: Fn(Screen) + 'static + Copy,
{
    view! {
        <header class="header">
            <h1>"AI Livestock Scanner"</h1>
            <nav class="nav">
                <button class="btn btn-tertiary btn-small" on:click=move |_| on_navigate(Screen::Home)>"Home"</button>
                <button class="btn btn-tertiary btn-small" on:click=move |_| on_navigate(Screen::Scan)>"Scan"</button>
                <button class="btn btn-tertiary btn-small" on:click=move |_| on_navigate(Screen::History)>"History"</button>
                <button class="btn btn-tertiary btn-small" on:click=move |_| on_navigate(Screen::Voice)>"Voice"</button>
                <button class="btn btn-tertiary btn-small" on:click=move |_| on_navigate(Screen::Settings)>"Settings"</button>
            </nav>
        </header>
    }
}
