//! 音声アシスタント（テキスト入力とコマンドボタン）

use leptos::prelude::*;
use livestock_scanner_common::{reply_for, Route, VoiceCommand, VoiceReply};
use crate::context::use_app;
use crate::speech::speak;

#[component]
pub fn VoicePanel<F>(on_route: F) -> impl IntoView
where
    F: Fn(Route) + 'static + Copy,
{
    let app = use_app();
    let (transcript, set_transcript) = signal(String::new());
    let (reply, set_reply) = signal(String::new());

    let run = move |reply: VoiceReply| {
        if app.settings().voice_enabled {
            speak(&reply.text);
        }
        let route = reply.route();
        set_reply.set(reply.text);
        if let Some(route) = route {
            on_route(route);
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        run(reply_for(&transcript.get_untracked()));
        set_transcript.set(String::new());
    };

    view! {
        <div class="voice-panel">
            <form on:submit=on_submit>
                <input
                    type="text"
                    placeholder="コマンドを入力..."
                    prop:value=move || transcript.get()
                    on:input=move |ev| set_transcript.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"実行"</button>
            </form>

            <div class="voice-commands">
                {VoiceCommand::ALL
                    .into_iter()
                    .map(|command| view! {
                        <button class="btn btn-secondary" on:click=move |_| run(VoiceReply::for_command(Some(command)))>
                            <strong>{format!("\"{}\"", command.phrase())}</strong>
                            <span class="text-muted">{command.description()}</span>
                        </button>
                    })
                    .collect_view()}
            </div>

            <p class="voice-reply">{move || reply.get()}</p>
        </div>
    }
}
