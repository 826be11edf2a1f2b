//! 撮影・画像選択コンポーネント

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{File, FileReader};

#[component]
pub fn UploadArea<F>(on_image_selected: F) -> impl IntoView
where
    F: Fn(Option<String>) + 'static + Clone,
{
    let on_skip = {
        let on_image_selected = on_image_selected.clone();
        move |_| on_image_selected(None)
    };

    let on_change = move |ev: web_sys::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            read_file(file, on_image_selected.clone());
        }
    };

    view! {
        <div class="upload-area">
            <div class="upload-icon">"📷"</div>
            <p>"家畜の写真を撮影または選択してください"</p>
            <label class="btn btn-primary">
                "Take Photo"
                <input
                    type="file"
                    accept="image/*"
                    capture="environment"
                    class="hidden"
                    on:change=on_change
                />
            </label>
            <button class="btn btn-secondary" on:click=on_skip>
                "写真なしで解析"
            </button>
            <p class="text-muted">"対応形式: JPEG, PNG"</p>
        </div>
    }
}

/// data URLとして読み込んで渡す
fn read_file<F>(file: File, on_image_selected: F)
where
    F: Fn(Option<String>) + 'static,
{
    let Ok(reader) = FileReader::new() else {
        return;
    };

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_image_selected(Some(data_url));
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
