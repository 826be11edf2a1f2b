//! 結果の共有（Web Share API、なければクリップボード）

use js_sys::{Object, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

const SHARE_TITLE: &str = "Cattle Scan Result";

// 未対応ブラウザでは呼び出し自体が例外になるのでcatchで受ける
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = navigator, js_name = "share", catch)]
    fn navigator_share(data: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(js_namespace = ["navigator", "clipboard"], js_name = "writeText", catch)]
    fn clipboard_write_text(text: &str) -> Result<Promise, JsValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// 共有シートを開いた（キャンセルも含む）
    Shared,
    /// クリップボードへコピーした
    Copied,
    /// どちらも使えない
    Unavailable,
}

pub async fn share_text(text: &str) -> ShareOutcome {
    if let Ok(data) = share_data(text) {
        if let Ok(promise) = navigator_share(&data) {
            // ユーザーのキャンセルは失敗扱いしない
            let _ = JsFuture::from(promise).await;
            return ShareOutcome::Shared;
        }
    }

    match clipboard_write_text(text) {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(_) => ShareOutcome::Copied,
            Err(_) => ShareOutcome::Unavailable,
        },
        Err(_) => ShareOutcome::Unavailable,
    }
}

fn share_data(text: &str) -> Result<JsValue, JsValue> {
    let data = Object::new();
    Reflect::set(&data, &"title".into(), &SHARE_TITLE.into())?;
    Reflect::set(&data, &"text".into(), &text.into())?;
    Ok(data.into())
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_share_data_has_title_and_text() {
        let data = share_data("AI Livestock Scan Result:").expect("共有データ作成失敗");
        let title = Reflect::get(&data, &"title".into()).expect("title取得失敗");
        let text = Reflect::get(&data, &"text".into()).expect("text取得失敗");
        assert_eq!(title.as_string().as_deref(), Some(SHARE_TITLE));
        assert_eq!(text.as_string().as_deref(), Some("AI Livestock Scan Result:"));
    }
}
