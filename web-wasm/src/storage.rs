//! localStorageバックエンド

use livestock_scanner_common::{Error, Result, StorageBackend};
use web_sys::Storage;

/// ブラウザのlocalStorageへ文字列のまま読み書きする
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageBackend;

/// プライベートモード等で使えない場合はエラー
fn local_storage() -> Result<Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| Error::Storage("localStorageが利用できません".to_string()))
}

impl StorageBackend for LocalStorageBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        local_storage()?
            .get_item(key)
            .map_err(|e| Error::Storage(format!("読込失敗 {key}: {e:?}")))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        local_storage()?
            .set_item(key, value)
            .map_err(|e| Error::Storage(format!("保存失敗 {key}: {e:?}")))
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use livestock_scanner_common::{Language, Store, SETTINGS_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_local_storage_round_trips_settings() {
        let storage = local_storage().expect("localStorage取得失敗");
        let _ = storage.remove_item(SETTINGS_KEY);

        let mut store = Store::open(LocalStorageBackend);
        store.set_language(Language::Pa).expect("保存失敗");

        let raw = LocalStorageBackend.get(SETTINGS_KEY).expect("読込失敗");
        assert_eq!(raw.as_deref(), Some(r#"{"language":"pa","voiceEnabled":true}"#));

        let reopened = Store::open(LocalStorageBackend);
        assert_eq!(reopened.settings().language, Language::Pa);
    }
}
