//! アプリ全体で共有するストアのコンテキスト
//!
//! `AppProvider` の内側なら `use_app()` でどこからでも取得できる。
//! 外側で呼ぶとパニックする（プログラミングエラー）。

use crate::storage::LocalStorageBackend;
use leptos::logging::error;
use leptos::prelude::*;
use livestock_scanner_common::{AppSettings, Language, ScanResult, Store, StoreSnapshot};

#[derive(Clone, Copy)]
pub struct AppContext {
    store: StoredValue<Store<LocalStorageBackend>>,
    snapshot: RwSignal<StoreSnapshot>,
}

impl AppContext {
    pub fn new() -> Self {
        let mut store = Store::open(LocalStorageBackend);
        let snapshot = RwSignal::new(store.snapshot());
        // ストアの変更通知をシグナルへ流して再描画させる
        store.subscribe(move |_, latest| snapshot.set(latest.clone()));
        Self {
            store: StoredValue::new(store),
            snapshot,
        }
    }

    pub fn settings(&self) -> AppSettings {
        self.snapshot.with(|s| s.settings)
    }

    pub fn history(&self) -> Vec<ScanResult> {
        self.snapshot.with(|s| s.history.clone())
    }

    pub fn history_len(&self) -> usize {
        self.snapshot.with(|s| s.history.len())
    }

    pub fn has_completed_onboarding(&self) -> bool {
        self.snapshot.with(|s| s.has_completed_onboarding)
    }

    pub fn find(&self, id: &str) -> Option<ScanResult> {
        self.snapshot
            .with(|s| s.history.iter().find(|r| r.id == id).cloned())
    }

    pub fn set_language(&self, language: Language) {
        self.mutate(|store| store.set_language(language));
    }

    pub fn set_voice_enabled(&self, enabled: bool) {
        self.mutate(|store| store.set_voice_enabled(enabled));
    }

    pub fn add_to_history(&self, result: ScanResult) {
        self.mutate(|store| store.add_to_history(result));
    }

    pub fn remove_from_history(&self, id: &str) -> bool {
        self.mutate(|store| store.remove_from_history(id))
            .unwrap_or(false)
    }

    pub fn clear_history(&self) {
        self.mutate(|store| store.clear_history());
    }

    pub fn set_has_completed_onboarding(&self, completed: bool) {
        self.mutate(|store| store.set_has_completed_onboarding(completed));
    }

    // 書き込み失敗時もメモリ上の状態は更新済み（次の書き込みまで乖離する）
    fn mutate<T>(
        &self,
        f: impl FnOnce(&mut Store<LocalStorageBackend>) -> livestock_scanner_common::Result<T>,
    ) -> Option<T> {
        let mut outcome = None;
        self.store.update_value(|store| outcome = Some(f(store)));
        match outcome? {
            Ok(value) => Some(value),
            Err(err) => {
                error!("ストア保存エラー: {}", err);
                None
            }
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

#[component]
pub fn AppProvider(children: Children) -> impl IntoView {
    provide_context(AppContext::new());
    children()
}

pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("use_app must be used within an AppProvider")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "use_app must be used within an AppProvider")]
    fn test_use_app_without_owner_panics() {
        let _ = use_app();
    }

    #[test]
    #[should_panic(expected = "use_app must be used within an AppProvider")]
    fn test_use_app_without_provider_panics() {
        let owner = Owner::new();
        owner.with(|| {
            let _ = use_app();
        });
    }
}
