//! 設定・スキャン履歴・オンボーディングフラグのストア
//!
//! セッション中の唯一の正本をメモリに持ち、変更のたびに該当エントリを
//! バックエンド（ファイル/localStorage等）へ書き戻す。
//! 読み手は `snapshot()` で現在値を取得し、`subscribe()` で変更通知を受ける。

use crate::codec;
use crate::error::Result;
use crate::types::{AppSettings, Language, ScanResult};
use std::collections::HashMap;
use std::fmt;

pub const SETTINGS_KEY: &str = "livestock-scanner-settings";
pub const HISTORY_KEY: &str = "livestock-scanner-history";
pub const ONBOARDING_KEY: &str = "livestock-scanner-onboarding";

/// 文字列キー/値の永続化先
pub trait StorageBackend {
    /// 値が無ければ `Ok(None)`
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// メモリ上のバックエンド（テスト・一時セッション用）
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StorageBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// 変更されたトップレベルのレコード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    Settings,
    History,
    Onboarding,
}

/// 読み取り専用のスナップショット
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreSnapshot {
    pub settings: AppSettings,
    pub history: Vec<ScanResult>,
    pub has_completed_onboarding: bool,
}

pub type SubscriptionId = u64;

type Listener = Box<dyn Fn(StoreEvent, &StoreSnapshot) + Send + Sync>;

pub struct Store<B> {
    backend: B,
    settings: AppSettings,
    history: Vec<ScanResult>,
    has_completed_onboarding: bool,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: SubscriptionId,
}

impl<B: StorageBackend> Store<B> {
    /// バックエンドから3エントリを読み込んでストアを作る
    ///
    /// 欠落・破損したエントリはそれぞれ既定値になる。
    pub fn open(backend: B) -> Self {
        let settings = load_entry(&backend, SETTINGS_KEY, codec::decode_settings)
            .unwrap_or_default();
        let history = load_entry(&backend, HISTORY_KEY, codec::decode_history)
            .unwrap_or_default();
        let has_completed_onboarding =
            load_entry(&backend, ONBOARDING_KEY, codec::decode_onboarding).unwrap_or(false);

        tracing::debug!(
            language = settings.language.code(),
            history = history.len(),
            onboarding = has_completed_onboarding,
            "store opened"
        );

        Self {
            backend,
            settings,
            history,
            has_completed_onboarding,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// 新しい順
    pub fn history(&self) -> &[ScanResult] {
        &self.history
    }

    pub fn has_completed_onboarding(&self) -> bool {
        self.has_completed_onboarding
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            settings: self.settings,
            history: self.history.clone(),
            has_completed_onboarding: self.has_completed_onboarding,
        }
    }

    pub fn find(&self, id: &str) -> Option<&ScanResult> {
        self.history.iter().find(|r| r.id == id)
    }

    /// 直近のスキャン結果
    pub fn latest(&self) -> Option<&ScanResult> {
        self.history.first()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn set_language(&mut self, language: Language) -> Result<()> {
        self.settings.language = language;
        tracing::debug!(language = language.code(), "language changed");
        self.commit_settings()
    }

    /// 言語コード文字列で設定する
    ///
    /// 未知のコードは何もせず `Ok(false)` を返す。
    pub fn set_language_code(&mut self, code: &str) -> Result<bool> {
        match Language::from_code(code) {
            Some(language) => self.set_language(language).map(|_| true),
            None => {
                tracing::debug!(code, "ignoring unknown language code");
                Ok(false)
            }
        }
    }

    pub fn set_voice_enabled(&mut self, enabled: bool) -> Result<()> {
        self.settings.voice_enabled = enabled;
        tracing::debug!(enabled, "voice setting changed");
        self.commit_settings()
    }

    /// 履歴の先頭に追加（IDの重複排除はしない）
    pub fn add_to_history(&mut self, result: ScanResult) -> Result<()> {
        if self.find(&result.id).is_some() {
            tracing::warn!(id = %result.id, "adding scan result with an id already in history");
        }
        tracing::debug!(id = %result.id, "scan result added");
        self.history.insert(0, result);
        self.commit_history()
    }

    /// IDが一致する最初のエントリを削除。見つからなければ `Ok(false)`
    pub fn remove_from_history(&mut self, id: &str) -> Result<bool> {
        let Some(index) = self.history.iter().position(|r| r.id == id) else {
            return Ok(false);
        };
        self.history.remove(index);
        tracing::debug!(id, "scan result removed");
        self.commit_history().map(|_| true)
    }

    pub fn clear_history(&mut self) -> Result<()> {
        let removed = self.history.len();
        self.history.clear();
        tracing::debug!(removed, "history cleared");
        self.commit_history()
    }

    pub fn set_has_completed_onboarding(&mut self, completed: bool) -> Result<()> {
        self.has_completed_onboarding = completed;
        let persisted = self
            .backend
            .set(ONBOARDING_KEY, &codec::encode_onboarding(completed));
        self.notify(StoreEvent::Onboarding);
        persisted
    }

    /// 変更通知の購読を登録
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(StoreEvent, &StoreSnapshot) + Send + Sync + 'static,
    {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(sid, _)| *sid != id);
        self.listeners.len() != before
    }

    // メモリ上の状態は更新済み。書き込み失敗はそのまま呼び出し側へ返す
    fn commit_settings(&mut self) -> Result<()> {
        let persisted = codec::encode_settings(&self.settings)
            .and_then(|raw| self.backend.set(SETTINGS_KEY, &raw));
        self.notify(StoreEvent::Settings);
        persisted
    }

    fn commit_history(&mut self) -> Result<()> {
        let persisted = codec::encode_history(&self.history)
            .and_then(|raw| self.backend.set(HISTORY_KEY, &raw));
        self.notify(StoreEvent::History);
        persisted
    }

    fn notify(&self, event: StoreEvent) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, listener) in &self.listeners {
            listener(event, &snapshot);
        }
    }
}

impl<B> fmt::Debug for Store<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("settings", &self.settings)
            .field("history_len", &self.history.len())
            .field("has_completed_onboarding", &self.has_completed_onboarding)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn load_entry<B, T, F>(backend: &B, key: &str, decode: F) -> Option<T>
where
    B: StorageBackend,
    F: Fn(&str) -> Result<T>,
{
    let raw = match backend.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(err) => {
            tracing::warn!(key, %err, "failed to read persisted entry; using default");
            return None;
        }
    };
    match decode(&raw) {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!(key, %err, "malformed persisted entry; using default");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::generator::generate_mock_result;
    use std::sync::{Arc, Mutex};

    fn result_with_id(id: &str) -> ScanResult {
        let mut result = generate_mock_result(None);
        result.id = id.to_string();
        result
    }

    /// 書き込みが常に失敗するバックエンド
    struct QuotaExceeded;

    impl StorageBackend for QuotaExceeded {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(None)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("QuotaExceededError".into()))
        }
    }

    /// 保存領域そのものが使えない（ブラウザのプライベートモード等）
    struct Unavailable;

    impl StorageBackend for Unavailable {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(Error::Storage("storage unavailable".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(Error::Storage("storage unavailable".into()))
        }
    }

    // =============================================
    // 初期化
    // =============================================

    #[test]
    fn test_open_empty_storage_uses_defaults() {
        let store = Store::open(MemoryBackend::new());
        assert_eq!(
            *store.settings(),
            AppSettings {
                language: Language::En,
                voice_enabled: true
            }
        );
        assert!(store.history().is_empty());
        assert!(!store.has_completed_onboarding());
    }

    #[test]
    fn test_open_unavailable_storage_uses_defaults() {
        let mut store = Store::open(Unavailable);
        assert_eq!(*store.settings(), AppSettings::default());
        assert!(store.history().is_empty());
        assert!(!store.has_completed_onboarding());

        // 書き込みはエラーを返すがメモリ上では反映される
        assert!(store.set_has_completed_onboarding(true).is_err());
        assert!(store.has_completed_onboarding());
    }

    #[test]
    fn test_open_malformed_entries_fall_back_independently() {
        let backend = MemoryBackend::new()
            .with_entry(SETTINGS_KEY, "{ not json")
            .with_entry(HISTORY_KEY, r#"[{"id": 1}]"#)
            .with_entry(ONBOARDING_KEY, "true");
        let store = Store::open(backend);

        assert_eq!(*store.settings(), AppSettings::default());
        assert!(store.history().is_empty());
        assert!(store.has_completed_onboarding());
    }

    #[test]
    fn test_open_reads_persisted_state() {
        let mut store = Store::open(MemoryBackend::new());
        store.set_language(Language::Pa).expect("保存失敗");
        store.set_voice_enabled(false).expect("保存失敗");
        store.add_to_history(result_with_id("A")).expect("保存失敗");
        store.add_to_history(result_with_id("B")).expect("保存失敗");
        store.set_has_completed_onboarding(true).expect("保存失敗");

        let expected = store.snapshot();
        let reopened = Store::open(store.backend().clone());
        assert_eq!(reopened.snapshot(), expected);
    }

    // =============================================
    // 設定
    // =============================================

    #[test]
    fn test_set_language_keeps_voice_setting() {
        let mut store = Store::open(MemoryBackend::new());
        assert!(store.set_language_code("hi").expect("保存失敗"));
        assert_eq!(
            *store.settings(),
            AppSettings {
                language: Language::Hi,
                voice_enabled: true
            }
        );
        assert_eq!(
            store.backend().raw(SETTINGS_KEY),
            Some(r#"{"language":"hi","voiceEnabled":true}"#)
        );
    }

    #[test]
    fn test_set_unknown_language_is_ignored() {
        let mut store = Store::open(MemoryBackend::new());
        store.set_language(Language::Gu).expect("保存失敗");
        assert!(!store.set_language_code("xx").expect("保存失敗"));
        assert_eq!(store.settings().language, Language::Gu);
    }

    #[test]
    fn test_set_voice_keeps_language() {
        let mut store = Store::open(MemoryBackend::new());
        store.set_language(Language::Te).expect("保存失敗");
        store.set_voice_enabled(false).expect("保存失敗");
        assert_eq!(store.settings().language, Language::Te);
        assert!(!store.settings().voice_enabled);
    }

    // =============================================
    // 履歴
    // =============================================

    #[test]
    fn test_add_prepends() {
        let mut store = Store::open(MemoryBackend::new());
        store.add_to_history(result_with_id("A")).expect("保存失敗");
        let before = store.history().len();

        let r = result_with_id("B");
        store.add_to_history(r.clone()).expect("保存失敗");
        assert_eq!(store.history().len(), before + 1);
        assert_eq!(store.history()[0], r);
    }

    #[test]
    fn test_history_order_newest_first() {
        let mut store = Store::open(MemoryBackend::new());
        for id in ["A", "B", "C"] {
            store.add_to_history(result_with_id(id)).expect("保存失敗");
        }
        let ids: Vec<&str> = store.history().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["C", "B", "A"]);
    }

    #[test]
    fn test_add_does_not_deduplicate() {
        let mut store = Store::open(MemoryBackend::new());
        store.add_to_history(result_with_id("dup")).expect("保存失敗");
        store.add_to_history(result_with_id("dup")).expect("保存失敗");
        assert_eq!(store.history().len(), 2);

        // 削除は最初の1件のみ
        assert!(store.remove_from_history("dup").expect("保存失敗"));
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn test_remove_missing_id_is_noop() {
        let mut store = Store::open(MemoryBackend::new());
        for id in ["A", "B", "C"] {
            store.add_to_history(result_with_id(id)).expect("保存失敗");
        }
        let before = store.history().to_vec();
        assert!(!store.remove_from_history("Z").expect("保存失敗"));
        assert_eq!(store.history(), before.as_slice());
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = Store::open(MemoryBackend::new());
        for id in ["A", "B", "C"] {
            store.add_to_history(result_with_id(id)).expect("保存失敗");
        }
        assert!(store.remove_from_history("B").expect("保存失敗"));
        let ids: Vec<&str> = store.history().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["C", "A"]);
        assert!(store.find("B").is_none());
        assert_eq!(store.find("A").map(|r| r.id.as_str()), Some("A"));
    }

    #[test]
    fn test_clear_history() {
        let mut store = Store::open(MemoryBackend::new());
        store.clear_history().expect("保存失敗");
        assert!(store.history().is_empty());

        for id in ["A", "B"] {
            store.add_to_history(result_with_id(id)).expect("保存失敗");
        }
        store.clear_history().expect("保存失敗");
        assert!(store.history().is_empty());
        assert_eq!(store.backend().raw(HISTORY_KEY), Some("[]"));
    }

    #[test]
    fn test_latest() {
        let mut store = Store::open(MemoryBackend::new());
        assert!(store.latest().is_none());
        store.add_to_history(result_with_id("A")).expect("保存失敗");
        store.add_to_history(result_with_id("B")).expect("保存失敗");
        assert_eq!(store.latest().map(|r| r.id.as_str()), Some("B"));
    }

    #[test]
    fn test_snapshot_is_idempotent() {
        let mut store = Store::open(MemoryBackend::new());
        store.add_to_history(result_with_id("A")).expect("保存失敗");
        assert_eq!(store.snapshot(), store.snapshot());
    }

    // =============================================
    // オンボーディング
    // =============================================

    #[test]
    fn test_onboarding_persisted_as_text() {
        let mut store = Store::open(MemoryBackend::new());
        store.set_has_completed_onboarding(true).expect("保存失敗");
        assert_eq!(store.backend().raw(ONBOARDING_KEY), Some("true"));

        // 単調性は強制しない
        store.set_has_completed_onboarding(false).expect("保存失敗");
        assert_eq!(store.backend().raw(ONBOARDING_KEY), Some("false"));
        assert!(!store.has_completed_onboarding());
    }

    // =============================================
    // 通知・書き込み失敗
    // =============================================

    #[test]
    fn test_subscribers_receive_updates() {
        let mut store = Store::open(MemoryBackend::new());
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |event, snapshot| {
            sink.lock()
                .unwrap()
                .push((event, snapshot.history.len()));
        });

        store.add_to_history(result_with_id("A")).expect("保存失敗");
        store.set_voice_enabled(false).expect("保存失敗");
        store.set_has_completed_onboarding(true).expect("保存失敗");
        assert!(store.unsubscribe(id));
        store.clear_history().expect("保存失敗");

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                (StoreEvent::History, 1),
                (StoreEvent::Settings, 1),
                (StoreEvent::Onboarding, 1),
            ]
        );
    }

    #[test]
    fn test_unsubscribe_unknown_id() {
        let mut store = Store::open(MemoryBackend::new());
        assert!(!store.unsubscribe(99));
    }

    #[test]
    fn test_storage_fault_propagates_after_memory_update() {
        let mut store = Store::open(QuotaExceeded);
        let err = store.add_to_history(result_with_id("A")).unwrap_err();
        assert!(matches!(err, Error::Storage(_)));
        assert_eq!(store.history().len(), 1);

        assert!(store.set_language(Language::Hi).is_err());
        assert_eq!(store.settings().language, Language::Hi);
    }
}
