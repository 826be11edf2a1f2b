//! ファイル保存バックエンド
//!
//! キーごとに `<data_dir>/<key>.json` を1ファイルとして読み書きする。

use livestock_scanner_common::{Error, StorageBackend, Store};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn get(&self, key: &str) -> livestock_scanner_common::Result<Option<String>> {
        match std::fs::read_to_string(self.entry_path(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(Error::Io(err)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> livestock_scanner_common::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.entry_path(key), value).map_err(|err| {
            Error::Storage(format!("{}: {}", self.entry_path(key).display(), err))
        })
    }
}

/// データディレクトリ上のストアを開く
pub fn open_store(dir: &Path) -> Store<FileBackend> {
    tracing::debug!(dir = %dir.display(), "opening store");
    Store::open(FileBackend::new(dir))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_entry_is_none() {
        let dir = tempdir().expect("Failed to create temp dir");
        let backend = FileBackend::new(dir.path());
        assert_eq!(backend.get("livestock-scanner-history").expect("読み込み失敗"), None);
    }

    #[test]
    fn test_set_creates_directory() {
        let dir = tempdir().expect("Failed to create temp dir");
        let mut backend = FileBackend::new(dir.path().join("data"));
        backend.set("livestock-scanner-onboarding", "true").expect("保存失敗");

        assert!(dir.path().join("data/livestock-scanner-onboarding.json").exists());
        assert_eq!(
            backend.get("livestock-scanner-onboarding").expect("読み込み失敗"),
            Some("true".to_string())
        );
    }
}
