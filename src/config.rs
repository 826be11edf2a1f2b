use crate::error::{Result, ScannerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DATA_DIR_ENV: &str = "LIVESTOCK_SCANNER_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 保存先ディレクトリ（未指定ならOS標準のデータディレクトリ）
    pub data_dir: Option<PathBuf>,
    /// 模擬解析の待ち時間（ミリ秒）
    pub processing_millis: u64,
    /// `history seed` の既定件数
    pub sample_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            processing_millis: 3500,
            sample_count: 5,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ScannerError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("livestock-scanner").join("config.json"))
    }

    /// 保存先ディレクトリを解決
    ///
    /// 環境変数 > 設定ファイル > OS標準のデータディレクトリ の順。
    pub fn resolve_data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_dir()
            .ok_or_else(|| ScannerError::Config("データディレクトリが見つかりません".into()))?;
        Ok(base.join("livestock-scanner"))
    }

    pub fn set_data_dir(&mut self, dir: PathBuf) -> Result<()> {
        self.data_dir = Some(dir);
        self.save()
    }
}
