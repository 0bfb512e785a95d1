use crate::error::{AssistError, Result};
use caguuu_common::DEFAULT_CSV_PATH;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// カタログパスを上書きする環境変数
pub const CSV_PATH_ENV: &str = "CAGUUU_CSV_PATH";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 商品カタログCSV
    pub csv_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// 設定を読む。壊れていれば警告して既定値
    pub fn load_or_default() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from_or_default(&path),
            Err(e) => {
                tracing::warn!(error = %e, "設定ファイルの場所が分からないため既定値を使います");
                Self::default()
            }
        }
    }

    pub fn load_from_or_default(config_path: &Path) -> Self {
        Self::load_from(config_path).unwrap_or_else(|e| {
            tracing::warn!(path = %config_path.display(), error = %e, "設定ファイルを読めないため既定値を使います");
            Self::default()
        })
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| AssistError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("caguuu-assist").join("config.json"))
    }

    /// 使用するカタログCSV（コマンド引数 > 環境変数 > 設定ファイル）
    pub fn resolve_csv_path(&self, cli_override: Option<&Path>) -> PathBuf {
        let env_value = std::env::var(CSV_PATH_ENV).ok();
        self.resolve_with(cli_override, env_value.as_deref())
    }

    fn resolve_with(&self, cli_override: Option<&Path>, env_value: Option<&str>) -> PathBuf {
        if let Some(path) = cli_override {
            return path.to_path_buf();
        }
        match env_value {
            Some(path) if !path.trim().is_empty() => PathBuf::from(path),
            _ => self.csv_path.clone(),
        }
    }

    pub fn set_csv_path(&mut self, path: PathBuf) -> Result<()> {
        self.csv_path = path;
        self.save()
    }
}
