use crate::error::{Result, SplitzieError};
use serde::{Deserialize, Serialize};
use splitzie_common::DEFAULT_CURRENCY;
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;

/// APIのベースURL（ローカルの割り勘サービス）
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// リクエストのタイムアウト上限
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// ベースURLを上書きする環境変数
pub const BASE_URL_ENV: &str = "SPLITZIE_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.into(),
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            currency_symbol: DEFAULT_CURRENCY.into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定パスから読み込み（存在しなければデフォルト）
    pub fn load_from(config_path: &std::path::Path) -> Result<Self> {
        if config_path.exists() {
            debug!("設定ファイルを読み込み: {}", config_path.display());
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            debug!("設定ファイルなし、デフォルトを使用: {}", config_path.display());
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &std::path::Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| SplitzieError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("splitzie").join("config.json"))
    }

    /// 実際に使うベースURL
    ///
    /// 優先順位: CLI引数 > 環境変数 > 設定ファイル
    pub fn resolve_base_url(&self, cli_override: Option<&str>) -> String {
        if let Some(url) = cli_override {
            return url.to_string();
        }

        // 環境変数を優先
        if let Ok(url) = std::env::var(BASE_URL_ENV) {
            if !url.trim().is_empty() {
                debug!("{} からベースURLを取得", BASE_URL_ENV);
                return url;
            }
        }

        self.base_url.clone()
    }

    /// 実際に使うタイムアウト（CLI引数 > 設定ファイル）
    ///
    /// 0秒は全リクエストが即タイムアウトになるため拒否する。
    pub fn timeout(&self, cli_override: Option<u64>) -> Result<Duration> {
        let seconds = cli_override.unwrap_or(self.timeout_seconds);
        validate_timeout(seconds)?;
        Ok(Duration::from_secs(seconds))
    }

    pub fn set_base_url(&mut self, url: String) -> Result<()> {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SplitzieError::Config(format!(
                "URLは http:// または https:// で始まる必要があります: {}",
                url
            )));
        }
        self.base_url = url;
        self.save()
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        validate_timeout(seconds)?;
        self.timeout_seconds = seconds;
        self.save()
    }

    pub fn set_currency(&mut self, symbol: String) -> Result<()> {
        self.currency_symbol = symbol;
        self.save()
    }
}

fn validate_timeout(seconds: u64) -> Result<()> {
    if seconds == 0 {
        return Err(SplitzieError::Config("タイムアウトは1秒以上にしてください".into()));
    }
    Ok(())
}
