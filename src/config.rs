use crate::error::{PersonaAiError, Result};
use persona_ai_common::ThemeStore;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// サーバURLの環境変数（設定ファイルより優先）
pub const SERVER_ENV: &str = "PERSONA_AI_SERVER";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server_url: String,
    /// "dark" / "light"
    pub theme: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.into(),
            theme: None,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
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
            .ok_or_else(|| PersonaAiError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("persona-ai").join("config.json"))
    }

    /// 接続先（--server > 環境変数 > 設定ファイル）
    pub fn resolve_server_url(&self, cli_override: Option<&str>) -> String {
        let env = std::env::var(SERVER_ENV).ok();
        pick_server_url(cli_override, env.as_deref(), &self.server_url)
    }

    pub fn set_server_url(&mut self, url: String, path: &Path) -> Result<()> {
        self.server_url = url.trim_end_matches('/').to_string();
        self.save_to(path)
    }
}

fn pick_server_url(cli: Option<&str>, env: Option<&str>, configured: &str) -> String {
    cli.or(env)
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(configured)
        .trim_end_matches('/')
        .to_string()
}

/// 設定ファイルの `theme` をテーマの保存先として使う
pub struct ConfigThemeStore<'a> {
    config: &'a mut Config,
    path: PathBuf,
}

impl<'a> ConfigThemeStore<'a> {
    pub fn new(config: &'a mut Config, path: PathBuf) -> Self {
        Self { config, path }
    }
}

impl ThemeStore for ConfigThemeStore<'_> {
    fn load(&self) -> Option<String> {
        self.config.theme.clone()
    }

    fn save(&mut self, value: &str) -> persona_ai_common::Result<()> {
        self.config.theme = Some(value.to_string());
        self.config
            .save_to(&self.path)
            .map_err(|e| persona_ai_common::Error::Config(e.to_string()))
    }
}
