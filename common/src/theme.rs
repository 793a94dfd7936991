//! テーマ設定（dark / light）

use std::fmt;
use std::str::FromStr;

/// 永続化キー
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// 保存値から復元（未保存・不正値はdark）
    pub fn from_stored(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            _ => Err(format!("Unknown theme: {}. Use dark or light", s)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// テーマの保存先（ブラウザはlocalStorage、CLIは設定ファイル）
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&mut self, value: &str) -> crate::Result<()>;
}

/// メモリ上の保存先。保存履歴を残す
#[derive(Debug, Clone, Default)]
pub struct MemoryThemeStore {
    pub value: Option<String>,
    pub history: Vec<String>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.clone()
    }

    fn save(&mut self, value: &str) -> crate::Result<()> {
        self.value = Some(value.to_string());
        self.history.push(value.to_string());
        Ok(())
    }
}
