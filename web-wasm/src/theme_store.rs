//! テーマのlocalStorage保存

use persona_ai_common::{Error, Result, Theme, ThemeStore, THEME_KEY};

/// `localStorage["theme"]` に "dark" / "light" をそのまま保存する
pub struct LocalStorageThemeStore;

impl LocalStorageThemeStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl ThemeStore for LocalStorageThemeStore {
    fn load(&self) -> Option<String> {
        Self::storage()?.get_item(THEME_KEY).ok()?
    }

    fn save(&mut self, value: &str) -> Result<()> {
        let storage = Self::storage()
            .ok_or_else(|| Error::Config("localStorage is unavailable".to_string()))?;
        storage
            .set_item(THEME_KEY, value)
            .map_err(|e| Error::Config(crate::browser::describe_js_error(&e)))
    }
}

/// `<html data-theme="...">` に反映
pub fn apply_theme(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root.set_attribute("data-theme", theme.as_str());
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn wasm_theme_round_trip_through_local_storage() {
        let mut store = LocalStorageThemeStore;
        store.save("light").expect("save failed");
        assert_eq!(store.load().as_deref(), Some("light"));

        store.save("dark").expect("save failed");
        assert_eq!(Theme::from_stored(store.load().as_deref()), Theme::Dark);
    }

    #[wasm_bindgen_test]
    fn wasm_apply_theme_sets_attribute() {
        apply_theme(Theme::Light);
        let root = web_sys::window().unwrap().document().unwrap().document_element().unwrap();
        assert_eq!(root.get_attribute("data-theme").as_deref(), Some("light"));
    }
}
