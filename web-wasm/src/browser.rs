//! ブラウザAPIの薄いラッパ

use persona_ai_common::FileEntry;
use wasm_bindgen::JsCast;
use web_sys::{FileList, ScrollBehavior, ScrollIntoViewOptions};

/// `<input type="file">` やドロップで得たファイル
#[derive(Debug, Clone)]
pub struct BrowserFile(pub web_sys::File);

impl FileEntry for BrowserFile {
    fn name(&self) -> String {
        self.0.name()
    }

    fn mime_type(&self) -> String {
        self.0.type_()
    }
}

pub fn files_from_list(list: &FileList) -> Vec<BrowserFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserFile)
        .collect()
}

/// ブロッキングアラート
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// 描画完了後にスムーズスクロール
pub fn scroll_into_view_later(element_id: &'static str) {
    gloo::timers::callback::Timeout::new(0, move || {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(element_id))
        else {
            return;
        };
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    })
    .forget();
}

/// JS例外を文字列に
pub fn describe_js_error(value: &wasm_bindgen::JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{:?}", value)
}
