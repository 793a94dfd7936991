//! アップロードエリアコンポーネント
//!
//! クリックでファイル選択、ドラッグ&ドロップでPDFのみ受け付ける

use leptos::html::Input;
use leptos::prelude::*;
use web_sys::DragEvent;

use crate::browser::{files_from_list, BrowserFile};

#[component]
pub fn UploadArea<FS, FD>(
    file_label: Memo<String>,
    on_files_selected: FS,
    on_files_dropped: FD,
) -> impl IntoView
where
    FS: Fn(Vec<BrowserFile>) + 'static + Clone + Send,
    FD: Fn(Vec<BrowserFile>) + 'static + Clone + Send,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref = NodeRef::<Input>::new();

    let on_change = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        if let Some(list) = input.files() {
            on_files_selected(files_from_list(&list));
        }
        // 同じファイルを削除後に選び直せるように
        input.set_value("");
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(false);

        if let Some(list) = ev.data_transfer().and_then(|dt| dt.files()) {
            on_files_dropped(files_from_list(&list));
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    view! {
        <div class="file-upload">
            <input
                type="file"
                id="fileInput"
                class="file-input"
                accept=".pdf,application/pdf"
                multiple=true
                node_ref=input_ref
                on:change=on_change
            />
            <label
                for="fileInput"
                class="file-upload-label"
                class:dragover=move || is_dragover.get()
                on:drop=on_drop
                on:dragover=on_dragover
                on:dragleave=on_dragleave
            >
                <div class="upload-icon">"📄"</div>
                <span id="fileLabel">{move || file_label.get()}</span>
                <p class="text-muted">"PDF only"</p>
            </label>
        </div>
    }
}
