//! 選択ファイル一覧

use leptos::prelude::*;

#[component]
pub fn FileList<F>(file_names: Memo<Vec<String>>, on_remove: F) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send + Sync,
{
    view! {
        <div id="fileList" class="file-list">
            <For
                each={move || file_names.get().into_iter().enumerate().collect::<Vec<_>>()}
                key=|(index, name)| (*index, name.clone())
                children=move |(index, name)| {
                    let on_remove = on_remove.clone();
                    view! {
                        <div class="file-item">
                            <div class="file-item-info">
                                <span class="file-icon">"📄"</span>
                                <span class="file-name">{name}</span>
                            </div>
                            <button
                                type="button"
                                class="remove-file"
                                title="Remove"
                                on:click=move |_| on_remove(index)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
