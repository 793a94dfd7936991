//! 解析中表示

use leptos::prelude::*;

#[component]
pub fn Loading(file_count: Memo<usize>) -> impl IntoView {
    view! {
        <section id="loadingSection" class="loading-section">
            <div class="spinner" />
            <p class="loading-text">"Analyzing documents..."</p>
            <p class="text-muted">
                {move || format!("{} file(s) sent to the analysis service", file_count.get())}
            </p>
        </section>
    }
}
