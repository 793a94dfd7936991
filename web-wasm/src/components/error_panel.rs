//! エラー表示

use leptos::prelude::*;

#[component]
pub fn ErrorPanel<F>(message: Memo<String>, on_retry: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    view! {
        <section id="errorSection" class="error-section">
            <div class="error-icon">"⚠️"</div>
            <h2>"Analysis Failed"</h2>
            <p id="errorMessage" class="error-message">{move || message.get()}</p>
            <button id="retryBtn" class="btn btn-primary" on:click=move |_| on_retry(())>
                "Try Again"
            </button>
        </section>
    }
}
