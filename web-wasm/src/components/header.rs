//! ヘッダーコンポーネント（タイトル + テーマ切替）

use leptos::prelude::*;
use persona_ai_common::Theme;

#[component]
pub fn Header<F>(theme: Memo<Theme>, on_toggle_theme: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send,
{
    view! {
        <header class="header">
            <h1>"Persona AI"</h1>
            <p class="subtitle">"Persona-driven document intelligence"</p>
            <button
                id="themeToggle"
                class="theme-toggle"
                title="Toggle theme"
                on:click=move |_| on_toggle_theme(())
            >
                {move || match theme.get() {
                    Theme::Dark => "☀️",
                    Theme::Light => "🌙",
                }}
            </button>
        </header>
    }
}
