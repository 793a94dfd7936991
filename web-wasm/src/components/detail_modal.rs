//! 詳細オーバーレイ

use leptos::prelude::*;
use persona_ai_common::DetailView;

#[component]
pub fn DetailModal<F>(detail: Memo<Option<DetailView>>, on_close: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    let close_overlay = on_close.clone();
    let close_icon = on_close.clone();

    view! {
        <div id="analysisModal" class="modal" class:active=move || detail.get().is_some()>
            <div id="modalOverlay" class="modal-overlay" on:click=move |_| close_overlay(()) />
            <div class="modal-content">
                <div class="modal-header">
                    <h2 id="modalTitle">{move || detail.get().map(|d| d.title).unwrap_or_default()}</h2>
                    <button id="modalClose" class="modal-close" on:click=move |_| close_icon(())>"✕"</button>
                </div>
                <div id="modalBody" class="modal-body">
                    {move || detail.get().map(|d| view! {
                        <div class="modal-section">
                            <h3>"Section Information"</h3>
                            <div class="modal-grid">
                                <p><strong>"Document: "</strong>{d.document.clone()}</p>
                                <p><strong>"Page: "</strong>{d.page}</p>
                                <p><strong>"Rank: "</strong>{d.rank.clone()}</p>
                                {d.relevance.clone().map(|r| view! {
                                    <p><strong>"Relevance: "</strong>{r}</p>
                                })}
                            </div>
                        </div>
                        <div class="modal-section">
                            <h3>"Full Analysis"</h3>
                            <p class="modal-text">{d.full_text.clone()}</p>
                        </div>
                    })}
                </div>
                <div class="modal-footer">
                    <button id="modalCloseBtn" class="btn btn-secondary" on:click=move |_| on_close(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
