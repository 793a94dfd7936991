//! 解析結果（メタデータ・上位セクション・詳細解析）

use leptos::prelude::*;
use persona_ai_common::{AnalysisCard, ResultsView, SectionCard};

#[component]
pub fn Results<FD, FN>(results: Memo<Option<ResultsView>>, on_detail: FD, on_new_analysis: FN) -> impl IntoView
where
    FD: Fn(usize) + 'static + Clone + Send + Sync,
    FN: Fn(()) + 'static + Clone + Send,
{
    let metadata = move || results.get().map(|r| r.metadata).unwrap_or_default();
    let sections = move || results.get().map(|r| r.sections).unwrap_or_default();
    let analyses = move || results.get().map(|r| r.analyses).unwrap_or_default();
    let on_detail_analysis = on_detail.clone();

    view! {
        <section id="resultsSection" class="results-section">
            <div class="results-header">
                <h2>"Analysis Results"</h2>
                <button id="newAnalysisBtn" class="btn btn-secondary" on:click=move |_| on_new_analysis(())>
                    "New Analysis"
                </button>
            </div>

            <div id="metadata" class="metadata">
                <For
                    each=metadata
                    key=|item| item.label
                    children=|item| view! {
                        <div class="metadata-item">
                            <span class="metadata-label">{item.label}</span>
                            <span class="metadata-value">{item.value}</span>
                        </div>
                    }
                />
            </div>

            <h3>"Top Sections"</h3>
            <div id="topSections" class="top-sections">
                <For
                    each=sections
                    key=|card| card.index
                    children=move |card| view! { <SectionCardView card=card on_detail=on_detail.clone() /> }
                />
            </div>

            <h3>"Detailed Analysis"</h3>
            <div id="detailedAnalysis" class="detailed-analysis">
                <For
                    each=analyses
                    key=|card| card.index
                    children=move |card| view! { <AnalysisCardView card=card on_detail=on_detail_analysis.clone() /> }
                />
            </div>
        </section>
    }
}

#[component]
fn SectionCardView<F>(card: SectionCard, on_detail: F) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send + Sync,
{
    let index = card.index;

    view! {
        <div class="section-card" on:click=move |_| on_detail(index)>
            <div class="section-header">
                <div class="section-rank">{card.rank}</div>
                <div class="section-info">
                    <div class="section-title-text">{card.title}</div>
                    <div class="section-meta">
                        <span>"📄 "{card.document}</span>
                        <span>"📖 "{card.page}</span>
                        {card.badge.map(|badge| view! { <span class="section-badge">{badge}</span> })}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AnalysisCardView<F>(card: AnalysisCard, on_detail: F) -> impl IntoView
where
    F: Fn(usize) + 'static + Clone + Send + Sync,
{
    let index = card.index;

    view! {
        <div class="analysis-card" on:click=move |_| on_detail(index)>
            <div class="analysis-header">
                <span class="analysis-title">{card.document}</span>
                <span class="analysis-page">{card.page}</span>
            </div>
            <p class="analysis-text">{card.text}</p>
        </div>
    }
}
