//! メインアプリケーションコンポーネント

use gloo::console;
use leptos::prelude::*;
use leptos::task::spawn_local;
use persona_ai_common::{AnalysisService, PageController, ViewState};

use crate::api::{self, FetchService};
use crate::browser::{alert, scroll_into_view_later, BrowserFile};
use crate::components::{
    analysis_form::AnalysisForm, detail_modal::DetailModal, error_panel::ErrorPanel, header::Header,
    loading::Loading, particle_canvas::ParticleCanvas, results::Results,
};
use crate::theme_store::{apply_theme, LocalStorageThemeStore};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // web_sys::File を持つのでローカルシグナル
    let controller = RwSignal::new_local(PageController::<BrowserFile>::with_theme_store(
        &LocalStorageThemeStore,
    ));
    let (persona, set_persona) = signal(String::new());
    let (job, set_job) = signal(String::new());

    // 派生状態
    let view_state = Memo::new(move |_| controller.with(|c| c.view().clone()));
    let theme = Memo::new(move |_| controller.with(|c| c.theme()));
    let file_names = Memo::new(move |_| controller.with(|c| c.files().names()));
    let file_label = Memo::new(move |_| controller.with(|c| c.files().label()));
    let file_count = Memo::new(move |_| controller.with(|c| c.files().len()));
    let results = Memo::new(move |_| controller.with(|c| c.results_view()));
    let detail = Memo::new(move |_| controller.with(|c| c.detail().cloned()));
    let error_message = Memo::new(move |_| {
        view_state.with(|v| v.error_message().unwrap_or_default().to_string())
    });

    Effect::new(move |_| apply_theme(theme.get()));

    spawn_local(api::report_health());

    // テーマ切替ハンドラ
    let on_toggle_theme = move |_| {
        let mut store = LocalStorageThemeStore;
        if let Some(Err(e)) = controller.try_update(|c| c.toggle_theme(&mut store)) {
            console::warn!("Failed to save theme:", e.to_string());
        }
    };

    // ファイル追加ハンドラ
    let on_files_selected = move |files: Vec<BrowserFile>| {
        controller.update(|c| {
            c.select_files(files);
        });
    };

    let on_files_dropped = move |files: Vec<BrowserFile>| {
        if let Some(Err(e)) = controller.try_update(|c| c.drop_files(files)) {
            alert(&e.to_string());
        }
    };

    let on_remove = move |index: usize| {
        controller.update(|c| {
            c.remove_file(index);
        });
    };

    // 解析開始ハンドラ
    let on_submit = move |_| {
        let persona_value = persona.get_untracked();
        let job_value = job.get_untracked();

        match controller.try_update(|c| c.begin_submission(&persona_value, &job_value)) {
            Some(Ok(form)) => spawn_local(async move {
                let outcome = FetchService::new().analyze(&form).await;
                if let Err(e) = &outcome {
                    console::error!("Analysis error:", e.to_string());
                } else {
                    console::log!("Analysis complete");
                }
                controller.update(|c| c.finish_submission(outcome));
                if controller.with_untracked(|c| *c.view() == ViewState::Results) {
                    scroll_into_view_later("resultsSection");
                }
            }),
            Some(Err(e)) => alert(&e.to_string()),
            None => {}
        }
    };

    // 新規解析 / 再試行
    let on_reset = move |_| {
        set_persona.set(String::new());
        set_job.set(String::new());
        controller.update(|c| c.reset());
        scroll_into_view_later("inputSection");
    };

    let on_detail = move |index: usize| {
        controller.update(|c| {
            c.show_detail(index);
        });
    };

    let on_close_detail = move |_| controller.update(|c| c.close_detail());

    view! {
        <ParticleCanvas />
        <div class="container">
            <Header theme=theme on_toggle_theme=on_toggle_theme />

            <main class="main">
                <Show when=move || view_state.with(|v| v.is_input())>
                    <AnalysisForm
                        persona=persona
                        set_persona=set_persona
                        job=job
                        set_job=set_job
                        file_names=file_names
                        file_label=file_label
                        on_files_selected=on_files_selected
                        on_files_dropped=on_files_dropped
                        on_remove=on_remove
                        on_submit=on_submit
                    />
                </Show>

                <Show when=move || view_state.with(|v| v.is_loading())>
                    <Loading file_count=file_count />
                </Show>

                <Show when=move || view_state.with(|v| *v == ViewState::Results)>
                    <Results results=results on_detail=on_detail on_new_analysis=on_reset />
                </Show>

                <Show when=move || view_state.with(|v| v.error_message().is_some())>
                    <ErrorPanel message=error_message on_retry=on_reset />
                </Show>
            </main>

            <footer class="footer">
                <p>"Persona AI - Document Intelligence"</p>
            </footer>
        </div>

        <DetailModal detail=detail on_close=on_close_detail />
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use persona_ai_common::{FileEntry, SelectedFiles};
    use wasm_bindgen_test::*;

    use crate::browser::BrowserFile;

    wasm_bindgen_test_configure!(run_in_browser);

    fn browser_file(name: &str, mime_type: &str) -> BrowserFile {
        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str("%PDF-1.4"));
        let options = web_sys::FilePropertyBag::new();
        options.set_type(mime_type);
        let file = web_sys::File::new_with_str_sequence_and_options(&parts, name, &options)
            .expect("file creation failed");
        BrowserFile(file)
    }

    #[wasm_bindgen_test]
    fn wasm_browser_file_reports_name_and_type() {
        let file = browser_file("report.pdf", "application/pdf");
        assert_eq!(file.name(), "report.pdf");
        assert!(file.is_pdf());
    }

    #[wasm_bindgen_test]
    fn wasm_drop_filters_non_pdf_files() {
        let mut files = SelectedFiles::new();
        let added = files
            .add_dropped(vec![
                browser_file("a.pdf", "application/pdf"),
                browser_file("b.png", "image/png"),
            ])
            .expect("pdf should be accepted");
        assert_eq!(added, 1);
        assert_eq!(files.names(), vec!["a.pdf".to_string()]);
    }
}
