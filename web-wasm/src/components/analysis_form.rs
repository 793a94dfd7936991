//! 入力フォーム（ペルソナ・目的・PDF）

use leptos::prelude::*;

use crate::browser::BrowserFile;
use crate::components::{file_list::FileList, upload_area::UploadArea};

#[component]
pub fn AnalysisForm<FS, FD, FR, FU>(
    persona: ReadSignal<String>,
    set_persona: WriteSignal<String>,
    job: ReadSignal<String>,
    set_job: WriteSignal<String>,
    file_names: Memo<Vec<String>>,
    file_label: Memo<String>,
    on_files_selected: FS,
    on_files_dropped: FD,
    on_remove: FR,
    on_submit: FU,
) -> impl IntoView
where
    FS: Fn(Vec<BrowserFile>) + 'static + Clone + Send,
    FD: Fn(Vec<BrowserFile>) + 'static + Clone + Send,
    FR: Fn(usize) + 'static + Clone + Send + Sync,
    FU: Fn(()) + 'static + Clone + Send,
{
    view! {
        <section id="inputSection" class="input-section">
            <form
                id="analysisForm"
                on:submit=move |ev| {
                    ev.prevent_default();
                    on_submit(());
                }
            >
                <div class="form-group">
                    <label for="persona">"Persona"</label>
                    <input
                        type="text"
                        id="persona"
                        placeholder="e.g. Travel Planner, PhD Researcher..."
                        prop:value=move || persona.get()
                        on:input=move |ev| set_persona.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="job_to_be_done">"Job to be done"</label>
                    <textarea
                        id="job_to_be_done"
                        rows="3"
                        placeholder="e.g. Plan a trip of 4 days for a group of 10 college friends"
                        prop:value=move || job.get()
                        on:input=move |ev| set_job.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label>"Documents"</label>
                    <UploadArea
                        file_label=file_label
                        on_files_selected=on_files_selected
                        on_files_dropped=on_files_dropped
                    />
                    <FileList file_names=file_names on_remove=on_remove />
                </div>

                <button type="submit" id="analyzeBtn" class="btn btn-primary">
                    "Analyze Documents"
                </button>
            </form>
        </section>
    }
}
