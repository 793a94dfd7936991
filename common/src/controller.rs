//! ページコントローラ
//!
//! 選択ファイル・最新の解析結果・テーマ・画面状態を1つの構造体で持ち、
//! フロントエンド（Leptos / CLI）のイベントハンドラから参照で渡して使う。

use crate::error::{Error, Result, MSG_NO_FILES, MSG_REQUIRED_FIELDS};
use crate::files::{FileEntry, SelectedFiles};
use crate::render::{DetailView, ResultsView};
use crate::theme::{Theme, ThemeStore};
use crate::types::{AnalysisResult, HealthStatus};
use crate::view::{ViewEvent, ViewState};

pub const MSG_BUSY: &str = "An analysis is already in progress";

/// `/api/analyze` に送る内容（persona, job_to_be_done, files[]）
#[derive(Debug, Clone)]
pub struct SubmissionForm<F> {
    pub persona: String,
    pub job_to_be_done: String,
    pub files: Vec<F>,
}

/// 解析サービス
///
/// ブラウザは fetch、CLI は reqwest で実装する。
/// どちらも呼び出し元のタスクで直接awaitするので `Send` は要求しない。
#[allow(async_fn_in_trait)]
pub trait AnalysisService<F> {
    async fn analyze(&self, form: &SubmissionForm<F>) -> Result<AnalysisResult>;

    async fn health(&self) -> Result<HealthStatus>;
}

/// ヘルスチェック（結果はログのみ。呼び出し元をブロックしない用途）
pub async fn check_health<F, S: AnalysisService<F>>(service: &S) -> Option<HealthStatus> {
    match service.health().await {
        Ok(status) => {
            if !status.model_loaded {
                tracing::warn!("Model not loaded");
            }
            Some(status)
        }
        Err(e) => {
            tracing::error!("Health check failed: {}", e);
            None
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageController<F> {
    files: SelectedFiles<F>,
    result: Option<AnalysisResult>,
    view: ViewState,
    theme: Theme,
    detail: Option<DetailView>,
}

impl<F> Default for PageController<F> {
    fn default() -> Self {
        Self {
            files: SelectedFiles::default(),
            result: None,
            view: ViewState::default(),
            theme: Theme::default(),
            detail: None,
        }
    }
}

impl<F: FileEntry + Clone> PageController<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存済みテーマを読み込んで初期化
    pub fn with_theme_store(store: &impl ThemeStore) -> Self {
        let mut controller = Self::new();
        controller.init_theme(store);
        controller
    }

    // ---- 参照 ----

    pub fn files(&self) -> &SelectedFiles<F> {
        &self.files
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn detail(&self) -> Option<&DetailView> {
        self.detail.as_ref()
    }

    pub fn results_view(&self) -> Option<ResultsView> {
        self.result.as_ref().map(ResultsView::from_result)
    }

    // ---- 解析 ----

    /// 入力を検証してLoadingへ遷移し、送信内容を返す
    ///
    /// 検証エラー時は状態を変えない
    pub fn begin_submission(&mut self, persona: &str, job_to_be_done: &str) -> Result<SubmissionForm<F>> {
        let persona = persona.trim();
        let job_to_be_done = job_to_be_done.trim();

        if !self.view.is_input() {
            return Err(Error::Validation(MSG_BUSY));
        }
        if persona.is_empty() || job_to_be_done.is_empty() {
            return Err(Error::Validation(MSG_REQUIRED_FIELDS));
        }
        if self.files.is_empty() {
            return Err(Error::Validation(MSG_NO_FILES));
        }

        self.apply(ViewEvent::Submit);
        tracing::info!(files = self.files.len(), "Analyzing documents...");

        Ok(SubmissionForm {
            persona: persona.to_string(),
            job_to_be_done: job_to_be_done.to_string(),
            files: self.files.iter().cloned().collect(),
        })
    }

    /// 送信結果を反映（Loading中以外の結果は捨てる）
    pub fn finish_submission(&mut self, outcome: Result<AnalysisResult>) {
        if !self.view.is_loading() {
            tracing::debug!("discarding analysis outcome outside loading view");
            return;
        }

        match outcome {
            Ok(result) => {
                tracing::info!(
                    sections = result.extracted_sections.len(),
                    "Analysis complete"
                );
                self.result = Some(result);
                self.detail = None;
                self.apply(ViewEvent::Succeeded);
            }
            Err(e) => {
                tracing::error!("Analysis error: {}", e);
                self.apply(ViewEvent::Failed(e.to_string()));
            }
        }
    }

    /// 検証 → 送信 → 反映
    ///
    /// 検証エラーのみ `Err` を返す。サービスエラーは Error 画面に反映される
    pub async fn submit_analysis<S: AnalysisService<F>>(
        &mut self,
        persona: &str,
        job_to_be_done: &str,
        service: &S,
    ) -> Result<()> {
        let form = self.begin_submission(persona, job_to_be_done)?;
        let outcome = service.analyze(&form).await;
        self.finish_submission(outcome);
        Ok(())
    }

    // ---- ファイル ----

    pub fn select_files(&mut self, files: impl IntoIterator<Item = F>) -> usize {
        self.files.add(files)
    }

    pub fn drop_files(&mut self, files: impl IntoIterator<Item = F>) -> Result<usize> {
        self.files.add_dropped(files)
    }

    pub fn remove_file(&mut self, index: usize) -> Option<F> {
        self.files.remove(index)
    }

    // ---- 詳細 ----

    /// 位置指定で詳細を開く（結果が無ければ何もしない）
    pub fn show_detail(&mut self, index: usize) -> Option<&DetailView> {
        let detail = DetailView::from_result(self.result.as_ref()?, index)?;
        self.detail = Some(detail);
        self.detail.as_ref()
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    // ---- テーマ ----

    pub fn init_theme(&mut self, store: &impl ThemeStore) -> Theme {
        self.theme = Theme::from_stored(store.load().as_deref());
        self.theme
    }

    pub fn toggle_theme(&mut self, store: &mut impl ThemeStore) -> Result<Theme> {
        let next = self.theme.toggled();
        store.save(next.as_str())?;
        self.theme = next;
        Ok(next)
    }

    // ---- リセット ----

    pub fn reset(&mut self) {
        self.files.clear();
        self.result = None;
        self.detail = None;
        self.apply(ViewEvent::Reset);
    }

    fn apply(&mut self, event: ViewEvent) {
        self.view = self.view.transition(event);
    }
}
