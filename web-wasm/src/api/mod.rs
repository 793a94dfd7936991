//! 解析サービスAPI（同一オリジンの `/api/*`）

mod fetch;

pub use fetch::FetchService;

use gloo::console;
use persona_ai_common::AnalysisService;

use crate::browser::BrowserFile;

/// 起動時のヘルスチェック（コンソール出力のみ）
pub async fn report_health() {
    let service = FetchService::new();
    match AnalysisService::<BrowserFile>::health(&service).await {
        Ok(status) if !status.model_loaded => console::warn!("Model not loaded"),
        Ok(_) => {}
        Err(e) => console::error!("Health check failed:", e.to_string()),
    }
}
