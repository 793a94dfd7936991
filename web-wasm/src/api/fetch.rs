//! fetch + FormData による解析サービス呼び出し

use persona_ai_common::{
    AnalysisResult, AnalysisService, Error, ErrorBody, FileEntry, HealthStatus, Result, SubmissionForm,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, Response};

use crate::browser::{describe_js_error, BrowserFile};

#[derive(Default)]
pub struct FetchService {
    base_url: String,
}

impl FetchService {
    /// ページと同じオリジン
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send(&self, request: &Request) -> Result<Response> {
        let window = web_sys::window().ok_or_else(|| Error::from_transport("window is unavailable"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(request))
            .await
            .map_err(js_error)?;
        resp_value.dyn_into().map_err(js_error)
    }
}

fn js_error(value: JsValue) -> Error {
    Error::from_transport(describe_js_error(&value))
}

/// persona, job_to_be_done, files[] を詰めたFormData
fn build_form_data(form: &SubmissionForm<BrowserFile>) -> std::result::Result<FormData, JsValue> {
    let data = FormData::new()?;
    data.append_with_str("persona", &form.persona)?;
    data.append_with_str("job_to_be_done", &form.job_to_be_done)?;
    for file in &form.files {
        data.append_with_blob_and_filename("files[]", &file.0, &file.name())?;
    }
    Ok(data)
}

async fn read_json(resp: &Response) -> Result<JsValue> {
    JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)
}

async fn read_text(resp: &Response) -> Result<String> {
    let value = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(value.as_string().unwrap_or_default())
}

impl AnalysisService<BrowserFile> for FetchService {
    async fn analyze(&self, form: &SubmissionForm<BrowserFile>) -> Result<AnalysisResult> {
        let body = build_form_data(form).map_err(js_error)?;

        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_body(&body);

        gloo::console::log!("Analyzing documents...");
        let request = Request::new_with_str_and_init(&self.url("/api/analyze"), &opts).map_err(js_error)?;
        let resp = self.send(&request).await?;
        gloo::console::log!("Response status:", resp.status());

        if !resp.ok() {
            let text = read_text(&resp).await.unwrap_or_default();
            let body: ErrorBody = serde_json::from_str(&text).unwrap_or_default();
            return Err(Error::from_response(body.error));
        }

        let text = read_text(&resp).await?;
        AnalysisResult::from_body(&text)
    }

    async fn health(&self) -> Result<HealthStatus> {
        let request = Request::new_with_str(&self.url("/api/health")).map_err(js_error)?;
        let resp = self.send(&request).await?;

        if !resp.ok() {
            return Err(Error::Service(format!("status {}", resp.status())));
        }

        let json = read_json(&resp).await?;
        serde_wasm_bindgen::from_value(json).map_err(|e| Error::from_transport(e.to_string()))
    }
}
