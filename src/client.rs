//! 解析サービスのHTTPクライアント
//!
//! - `POST /api/analyze`: multipart (persona, job_to_be_done, files[])
//! - `GET /api/health`

use crate::scanner::LocalFile;
use persona_ai_common::{
    AnalysisResult, AnalysisService, Error, ErrorBody, HealthStatus, Result, SubmissionForm,
};
use reqwest::multipart::{Form, Part};

pub struct HttpService {
    client: reqwest::Client,
    base_url: String,
}

impl HttpService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// 送信内容をmultipartに変換（ファイルはここで読み込む）
pub async fn build_form(form: &SubmissionForm<LocalFile>) -> Result<Form> {
    let mut multipart = Form::new()
        .text("persona", form.persona.clone())
        .text("job_to_be_done", form.job_to_be_done.clone());

    for file in &form.files {
        let bytes = tokio::fs::read(&file.path).await?;
        let mime = if file.mime_type.is_empty() {
            "application/octet-stream"
        } else {
            file.mime_type.as_str()
        };
        let part = Part::bytes(bytes)
            .file_name(file.file_name.clone())
            .mime_str(mime)
            .map_err(|e| Error::from_transport(e.to_string()))?;
        multipart = multipart.part("files[]", part);
    }

    Ok(multipart)
}

impl AnalysisService<LocalFile> for HttpService {
    async fn analyze(&self, form: &SubmissionForm<LocalFile>) -> Result<AnalysisResult> {
        let multipart = build_form(form).await?;

        let response = self
            .client
            .post(self.url("/api/analyze"))
            .multipart(multipart)
            .send()
            .await
            .map_err(|e| Error::from_transport(e.to_string()))?;

        tracing::info!("Response status: {}", response.status());

        if !response.status().is_success() {
            let body: ErrorBody = response.json().await.unwrap_or_default();
            return Err(Error::from_response(body.error));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Error::from_transport(e.to_string()))?;
        AnalysisResult::from_body(&body)
    }

    async fn health(&self) -> Result<HealthStatus> {
        let response = self
            .client
            .get(self.url("/api/health"))
            .send()
            .await
            .map_err(|e| Error::from_transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(Error::Service(format!("status {}", response.status())));
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| Error::from_transport(e.to_string()))
    }
}
