//! HTTPクライアントのテスト
//!
//! ローカルに1リクエストだけ応答するサーバを立てて検証する

use persona_ai::client::HttpService;
use persona_ai::scanner::{self, LocalFile};
use persona_ai_common::{AnalysisService, PageController, ViewState};
use tempfile::tempdir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const RESULT_JSON: &str = r#"{
    "metadata": {
        "input_documents": ["guide.pdf"],
        "persona": "Food Contractor",
        "job_to_be_done": "Prepare a vegetarian buffet",
        "processing_timestamp": "2025-07-28T10:15:00Z",
        "processing_time": 1.25
    },
    "extracted_sections": [
        {"document": "guide.pdf", "section_title": "Falafel", "importance_rank": 1, "page_number": 7, "relevance_score": 48.02},
        {"document": "guide.pdf", "section_title": "Ratatouille", "importance_rank": 2, "page_number": 3, "relevance_score": 45.5}
    ],
    "sub_section_analysis": [
        {"document": "guide.pdf", "refined_text": "Soak chickpeas overnight...", "page_number": 7},
        {"document": "guide.pdf", "refined_text": "Slice the vegetables...", "page_number": 3}
    ]
}"#;

/// 1回だけ応答するサーバ。受信したリクエスト全体を返す
async fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind failed");
    let url = format!("http://{}", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept failed");
        let request = read_request(&mut socket).await;

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.expect("write failed");
        socket.shutdown().await.ok();
        request
    });

    (url, handle)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.expect("read failed");
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buffer);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    if name.eq_ignore_ascii_case("content-length") {
                        value.trim().parse::<usize>().ok()
                    } else {
                        None
                    }
                })
                .unwrap_or(0);
            if buffer.len() >= header_end + 4 + content_length {
                break;
            }
        }
    }

    String::from_utf8_lossy(&buffer).to_string()
}

fn pdf_controller(dir: &std::path::Path) -> PageController<LocalFile> {
    let path = dir.join("guide.pdf");
    std::fs::write(&path, b"%PDF-1.4 test").unwrap();

    let mut controller = PageController::new();
    controller.select_files(scanner::scan_folder(dir).unwrap());
    controller
}

#[tokio::test]
async fn test_analyze_success() {
    let dir = tempdir().unwrap();
    let mut controller = pdf_controller(dir.path());
    let (url, server) = serve_once("200 OK", RESULT_JSON).await;

    controller
        .submit_analysis("Food Contractor", "Prepare a vegetarian buffet", &HttpService::new(url))
        .await
        .unwrap();

    assert_eq!(controller.view(), &ViewState::Results);
    let view = controller.results_view().unwrap();
    assert_eq!(view.sections.len(), 2);
    assert_eq!(view.analyses.len(), 2);
    assert_eq!(controller.show_detail(1).unwrap().title, "Ratatouille");

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/analyze"));
    assert!(request.contains("name=\"persona\""));
    assert!(request.contains("Food Contractor"));
    assert!(request.contains("name=\"job_to_be_done\""));
    assert!(request.contains("name=\"files[]\"; filename=\"guide.pdf\""));
    assert!(request.contains("application/pdf"));
    assert!(request.contains("%PDF-1.4 test"));
}

#[tokio::test]
async fn test_analyze_error_message_from_body() {
    let dir = tempdir().unwrap();
    let mut controller = pdf_controller(dir.path());
    let (url, _server) = serve_once("400 Bad Request", r#"{"error": "No valid PDF files uploaded"}"#).await;

    controller
        .submit_analysis("p", "j", &HttpService::new(url))
        .await
        .unwrap();

    assert_eq!(controller.view().error_message(), Some("No valid PDF files uploaded"));
    assert!(controller.result().is_none());
}

#[tokio::test]
async fn test_analyze_error_without_message_uses_fallback() {
    let dir = tempdir().unwrap();
    let mut controller = pdf_controller(dir.path());
    let (url, _server) = serve_once("500 Internal Server Error", "{}").await;

    controller
        .submit_analysis("p", "j", &HttpService::new(url))
        .await
        .unwrap();

    assert_eq!(controller.view().error_message(), Some("Analysis failed"));
}

#[tokio::test]
async fn test_analyze_ok_status_with_error_body() {
    let dir = tempdir().unwrap();
    let mut controller = pdf_controller(dir.path());
    let (url, _server) = serve_once(
        "200 OK",
        r#"{"error": "Model not loaded. Please run download_model.py first."}"#,
    )
    .await;

    controller
        .submit_analysis("p", "j", &HttpService::new(url))
        .await
        .unwrap();

    assert_eq!(
        controller.view().error_message(),
        Some("Model not loaded. Please run download_model.py first.")
    );
    assert!(controller.result().is_none());
}

#[tokio::test]
async fn test_analyze_connection_refused() {
    let dir = tempdir().unwrap();
    let mut controller = pdf_controller(dir.path());

    // 確保してすぐ閉じたポートに接続
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    controller
        .submit_analysis("p", "j", &HttpService::new(url))
        .await
        .unwrap();

    let message = controller.view().error_message().unwrap_or_default();
    assert!(!message.is_empty());
    controller.reset();
    assert_eq!(controller.view(), &ViewState::Input);
    assert!(controller.files().is_empty());
}

#[tokio::test]
async fn test_health() {
    let (url, server) = serve_once("200 OK", r#"{"status": "healthy", "model_loaded": true}"#).await;

    let service = HttpService::new(url);
    let status = AnalysisService::<LocalFile>::health(&service).await.unwrap();

    assert!(status.model_loaded);
    assert!(server.await.unwrap().starts_with("GET /api/health"));
}
