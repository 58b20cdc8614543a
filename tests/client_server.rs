mod common;

use common::{minimal_pdf, OfflineProvider};
use cv_matcher::core::ServiceClient;
use cv_matcher::form::PDF_MIME;
use cv_matcher::{
    build_rocket, AnalysisForm, CandidateDocument, ClientConfig, ServerSettings, SubmitOutcome,
};
use std::sync::Arc;
use std::time::Duration;

fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .map(|addr| addr.port())
        .expect("free local port")
}

/// Launch the API on a free port and wait until it answers health checks.
async fn launch_server() -> ServiceClient {
    let settings = ServerSettings {
        port: free_port(),
        ..ServerSettings::default()
    };
    let rocket = build_rocket(&settings, Arc::new(OfflineProvider));
    tokio::spawn(rocket.launch());

    let client = ServiceClient::new(ClientConfig::new(format!(
        "http://127.0.0.1:{}",
        settings.port
    )))
    .expect("http client");

    for _ in 0..100 {
        if client.health().await.is_ok() {
            return client;
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    panic!("server did not come up on port {}", settings.port);
}

#[tokio::test(flavor = "multi_thread")]
async fn form_submits_to_running_server() {
    let client = launch_server().await;

    let mut form = AnalysisForm::new();
    form.select_document(Some(CandidateDocument::new(
        "cv.pdf",
        PDF_MIME,
        minimal_pdf("Python developer with AWS and Docker experience"),
    )));
    form.set_job_description("Python engineer, AWS, Docker, SQL");

    assert_eq!(form.submit(&client).await, SubmitOutcome::Completed);
    assert_eq!(form.error(), None);

    let result = form.result().expect("analysis result");
    assert!(result.is_fallback);
    assert_eq!(
        result.fallback_reason.as_deref(),
        Some("Connection error: LLM API key not configured")
    );
    assert!(result.score().is_some());

    // Server-side rejection comes back as the `error` text of the body.
    form.select_document(Some(CandidateDocument::new(
        "cv.pdf",
        PDF_MIME,
        b"not really a pdf".to_vec(),
    )));

    assert_eq!(form.submit(&client).await, SubmitOutcome::Failed);
    let message = form.error().expect("error message");
    assert!(
        message.starts_with("Error extracting text from PDF"),
        "unexpected error: {}",
        message
    );
    assert!(form.result().expect("previous result kept").is_fallback);
}
