// src/web/mod.rs

pub mod handlers;
pub mod types;

pub use handlers::*;
pub use types::*;

use crate::analysis::{Analyzer, CompletionProvider, LlmClient};
use crate::environment::ServerSettings;
use crate::types::{AnalysisResult, ApiErrorBody, HealthResponse};
use anyhow::Result;
use rocket::data::{Limits, ToByteUnit};
use rocket::fairing::{Fairing, Info, Kind};
use rocket::form::Form;
use rocket::http::{Header, Status};
use rocket::serde::json::Json;
use rocket::{catchers, get, options, post, routes, Build, Request, Response, Rocket, State};
use std::sync::Arc;
use tracing::info;

// CORS Fairing
pub struct Cors;

#[rocket::async_trait]
impl Fairing for Cors {
    fn info(&self) -> Info {
        Info {
            name: "Add CORS headers to responses",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, _request: &'r Request<'_>, response: &mut Response<'r>) {
        response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
        response.set_header(Header::new(
            "Access-Control-Allow-Methods",
            "POST, GET, OPTIONS",
        ));
        response.set_header(Header::new("Access-Control-Allow-Headers", "*"));
    }
}

#[post("/analyze", data = "<upload>")]
pub async fn analyze_cv(
    upload: Form<AnalyzeForm<'_>>,
    state: &State<ServerState>,
) -> Result<Json<AnalysisResult>, ApiError> {
    handlers::analyze_cv_handler(upload, state).await
}

#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    handlers::health_handler().await
}

#[options("/<_..>")]
pub async fn options() -> Status {
    Status::Ok
}

// Error catchers
#[rocket::catch(400)]
pub fn bad_request_catcher() -> Json<ApiErrorBody> {
    Json(ApiErrorBody::new("Invalid request format"))
}

#[rocket::catch(413)]
pub fn payload_too_large() -> Json<ApiErrorBody> {
    Json(ApiErrorBody::new("Uploaded file is too large"))
}

#[rocket::catch(422)]
pub fn unprocessable() -> Json<ApiErrorBody> {
    Json(ApiErrorBody::new("Invalid multipart form data"))
}

#[rocket::catch(500)]
pub fn internal_error_catcher() -> Json<ApiErrorBody> {
    Json(ApiErrorBody::new("Internal server error"))
}

/// Assemble the API without launching it.
pub fn build_rocket(settings: &ServerSettings, provider: Arc<dyn CompletionProvider>) -> Rocket<Build> {
    // Headroom over the file limit for the description and multipart framing.
    let form_limit = settings.max_upload_bytes + 1024 * 1024;
    let limits = Limits::default()
        .limit("file", settings.max_upload_bytes.bytes())
        .limit("data-form", form_limit.bytes());

    let figment = rocket::Config::figment()
        .merge(("address", "0.0.0.0"))
        .merge(("port", settings.port))
        .merge(("limits", limits));

    let state = ServerState {
        analyzer: Analyzer::new(provider),
        max_upload_bytes: settings.max_upload_bytes,
    };

    rocket::custom(figment)
        .attach(Cors)
        .manage(state)
        .register(
            "/api",
            catchers![
                bad_request_catcher,
                payload_too_large,
                unprocessable,
                internal_error_catcher
            ],
        )
        .mount("/api", routes![analyze_cv, health, options])
}

// Main server start function
pub async fn start_web_server(settings: ServerSettings) -> Result<()> {
    if settings.llm.api_key.is_none() {
        tracing::warn!("HUGGINGFACE_API_KEY not set; every analysis will use keyword fallback");
    }

    let provider: Arc<dyn CompletionProvider> = Arc::new(LlmClient::new(settings.llm.clone())?);

    info!("Starting CV analysis API server");
    info!("LLM endpoint: {} ({})", settings.llm.api_url, settings.llm.model);
    info!("Server: http://0.0.0.0:{}", settings.port);

    let _rocket = build_rocket(&settings, provider)
        .launch()
        .await
        .map_err(|e| anyhow::anyhow!("Server failed: {}", e))?;

    Ok(())
}
