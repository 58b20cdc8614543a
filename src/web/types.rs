// src/web/types.rs
use rocket::form::{self, FromForm};
use rocket::fs::TempFile;
use rocket::http::Status;
use rocket::response::status::Custom;
use rocket::serde::json::Json;

use crate::analysis::Analyzer;
use crate::types::ApiErrorBody;

/// Multipart body of `POST /api/analyze`. Both fields are checked by the
/// handler so each failure gets its own message.
#[derive(FromForm)]
pub struct AnalyzeForm<'f> {
    pub cv_file: form::Result<'f, TempFile<'f>>,
    pub job_description: Option<String>,
}

pub struct ServerState {
    pub analyzer: Analyzer,
    pub max_upload_bytes: u64,
}

pub type ApiError = Custom<Json<ApiErrorBody>>;

pub fn api_error(status: Status, message: impl Into<String>) -> ApiError {
    Custom(status, Json(ApiErrorBody::new(message)))
}

pub fn bad_request(message: impl Into<String>) -> ApiError {
    api_error(Status::BadRequest, message)
}

pub fn internal_error(message: impl Into<String>) -> ApiError {
    api_error(Status::InternalServerError, message)
}
