use serde::{Deserialize, Serialize};

/// Error body returned by the analysis API on any non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

// Lenient shape for reading error bodies on the client: `error` may be absent.
#[derive(Debug, Deserialize)]
pub(crate) struct PartialErrorBody {
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            message: "CV Analysis API is running".to_string(),
            timestamp: Some(chrono::Utc::now().to_rfc3339()),
        }
    }
}
