// src/config.rs
pub const API_URL_ENV: &str = "CV_MATCHY_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Client-side configuration: where the analysis API lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(&base_url.into()),
        }
    }

    /// Resolve the base URL: explicit override, then `CV_MATCHY_API_URL`,
    /// then the local development address.
    pub fn resolve(override_url: Option<String>) -> Self {
        let base_url = override_url
            .filter(|url| !url.trim().is_empty())
            .or_else(|| {
                std::env::var(API_URL_ENV)
                    .ok()
                    .filter(|url| !url.trim().is_empty())
            })
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Self::new(base_url)
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
