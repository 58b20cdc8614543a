// src/environment.rs
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

pub const CONFIG_FILE: &str = "cv_matchy.yaml";
pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_LLM_API_URL: &str = "https://router.huggingface.co/v1";
pub const DEFAULT_LLM_MODEL: &str = "deepseek-ai/DeepSeek-R1-0528-Qwen3-8B";
pub const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Settings for the analysis server.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerSettings {
    pub port: u16,
    pub llm: LlmSettings,
    pub max_upload_bytes: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LlmSettings {
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_LLM_API_URL.to_string(),
            api_key: None,
            model: DEFAULT_LLM_MODEL.to_string(),
            max_new_tokens: 300,
            temperature: 0.7,
            top_p: 0.9,
        }
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            llm: LlmSettings::default(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

// One section of cv_matchy.yaml; every key is optional.
#[derive(Debug, Default, Deserialize)]
struct SettingsSection {
    port: Option<u16>,
    llm_api_url: Option<String>,
    llm_model: Option<String>,
    max_new_tokens: Option<u32>,
    temperature: Option<f32>,
    top_p: Option<f32>,
    max_upload_mb: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    local: SettingsSection,
    #[serde(default)]
    production: SettingsSection,
}

impl ServerSettings {
    /// Load settings: defaults, then `cv_matchy.yaml` (if present), then env.
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading server settings for environment: {}", environment);

        let mut settings = Self::default();

        let config_path = PathBuf::from(CONFIG_FILE);
        if config_path.exists() {
            let section = Self::load_section(&config_path, &environment)?;
            settings.apply_section(section);
        }

        settings.apply_env(|key| std::env::var(key).ok())?;
        Ok(settings)
    }

    fn get_environment() -> String {
        std::env::var("CV_MATCHY_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_section(path: &Path, environment: &str) -> Result<SettingsSection> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse_section(&content, environment)
            .with_context(|| format!("Failed to parse {}", path.display()))
    }

    fn parse_section(content: &str, environment: &str) -> Result<SettingsSection> {
        let config_file: ConfigFile = serde_yaml::from_str(content)?;
        Ok(match environment {
            "production" => config_file.production,
            _ => config_file.local,
        })
    }

    fn apply_section(&mut self, section: SettingsSection) {
        if let Some(port) = section.port {
            self.port = port;
        }
        if let Some(url) = section.llm_api_url {
            self.llm.api_url = url;
        }
        if let Some(model) = section.llm_model {
            self.llm.model = model;
        }
        if let Some(tokens) = section.max_new_tokens {
            self.llm.max_new_tokens = tokens;
        }
        if let Some(temperature) = section.temperature {
            self.llm.temperature = temperature;
        }
        if let Some(top_p) = section.top_p {
            self.llm.top_p = top_p;
        }
        if let Some(mb) = section.max_upload_mb {
            self.max_upload_bytes = mb * 1024 * 1024;
        }
    }

    fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup("PORT") {
            self.port = port
                .parse::<u16>()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number"))?;
        }
        if let Some(key) = lookup("HUGGINGFACE_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.llm.api_key = Some(key);
        }
        if let Some(url) = lookup("LLM_API_URL") {
            self.llm.api_url = url;
        }
        if let Some(model) = lookup("LLM_MODEL") {
            self.llm.model = model;
        }
        Ok(())
    }
}
