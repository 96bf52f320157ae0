use std::{fmt, path::PathBuf, str::FromStr, time::Duration};

use thiserror::Error;
use url::Url;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub phishing_backend: PhishingBackend,
    pub llm: LlmConfig,
    pub models: ModelConfig,
    pub directories: DirectoryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors_origins: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhishingBackend {
    Local,
    Llm,
}

impl FromStr for PhishingBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" | "ml" => Ok(PhishingBackend::Local),
            "llm" => Ok(PhishingBackend::Llm),
            other => Err(ConfigError::Invalid {
                key: "PHISHING_BACKEND",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for PhishingBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhishingBackend::Local => f.write_str("local"),
            PhishingBackend::Llm => f.write_str("llm"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub api_key: Option<String>,
    pub base_url: Url,
    pub model: String,
    pub timeout: Duration,
    pub explain: bool,
}

#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub models_dir: PathBuf,
    pub spam_vectorizer: String,
    pub spam_model: String,
    pub phishing_vectorizer: String,
    pub phishing_model: String,
}

#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    pub logs_dir: String,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}
