use std::{env, path::PathBuf, time::Duration};

use url::Url;

use super::env::{
    AppConfig, ConfigError, DirectoryConfig, LlmConfig, LoggingConfig, ModelConfig,
    PhishingBackend, ServerConfig,
};

const DEFAULT_LLM_BASE_URL: &str = "https://api.cerebras.ai/v1/";

pub fn load_config() -> Result<AppConfig, ConfigError> {
    AppConfig::from_lookup(|key| env::var(key).ok())
}

impl AppConfig {
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let or_default = |key: &str, default: &str| var(key).unwrap_or_else(|| default.to_string());

        let server = ServerConfig {
            host: or_default("SERVER_HOST", "127.0.0.1"),
            port: parse_or("SERVER_PORT", var("SERVER_PORT"), 8000)?,
            cors_origins: var("CORS_ORIGINS")
                .map(|value| {
                    value
                        .split(',')
                        .map(|part| part.trim().to_string())
                        .filter(|part| !part.is_empty())
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default(),
        };

        let phishing_backend = match var("PHISHING_BACKEND") {
            Some(value) => value.parse()?,
            None => PhishingBackend::Local,
        };

        let base_url_raw = or_default("LLM_BASE_URL", DEFAULT_LLM_BASE_URL);
        let base_url = Url::parse(&with_trailing_slash(&base_url_raw)).map_err(|_| {
            ConfigError::Invalid {
                key: "LLM_BASE_URL",
                value: base_url_raw.clone(),
            }
        })?;

        let llm = LlmConfig {
            api_key: var("LLM_API_KEY"),
            base_url,
            model: or_default("LLM_MODEL", "gpt-oss-120b"),
            timeout: Duration::from_millis(parse_or(
                "LLM_TIMEOUT_MS",
                var("LLM_TIMEOUT_MS"),
                15_000,
            )?),
            explain: parse_flag("PHISHING_LLM_EXPLAIN", var("PHISHING_LLM_EXPLAIN"))?,
        };

        let models = ModelConfig {
            models_dir: PathBuf::from(or_default("MODELS_DIR", "models")),
            spam_vectorizer: or_default("SPAM_VECTORIZER_FILE", "spam_vectorizer.json"),
            spam_model: or_default("SPAM_MODEL_FILE", "spam_model.json"),
            phishing_vectorizer: or_default("PHISHING_VECTORIZER_FILE", "phishing_vectorizer.json"),
            phishing_model: or_default("PHISHING_MODEL_FILE", "phishing_model.json"),
        };

        let directories = DirectoryConfig {
            logs_dir: or_default("LOGS_DIR", "logs"),
        };

        let logging = LoggingConfig {
            level: or_default("LOG_LEVEL", "info"),
        };

        Ok(Self {
            server,
            phishing_backend,
            llm,
            models,
            directories,
            logging,
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    key: &'static str,
    value: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match value {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            key,
            value: raw,
        }),
        None => Ok(default),
    }
}

fn parse_flag(key: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    match value.as_deref().map(|v| v.trim().to_ascii_lowercase()) {
        None => Ok(false),
        Some(v) if matches!(v.as_str(), "1" | "true" | "yes" | "on") => Ok(true),
        Some(v) if matches!(v.as_str(), "0" | "false" | "no" | "off") => Ok(false),
        Some(v) => Err(ConfigError::Invalid { key, value: v }),
    }
}

fn with_trailing_slash(url: &str) -> String {
    if url.ends_with('/') {
        url.to_string()
    } else {
        format!("{url}/")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8000);
        assert!(config.server.cors_origins.is_empty());
        assert_eq!(config.phishing_backend, PhishingBackend::Local);
        assert_eq!(config.llm.base_url.as_str(), DEFAULT_LLM_BASE_URL);
        assert_eq!(config.llm.timeout, Duration::from_millis(15_000));
        assert!(!config.llm.explain);
        assert!(config.llm.api_key.is_none());
        assert_eq!(config.models.spam_model, "spam_model.json");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn reads_overrides() {
        let config = config_from(&[
            ("SERVER_PORT", "9090"),
            ("CORS_ORIGINS", "http://localhost:3000, ,https://chat.example"),
            ("PHISHING_BACKEND", "LLM"),
            ("LLM_API_KEY", "key"),
            ("LLM_BASE_URL", "http://127.0.0.1:1234/v1"),
            ("PHISHING_LLM_EXPLAIN", "yes"),
        ])
        .unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(
            config.server.cors_origins,
            vec!["http://localhost:3000", "https://chat.example"]
        );
        assert_eq!(config.phishing_backend, PhishingBackend::Llm);
        assert_eq!(config.llm.api_key.as_deref(), Some("key"));
        assert_eq!(config.llm.base_url.as_str(), "http://127.0.0.1:1234/v1/");
        assert!(config.llm.explain);
    }

    #[test]
    fn empty_values_fall_back_to_defaults() {
        let config = config_from(&[("LLM_API_KEY", "  "), ("SERVER_HOST", "")]).unwrap();
        assert!(config.llm.api_key.is_none());
        assert_eq!(config.server.host, "127.0.0.1");
    }

    #[test]
    fn rejects_invalid_values() {
        for (key, value) in [
            ("PHISHING_BACKEND", "magic"),
            ("SERVER_PORT", "eighty"),
            ("LLM_TIMEOUT_MS", "-1"),
            ("PHISHING_LLM_EXPLAIN", "maybe"),
            ("LLM_BASE_URL", "not a url"),
        ] {
            let err = config_from(&[(key, value)]).unwrap_err();
            let ConfigError::Invalid { key: reported, .. } = err;
            assert_eq!(reported, key);
        }
    }
}
