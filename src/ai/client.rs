use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::{
    classifier::{ClassifierError, PhishingClassifier},
    config::LlmConfig,
    domain::PhishingOutcome,
};

use super::inference::{build_request, parse_completion, ChatCompletionResponse};

/// Phishing classifier that asks an OpenAI-compatible chat completion
/// endpoint to judge the raw URL.
#[derive(Clone)]
pub struct LlmPhishingClassifier {
    http: Client,
    config: LlmConfig,
    endpoint: Url,
}

impl LlmPhishingClassifier {
    pub fn new(http: Client, config: LlmConfig) -> Result<Self, url::ParseError> {
        let endpoint = config.base_url.join("chat/completions")?;
        Ok(Self {
            http,
            config,
            endpoint,
        })
    }
}

#[async_trait]
impl PhishingClassifier for LlmPhishingClassifier {
    fn name(&self) -> &'static str {
        "llm"
    }

    async fn classify(&self, url: &str) -> Result<PhishingOutcome, ClassifierError> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or(ClassifierError::MissingApiKey)?;

        let request = build_request(self.config.model.clone(), url, self.config.explain);
        let completion: ChatCompletionResponse = self
            .http
            .post(self.endpoint.clone())
            .bearer_auth(api_key)
            .timeout(self.config.timeout)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let outcome = parse_completion(completion, self.config.explain)?;
        tracing::debug!(
            target: "llm",
            url,
            model = %self.config.model,
            label = %outcome.label,
            "url classified"
        );
        Ok(outcome)
    }
}
