use std::{path::Path, sync::Arc};

use anyhow::{bail, Context, Result};
use chrono::Utc;
use reqwest::Client;
use tokio::{io::AsyncReadExt, net::TcpListener};

use crate::{
    ai::LlmPhishingClassifier,
    classifier::{LocalPhishingClassifier, LocalSpamClassifier, PhishingClassifier},
    config::{AppConfig, PhishingBackend},
    domain::{Evaluation, PhishingOutcome},
    infrastructure::{directories::ResolvedPaths, shutdown::Shutdown},
    model::TextModel,
    server::{self, AppState},
    workflow::SafetyWorkflow,
};

pub struct SafetyApp {
    config: Arc<AppConfig>,
    workflow: SafetyWorkflow,
    phishing: Arc<dyn PhishingClassifier>,
    shutdown: Shutdown,
}

impl SafetyApp {
    /// Loads every model artifact and wires the configured classifiers.
    pub fn initialize(config: AppConfig, paths: &ResolvedPaths, shutdown: Shutdown) -> Result<Self> {
        let config = Arc::new(config);

        let spam_model = TextModel::load(&paths.spam_vectorizer, &paths.spam_model)
            .context("failed to load spam model artifacts")?;
        let spam = Arc::new(LocalSpamClassifier::new(Arc::new(spam_model)));
        let phishing = build_phishing_classifier(&config, paths)?;

        tracing::info!(
            target: "config",
            backend = %config.phishing_backend,
            "classifiers ready"
        );

        Ok(Self {
            workflow: SafetyWorkflow::new(spam, phishing.clone()),
            phishing,
            config,
            shutdown,
        })
    }

    pub async fn run(self, host: Option<String>, port: Option<u16>) -> Result<()> {
        let host = host.unwrap_or_else(|| self.config.server.host.clone());
        let port = port.unwrap_or(self.config.server.port);
        let listener = TcpListener::bind((host.as_str(), port))
            .await
            .with_context(|| format!("failed to bind {host}:{port}"))?;

        tracing::info!("message safety checker started");
        let state = AppState {
            workflow: self.workflow,
            started_at: Utc::now(),
        };
        server::serve(
            listener,
            state,
            &self.config.server.cors_origins,
            self.shutdown.subscribe(),
        )
        .await?;
        tracing::info!("message safety checker stopped");
        Ok(())
    }

    pub async fn check_message(&self, file: Option<&Path>) -> Result<Evaluation> {
        let message = match file {
            Some(path) => tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => {
                let mut buf = String::new();
                tokio::io::stdin()
                    .read_to_string(&mut buf)
                    .await
                    .context("failed to read message from stdin")?;
                buf
            }
        };
        let message = message.trim();
        if message.is_empty() {
            bail!("message cannot be empty or whitespace");
        }
        Ok(self.workflow.evaluate_detailed(message).await?)
    }

    pub async fn check_url(&self, url: &str) -> Result<PhishingOutcome> {
        Ok(self.phishing.classify(url.trim()).await?)
    }
}

fn build_phishing_classifier(
    config: &AppConfig,
    paths: &ResolvedPaths,
) -> Result<Arc<dyn PhishingClassifier>> {
    match config.phishing_backend {
        PhishingBackend::Local => {
            let model = TextModel::load(&paths.phishing_vectorizer, &paths.phishing_model)
                .context("failed to load phishing model artifacts")?;
            Ok(Arc::new(LocalPhishingClassifier::new(Arc::new(model))))
        }
        PhishingBackend::Llm => {
            if config.llm.api_key.is_none() {
                bail!("LLM_API_KEY must be configured when PHISHING_BACKEND=llm");
            }
            let http = Client::builder()
                .user_agent(format!(
                    "message-safety-checker/{}",
                    env!("CARGO_PKG_VERSION")
                ))
                .build()?;
            let classifier = LlmPhishingClassifier::new(http, config.llm.clone())
                .context("invalid LLM_BASE_URL")?;
            tracing::info!(
                target: "llm",
                endpoint = %config.llm.base_url,
                model = %config.llm.model,
                explain = config.llm.explain,
                "using LLM phishing backend"
            );
            Ok(Arc::new(classifier))
        }
    }
}
