use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    domain::PhishingOutcome,
    model::{ClassLabel, TextModel},
};

use super::{ClassifierError, PhishingClassifier};

static SCHEME_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://(www\.)?").expect("valid scheme regex"));

/// URL classifier backed by the exported phishing model. Never produces an
/// explanation.
pub struct LocalPhishingClassifier {
    model: Arc<TextModel>,
}

impl LocalPhishingClassifier {
    pub fn new(model: Arc<TextModel>) -> Self {
        Self { model }
    }
}

/// Drops the scheme and a leading `www.` so the model sees the host and path.
pub fn normalize_url(url: &str) -> &str {
    match SCHEME_PREFIX.find(url) {
        Some(prefix) => &url[prefix.end()..],
        None => url,
    }
}

#[async_trait]
impl PhishingClassifier for LocalPhishingClassifier {
    fn name(&self) -> &'static str {
        "local"
    }

    async fn classify(&self, url: &str) -> Result<PhishingOutcome, ClassifierError> {
        let normalized = normalize_url(url);
        let outcome = match self.model.predict(normalized) {
            ClassLabel::Text(label) if label == "bad" => PhishingOutcome::phishing(None),
            ClassLabel::Text(label) if label == "good" => PhishingOutcome::safe(),
            other => {
                return Err(ClassifierError::UnexpectedLabel {
                    model: "phishing",
                    label: other.to_string(),
                })
            }
        };
        tracing::debug!(target: "classifier", url, label = %outcome.label, "url classified");
        Ok(outcome)
    }
}
