//! Message safety workflow: URL extraction, then spam and phishing
//! classification as two independent branches, then a merged verdict.

mod plan;

use std::sync::Arc;

use futures::future::try_join;
use thiserror::Error;

use crate::{
    classifier::{ClassifierError, PhishingClassifier, SpamClassifier},
    domain::{Evaluation, SpamLabel, UrlFinding, Verdict},
};

pub use plan::SafetyPlan;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("spam classification failed: {0}")]
    Spam(#[source] ClassifierError),
    #[error("phishing classification failed for {url}: {source}")]
    Phishing {
        url: String,
        #[source]
        source: ClassifierError,
    },
}

#[derive(Clone)]
pub struct SafetyWorkflow {
    spam: Arc<dyn SpamClassifier>,
    phishing: Arc<dyn PhishingClassifier>,
}

impl SafetyWorkflow {
    pub fn new(spam: Arc<dyn SpamClassifier>, phishing: Arc<dyn PhishingClassifier>) -> Self {
        Self { spam, phishing }
    }

    pub fn phishing_backend(&self) -> &'static str {
        self.phishing.name()
    }

    pub async fn evaluate(&self, message: &str) -> Result<Verdict, WorkflowError> {
        Ok(self.evaluate_detailed(message).await?.verdict)
    }

    pub async fn evaluate_detailed(&self, message: &str) -> Result<Evaluation, WorkflowError> {
        let plan = SafetyPlan::from_message(message);
        tracing::debug!(
            target: "workflow",
            chars = message.len(),
            urls = plan.urls.len(),
            "evaluating message"
        );

        let (spam_label, findings) =
            try_join(self.spam_branch(&plan), self.phishing_branch(&plan)).await?;

        let verdict = Verdict {
            is_spam: spam_label.is_spam(),
            is_phishing: findings.iter().any(|finding| finding.outcome.is_phishing()),
        };
        tracing::info!(
            target: "workflow",
            is_spam = verdict.is_spam,
            is_phishing = verdict.is_phishing,
            urls = plan.urls.len(),
            checked = findings.len(),
            backend = self.phishing.name(),
            "message evaluated"
        );

        Ok(Evaluation {
            verdict,
            clean_text: plan.clean_text,
            urls: plan.urls,
            spam_label,
            findings,
        })
    }

    async fn spam_branch(&self, plan: &SafetyPlan) -> Result<SpamLabel, WorkflowError> {
        self.spam
            .classify(&plan.clean_text)
            .await
            .map_err(WorkflowError::Spam)
    }

    /// Classifies candidates in order and stops at the first phishing URL.
    async fn phishing_branch(&self, plan: &SafetyPlan) -> Result<Vec<UrlFinding>, WorkflowError> {
        let mut findings = Vec::new();
        for url in plan.phishing_candidates() {
            let outcome = self
                .phishing
                .classify(&url)
                .await
                .map_err(|source| WorkflowError::Phishing {
                    url: url.clone(),
                    source,
                })?;
            let hit = outcome.is_phishing();
            findings.push(UrlFinding { url, outcome });
            if hit {
                break;
            }
        }
        Ok(findings)
    }
}
