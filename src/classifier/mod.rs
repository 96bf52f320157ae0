//! Classifier capabilities the safety workflow depends on.
//!
//! Implementations are picked once at startup; the workflow only sees the
//! traits.

mod error;
mod phishing;
mod spam;

use async_trait::async_trait;

use crate::domain::{PhishingOutcome, SpamLabel};

pub use error::ClassifierError;
pub use phishing::LocalPhishingClassifier;
pub use spam::LocalSpamClassifier;

#[async_trait]
pub trait SpamClassifier: Send + Sync {
    async fn classify(&self, text: &str) -> Result<SpamLabel, ClassifierError>;
}

#[async_trait]
pub trait PhishingClassifier: Send + Sync {
    /// Short backend name used in logs and the health endpoint.
    fn name(&self) -> &'static str;

    async fn classify(&self, url: &str) -> Result<PhishingOutcome, ClassifierError>;
}
