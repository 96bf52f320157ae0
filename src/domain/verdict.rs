use serde::{Deserialize, Serialize};

use super::types::{PhishingOutcome, SpamLabel};

/// Combined answer returned to API callers. Both flags are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Verdict {
    pub is_spam: bool,
    pub is_phishing: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlFinding {
    pub url: String,
    #[serde(flatten)]
    pub outcome: PhishingOutcome,
}

/// Everything the workflow computed for one message. URLs after the first
/// phishing hit are absent from `findings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    pub verdict: Verdict,
    pub clean_text: String,
    pub urls: Vec<String>,
    pub spam_label: SpamLabel,
    pub findings: Vec<UrlFinding>,
}
