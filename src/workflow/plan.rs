use crate::extract::{extract_urls, strip_urls, unique_urls};

/// The two independent sub-tasks derived from one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SafetyPlan {
    /// Message text with URLs removed, input to the spam branch.
    pub clean_text: String,
    /// Every `http(s)://` URL in order of appearance, duplicates kept.
    pub urls: Vec<String>,
}

impl SafetyPlan {
    pub fn from_message(message: &str) -> Self {
        Self {
            clean_text: strip_urls(message),
            urls: extract_urls(message),
        }
    }

    /// URLs the phishing branch classifies: each distinct URL once, first
    /// occurrence order.
    pub fn phishing_candidates(&self) -> Vec<String> {
        unique_urls(&self.urls)
    }
}
