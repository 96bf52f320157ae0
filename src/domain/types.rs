use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpamLabel {
    Spam,
    Ham,
}

impl SpamLabel {
    pub fn is_spam(self) -> bool {
        matches!(self, SpamLabel::Spam)
    }
}

impl fmt::Display for SpamLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpamLabel::Spam => f.write_str("SPAM"),
            SpamLabel::Ham => f.write_str("HAM"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhishingLabel {
    Phishing,
    Safe,
}

impl fmt::Display for PhishingLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhishingLabel::Phishing => f.write_str("PHISHING"),
            PhishingLabel::Safe => f.write_str("SAFE"),
        }
    }
}

/// Result of classifying a single URL.
///
/// `explanation` is only ever set alongside [`PhishingLabel::Phishing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhishingOutcome {
    pub label: PhishingLabel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl PhishingOutcome {
    pub fn safe() -> Self {
        Self {
            label: PhishingLabel::Safe,
            explanation: None,
        }
    }

    pub fn phishing(explanation: Option<String>) -> Self {
        Self {
            label: PhishingLabel::Phishing,
            explanation,
        }
    }

    pub fn is_phishing(&self) -> bool {
        matches!(self.label, PhishingLabel::Phishing)
    }
}
