use serde::{Deserialize, Serialize};

use crate::{classifier::ClassifierError, domain::PhishingOutcome};

const SYSTEM_PROMPT: &str = r#"You are a URL-structure phishing detector.
You receive a single URL string. Judge it from the URL text alone: do not fetch the page, do not look up WHOIS or DNS, do not check certificates.

Signals to weigh (and only these):
1. The host is a raw IP address (e.g. http://192.168.0.1/...).
2. The host pairs a brand name with an extra word (paypal-secure.com) or uses a misleading subdomain.
3. The path or query contains sensitive keywords such as login, verify, update, account, bank, password.
4. The URL contains an @ symbol.
5. The URL is unusually long or heavily percent-encoded (%20, %00, ...).
6. The URL uses an uncommon port (:8080, :4443).
7. The host is a URL shortener (bit.ly, t.co, tinyurl.com).
8. A rare or cheap-looking TLD is combined with brand keywords.

Decision rule:
- Several suspicious signals: phishing.
- Clean, legitimate structure: not phishing.
- If uncertain, lean toward phishing.

Examples:
https://www.paypal.com/signin -> {"is_phishing": false}
http://paypal-secure-login.com/account/verify -> {"is_phishing": true}
"#;

const STRICT_FORMAT: &str = r#"Reply with exactly one JSON object and nothing else (no prose, no code fences):
{"is_phishing": <true|false>}"#;

const EXPLAINED_FORMAT: &str = r#"Reply with exactly one JSON object and nothing else (no prose, no code fences):
{"is_phishing": <true|false>, "explanation": "<one sentence naming the signals you found>"}"#;

pub fn build_request(model: String, url: &str, explain: bool) -> ChatCompletionRequest {
    let format = if explain {
        EXPLAINED_FORMAT
    } else {
        STRICT_FORMAT
    };
    ChatCompletionRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system".into(),
                content: format!("{SYSTEM_PROMPT}\n{format}"),
            },
            ChatMessage {
                role: "user".into(),
                content: format!("Analyze this URL and return the JSON result only:\n\n{url}"),
            },
        ],
        temperature: 0.0,
        top_p: 1.0,
        max_tokens: 256,
        response_format: ResponseFormat {
            r#type: "json_object".into(),
        },
    }
}

pub fn parse_completion(
    completion: ChatCompletionResponse,
    explain: bool,
) -> Result<PhishingOutcome, ClassifierError> {
    let choice = completion
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| ClassifierError::Schema("response did not contain any choices".into()))?;

    let content = choice
        .message
        .and_then(|msg| msg.content)
        .ok_or_else(|| ClassifierError::Schema("response missing message content".into()))?;

    parse_verdict(&content, explain)
}

/// Validates the model's reply against the single-field schema (or the
/// two-field one in explanation mode). Nothing is coerced.
pub fn parse_verdict(content: &str, explain: bool) -> Result<PhishingOutcome, ClassifierError> {
    let schema_err = |err: serde_json::Error| ClassifierError::Schema(err.to_string());
    if explain {
        let verdict: ExplainedUrlVerdict = serde_json::from_str(content.trim()).map_err(schema_err)?;
        Ok(if verdict.is_phishing {
            PhishingOutcome::phishing(Some(verdict.explanation))
        } else {
            PhishingOutcome::safe()
        })
    } else {
        let verdict: UrlVerdict = serde_json::from_str(content.trim()).map_err(schema_err)?;
        Ok(if verdict.is_phishing {
            PhishingOutcome::phishing(None)
        } else {
            PhishingOutcome::safe()
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct UrlVerdict {
    is_phishing: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ExplainedUrlVerdict {
    is_phishing: bool,
    explanation: String,
}

#[derive(Debug, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub top_p: f32,
    pub max_tokens: i32,
    pub response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub r#type: String,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub struct ChatChoice {
    pub message: Option<ChatCompletionMessage>,
}

#[derive(Debug, Deserialize)]
pub struct ChatCompletionMessage {
    pub content: Option<String>,
}
