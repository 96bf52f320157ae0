use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("unexpected {model} model output: {label}")]
    UnexpectedLabel { model: &'static str, label: String },
    #[error("LLM_API_KEY must be configured for the llm phishing backend")]
    MissingApiKey,
    #[error("LLM request failed: {0}")]
    Llm(#[from] reqwest::Error),
    #[error("LLM response did not match the expected schema: {0}")]
    Schema(String),
}
