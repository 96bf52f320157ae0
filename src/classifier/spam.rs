use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    domain::SpamLabel,
    model::{ClassLabel, TextModel},
    nlp::TextPreprocessor,
};

use super::{ClassifierError, SpamClassifier};

/// Spam classifier backed by the exported text model.
pub struct LocalSpamClassifier {
    preprocessor: TextPreprocessor,
    model: Arc<TextModel>,
}

impl LocalSpamClassifier {
    pub fn new(model: Arc<TextModel>) -> Self {
        Self {
            preprocessor: TextPreprocessor::new(),
            model,
        }
    }

    fn label(&self, text: &str) -> Result<SpamLabel, ClassifierError> {
        let transformed = self.preprocessor.transform(text);
        match self.model.predict(&transformed) {
            ClassLabel::Int(1) => Ok(SpamLabel::Spam),
            ClassLabel::Int(_) => Ok(SpamLabel::Ham),
            other => Err(ClassifierError::UnexpectedLabel {
                model: "spam",
                label: other.to_string(),
            }),
        }
    }
}

#[async_trait]
impl SpamClassifier for LocalSpamClassifier {
    async fn classify(&self, text: &str) -> Result<SpamLabel, ClassifierError> {
        let label = self.label(text)?;
        tracing::debug!(target: "classifier", chars = text.len(), %label, "spam classified");
        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(classes: serde_json::Value) -> Arc<TextModel> {
        Arc::new(TextModel::from_values(
            serde_json::json!({
                "vocabulary": {"free": 0, "prize": 1, "meet": 2, "lunch": 3},
                "idf": [1.5, 1.5, 1.2, 1.2]
            }),
            serde_json::json!({
                "kind": "multinomial_nb",
                "classes": classes,
                "class_log_prior": [-0.15, -1.95],
                "feature_log_prob": [
                    [-6.0, -6.0, -1.0, -1.0],
                    [-0.8, -0.8, -7.0, -7.0]
                ]
            }),
        ))
    }

    #[tokio::test]
    async fn labels_promotional_text_as_spam() {
        let classifier = LocalSpamClassifier::new(model(serde_json::json!([0, 1])));
        let label = classifier
            .classify("FREE prizes!!! Claim your free prize")
            .await
            .unwrap();
        assert_eq!(label, SpamLabel::Spam);
    }

    #[tokio::test]
    async fn labels_conversation_as_ham() {
        let classifier = LocalSpamClassifier::new(model(serde_json::json!([0, 1])));
        assert_eq!(
            classifier.classify("Shall we meet for lunch?").await.unwrap(),
            SpamLabel::Ham
        );
        assert_eq!(classifier.classify("").await.unwrap(), SpamLabel::Ham);
    }

    #[tokio::test]
    async fn text_label_is_rejected() {
        let classifier = LocalSpamClassifier::new(model(serde_json::json!(["ham", "spam"])));
        let err = classifier.classify("free prize").await.unwrap_err();
        assert!(matches!(
            err,
            ClassifierError::UnexpectedLabel { model: "spam", .. }
        ));
    }
}
