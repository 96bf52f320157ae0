use std::{fs, path::Path};

use serde::de::DeserializeOwned;

use super::{ClassLabel, LinearModel, ModelError, TextVectorizer};

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, ModelError> {
    let raw = fs::read_to_string(path).map_err(|source| ModelError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ModelError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// A fitted vectorizer paired with the classifier trained on its output.
#[derive(Debug)]
pub struct TextModel {
    vectorizer: TextVectorizer,
    model: LinearModel,
}

impl TextModel {
    pub fn new(vectorizer: TextVectorizer, model: LinearModel) -> Result<Self, ModelError> {
        model.validate(vectorizer.width())?;
        Ok(Self { vectorizer, model })
    }

    pub fn load(vectorizer_path: &Path, model_path: &Path) -> Result<Self, ModelError> {
        let vectorizer = load_json(vectorizer_path)?;
        let model = load_json(model_path)?;
        let loaded = Self::new(vectorizer, model)?;
        tracing::info!(
            target: "model",
            vectorizer = %vectorizer_path.display(),
            model = %model_path.display(),
            features = loaded.vectorizer.width(),
            classes = loaded.model.classes().len(),
            "model artifacts loaded"
        );
        Ok(loaded)
    }

    #[cfg(test)]
    pub fn from_values(vectorizer: serde_json::Value, model: serde_json::Value) -> Self {
        let vectorizer = serde_json::from_value(vectorizer).expect("test vectorizer");
        let model = serde_json::from_value(model).expect("test model");
        Self::new(vectorizer, model).expect("consistent test artifacts")
    }

    pub fn predict(&self, document: &str) -> &ClassLabel {
        let features = self.vectorizer.transform(document);
        self.model.predict(&features)
    }
}
