use std::collections::{BTreeMap, HashMap};

use regex::Regex;
use serde::Deserialize;

use super::ModelError;

pub type SparseVector = BTreeMap<usize, f64>;

const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    #[default]
    L2,
    None,
}

#[derive(Debug, Deserialize)]
struct VectorizerSpec {
    vocabulary: HashMap<String, usize>,
    #[serde(default)]
    idf: Option<Vec<f64>>,
    #[serde(default = "default_true")]
    lowercase: bool,
    #[serde(default)]
    token_pattern: Option<String>,
    #[serde(default)]
    sublinear_tf: bool,
    #[serde(default)]
    norm: Option<Norm>,
}

fn default_true() -> bool {
    true
}

/// Bag-of-words vectorizer with optional idf weighting, mirroring a fitted
/// count / tf-idf vectorizer.
#[derive(Debug)]
pub struct TextVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Option<Vec<f64>>,
    lowercase: bool,
    token_pattern: Regex,
    sublinear_tf: bool,
    norm: Norm,
}

impl TextVectorizer {
    fn from_spec(spec: VectorizerSpec) -> Result<Self, ModelError> {
        let width = spec.vocabulary.len();
        if let Some(column) = spec.vocabulary.values().find(|column| **column >= width) {
            return Err(ModelError::Shape(format!(
                "vocabulary column {column} out of range for {width} terms"
            )));
        }
        if let Some(idf) = &spec.idf {
            if idf.len() != width {
                return Err(ModelError::Shape(format!(
                    "idf has {} entries but vocabulary has {width}",
                    idf.len()
                )));
            }
        }
        let pattern = spec
            .token_pattern
            .as_deref()
            .unwrap_or(DEFAULT_TOKEN_PATTERN);
        let norm = spec.norm.unwrap_or(if spec.idf.is_some() {
            Norm::L2
        } else {
            Norm::None
        });

        Ok(Self {
            vocabulary: spec.vocabulary,
            idf: spec.idf,
            lowercase: spec.lowercase,
            token_pattern: Regex::new(pattern)?,
            sublinear_tf: spec.sublinear_tf,
            norm,
        })
    }

    pub fn width(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn transform(&self, document: &str) -> SparseVector {
        let lowered;
        let document = if self.lowercase {
            lowered = document.to_lowercase();
            lowered.as_str()
        } else {
            document
        };

        let mut vector = SparseVector::new();
        for token in self.token_pattern.find_iter(document) {
            if let Some(&column) = self.vocabulary.get(token.as_str()) {
                *vector.entry(column).or_insert(0.0) += 1.0;
            }
        }

        for (column, value) in vector.iter_mut() {
            if self.sublinear_tf {
                *value = 1.0 + value.ln();
            }
            if let Some(idf) = &self.idf {
                *value *= idf[*column];
            }
        }

        if self.norm == Norm::L2 {
            let length = vector.values().map(|v| v * v).sum::<f64>().sqrt();
            if length > 0.0 {
                vector.values_mut().for_each(|v| *v /= length);
            }
        }
        vector
    }
}

impl<'de> Deserialize<'de> for TextVectorizer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let spec = VectorizerSpec::deserialize(deserializer)?;
        Self::from_spec(spec).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer(raw: &str) -> TextVectorizer {
        serde_json::from_str(raw).unwrap()
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn counts_known_terms_only() {
        let v = vectorizer(
            r#"{"vocabulary": {"free": 0, "prize": 1}, "norm": "none"}"#,
        );
        let vec = v.transform("Free free PRIZE unknown");
        assert_eq!(vec.get(&0), Some(&2.0));
        assert_eq!(vec.get(&1), Some(&1.0));
        assert_eq!(vec.len(), 2);
    }

    #[test]
    fn default_pattern_skips_single_char_tokens() {
        let v = vectorizer(r#"{"vocabulary": {"a": 0, "ab": 1}}"#);
        let vec = v.transform("a ab");
        assert!(!vec.contains_key(&0));
        assert_eq!(vec.get(&1), Some(&1.0));
    }

    #[test]
    fn tfidf_is_l2_normalised() {
        let v = vectorizer(
            r#"{"vocabulary": {"win": 0, "cash": 1}, "idf": [3.0, 4.0]}"#,
        );
        let vec = v.transform("win cash");
        assert!(approx(vec[&0], 0.6));
        assert!(approx(vec[&1], 0.8));
    }

    #[test]
    fn custom_token_pattern_splits_urls_on_non_letters() {
        let v = vectorizer(
            r#"{"vocabulary": {"paypal": 0, "login": 1, "com": 2}, "token_pattern": "[A-Za-z]+", "norm": "none"}"#,
        );
        let vec = v.transform("paypal-secure-login.com/login");
        assert_eq!(vec.get(&0), Some(&1.0));
        assert_eq!(vec.get(&1), Some(&2.0));
        assert_eq!(vec.get(&2), Some(&1.0));
    }

    #[test]
    fn rejects_mismatched_idf() {
        let err = serde_json::from_str::<TextVectorizer>(
            r#"{"vocabulary": {"x1": 0}, "idf": [1.0, 2.0]}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("idf has 2 entries"));
    }

    #[test]
    fn rejects_out_of_range_column() {
        let err =
            serde_json::from_str::<TextVectorizer>(r#"{"vocabulary": {"x1": 3}}"#).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
