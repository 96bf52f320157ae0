use std::fmt;

use serde::Deserialize;

use super::{vectorizer::SparseVector, ModelError};

/// Raw class label as exported from the training pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ClassLabel {
    Int(i64),
    Text(String),
}

impl fmt::Display for ClassLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassLabel::Int(value) => write!(f, "{value}"),
            ClassLabel::Text(value) => f.write_str(value),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LinearModel {
    MultinomialNb {
        classes: Vec<ClassLabel>,
        class_log_prior: Vec<f64>,
        feature_log_prob: Vec<Vec<f64>>,
    },
    Logistic {
        classes: Vec<ClassLabel>,
        coef: Vec<Vec<f64>>,
        intercept: Vec<f64>,
    },
}

impl LinearModel {
    pub fn classes(&self) -> &[ClassLabel] {
        match self {
            LinearModel::MultinomialNb { classes, .. } | LinearModel::Logistic { classes, .. } => {
                classes
            }
        }
    }

    /// Checks that every weight row matches `width` features and the class count.
    pub fn validate(&self, width: usize) -> Result<(), ModelError> {
        let classes = self.classes().len();
        if classes < 2 {
            return Err(ModelError::Shape(format!(
                "model needs at least two classes, found {classes}"
            )));
        }
        let (rows, expected_rows, biases) = match self {
            LinearModel::MultinomialNb {
                class_log_prior,
                feature_log_prob,
                ..
            } => (feature_log_prob, classes, class_log_prior.len()),
            LinearModel::Logistic {
                coef, intercept, ..
            } => {
                let expected = if classes == 2 { 1 } else { classes };
                (coef, expected, intercept.len())
            }
        };
        if rows.len() != expected_rows || biases != expected_rows {
            return Err(ModelError::Shape(format!(
                "expected {expected_rows} weight rows and biases, found {} rows and {biases} biases",
                rows.len()
            )));
        }
        if let Some(row) = rows.iter().find(|row| row.len() != width) {
            return Err(ModelError::Shape(format!(
                "weight row has {} features but vectorizer produces {width}",
                row.len()
            )));
        }
        Ok(())
    }

    pub fn predict(&self, features: &SparseVector) -> &ClassLabel {
        match self {
            LinearModel::MultinomialNb {
                classes,
                class_log_prior,
                feature_log_prob,
            } => {
                let scores = class_log_prior
                    .iter()
                    .zip(feature_log_prob)
                    .map(|(prior, row)| prior + dot(row, features));
                &classes[argmax(scores)]
            }
            LinearModel::Logistic {
                classes,
                coef,
                intercept,
            } => {
                if classes.len() == 2 {
                    let z = intercept[0] + dot(&coef[0], features);
                    &classes[usize::from(z > 0.0)]
                } else {
                    let scores = intercept
                        .iter()
                        .zip(coef)
                        .map(|(bias, row)| bias + dot(row, features));
                    &classes[argmax(scores)]
                }
            }
        }
    }
}

fn dot(weights: &[f64], features: &SparseVector) -> f64 {
    features
        .iter()
        .map(|(column, value)| weights[*column] * value)
        .sum()
}

fn argmax(scores: impl Iterator<Item = f64>) -> usize {
    scores
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |best, (idx, score)| {
            if score > best.1 {
                (idx, score)
            } else {
                best
            }
        })
        .0
}
