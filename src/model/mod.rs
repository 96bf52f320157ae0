//! Pre-trained text models exported to JSON.
//!
//! Artifacts are loaded once at startup and shared read-only between
//! requests.

mod artifacts;
mod linear;
mod vectorizer;

pub use artifacts::TextModel;
pub use linear::ClassLabel;

use linear::LinearModel;
use vectorizer::TextVectorizer;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read artifact {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse artifact {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid token pattern: {0}")]
    Pattern(#[from] regex::Error),
    #[error("artifact shape mismatch: {0}")]
    Shape(String),
}
