mod preprocess;
pub mod stopwords;

pub use preprocess::{tokenize, TextPreprocessor};
