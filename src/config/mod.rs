pub mod env;
mod loader;

pub use env::{AppConfig, DirectoryConfig, LlmConfig, LoggingConfig, ModelConfig, PhishingBackend};
pub use loader::load_config;
