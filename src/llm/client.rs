use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::config::Settings;
use crate::llm::groq::GroqClient;

#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("{0} API key is missing. Set llm.api_key in config or GROQ_API_KEY.")]
    MissingApiKey(&'static str),

    #[error("Unsupported llm.provider '{0}'. Supported providers: groq")]
    UnsupportedProvider(String),

    #[error("completion request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("completion provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("completion response did not contain any text")]
    EmptyResponse,
}

/// A text-generation backend: one prompt in, generated text out.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String, CompletionError>;
}

/// Build a completion provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Arc<dyn CompletionProvider>, CompletionError> {
    match settings.llm.provider.to_lowercase().as_str() {
        "groq" => Ok(Arc::new(GroqClient::from_settings(settings)?)),
        other => Err(CompletionError::UnsupportedProvider(other.to_string())),
    }
}
