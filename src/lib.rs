//! meeting-prep - AI-assisted meeting preparation briefs
//!
//! Gathers web search results about a company, runs them through four LLM
//! prompts and assembles the answers into a single Markdown/HTML brief.

pub mod cli;
pub mod config;
pub mod llm;
pub mod prep;
pub mod search;
pub mod web;

use thiserror::Error;

use crate::llm::CompletionError;
use crate::prep::{Stage, ValidationError};

/// Main error type for meeting-prep
#[derive(Error, Debug)]
pub enum PrepError {
    #[error(
        "Missing required API keys: {}. Please add them to your .env file.",
        .0.join(", ")
    )]
    MissingKeys(Vec<&'static str>),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Failed to generate meeting materials: {source}")]
    Completion {
        stage: Stage,
        #[source]
        source: CompletionError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl PrepError {
    /// HTTP status code the web adapter answers with for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            PrepError::Validation(_) => 400,
            _ => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, PrepError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "meeting-prep";
