//! LLM module for meeting-prep
//!
//! Completion provider abstraction, the Groq client and the prompt templates.

mod client;
mod groq;
pub mod prompts;

pub use client::{build_provider, CompletionError, CompletionProvider};
pub use groq::GroqClient;
