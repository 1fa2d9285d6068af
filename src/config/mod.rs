//! Configuration module for meeting-prep
//!
//! Handles loading settings from a TOML file plus environment overrides.

mod settings;

pub use settings::{Settings, GROQ_API_KEY_ENV, SERPER_API_KEY_ENV};
