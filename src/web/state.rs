//! Application state.

use std::sync::Arc;

use crate::config::Settings;
use crate::prep::Orchestrator;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    /// `None` while a provider credential is missing
    pub orchestrator: Option<Arc<Orchestrator>>,
}

impl AppState {
    pub fn new(settings: Settings, orchestrator: Option<Orchestrator>) -> Self {
        Self {
            settings: Arc::new(settings),
            orchestrator: orchestrator.map(Arc::new),
        }
    }

    /// Build state from settings; missing credentials leave the server up but unable to prepare.
    pub fn from_settings(settings: Settings) -> crate::Result<Self> {
        let missing = settings.missing_keys();
        if !missing.is_empty() {
            tracing::warn!("Missing API keys: {}", missing.join(", "));
            return Ok(Self::new(settings, None));
        }

        let orchestrator = Orchestrator::from_settings(&settings)?;
        Ok(Self::new(settings, Some(orchestrator)))
    }
}
