use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::config::Settings;
use crate::search::serper::SerperClient;

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("{0} API key is missing. Set search.api_key in config or SERPER_API_KEY.")]
    MissingApiKey(&'static str),

    #[error("Unsupported search.provider '{0}'. Supported providers: serper")]
    UnsupportedProvider(String),

    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("search provider returned {status}: {body}")]
    Status { status: u16, body: String },
}

/// A web search backend: one query in, plain-text results out.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str) -> Result<String, SearchError>;
}

/// Build a search provider from runtime settings.
pub fn build_provider(settings: &Settings) -> Result<Arc<dyn SearchProvider>, SearchError> {
    match settings.search.provider.to_lowercase().as_str() {
        "serper" => Ok(Arc::new(SerperClient::from_settings(settings)?)),
        other => Err(SearchError::UnsupportedProvider(other.to_string())),
    }
}

/// Run a search, substituting an explanatory placeholder when the provider fails.
///
/// Search failures never abort a preparation run; the placeholder is
/// interpolated into the prompt in place of the results.
pub async fn search_or_placeholder(provider: &dyn SearchProvider, query: &str) -> String {
    match provider.search(query).await {
        Ok(results) => results,
        Err(e) => {
            tracing::warn!(query, error = %e, "Search failed, continuing with placeholder");
            placeholder(&e)
        }
    }
}

/// Text used in place of search results when the search failed.
pub fn placeholder(error: &SearchError) -> String {
    format!("Search error: {}.", error)
}

/// Query used to gather background on the company itself.
pub fn company_query(company: &str) -> String {
    format!("company information about {}", company)
}

/// Query used to gather industry and competitor context.
pub fn industry_query(company: &str) -> String {
    format!("{} industry trends and competitors", company)
}
