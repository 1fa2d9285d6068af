use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::Settings;
use crate::search::client::{SearchError, SearchProvider};

const DEFAULT_SERPER_ENDPOINT: &str = "https://google.serper.dev";

pub struct SerperClient {
    http: Client,
    api_key: String,
    endpoint: String,
    num_results: u32,
}

impl SerperClient {
    pub fn from_settings(settings: &Settings) -> Result<Self, SearchError> {
        let api_key = settings.search.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(SearchError::MissingApiKey("Serper"));
        }

        let endpoint = if settings.search.endpoint.trim().is_empty() {
            DEFAULT_SERPER_ENDPOINT.to_string()
        } else {
            settings
                .search
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        Ok(Self {
            http: Client::builder()
                .timeout(Duration::from_secs(settings.search.timeout_secs))
                .build()?,
            api_key,
            endpoint,
            num_results: settings.search.num_results.max(1),
        })
    }

    fn request_url(&self) -> String {
        format!("{}/search", self.endpoint)
    }
}

#[async_trait]
impl SearchProvider for SerperClient {
    async fn search(&self, query: &str) -> Result<String, SearchError> {
        let body = SerperSearchRequest {
            q: query,
            num: self.num_results,
        };

        tracing::debug!(query, "Sending search request");

        let response = self
            .http
            .post(self.request_url())
            .header("X-API-KEY", &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SearchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let payload: SerperSearchResponse = response.json().await?;
        Ok(format_results(&payload))
    }
}

/// Render a Serper response as the plain text handed to the prompts.
fn format_results(payload: &SerperSearchResponse) -> String {
    let mut out = Vec::new();

    if let Some(kg) = &payload.knowledge_graph {
        let mut line = format!("Knowledge Graph: {}", kg.title);
        if let Some(kind) = &kg.kind {
            line.push_str(&format!(" ({})", kind));
        }
        if let Some(description) = &kg.description {
            line.push_str(&format!(" - {}", description));
        }
        out.push(line);
    }

    if let Some(answer) = payload
        .answer_box
        .as_ref()
        .and_then(|a| a.answer.as_deref().or(a.snippet.as_deref()))
    {
        out.push(format!("Answer: {}", answer));
    }

    for result in &payload.organic {
        out.push(format!(
            "Title: {}\nLink: {}\nSnippet: {}\n---",
            result.title,
            result.link,
            result.snippet.as_deref().unwrap_or("")
        ));
    }

    if out.is_empty() {
        return "No results found.".to_string();
    }

    out.join("\n")
}

#[derive(Debug, Serialize)]
struct SerperSearchRequest<'a> {
    q: &'a str,
    num: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SerperSearchResponse {
    #[serde(default)]
    knowledge_graph: Option<SerperKnowledgeGraph>,
    #[serde(default)]
    answer_box: Option<SerperAnswerBox>,
    #[serde(default)]
    organic: Vec<SerperOrganicResult>,
}

#[derive(Debug, Deserialize)]
struct SerperKnowledgeGraph {
    title: String,
    #[serde(rename = "type")]
    kind: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SerperAnswerBox {
    answer: Option<String>,
    snippet: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SerperOrganicResult {
    title: String,
    link: String,
    snippet: Option<String>,
}
