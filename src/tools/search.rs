//! Web search tool implementation using Serper
//!
//! Serper proxies Google results; each `organic` hit becomes a
//! [`ResearchRecord`] of kind `job_search`.

use crate::tools::{ToolError, ensure_success};
use crate::types::{FindingKind, ResearchRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Default number of results requested per query.
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// A web search backend.
#[async_trait]
pub trait WebSearch: Send + Sync {
    /// Run `query`, returning at most `max_results` normalized records.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<ResearchRecord>, ToolError>;
}

/// Web search tool backed by the Serper API
pub struct SerperSearchTool {
    http: reqwest::Client,
    endpoint: String,
    api_key: String,
    location: Option<String>,
}

#[derive(Debug, Serialize)]
struct SerperRequest<'a> {
    q: &'a str,
    num: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    location: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct SerperResponse {
    #[serde(default)]
    organic: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    link: String,
    #[serde(default)]
    snippet: String,
}

impl From<OrganicResult> for ResearchRecord {
    fn from(result: OrganicResult) -> Self {
        ResearchRecord {
            kind: FindingKind::JobSearch,
            title: result.title,
            link: result.link,
            summary: result.snippet,
        }
    }
}

impl SerperSearchTool {
    pub fn new(
        http: reqwest::Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        location: Option<String>,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            location,
        }
    }
}

#[async_trait]
impl WebSearch for SerperSearchTool {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<ResearchRecord>, ToolError> {
        let request = SerperRequest {
            q: query,
            num: max_results,
            location: self.location.as_deref(),
        };

        tracing::debug!(query, max_results, "querying web search");

        let response = self
            .http
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .json(&request)
            .send()
            .await?;

        let body: SerperResponse = ensure_success(response).await?.json().await?;

        Ok(body.organic.into_iter().map(ResearchRecord::from).collect())
    }
}
