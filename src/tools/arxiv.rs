//! Paper search against the arXiv query API
//!
//! The API answers with an Atom feed. Entries are pulled out with `scraper`
//! selectors, which is lenient enough for the handful of fields we need.

use crate::tools::{ToolError, ensure_success};
use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};

/// Default number of papers requested per task.
pub const DEFAULT_MAX_PAPERS: usize = 3;

/// A paper as returned by the paper-search service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paper {
    pub title: String,
    /// Canonical abstract URI, e.g. `http://arxiv.org/abs/2401.01234v1`.
    pub entry_id: String,
    pub summary: String,
}

/// A paper search backend.
#[async_trait]
pub trait PaperSearch: Send + Sync {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<Paper>, ToolError>;
}

pub struct ArxivClient {
    http: reqwest::Client,
    endpoint: String,
}

impl ArxivClient {
    pub fn new(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl PaperSearch for ArxivClient {
    async fn search(&self, query: &str, max_results: usize) -> Result<Vec<Paper>, ToolError> {
        tracing::debug!(query, max_results, "querying arXiv");

        let max_results = max_results.to_string();
        let response = self
            .http
            .get(&self.endpoint)
            .query(&[
                ("search_query", query),
                ("start", "0"),
                ("max_results", max_results.as_str()),
            ])
            .send()
            .await?;

        let feed = ensure_success(response).await?.text().await?;
        parse_feed(&feed)
    }
}

fn selector(css: &str) -> Result<Selector, ToolError> {
    Selector::parse(css).map_err(|e| ToolError::Parse(format!("bad selector {}: {}", css, e)))
}

fn first_text(entry: &ElementRef<'_>, selector: &Selector) -> String {
    entry
        .select(selector)
        .next()
        .map(|el| collapse_whitespace(&el.text().collect::<String>()))
        .unwrap_or_default()
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Parse an arXiv Atom feed into papers.
pub fn parse_feed(feed: &str) -> Result<Vec<Paper>, ToolError> {
    let document = Html::parse_document(feed);
    let entry_sel = selector("entry")?;
    let title_sel = selector("title")?;
    let id_sel = selector("id")?;
    let summary_sel = selector("summary")?;

    let mut papers = Vec::new();
    for entry in document.select(&entry_sel) {
        let paper = Paper {
            title: first_text(&entry, &title_sel),
            entry_id: first_text(&entry, &id_sel),
            summary: first_text(&entry, &summary_sel),
        };

        // arXiv signals bad queries with a single pseudo-entry
        if paper.entry_id.contains("/api/errors") {
            return Err(ToolError::Provider(paper.summary));
        }
        papers.push(paper);
    }

    Ok(papers)
}
