//! Mock implementations for testing.
//!
//! This module provides mock LLM clients, search tools and stores that can
//! be used across different test files without duplication.

use async_trait::async_trait;
use parking_lot::Mutex;
use research_hub::db::{FindingStore, StoredFinding};
use research_hub::llm::LLMClient;
use research_hub::tools::{Paper, PaperSearch, ToolError, WebSearch};
use research_hub::types::{AppError, FindingKind, ResearchRecord, Result};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Mock LLM client for testing with configurable responses.
///
/// # Examples
///
/// ```ignore
/// // Create a client that returns a plan
/// let client = MockLLMClient::new(r#"{"tasks": []}"#);
///
/// // Create a client that always fails
/// let client = MockLLMClient::failing();
/// ```
pub struct MockLLMClient {
    response: String,
    should_fail: bool,
    calls: AtomicUsize,
}

impl MockLLMClient {
    /// Create a new mock client that returns the given response.
    pub fn new(response: &str) -> Self {
        Self {
            response: response.to_string(),
            should_fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock client that always returns an error.
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            should_fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LLMClient for MockLLMClient {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.should_fail {
            return Err(AppError::LLM("Mock LLM failure".to_string()));
        }
        Ok(self.response.clone())
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }
}

/// Web search that records every query and answers from a fixed list.
#[derive(Default)]
pub struct MockWebSearch {
    results: Vec<ResearchRecord>,
    fail_with: Option<String>,
    queries: Mutex<Vec<String>>,
}

impl MockWebSearch {
    pub fn new(results: Vec<ResearchRecord>) -> Self {
        Self {
            results,
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl WebSearch for MockWebSearch {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> std::result::Result<Vec<ResearchRecord>, ToolError> {
        self.queries.lock().push(query.to_string());
        if let Some(message) = &self.fail_with {
            return Err(ToolError::Transport(message.clone()));
        }
        Ok(self.results.iter().take(max_results).cloned().collect())
    }
}

/// Paper search that records every query and answers from a fixed list.
#[derive(Default)]
pub struct MockPaperSearch {
    papers: Vec<Paper>,
    fail_with: Option<String>,
    queries: Mutex<Vec<String>>,
}

impl MockPaperSearch {
    pub fn new(papers: Vec<Paper>) -> Self {
        Self {
            papers,
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }
}

#[async_trait]
impl PaperSearch for MockPaperSearch {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> std::result::Result<Vec<Paper>, ToolError> {
        self.queries.lock().push(query.to_string());
        if let Some(message) = &self.fail_with {
            return Err(ToolError::Provider(message.clone()));
        }
        Ok(self.papers.iter().take(max_results).cloned().collect())
    }
}

/// Store whose writes always fail.
pub struct FailingStore {
    attempts: AtomicUsize,
}

impl FailingStore {
    pub fn new() -> Self {
        Self {
            attempts: AtomicUsize::new(0),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FindingStore for FailingStore {
    async fn insert_many(&self, _documents: &[StoredFinding]) -> Result<usize> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(AppError::Database("connection refused".to_string()))
    }

    fn collection(&self) -> &str {
        "ResearchPapers"
    }
}

pub fn paper(title: &str, id: &str, summary: &str) -> Paper {
    Paper {
        title: title.to_string(),
        entry_id: format!("http://arxiv.org/abs/{}", id),
        summary: summary.to_string(),
    }
}

pub fn web_result(title: &str, link: &str) -> ResearchRecord {
    ResearchRecord {
        kind: FindingKind::JobSearch,
        title: title.to_string(),
        link: link.to_string(),
        summary: format!("snippet for {}", title),
    }
}
