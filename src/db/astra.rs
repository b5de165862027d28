//! Astra DB Data API store
//!
//! Writes findings with `insertMany` commands against
//! `{endpoint}/api/json/v1/{keyspace}/{collection}`. The Data API accepts at
//! most 100 documents per command, so larger writes are split into batches.

use super::traits::{FindingStore, StoredFinding};
use crate::types::{AppError, Result};
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

/// Documents sent per `insertMany` command.
pub const INSERT_CHUNK: usize = 50;

pub struct AstraStore {
    http: reqwest::Client,
    endpoint: String,
    token: String,
    keyspace: String,
    collection: String,
}

#[derive(Debug, Deserialize)]
struct CommandResponse {
    #[serde(default)]
    status: Option<InsertStatus>,
    #[serde(default)]
    errors: Vec<CommandError>,
}

#[derive(Debug, Deserialize)]
struct InsertStatus {
    #[serde(rename = "insertedIds", default)]
    inserted_ids: Vec<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct CommandError {
    #[serde(default)]
    message: String,
    #[serde(rename = "errorCode", default)]
    error_code: Option<String>,
}

impl AstraStore {
    pub fn new(
        http: reqwest::Client,
        endpoint: String,
        token: String,
        keyspace: String,
        collection: String,
    ) -> Self {
        Self {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            token,
            keyspace,
            collection,
        }
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/api/json/v1/{}/{}",
            self.endpoint, self.keyspace, self.collection
        )
    }

    /// One `insertMany` command; `documents` must fit the per-request limit.
    async fn insert_chunk(&self, documents: &[StoredFinding]) -> Result<usize> {
        let body = json!({
            "insertMany": {
                "documents": documents,
                "options": { "ordered": false }
            }
        });

        let response = self
            .http
            .post(self.collection_url())
            .header("Token", &self.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Database(format!("Astra request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::Database(format!(
                "Astra returned {}: {}",
                status, text
            )));
        }

        let reply: CommandResponse = response
            .json()
            .await
            .map_err(|e| AppError::Database(format!("Failed to decode Astra reply: {}", e)))?;

        if let Some(first) = reply.errors.first() {
            return Err(AppError::Database(format!(
                "insertMany rejected ({} errors): {} {}",
                reply.errors.len(),
                first.error_code.as_deref().unwrap_or("UNKNOWN"),
                first.message
            )));
        }

        Ok(reply
            .status
            .map(|s| s.inserted_ids.len())
            .unwrap_or(documents.len()))
    }
}

#[async_trait]
impl FindingStore for AstraStore {
    /// Insert `documents` in batches of [`INSERT_CHUNK`].
    ///
    /// A rejected batch does not stop the remaining ones; the call fails if
    /// any batch failed, after every batch has been attempted.
    async fn insert_many(&self, documents: &[StoredFinding]) -> Result<usize> {
        let batches = documents.len().div_ceil(INSERT_CHUNK);
        let mut inserted = 0;
        let mut failures = Vec::new();

        for (index, chunk) in documents.chunks(INSERT_CHUNK).enumerate() {
            match self.insert_chunk(chunk).await {
                Ok(count) => inserted += count,
                Err(e) => {
                    tracing::debug!(
                        batch = index + 1,
                        batches,
                        error = %e,
                        "insertMany batch failed"
                    );
                    failures.push(e);
                }
            }
        }

        match failures.first() {
            None => Ok(inserted),
            Some(first) => Err(AppError::Database(format!(
                "{} of {} batches failed ({} documents stored): {}",
                failures.len(),
                batches,
                inserted,
                first
            ))),
        }
    }

    fn collection(&self) -> &str {
        &self.collection
    }
}
