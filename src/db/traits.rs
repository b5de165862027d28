//! Finding store abstraction
//!
//! This module provides the `FindingStore` trait that abstracts over the
//! places a run's findings can be written to (a remote Astra DB collection,
//! an in-process memory store).
//!
//! # Example
//!
//! ```rust,ignore
//! use research_hub::db::{StoreBackend, StoredFinding};
//!
//! let store = StoreBackend::Memory.create_store(http)?;
//! store.insert_many(&documents).await?;
//! ```

use crate::types::{AppError, ResearchRecord, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Store backend configuration
#[derive(Debug, Clone, Default)]
pub enum StoreBackend {
    /// Astra DB Data API collection
    Astra {
        /// Database API endpoint, e.g. `https://<db-id>-<region>.apps.astra.datastax.com`
        endpoint: String,
        /// Application token sent in the `Token` header
        token: String,
        keyspace: String,
        collection: String,
    },
    /// Process-local store (ephemeral, lost on exit)
    #[default]
    Memory,
}

impl StoreBackend {
    /// Create a store handle from this backend configuration
    pub fn create_store(&self, http: reqwest::Client) -> Result<Arc<dyn FindingStore>> {
        match self {
            StoreBackend::Astra {
                endpoint,
                token,
                keyspace,
                collection,
            } => {
                if endpoint.trim().is_empty() {
                    return Err(AppError::Config("Astra endpoint is empty".to_string()));
                }
                Ok(Arc::new(super::astra::AstraStore::new(
                    http,
                    endpoint.clone(),
                    token.clone(),
                    keyspace.clone(),
                    collection.clone(),
                )))
            }
            StoreBackend::Memory => Ok(Arc::new(super::memory::MemoryStore::new())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            StoreBackend::Astra { .. } => "astra",
            StoreBackend::Memory => "memory",
        }
    }
}

/// Document written to the store for each research record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredFinding {
    #[serde(flatten)]
    pub record: ResearchRecord,
    /// Identifies the orchestration run that produced the record
    pub run_id: Uuid,
    pub stored_at: DateTime<Utc>,
}

impl StoredFinding {
    pub fn new(record: ResearchRecord, run_id: Uuid) -> Self {
        Self {
            record,
            run_id,
            stored_at: Utc::now(),
        }
    }
}

/// Abstract trait for finding persistence
///
/// Implementations must be safe to share between runs; callers treat every
/// error as non-fatal.
#[async_trait]
pub trait FindingStore: Send + Sync {
    /// Insert all documents in one request, returning how many were accepted.
    async fn insert_many(&self, documents: &[StoredFinding]) -> Result<usize>;

    /// Name of the collection or table written to
    fn collection(&self) -> &str;
}
