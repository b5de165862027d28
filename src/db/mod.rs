//! Finding persistence.
//!
//! The researcher writes each run's records to a [`FindingStore`]:
//! - **Astra DB**: remote document collection reached over the Data API
//! - **Memory**: process-local store for offline runs and tests
//!
//! Store writes are best-effort; see
//! [`Researcher::store_findings`](crate::agents::researcher::Researcher::store_findings).

#![allow(missing_docs)]

pub mod astra;
pub mod memory;
pub mod traits;

// Re-exports
pub use astra::AstraStore;
pub use memory::MemoryStore;
pub use traits::{FindingStore, StoreBackend, StoredFinding};
