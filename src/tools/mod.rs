//! External Search Tools
//!
//! This module wraps the two search capabilities the researcher dispatches to.
//! Each adapter turns a free-text query into normalized records and reports
//! failures as a [`ToolError`] instead of panicking or swallowing them.
//!
//! # Module Structure
//!
//! - [`search`](crate::tools::search) - Web search via the Serper API
//! - [`arxiv`](crate::tools::arxiv) - Paper search via the arXiv Atom API
//!
//! # Web Search
//!
//! ```ignore
//! let tool = SerperSearchTool::new(http, endpoint, api_key, Some("India".into()));
//! for record in tool.search("rust programming jobs", 5).await? {
//!     println!("{}: {}", record.title, record.link);
//! }
//! ```
//!
//! # Paper Search
//!
//! ```ignore
//! let arxiv = ArxivClient::new(http, "http://export.arxiv.org/api/query");
//! let papers = arxiv.search("graph neural networks", 3).await?;
//! ```

/// Paper search using the arXiv API.
pub mod arxiv;
/// Web search using Serper.
pub mod search;

pub use arxiv::{ArxivClient, Paper, PaperSearch};
pub use search::{SerperSearchTool, WebSearch};

/// Failure of a single external search call.
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not parse response: {0}")]
    Parse(String),

    #[error("provider error: {0}")]
    Provider(String),
}

impl From<reqwest::Error> for ToolError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ToolError::Parse(err.to_string())
        } else {
            ToolError::Transport(err.to_string())
        }
    }
}

/// Check the status of a provider response, keeping the body for diagnostics.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> std::result::Result<reqwest::Response, ToolError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(ToolError::Status {
        status: status.as_u16(),
        body,
    })
}
