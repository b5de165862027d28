//! Long-lived client handles shared across research runs
//!
//! The pool is created once at startup, hands out a fresh agent set for every
//! run over the same handles, and is closed explicitly at shutdown.
//!
//! # Example
//!
//! ```rust,ignore
//! use research_hub::research::pool::ResourcePool;
//!
//! let pool = ResourcePool::init(&config, &credentials)?;
//!
//! let outcome = pool.orchestrator()?.run("Latest AI trends in Healthcare").await;
//! let another = pool.orchestrator()?.run("Rust jobs in Pune").await;
//!
//! pool.shutdown();
//! ```

use crate::{
    agents::{Critic, PresencePolicy, Planner, ResearchLimits, Researcher, ScoringPolicy},
    db::{FindingStore, StoreBackend},
    llm::{LLMClient, Provider},
    research::coordinator::ResearchOrchestrator,
    tools::{ArxivClient, PaperSearch, SerperSearchTool, WebSearch},
    types::{AppError, Result},
    utils::{
        credentials::Credentials,
        toml_config::{OrchestratorConfig, ResearchConfig, StoreKind},
    },
};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Shared handles for the language model, the search tools and the store.
pub struct ResourcePool {
    llm: Arc<dyn LLMClient>,
    web: Arc<dyn WebSearch>,
    papers: Arc<dyn PaperSearch>,
    store: Arc<dyn FindingStore>,
    scoring: Arc<dyn ScoringPolicy>,
    limits: ResearchLimits,
    settings: OrchestratorConfig,
    closed: AtomicBool,
}

/// Build the HTTP client every external call goes through
pub fn http_client(config: &ResearchConfig) -> Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.http.timeout_secs))
        .user_agent(concat!("research-hub/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| AppError::Internal(format!("Failed to build HTTP client: {}", e)))
}

/// Provider for the planner's language model
pub fn llm_provider(config: &ResearchConfig, credentials: &Credentials) -> Provider {
    Provider::OpenAICompatible {
        api_key: credentials.language_model_key().to_string(),
        api_base: config.llm.base_url.clone(),
        model: config.llm.planner_model.clone(),
        temperature: config.llm.temperature,
    }
}

fn store_backend(config: &ResearchConfig, credentials: &Credentials) -> StoreBackend {
    match config.store.backend {
        StoreKind::Astra => StoreBackend::Astra {
            endpoint: credentials.store_endpoint().to_string(),
            token: credentials.store_token().to_string(),
            keyspace: config.store.keyspace.clone(),
            collection: config.store.collection.clone(),
        },
        StoreKind::Memory => StoreBackend::Memory,
    }
}

impl ResourcePool {
    /// Validate credentials and create every client handle.
    ///
    /// No network traffic happens here; connections are opened lazily by the
    /// first run.
    pub fn init(config: &ResearchConfig, credentials: &Credentials) -> Result<Self> {
        credentials.validate(config)?;

        let http = http_client(config)?;
        let provider = llm_provider(config, credentials);
        let llm: Arc<dyn LLMClient> = Arc::from(provider.create_client(http.clone()));
        let location = config
            .search
            .location
            .clone()
            .filter(|l| !l.trim().is_empty());
        let web = Arc::new(SerperSearchTool::new(
            http.clone(),
            config.search.endpoint.clone(),
            credentials.search_key(),
            location,
        ));
        let papers = Arc::new(ArxivClient::new(http.clone(), config.papers.endpoint.clone()));
        let backend = store_backend(config, credentials);
        let store = backend.create_store(http)?;

        tracing::info!(
            provider = provider.name(),
            model = %llm.model_name(),
            store = backend.name(),
            collection = %store.collection(),
            "resource pool initialized"
        );

        Ok(Self::from_parts(llm, web, papers, store)
            .with_limits(config.research_limits())
            .with_settings(config.orchestrator.clone()))
    }

    /// Assemble a pool from existing handles
    pub fn from_parts(
        llm: Arc<dyn LLMClient>,
        web: Arc<dyn WebSearch>,
        papers: Arc<dyn PaperSearch>,
        store: Arc<dyn FindingStore>,
    ) -> Self {
        Self {
            llm,
            web,
            papers,
            store,
            scoring: Arc::new(PresencePolicy),
            limits: ResearchLimits::default(),
            settings: OrchestratorConfig::default(),
            closed: AtomicBool::new(false),
        }
    }

    pub fn with_limits(mut self, limits: ResearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_settings(mut self, settings: OrchestratorConfig) -> Self {
        self.settings = settings;
        self
    }

    pub fn with_scoring(mut self, scoring: Arc<dyn ScoringPolicy>) -> Self {
        self.scoring = scoring;
        self
    }

    /// Planner over the pooled language model
    pub fn planner(&self) -> Result<Planner> {
        self.ensure_open()?;
        Ok(Planner::new(self.llm.clone()))
    }

    /// Fresh planner, researcher and critic for one run
    pub fn orchestrator(&self) -> Result<ResearchOrchestrator> {
        self.ensure_open()?;

        let researcher = Researcher::new(
            self.web.clone(),
            self.papers.clone(),
            self.store.clone(),
            self.limits,
        );
        let critic = Critic::new(self.scoring.clone());

        Ok(
            ResearchOrchestrator::new(Planner::new(self.llm.clone()), researcher, critic)
                .with_settings(self.settings.clone()),
        )
    }

    /// Close the pool; later checkouts fail
    pub fn shutdown(&self) {
        if !self.closed.swap(true, Ordering::SeqCst) {
            tracing::info!("resource pool shut down");
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    fn ensure_open(&self) -> Result<()> {
        if self.is_closed() {
            Err(AppError::Internal("resource pool is shut down".to_string()))
        } else {
            Ok(())
        }
    }
}

impl Drop for ResourcePool {
    fn drop(&mut self) {
        self.shutdown();
    }
}
