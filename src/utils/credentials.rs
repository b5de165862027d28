//! API credentials for a research run.
//!
//! Credentials are passed explicitly to the session rather than read from
//! ambient state, so every run states exactly which keys it uses.

use super::toml_config::{ResearchConfig, StoreKind};
use crate::types::{AppError, Result};

#[derive(Clone, Default)]
pub struct Credentials {
    pub language_model_key: Option<String>,
    pub search_key: Option<String>,
    pub store_token: Option<String>,
    pub store_endpoint: Option<String>,
}

// Never print secret values
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = |v: &Option<String>| if is_set(v) { "<set>" } else { "<unset>" };
        f.debug_struct("Credentials")
            .field("language_model_key", &state(&self.language_model_key))
            .field("search_key", &state(&self.search_key))
            .field("store_token", &state(&self.store_token))
            .field("store_endpoint", &state(&self.store_endpoint))
            .finish()
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

impl Credentials {
    /// Read credentials from the environment variables named in `config`
    pub fn from_env(config: &ResearchConfig) -> Self {
        let var = |name: &str| std::env::var(name).ok().filter(|v| !v.trim().is_empty());
        Self {
            language_model_key: var(&config.llm.api_key_env),
            search_key: var(&config.search.api_key_env),
            store_token: var(&config.store.token_env),
            store_endpoint: var(&config.store.endpoint_env),
        }
    }

    /// Fill unset values from `fallback`
    pub fn or(self, fallback: Credentials) -> Self {
        let pick = |a: Option<String>, b: Option<String>| if is_set(&a) { a } else { b };
        Self {
            language_model_key: pick(self.language_model_key, fallback.language_model_key),
            search_key: pick(self.search_key, fallback.search_key),
            store_token: pick(self.store_token, fallback.store_token),
            store_endpoint: pick(self.store_endpoint, fallback.store_endpoint),
        }
    }

    /// Names (environment variables) of the required credentials that are missing.
    ///
    /// Store credentials are only required for the Astra backend.
    pub fn missing(&self, config: &ResearchConfig) -> Vec<String> {
        let mut required = vec![
            (&self.language_model_key, &config.llm.api_key_env),
            (&self.search_key, &config.search.api_key_env),
        ];
        if config.store.backend == StoreKind::Astra {
            required.push((&self.store_token, &config.store.token_env));
            required.push((&self.store_endpoint, &config.store.endpoint_env));
        }

        required
            .into_iter()
            .filter(|(value, _)| !is_set(value))
            .map(|(_, name)| name.clone())
            .collect()
    }

    /// Fail with [`AppError::MissingCredentials`] unless everything required is set
    pub fn validate(&self, config: &ResearchConfig) -> Result<()> {
        let missing = self.missing(config);
        if missing.is_empty() {
            Ok(())
        } else {
            Err(AppError::MissingCredentials(missing))
        }
    }

    pub(crate) fn language_model_key(&self) -> &str {
        self.language_model_key.as_deref().unwrap_or_default()
    }

    pub(crate) fn search_key(&self) -> &str {
        self.search_key.as_deref().unwrap_or_default()
    }

    pub(crate) fn store_token(&self) -> &str {
        self.store_token.as_deref().unwrap_or_default()
    }

    pub(crate) fn store_endpoint(&self) -> &str {
        self.store_endpoint.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full() -> Credentials {
        Credentials {
            language_model_key: Some("gsk".into()),
            search_key: Some("serper".into()),
            store_token: Some("AstraCS:x".into()),
            store_endpoint: Some("https://db.example".into()),
        }
    }

    #[test]
    fn test_complete_credentials_validate() {
        assert!(full().validate(&ResearchConfig::default()).is_ok());
    }

    #[test]
    fn test_blank_values_count_as_missing() {
        let creds = Credentials {
            search_key: Some("   ".into()),
            store_endpoint: None,
            ..full()
        };
        let missing = creds.missing(&ResearchConfig::default());
        assert_eq!(missing, vec!["SERPER_API_KEY", "ASTRA_DB_API_ENDPOINT"]);
    }

    #[test]
    fn test_memory_backend_does_not_need_store_credentials() {
        let mut config = ResearchConfig::default();
        config.store.backend = StoreKind::Memory;

        let creds = Credentials {
            store_token: None,
            store_endpoint: None,
            ..full()
        };
        assert!(creds.validate(&config).is_ok());
    }

    #[test]
    fn test_or_prefers_explicit_values() {
        let explicit = Credentials {
            search_key: Some("flag".into()),
            ..Default::default()
        };
        let merged = explicit.or(full());
        assert_eq!(merged.search_key.as_deref(), Some("flag"));
        assert_eq!(merged.language_model_key.as_deref(), Some("gsk"));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let rendered = format!("{:?}", full());
        assert!(!rendered.contains("gsk"));
        assert!(rendered.contains("<set>"));
    }
}
