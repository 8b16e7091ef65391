//! HTTP client for the creature catalog.

use super::wire::{PokemonResponse, SpeciesResponse, into_subject};
use crate::config::GameConfig;
use crate::error::{ConfigError, FetchError, FetchErrorKind, FetchStage};
use crate::game::Subject;
use serde::de::DeserializeOwned;
use tracing::{debug, info, instrument};

/// Anything that can produce a [`Subject`] for an identifier.
#[async_trait::async_trait]
pub trait SubjectSource: Send + Sync {
    /// Retrieves and normalizes the subject with the given identifier.
    async fn fetch_subject(&self, id: u32) -> Result<Subject, FetchError>;
}

/// Catalog client backed by the PokéAPI REST endpoints.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Builds a client with the configured base URL and per-request timeout.
    ///
    /// Fails before any request is made when the base URL does not parse
    /// or the HTTP client cannot be constructed.
    #[instrument(skip(config), fields(base_url = %config.api_base_url()))]
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let base_url = config.api_base_url().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| ConfigError::new(format!("Invalid api_base_url {base_url:?}: {e}")))?;

        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to build HTTP client: {e}")))?;
        info!(timeout_ms = config.request_timeout_ms(), "Catalog client ready");
        Ok(Self { base_url, client })
    }

    /// Base URL requests are issued against.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[instrument(skip(self))]
    async fn get_json<T: DeserializeOwned>(&self, stage: FetchStage, id: u32) -> Result<T, FetchError> {
        let url = format!("{}/{}/{}", self.base_url, stage.path(), id);
        debug!(url = %url, "Requesting catalog resource");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(stage, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(stage, FetchErrorKind::Status(status.as_u16())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(stage, &e))?;
        debug!(bytes = body.len(), "Catalog response received");

        serde_json::from_str(&body)
            .map_err(|e| FetchError::new(stage, FetchErrorKind::Decode(e.to_string())))
    }
}

#[async_trait::async_trait]
impl SubjectSource for CatalogClient {
    #[instrument(skip(self))]
    async fn fetch_subject(&self, id: u32) -> Result<Subject, FetchError> {
        let pokemon: PokemonResponse = self.get_json(FetchStage::Pokemon, id).await?;
        let species: SpeciesResponse = self.get_json(FetchStage::Species, id).await?;
        let subject = into_subject(pokemon, species);
        info!(id, name = %subject.name(), "Subject fetched");
        Ok(subject)
    }
}
