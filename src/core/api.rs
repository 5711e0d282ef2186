// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::{
    config::Config,
    core::{
        fetcher::{fetch_in_batches, fetch_json},
        transport::{HttpTransport, Transport},
    },
    entities::{NamedResource, Pokemon, ResourceList},
    error::ApiError,
};

/// Where the catalog and its type vocabulary come from
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Every Pokémon in the catalog, in list order
    async fn fetch_catalog(&self) -> Result<Vec<Pokemon>, ApiError>;

    /// The type names the catalog can be filtered by
    async fn fetch_types(&self) -> Result<Vec<NamedResource>, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub catalog_limit: usize,
    pub concurrency: usize,
}

impl From<&Config> for ApiConfig {
    fn from(config: &Config) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            catalog_limit: config.catalog_limit,
            concurrency: config.concurrency,
        }
    }
}

/// PokéAPI client
#[derive(Debug)]
pub struct PokeApi<T = HttpTransport> {
    transport: Arc<T>,
    config: ApiConfig,
}

impl<T> Clone for PokeApi<T> {
    fn clone(&self) -> Self {
        PokeApi {
            transport: Arc::clone(&self.transport),
            config: self.config.clone(),
        }
    }
}

impl PokeApi<HttpTransport> {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let transport = HttpTransport::new(config.concurrency)?;
        Ok(Self::with_transport(transport, config))
    }
}

impl<T: Transport> PokeApi<T> {
    pub fn with_transport(transport: T, config: ApiConfig) -> Self {
        Self {
            transport: Arc::new(transport),
            config,
        }
    }

    fn base_url(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }

    pub fn catalog_list_url(&self) -> String {
        format!("{}/pokemon?limit={}", self.base_url(), self.config.catalog_limit)
    }

    pub fn types_url(&self) -> String {
        format!("{}/type/", self.base_url())
    }

    pub fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url(), name.trim().to_lowercase())
    }

    /// Retrieve a single Pokémon from PokéApi
    pub async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon, ApiError> {
        fetch_json(self.transport.as_ref(), &self.pokemon_url(name)).await
    }
}

#[async_trait]
impl<T: Transport> CatalogSource for PokeApi<T> {
    async fn fetch_catalog(&self) -> Result<Vec<Pokemon>, ApiError> {
        let list: ResourceList =
            fetch_json(self.transport.as_ref(), &self.catalog_list_url()).await?;

        info!(
            "Downloading {} of {} Pokémon, {} at a time",
            list.results.len(),
            list.count,
            self.config.concurrency
        );

        fetch_in_batches(self.transport.as_ref(), &list.urls(), self.config.concurrency).await
    }

    async fn fetch_types(&self) -> Result<Vec<NamedResource>, ApiError> {
        let list: ResourceList = fetch_json(self.transport.as_ref(), &self.types_url()).await?;
        Ok(list.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::transport::MemoryTransport;

    fn api_config() -> ApiConfig {
        ApiConfig {
            base_url: String::from("http://api/v2/"),
            catalog_limit: 3,
            concurrency: 2,
        }
    }

    fn seeded_transport() -> MemoryTransport {
        let transport = MemoryTransport::default();
        transport.insert(
            "http://api/v2/pokemon?limit=3",
            r#"{"count": 1302, "next": null, "previous": null, "results": [
                {"name": "bulbasaur", "url": "http://api/v2/pokemon/1/"},
                {"name": "ivysaur", "url": "http://api/v2/pokemon/2/"},
                {"name": "venusaur", "url": "http://api/v2/pokemon/3/"}
            ]}"#,
        );
        transport.insert("http://api/v2/pokemon/1/", r#"{"id": 1, "name": "bulbasaur"}"#);
        transport.insert("http://api/v2/pokemon/2/", r#"{"id": 2, "name": "ivysaur"}"#);
        transport.insert("http://api/v2/pokemon/3/", r#"{"id": 3, "name": "venusaur"}"#);
        transport.insert(
            "http://api/v2/type/",
            r#"{"count": 2, "results": [
                {"name": "normal", "url": "http://api/v2/type/1/"},
                {"name": "fighting", "url": "http://api/v2/type/2/"}
            ]}"#,
        );
        transport
    }

    #[test]
    fn test_urls_trim_trailing_slash() {
        let api = PokeApi::with_transport(MemoryTransport::default(), api_config());

        assert_eq!(api.catalog_list_url(), "http://api/v2/pokemon?limit=3");
        assert_eq!(api.types_url(), "http://api/v2/type/");
        assert_eq!(api.pokemon_url(" Pikachu "), "http://api/v2/pokemon/pikachu");
    }

    #[tokio::test]
    async fn test_fetch_catalog_follows_list_urls() {
        let api = PokeApi::with_transport(seeded_transport(), api_config());

        let catalog = api.fetch_catalog().await.unwrap();
        let names: Vec<&str> = catalog.iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, vec!["bulbasaur", "ivysaur", "venusaur"]);
    }

    #[tokio::test]
    async fn test_fetch_catalog_fails_when_a_detail_fails() {
        let transport = seeded_transport();
        transport.fail("http://api/v2/pokemon/2/", 503);
        let api = PokeApi::with_transport(transport, api_config());

        let err = api.fetch_catalog().await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_fetch_types() {
        let api = PokeApi::with_transport(seeded_transport(), api_config());

        let types = api.fetch_types().await.unwrap();
        let names: Vec<&str> = types.iter().map(|t| t.name.as_str()).collect();

        assert_eq!(names, vec!["normal", "fighting"]);
    }

    #[tokio::test]
    async fn test_fetch_unknown_pokemon_is_an_error() {
        let api = PokeApi::with_transport(seeded_transport(), api_config());

        let err = api.fetch_pokemon("missingno").await.unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 404, .. }));
    }
}
