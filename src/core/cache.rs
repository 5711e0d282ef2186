// SPDX-License-Identifier: GPL-3.0-only

use std::{
    io,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::{
    core::api::CatalogSource,
    entities::{NamedResource, Pokemon},
    error::{ApiError, CacheError},
};

/// Snapshot of a downloaded catalog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    pub pokemon: Vec<Pokemon>,
    pub types: Vec<NamedResource>,
}

/// A [`CatalogSnapshot`] stored as RON on disk
#[derive(Debug, Clone)]
pub struct CatalogCache {
    path: PathBuf,
}

impl CatalogCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Attempts to load the snapshot
    pub async fn load(&self) -> Result<CatalogSnapshot, CacheError> {
        match tokio::fs::metadata(&self.path).await {
            Ok(_) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(CacheError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        }

        let data = tokio::fs::read_to_string(&self.path).await?;
        let snapshot = tokio::task::spawn_blocking(move || ron::from_str::<CatalogSnapshot>(&data))
            .await
            .map_err(io::Error::other)??;

        Ok(snapshot)
    }

    /// Attempts to save the snapshot, creating parent directories as needed
    pub async fn save(&self, snapshot: &CatalogSnapshot) -> Result<(), CacheError> {
        let snapshot = snapshot.clone();
        let serialized = tokio::task::spawn_blocking(move || ron::to_string(&snapshot))
            .await
            .map_err(io::Error::other)??;

        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, serialized).await?;

        Ok(())
    }
}

/// Serves the catalog from a [`CatalogCache`], falling back to `inner` and
/// writing the cache when no usable snapshot exists.
///
/// The snapshot is resolved once and shared by both [`CatalogSource`] calls.
pub struct CachedSource<S> {
    inner: S,
    cache: CatalogCache,
    snapshot: OnceCell<CatalogSnapshot>,
}

impl<S: CatalogSource> CachedSource<S> {
    pub fn new(inner: S, cache: CatalogCache) -> Self {
        Self {
            inner,
            cache,
            snapshot: OnceCell::new(),
        }
    }

    async fn snapshot(&self) -> Result<&CatalogSnapshot, ApiError> {
        self.snapshot.get_or_try_init(|| self.load_or_init()).await
    }

    async fn load_or_init(&self) -> Result<CatalogSnapshot, ApiError> {
        match self.cache.load().await {
            Ok(snapshot) if !snapshot.pokemon.is_empty() => {
                info!(
                    "Loaded {} Pokémon from {:?}",
                    snapshot.pokemon.len(),
                    self.cache.path()
                );
                return Ok(snapshot);
            }
            Ok(_) => warn!("Catalog snapshot at {:?} is empty", self.cache.path()),
            Err(CacheError::NotFound(_)) => {}
            Err(e) => warn!("Failed to load catalog snapshot: {e}"),
        }

        let (pokemon, types) =
            futures::join!(self.inner.fetch_catalog(), self.inner.fetch_types());
        let snapshot = CatalogSnapshot {
            pokemon: pokemon?,
            types: types.unwrap_or_else(|e| {
                warn!("Failed to fetch type list for the snapshot: {e}");
                Vec::new()
            }),
        };

        if let Err(e) = self.cache.save(&snapshot).await {
            warn!("Failed to save catalog snapshot: {e}");
        }

        Ok(snapshot)
    }
}

#[async_trait]
impl<S: CatalogSource> CatalogSource for CachedSource<S> {
    async fn fetch_catalog(&self) -> Result<Vec<Pokemon>, ApiError> {
        Ok(self.snapshot().await?.pokemon.clone())
    }

    async fn fetch_types(&self) -> Result<Vec<NamedResource>, ApiError> {
        let snapshot = self.snapshot().await?;
        if snapshot.types.is_empty() {
            return self.inner.fetch_types().await;
        }
        Ok(snapshot.types.clone())
    }
}
