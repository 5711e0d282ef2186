// SPDX-License-Identifier: GPL-3.0-only

//! Pokémon catalog backed by PokéAPI: bulk download in fixed-size batches,
//! search and type filtering, pagination, and a persisted favorites list.

pub mod app;
pub mod config;
pub mod core;
pub mod entities;
pub mod error;
pub mod utils;

pub use app::{Catalog, CatalogStatus};
pub use config::{APP_ID, Config};
pub use error::{ApiError, CacheError, ConfigError, FavoritesError};
