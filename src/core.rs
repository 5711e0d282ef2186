// SPDX-License-Identifier: GPL-3.0-only

pub mod api;
pub mod cache;
pub mod favorites;
pub mod fetcher;
pub mod transport;

pub use api::{ApiConfig, CatalogSource, PokeApi};
pub use cache::{CachedSource, CatalogCache, CatalogSnapshot};
pub use favorites::{FAVORITES_KEY, Favorites, FileStore, KeyValueStore, MemoryStore};
pub use fetcher::{fetch_in_batches, fetch_json};
pub use transport::{HttpTransport, Transport};
