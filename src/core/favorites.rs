// SPDX-License-Identifier: GPL-3.0-only

use std::{
    collections::HashMap,
    io,
    path::PathBuf,
    sync::Mutex,
};

use tracing::{debug, warn};

use crate::{entities::Pokemon, error::FavoritesError};

/// Key the favorites list is stored under
pub const FAVORITES_KEY: &str = "favorites";

/// A flat string key-value slot
pub trait KeyValueStore {
    fn get(&self, key: &str) -> io::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
}

/// One `<key>.json` file per key inside a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        match std::fs::read_to_string(self.key_path(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        std::fs::write(self.key_path(key), value)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> io::Result<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|_| io::Error::other("memory store poisoned"))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut values = self
            .values
            .lock()
            .map_err(|_| io::Error::other("memory store poisoned"))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// The user's favorite Pokémon, kept as a JSON array under [`FAVORITES_KEY`].
///
/// Every call re-reads the slot and every change rewrites the whole list.
/// Nothing guards against another process writing in between.
#[derive(Debug)]
pub struct Favorites<S> {
    store: S,
}

impl<S: KeyValueStore> Favorites<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current favorites, an absent or unreadable slot counts as empty
    pub fn list(&self) -> Vec<Pokemon> {
        let raw = match self.store.get(FAVORITES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("Failed to read favorites: {e}");
                return Vec::new();
            }
        };

        serde_json::from_str(&raw).unwrap_or_else(|e| {
            warn!("Stored favorites are corrupt, starting empty: {e}");
            Vec::new()
        })
    }

    pub fn is_favorite(&self, name: &str) -> bool {
        self.list().iter().any(|pokemon| pokemon.name == name)
    }

    /// Appends `pokemon` as-is; adding the same name twice stores it twice
    pub fn add(&self, pokemon: &Pokemon) -> Result<(), FavoritesError> {
        let mut favorites = self.list();
        favorites.push(pokemon.clone());
        self.write(&favorites)?;

        debug!("Added {} to favorites", pokemon.name);
        Ok(())
    }

    /// Drops every entry called `name`
    pub fn remove(&self, name: &str) -> Result<(), FavoritesError> {
        let mut favorites = self.list();
        favorites.retain(|pokemon| pokemon.name != name);
        self.write(&favorites)?;

        debug!("Removed {name} from favorites");
        Ok(())
    }

    /// Removes `pokemon` if it is a favorite, adds it otherwise.
    /// Returns whether it is a favorite afterwards.
    pub fn toggle(&self, pokemon: &Pokemon) -> Result<bool, FavoritesError> {
        if self.is_favorite(&pokemon.name) {
            self.remove(&pokemon.name)?;
            Ok(false)
        } else {
            self.add(pokemon)?;
            Ok(true)
        }
    }

    fn write(&self, favorites: &[Pokemon]) -> Result<(), FavoritesError> {
        let serialized = serde_json::to_string(favorites)?;
        self.store.set(FAVORITES_KEY, &serialized)?;
        Ok(())
    }
}
