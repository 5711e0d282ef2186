// SPDX-License-Identifier: GPL-3.0-only

use tracing::{error, info, warn};

use crate::{
    core::CatalogSource,
    entities::{NamedResource, Pokemon},
};

pub mod utils;

use utils::{Filters, PAGE_SIZE, PaginationAction, Paginator};

/// Identifies the status of the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CatalogStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    /// The catalog download failed; only a fresh [`Catalog::load`] recovers
    Error(String),
}

/// The catalog page: every downloaded Pokémon plus the filter and page state
/// that decide which of them are on screen
#[derive(Debug, Clone)]
pub struct Catalog {
    /// Where the catalog currently is in its lifecycle
    status: CatalogStatus,
    /// Contains the list of all Pokémon
    all_pokemon: Vec<Pokemon>,
    /// Type names offered as filters
    types: Vec<NamedResource>,
    /// Search term, flags and selected types
    filters: Filters,
    /// Indices into `all_pokemon` that pass `filters`
    matched: Vec<usize>,
    /// Current page over `matched`
    paginator: Paginator,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}

impl Catalog {
    pub fn new(items_per_page: usize) -> Self {
        Self {
            status: CatalogStatus::Idle,
            all_pokemon: Vec::new(),
            types: Vec::new(),
            filters: Filters::default(),
            matched: Vec::new(),
            paginator: Paginator::new(0).with_page_size(items_per_page),
        }
    }

    /// Downloads the catalog and the type list, resetting filters and page.
    ///
    /// A failed catalog download leaves the catalog in [`CatalogStatus::Error`].
    /// A failed type list download only leaves the type list empty.
    pub async fn load<S: CatalogSource + ?Sized>(&mut self, source: &S) {
        self.status = CatalogStatus::Loading;
        self.filters.clear();
        self.all_pokemon.clear();
        self.matched.clear();
        self.paginator.set_total(0);

        let (pokemon, types) = futures::join!(source.fetch_catalog(), source.fetch_types());

        self.types = types.unwrap_or_else(|e| {
            warn!("Failed to load the type list: {e}");
            Vec::new()
        });

        match pokemon {
            Ok(pokemon) => {
                info!("Catalog ready with {} Pokémon", pokemon.len());
                self.all_pokemon = pokemon;
                self.status = CatalogStatus::Ready;
                self.refilter();
            }
            Err(e) => {
                error!("Failed to load the catalog: {e}");
                self.status = CatalogStatus::Error(e.to_string());
            }
        }
    }

    pub fn status(&self) -> &CatalogStatus {
        &self.status
    }

    pub fn is_ready(&self) -> bool {
        self.status == CatalogStatus::Ready
    }

    pub fn all(&self) -> &[Pokemon] {
        &self.all_pokemon
    }

    pub fn types(&self) -> &[NamedResource] {
        &self.types
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn paginator(&self) -> &Paginator {
        &self.paginator
    }

    pub fn matched_count(&self) -> usize {
        self.matched.len()
    }

    /// Every Pokémon passing the current filters
    pub fn matched(&self) -> Vec<&Pokemon> {
        self.matched.iter().map(|&i| &self.all_pokemon[i]).collect()
    }

    /// The Pokémon on the current page
    pub fn current_page(&self) -> Vec<&Pokemon> {
        self.paginator
            .slice(&self.matched)
            .iter()
            .map(|&i| &self.all_pokemon[i])
            .collect()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filters.set_search(term);
        self.refilter();
    }

    pub fn toggle_flag(&mut self, name: &str) {
        self.filters.toggle_flag(name);
        self.refilter();
    }

    pub fn remove_flag(&mut self, name: &str) {
        self.filters.remove_flag(name);
        self.refilter();
    }

    pub fn toggle_type(&mut self, type_name: &str) {
        self.filters.toggle_type(type_name);
        self.refilter();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.refilter();
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.paginator.go_to(page);
    }

    pub fn paginate(&mut self, action: PaginationAction) {
        self.paginator.paginate(action);
    }

    /// Recomputes the matching subset and goes back to the first page
    fn refilter(&mut self) {
        self.matched = self
            .all_pokemon
            .iter()
            .enumerate()
            .filter(|(_, pokemon)| self.filters.matches(pokemon))
            .map(|(i, _)| i)
            .collect();
        self.paginator.set_total(self.matched.len());
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::error::ApiError;

    struct StubSource {
        pokemon: Vec<Pokemon>,
        fail_catalog: bool,
        fail_types: bool,
    }

    impl StubSource {
        fn with(names: &[&str]) -> Self {
            Self {
                pokemon: names.iter().map(|n| Pokemon::named(*n)).collect(),
                fail_catalog: false,
                fail_types: false,
            }
        }
    }

    #[async_trait]
    impl CatalogSource for StubSource {
        async fn fetch_catalog(&self) -> Result<Vec<Pokemon>, ApiError> {
            if self.fail_catalog {
                return Err(ApiError::Status {
                    url: String::from("http://api/pokemon?limit=1000"),
                    status: 500,
                });
            }
            Ok(self.pokemon.clone())
        }

        async fn fetch_types(&self) -> Result<Vec<NamedResource>, ApiError> {
            if self.fail_types {
                return Err(ApiError::Status {
                    url: String::from("http://api/type/"),
                    status: 500,
                });
            }
            Ok(vec![NamedResource {
                name: String::from("electric"),
                url: String::new(),
            }])
        }
    }

    fn names(pokemon: &[&Pokemon]) -> Vec<String> {
        pokemon.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_new_catalog_is_idle_and_empty() {
        let catalog = Catalog::default();

        assert_eq!(catalog.status(), &CatalogStatus::Idle);
        assert!(catalog.current_page().is_empty());
        assert_eq!(catalog.paginator().total_pages(), 1);
    }

    #[tokio::test]
    async fn test_load_success_shows_first_page_of_everything() {
        let names_in: Vec<String> = (0..25).map(|i| format!("mon-{i}")).collect();
        let refs: Vec<&str> = names_in.iter().map(String::as_str).collect();
        let mut catalog = Catalog::default();

        catalog.load(&StubSource::with(&refs)).await;

        assert!(catalog.is_ready());
        assert_eq!(catalog.matched_count(), 25);
        assert_eq!(catalog.paginator().page(), 1);
        assert_eq!(catalog.current_page().len(), 10);
        assert_eq!(catalog.types()[0].name, "electric");
    }

    #[tokio::test]
    async fn test_load_failure_is_error_state() {
        let mut source = StubSource::with(&["pikachu"]);
        source.fail_catalog = true;
        let mut catalog = Catalog::default();

        catalog.load(&source).await;

        assert!(matches!(catalog.status(), CatalogStatus::Error(_)));
        assert!(catalog.all().is_empty());
        assert!(catalog.current_page().is_empty());
    }

    #[tokio::test]
    async fn test_type_list_failure_does_not_fail_load() {
        let mut source = StubSource::with(&["pikachu"]);
        source.fail_types = true;
        let mut catalog = Catalog::default();

        catalog.load(&source).await;

        assert!(catalog.is_ready());
        assert!(catalog.types().is_empty());
    }

    #[tokio::test]
    async fn test_search_resets_page() {
        let names_in: Vec<String> = (0..30).map(|i| format!("mon-{i}")).collect();
        let refs: Vec<&str> = names_in.iter().map(String::as_str).collect();
        let mut catalog = Catalog::default();
        catalog.load(&StubSource::with(&refs)).await;

        catalog.paginate(PaginationAction::Next);
        catalog.paginate(PaginationAction::Next);
        assert_eq!(catalog.paginator().page(), 3);
        assert_eq!(catalog.current_page()[0].name, "mon-20");

        catalog.set_search("mon-1");
        assert_eq!(catalog.paginator().page(), 1);
        // mon-1 and mon-10..mon-19
        assert_eq!(catalog.matched_count(), 11);
    }

    #[tokio::test]
    async fn test_flag_changes_reset_page() {
        let names_in: Vec<String> = (0..30).map(|i| format!("mon-{i}")).collect();
        let refs: Vec<&str> = names_in.iter().map(String::as_str).collect();
        let mut catalog = Catalog::default();
        catalog.load(&StubSource::with(&refs)).await;

        catalog.go_to_page(3);
        catalog.toggle_flag("legendary");
        assert_eq!(catalog.paginator().page(), 1);
        assert_eq!(catalog.matched_count(), 30);

        catalog.go_to_page(3);
        catalog.remove_flag("legendary");
        assert_eq!(catalog.paginator().page(), 1);
        assert!(catalog.filters().flags.is_empty());

        catalog.toggle_flag("has-sprite");
        assert_eq!(catalog.matched_count(), 0);
        assert_eq!(catalog.paginator().total_pages(), 1);

        catalog.clear_filters();
        catalog.go_to_page(3);
        catalog.clear_filters();
        assert_eq!(catalog.paginator().page(), 1);
        assert_eq!(catalog.matched_count(), 30);
    }

    #[tokio::test]
    async fn test_pika_scenario() {
        let mut catalog = Catalog::default();
        catalog.load(&StubSource::with(&["pikachu", "raichu"])).await;

        catalog.set_search("pika");

        assert_eq!(names(&catalog.current_page()), vec!["pikachu"]);
    }

    #[tokio::test]
    async fn test_reload_resets_filters() {
        let source = StubSource::with(&["pikachu", "raichu"]);
        let mut catalog = Catalog::default();
        catalog.load(&source).await;
        catalog.set_search("rai");
        catalog.toggle_type("electric");

        catalog.load(&source).await;

        assert_eq!(catalog.filters(), &Filters::default());
        assert_eq!(catalog.matched_count(), 2);
    }

    #[tokio::test]
    async fn test_page_change_keeps_filters() {
        let names_in: Vec<String> = (0..40).map(|i| format!("mon-{i}")).collect();
        let refs: Vec<&str> = names_in.iter().map(String::as_str).collect();
        let mut catalog = Catalog::new(5);
        catalog.load(&StubSource::with(&refs)).await;
        catalog.set_search("mon-");

        catalog.go_to_page(4);

        assert_eq!(catalog.filters().search, "mon-");
        assert_eq!(catalog.paginator().page(), 4);
        assert_eq!(names(&catalog.current_page()), vec![
            "mon-15", "mon-16", "mon-17", "mon-18", "mon-19"
        ]);
    }
}
