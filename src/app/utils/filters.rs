// SPDX-License-Identifier: GPL-3.0-only

use std::collections::{BTreeMap, BTreeSet};

use crate::entities::Pokemon;

/// Filter flags that actually narrow the list when enabled.
/// Any other flag name is accepted but has no effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagEffect {
    HasSprite,
    HasHeldItems,
}

impl FlagEffect {
    pub const ALL: &'static [Self] = &[Self::HasSprite, Self::HasHeldItems];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "has-sprite" => Some(Self::HasSprite),
            "has-held-items" => Some(Self::HasHeldItems),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::HasSprite => "has-sprite",
            Self::HasHeldItems => "has-held-items",
        }
    }

    fn holds(&self, pokemon: &Pokemon) -> bool {
        match self {
            Self::HasSprite => pokemon.sprite().is_some(),
            Self::HasHeldItems => !pokemon.held_items.is_empty(),
        }
    }
}

/// Different filters you can apply to the Pokémon List
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub search: String,
    pub flags: BTreeMap<String, bool>,
    pub selected_types: BTreeSet<String>,
}

impl Filters {
    pub fn any_applied(&self) -> bool {
        !self.search.is_empty()
            || self.flags.values().any(|enabled| *enabled)
            || !self.selected_types.is_empty()
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn toggle_flag(&mut self, name: &str) {
        let enabled = self.flags.entry(name.to_string()).or_insert(false);
        *enabled = !*enabled;
    }

    pub fn remove_flag(&mut self, name: &str) {
        self.flags.remove(name);
    }

    /// Selects `type_name` if it was not selected, deselects it otherwise
    pub fn toggle_type(&mut self, type_name: &str) {
        if !self.selected_types.remove(type_name) {
            self.selected_types.insert(type_name.to_string());
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether `pokemon` passes the search term, every enabled flag and the type selection
    pub fn matches(&self, pokemon: &Pokemon) -> bool {
        self.matches_search(pokemon) && self.matches_flags(pokemon) && self.matches_types(pokemon)
    }

    /// The matching subset of `pokemon`, in input order
    pub fn apply<'a>(&self, pokemon: &'a [Pokemon]) -> Vec<&'a Pokemon> {
        pokemon.iter().filter(|p| self.matches(p)).collect()
    }

    fn matches_search(&self, pokemon: &Pokemon) -> bool {
        self.search.is_empty()
            || pokemon
                .name
                .to_lowercase()
                .contains(&self.search.to_lowercase())
    }

    fn matches_flags(&self, pokemon: &Pokemon) -> bool {
        self.flags
            .iter()
            .filter(|(_, enabled)| **enabled)
            .filter_map(|(name, _)| FlagEffect::from_name(name))
            .all(|effect| effect.holds(pokemon))
    }

    // any selected type is enough
    fn matches_types(&self, pokemon: &Pokemon) -> bool {
        self.selected_types.is_empty()
            || pokemon
                .type_names()
                .any(|name| self.selected_types.contains(name))
    }
}
