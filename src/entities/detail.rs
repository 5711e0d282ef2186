// SPDX-License-Identifier: GPL-3.0-only

use crate::utils::{capitalize_string, scale_numbers};

use super::Pokemon;

/// How many moves the detail view lists
const SHOWN_MOVES: usize = 3;

/// Everything the detail page displays about a single Pokémon, already formatted
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonDetail {
    pub name: String,
    pub display_name: String,
    pub sprite: Option<String>,
    pub primary_type: Option<String>,
    pub types: Vec<String>,
    /// Meters
    pub height: f64,
    /// Kilograms
    pub weight: f64,
    pub abilities: Vec<String>,
    pub base_experience: Option<i64>,
    pub moves: Vec<String>,
    pub stats: DetailStats,
    pub games: Vec<String>,
    pub species: Option<String>,
    pub held_items: Vec<String>,
}

/// Base stats shown on the detail page, missing entries stay `None`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailStats {
    pub hp: Option<i64>,
    pub attack: Option<i64>,
    pub defense: Option<i64>,
    pub speed: Option<i64>,
}

impl From<&Pokemon> for PokemonDetail {
    fn from(pokemon: &Pokemon) -> Self {
        Self {
            name: pokemon.name.clone(),
            display_name: capitalize_string(&pokemon.name),
            sprite: pokemon.sprite().map(String::from),
            primary_type: pokemon.primary_type().map(String::from),
            types: pokemon.type_names().map(String::from).collect(),
            height: scale_numbers(pokemon.height),
            weight: scale_numbers(pokemon.weight),
            abilities: pokemon
                .abilities
                .iter()
                .map(|a| {
                    if a.is_hidden {
                        format!("{} (HIDDEN)", a.ability.name)
                    } else {
                        a.ability.name.clone()
                    }
                })
                .collect(),
            base_experience: pokemon.base_experience,
            moves: pokemon
                .moves
                .iter()
                .take(SHOWN_MOVES)
                .map(|m| m.move_.name.clone())
                .collect(),
            stats: DetailStats {
                hp: pokemon.base_stat("hp"),
                attack: pokemon.base_stat("attack"),
                defense: pokemon.base_stat("defense"),
                speed: pokemon.base_stat("speed"),
            },
            games: pokemon
                .game_indices
                .iter()
                .map(|g| g.version.name.clone())
                .collect(),
            species: pokemon.species.as_ref().map(|s| s.name.clone()),
            held_items: pokemon
                .held_items
                .iter()
                .map(|h| h.item.name.clone())
                .collect(),
        }
    }
}
