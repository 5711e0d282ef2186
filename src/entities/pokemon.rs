// SPDX-License-Identifier: GPL-3.0-only

use std::fmt::Debug;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::NamedResource;

/// A Pokémon as returned by `GET /pokemon/{name}`.
///
/// Only `name` is required; everything else defaults when the upstream payload
/// leaves it out, so rendering never has to check for presence.
///
/// The typed fields are a read view over the record. Serialising writes the
/// record exactly as it was received, unmodelled fields included.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Value", into = "Value")]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    pub types: Vec<PokemonTypeSlot>,
    pub sprites: PokemonSprites,
    pub height: i64,
    pub weight: i64,
    pub base_experience: Option<i64>,
    pub abilities: Vec<PokemonAbility>,
    pub stats: Vec<PokemonStat>,
    pub moves: Vec<PokemonMove>,
    pub species: Option<NamedResource>,
    pub game_indices: Vec<PokemonGameIndex>,
    pub held_items: Vec<PokemonHeldItem>,
    raw: Value,
}

/// The fields of a record that the catalog reads
#[derive(Deserialize)]
struct PokemonFields {
    #[serde(default)]
    id: i64,
    name: String,
    #[serde(default)]
    types: Vec<PokemonTypeSlot>,
    #[serde(default)]
    sprites: PokemonSprites,
    #[serde(default)]
    height: i64,
    #[serde(default)]
    weight: i64,
    #[serde(default)]
    base_experience: Option<i64>,
    #[serde(default)]
    abilities: Vec<PokemonAbility>,
    #[serde(default)]
    stats: Vec<PokemonStat>,
    #[serde(default)]
    moves: Vec<PokemonMove>,
    #[serde(default)]
    species: Option<NamedResource>,
    #[serde(default)]
    game_indices: Vec<PokemonGameIndex>,
    #[serde(default)]
    held_items: Vec<PokemonHeldItem>,
}

impl TryFrom<Value> for Pokemon {
    type Error = serde_json::Error;

    fn try_from(raw: Value) -> Result<Self, Self::Error> {
        let fields = PokemonFields::deserialize(&raw)?;

        Ok(Self {
            id: fields.id,
            name: fields.name,
            types: fields.types,
            sprites: fields.sprites,
            height: fields.height,
            weight: fields.weight,
            base_experience: fields.base_experience,
            abilities: fields.abilities,
            stats: fields.stats,
            moves: fields.moves,
            species: fields.species,
            game_indices: fields.game_indices,
            held_items: fields.held_items,
            raw,
        })
    }
}

impl From<Pokemon> for Value {
    fn from(pokemon: Pokemon) -> Self {
        pokemon.raw
    }
}

impl Debug for Pokemon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Pokemon")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl Pokemon {
    /// Creates a bare record with only a name, every other field defaulted
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut raw = Map::new();
        raw.insert(String::from("name"), Value::String(name.clone()));

        Self {
            id: 0,
            name,
            types: Vec::new(),
            sprites: PokemonSprites::default(),
            height: 0,
            weight: 0,
            base_experience: None,
            abilities: Vec::new(),
            stats: Vec::new(),
            moves: Vec::new(),
            species: None,
            game_indices: Vec::new(),
            held_items: Vec::new(),
            raw: Value::Object(raw),
        }
    }

    /// The record as received from upstream
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    /// Type names in slot order
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|slot| slot.type_.name.as_str())
    }

    pub fn has_type(&self, type_name: &str) -> bool {
        self.type_names().any(|name| name == type_name)
    }

    /// The type in the first slot, used to pick a display accent
    pub fn primary_type(&self) -> Option<&str> {
        self.types
            .iter()
            .min_by_key(|slot| slot.slot)
            .map(|slot| slot.type_.name.as_str())
    }

    pub fn sprite(&self) -> Option<&str> {
        self.sprites.front_default.as_deref()
    }

    /// Base value of the stat called `stat_name` (e.g. `hp`, `special-attack`)
    pub fn base_stat(&self, stat_name: &str) -> Option<i64> {
        self.stats
            .iter()
            .find(|stat| stat.stat.name == stat_name)
            .map(|stat| stat.base_stat)
    }
}

/// One entry of the `types` array
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonTypeSlot {
    #[serde(default)]
    pub slot: i64,
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub stat: NamedResource,
    #[serde(default)]
    pub base_stat: i64,
    #[serde(default)]
    pub effort: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonGameIndex {
    #[serde(default)]
    pub game_index: i64,
    pub version: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonHeldItem {
    pub item: NamedResource,
}
