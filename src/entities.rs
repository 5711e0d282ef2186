// SPDX-License-Identifier: GPL-3.0-only

mod detail;
mod pokemon;
mod resource;

pub use detail::{DetailStats, PokemonDetail};
pub use pokemon::{
    Pokemon, PokemonAbility, PokemonGameIndex, PokemonHeldItem, PokemonMove, PokemonSprites,
    PokemonStat, PokemonTypeSlot,
};
pub use resource::{NamedResource, ResourceList};
