// SPDX-License-Identifier: GPL-3.0-only

//! Plain-text rendering of the catalog, detail and favorites views.

use std::fmt::Write;

use crate::{
    app::utils::Paginator,
    entities::{NamedResource, Pokemon, PokemonDetail},
    utils::{capitalize_string, scale_numbers},
};

const NO_IMAGE: &str = "No image available";

/// One line per Pokémon: name, types, height and weight
pub fn pokemon_line(pokemon: &Pokemon) -> String {
    let types: Vec<&str> = pokemon.type_names().collect();
    format!(
        "{:<24} {:<20} height {} m  weight {} kg",
        capitalize_string(&pokemon.name),
        types.join(", "),
        scale_numbers(pokemon.height),
        scale_numbers(pokemon.weight)
    )
}

/// Page controls, e.g. `< Back  1  [2]  3  4  20  Next >`
pub fn page_controls(paginator: &Paginator) -> String {
    let mut parts = Vec::new();

    if paginator.can_go_back() {
        parts.push(String::from("< Back"));
    }
    for page in paginator.window() {
        if page == paginator.page() {
            parts.push(format!("[{page}]"));
        } else {
            parts.push(page.to_string());
        }
    }
    if paginator.can_go_next() {
        parts.push(String::from("Next >"));
    }

    parts.join("  ")
}

pub fn catalog_page(page: &[&Pokemon], paginator: &Paginator) -> String {
    if page.is_empty() {
        return String::from("No Pokémon match the applied filters.");
    }

    let mut out = String::new();
    for pokemon in page {
        let _ = writeln!(out, "{}", pokemon_line(pokemon));
    }
    let _ = writeln!(out);
    let _ = write!(
        out,
        "{}    ({} matches)",
        page_controls(paginator),
        paginator.total()
    );
    out
}

pub fn type_list(types: &[NamedResource]) -> String {
    types
        .iter()
        .map(|t| t.name.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn stat_value(value: Option<i64>) -> String {
    value.map_or_else(|| String::from("?"), |v| v.to_string())
}

fn joined_or(values: &[String], fallback: &str) -> String {
    if values.is_empty() {
        fallback.to_string()
    } else {
        values.join(", ")
    }
}

pub fn detail(detail: &PokemonDetail, is_favorite: bool) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", detail.display_name);
    let _ = writeln!(
        out,
        "{}",
        if is_favorite {
            "★ In favorites"
        } else {
            "☆ Not in favorites"
        }
    );
    let _ = writeln!(
        out,
        "Sprite: {}",
        detail.sprite.as_deref().unwrap_or(NO_IMAGE)
    );
    let _ = writeln!(
        out,
        "Primary type: {}",
        detail.primary_type.as_deref().unwrap_or("unknown")
    );
    let _ = writeln!(out, "Types: {}", joined_or(&detail.types, "-"));
    let _ = writeln!(out, "Height: {} m", detail.height);
    let _ = writeln!(out, "Weight: {} kg", detail.weight);
    let _ = writeln!(out, "Abilities: {}", joined_or(&detail.abilities, "-"));
    let _ = writeln!(
        out,
        "Base experience: {}",
        stat_value(detail.base_experience)
    );
    let _ = writeln!(out, "Moves: {}", joined_or(&detail.moves, "-"));
    let _ = writeln!(out, "Base stats:");
    let _ = writeln!(out, "  HP: {}", stat_value(detail.stats.hp));
    let _ = writeln!(out, "  Attack: {}", stat_value(detail.stats.attack));
    let _ = writeln!(out, "  Defense: {}", stat_value(detail.stats.defense));
    let _ = writeln!(out, "  Speed: {}", stat_value(detail.stats.speed));
    let _ = writeln!(out, "Games: {}", joined_or(&detail.games, "-"));
    let _ = writeln!(
        out,
        "Species: {}",
        detail.species.as_deref().unwrap_or("-")
    );
    let _ = write!(out, "Held items: {}", joined_or(&detail.held_items, "None"));

    out
}

/// Favorites view: name and sprite of each stored Pokémon
pub fn favorites(favorites: &[Pokemon]) -> String {
    if favorites.is_empty() {
        return String::from("No favorite Pokémon yet.");
    }

    favorites
        .iter()
        .map(|pokemon| {
            format!(
                "{:<24} {}",
                capitalize_string(&pokemon.name),
                pokemon.sprite().unwrap_or(NO_IMAGE)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::utils::PaginationAction;

    #[test]
    fn test_page_controls_mark_current_page() {
        let mut paginator = Paginator::new(45);
        paginator.paginate(PaginationAction::Next);

        assert_eq!(page_controls(&paginator), "< Back  1  [2]  3  4  5  Next >");
    }

    #[test]
    fn test_pokemon_line_uses_metres_and_kilograms() {
        let json = r#"{"name": "pikachu", "height": 4, "weight": 60,
                       "types": [{"slot": 1, "type": {"name": "electric"}}]}"#;
        let pikachu: Pokemon = serde_json::from_str(json).unwrap();

        let line = pokemon_line(&pikachu);

        assert!(line.starts_with("Pikachu"));
        assert!(line.contains("electric"));
        assert!(line.ends_with("height 0.4 m  weight 6 kg"));
    }

    #[test]
    fn test_page_controls_for_empty_list() {
        assert_eq!(page_controls(&Paginator::new(0)), "[1]");
    }

    #[test]
    fn test_empty_page_message() {
        assert_eq!(
            catalog_page(&[], &Paginator::new(0)),
            "No Pokémon match the applied filters."
        );
    }

    #[test]
    fn test_detail_placeholders() {
        let text = detail(&PokemonDetail::from(&Pokemon::named("missingno")), false);

        assert!(text.contains("Sprite: No image available"));
        assert!(text.contains("HP: ?"));
        assert!(text.ends_with("Held items: None"));
    }

    #[test]
    fn test_favorites_view() {
        assert_eq!(favorites(&[]), "No favorite Pokémon yet.");
        assert!(favorites(&[Pokemon::named("mew")]).starts_with("Mew"));
    }
}
