//! Data models for the PokeAPI resources used by the Pokedex
//!
//! These structs mirror the subset of the PokeAPI JSON schema the application
//! consumes: paginated location-area listings, the encounter list of a single
//! area, and full creature details.

pub mod client;

pub use client::{ApiClient, ApiError};

use serde::Deserialize;

/// A named API resource with a link to its full record
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    #[allow(dead_code)]
    pub url: String,
}

/// One page of the paginated location-area listing
///
/// `next` and `previous` are fully-qualified URLs for the adjacent pages, or
/// absent at either end of the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationPage {
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Detail record for a single location area, reduced to its encounters
#[derive(Debug, Clone, Deserialize)]
pub struct AreaDetails {
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A single creature that can be encountered in an area
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

/// Full details for a creature
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Base experience yield; drives how hard the creature is to catch
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<StatEntry>,
    pub types: Vec<TypeEntry>,
}

/// One base-stat value (hp, attack, ...) for a creature
#[derive(Debug, Clone, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One type slot (grass, poison, ...) for a creature
#[derive(Debug, Clone, Deserialize)]
pub struct TypeEntry {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_page_deserializes_with_cursors() {
        let json = r#"{
            "count": 1089,
            "next": "https://pokeapi.co/api/v2/location-area/?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;

        let page: LocationPage = serde_json::from_str(json).expect("should deserialize");

        assert!(page.next.is_some());
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_area_details_deserializes_encounters() {
        let json = r#"{
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"}},
                {"pokemon": {"name": "magikarp", "url": "https://pokeapi.co/api/v2/pokemon/129/"}}
            ]
        }"#;

        let area: AreaDetails = serde_json::from_str(json).expect("should deserialize");

        assert_eq!(area.pokemon_encounters.len(), 2);
        assert_eq!(area.pokemon_encounters[1].pokemon.name, "magikarp");
    }

    #[test]
    fn test_pokemon_deserializes_stats_and_types() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
                {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/"}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).expect("should deserialize");

        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience, 112);
        assert_eq!(pokemon.stats[0].stat.name, "hp");
        assert_eq!(pokemon.stats[0].base_stat, 35);
        assert_eq!(pokemon.types[0].type_.name, "electric");
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        // The real API sends far more fields than we model.
        let json = r#"{
            "pokemon_encounters": [],
            "game_index": 1,
            "location": {"name": "canalave-city", "url": "https://pokeapi.co/api/v2/location/1/"}
        }"#;

        let area: AreaDetails = serde_json::from_str(json).expect("should deserialize");

        assert!(area.pokemon_encounters.is_empty());
    }
}
