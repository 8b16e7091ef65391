//! JSON shapes returned by the catalog service.
//!
//! Only the fields the game reads are modelled; everything optional
//! defaults instead of failing deserialization.

use crate::game::Subject;
use serde::Deserialize;

/// A `{ "name": ..., "url": ... }` reference.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct NamedResource {
    /// Resource name.
    #[serde(default)]
    pub name: Option<String>,
}

/// One entry of the `types` array.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct TypeSlot {
    /// Provider-assigned rank, 1 is primary.
    #[serde(default)]
    pub slot: u32,
    /// The type itself.
    #[serde(rename = "type", default)]
    pub kind: NamedResource,
}

/// Sprite URLs.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct Sprites {
    /// Default front-facing sprite.
    #[serde(default)]
    pub front_default: Option<String>,
}

/// Response of `GET /pokemon/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct PokemonResponse {
    /// Catalog identifier.
    pub id: u32,
    /// Canonical name.
    pub name: String,
    /// Types, in arbitrary order.
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    /// Sprite URLs.
    #[serde(default)]
    pub sprites: Sprites,
}

/// One localized species description.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Genus {
    /// Description text.
    #[serde(default)]
    pub genus: String,
    /// Locale of `genus`.
    #[serde(default)]
    pub language: NamedResource,
}

/// Response of `GET /pokemon-species/{id}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct SpeciesResponse {
    /// Generation reference (`generation-iii`).
    #[serde(default)]
    pub generation: Option<NamedResource>,
    /// Color reference (`yellow`).
    #[serde(default)]
    pub color: Option<NamedResource>,
    /// Localized species descriptions.
    #[serde(default)]
    pub genera: Vec<Genus>,
}

/// Locale tag of the species description we show.
pub const GENUS_LOCALE: &str = "en";

impl SpeciesResponse {
    /// The description in [`GENUS_LOCALE`], if present.
    pub fn english_genus(&self) -> Option<String> {
        self.genera
            .iter()
            .find(|g| g.language.name.as_deref() == Some(GENUS_LOCALE))
            .map(|g| g.genus.clone())
    }
}

/// Merges both retrievals into a [`Subject`].
pub(crate) fn into_subject(pokemon: PokemonResponse, species: SpeciesResponse) -> Subject {
    let mut types = pokemon.types;
    types.sort_by_key(|t| t.slot);
    let categories = types.into_iter().filter_map(|t| t.kind.name).collect();

    let genus = species.english_genus();
    Subject::new(
        pokemon.id,
        pokemon.name,
        categories,
        species.generation.and_then(|g| g.name),
        species.color.and_then(|c| c.name),
        genus,
        pokemon.sprites.front_default,
    )
}
