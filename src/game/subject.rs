//! The creature record being guessed.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Label used when the catalog omits a generation or color.
pub const UNKNOWN_LABEL: &str = "unknown";

/// Species description used when no English entry exists.
pub const UNKNOWN_GENUS: &str = "Unknown Pokémon";

/// A creature fetched from the catalog. Never mutated once bound to a session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Subject {
    /// Catalog identifier.
    id: u32,
    /// Canonical catalog name (e.g. `ho-oh`).
    name: String,
    /// Types in provider slot order.
    categories: Vec<String>,
    /// Generation label such as `generation-iii`.
    generation: String,
    /// Color label such as `yellow`.
    color: String,
    /// English species description such as `Mouse Pokémon`.
    genus: String,
    /// Front-facing sprite URL.
    image: Option<String>,
    /// Cry audio URL. The catalog adapter never fills this in.
    audio: Option<String>,
}

impl Subject {
    /// Creates a subject. Empty labels fall back to their defaults.
    pub fn new(
        id: u32,
        name: impl Into<String>,
        categories: Vec<String>,
        generation: Option<String>,
        color: Option<String>,
        genus: Option<String>,
        image: Option<String>,
    ) -> Self {
        let or_default = |value: Option<String>, default: &str| {
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };
        Self {
            id,
            name: name.into(),
            categories,
            generation: or_default(generation, UNKNOWN_LABEL),
            color: or_default(color, UNKNOWN_LABEL),
            genus: or_default(genus, UNKNOWN_GENUS),
            image,
            audio: None,
        }
    }

    /// Name as shown to the player (`pikachu` becomes `Pikachu`).
    pub fn display_name(&self) -> String {
        display_case(&self.name)
    }
}

/// Upper-cases the first character, leaving the rest untouched.
pub fn display_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
