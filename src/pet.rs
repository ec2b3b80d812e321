// 🐾 Pet Entity - immutable record shown on both screens
//
// A Pet never changes after the catalog is built. The only polymorphism is
// the species: a closed sum type with a pure label function per case.

use serde::{Deserialize, Serialize};

/// Stable identifier of a pet inside one catalog
pub type PetId = u64;

/// Glyph used when a record does not carry its own icon
pub const DEFAULT_ICON: &str = "🐾";

// ============================================================================
// SPECIES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Species {
    Cat,

    /// Dogs additionally carry their breed
    Dog { breed: String },
}

impl Species {
    pub fn dog(breed: impl Into<String>) -> Self {
        Species::Dog {
            breed: breed.into(),
        }
    }

    /// Short label: "Cat" or "Dog"
    pub fn label(&self) -> &'static str {
        match self {
            Species::Cat => "Cat",
            Species::Dog { .. } => "Dog",
        }
    }

    pub fn breed(&self) -> Option<&str> {
        match self {
            Species::Cat => None,
            Species::Dog { breed } if breed.is_empty() => None,
            Species::Dog { breed } => Some(breed.as_str()),
        }
    }

    /// Label including the breed, e.g. "Dog (Beagle)"
    pub fn display_label(&self) -> String {
        match self {
            Species::Cat => "Cat".to_string(),
            Species::Dog { breed } if breed.is_empty() => "Dog".to_string(),
            Species::Dog { breed } => format!("Dog ({})", breed),
        }
    }
}

// ============================================================================
// GENDER
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
    Diverse,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::Diverse => "Diverse",
        }
    }
}

// ============================================================================
// PET
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pet {
    pub id: PetId,

    #[serde(default = "default_icon")]
    pub icon: String,

    pub name: String,
    pub species: Species,
    pub gender: Gender,
    pub year_of_birth: u16,

    /// Free text, may be empty
    #[serde(default)]
    pub history_summary: String,
}

fn default_icon() -> String {
    DEFAULT_ICON.to_string()
}

impl Pet {
    /// Create a pet with the default icon and an empty history
    pub fn new(
        id: PetId,
        name: impl Into<String>,
        species: Species,
        gender: Gender,
        year_of_birth: u16,
    ) -> Self {
        Pet {
            id,
            icon: default_icon(),
            name: name.into(),
            species,
            gender,
            year_of_birth,
            history_summary: String::new(),
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_history(mut self, history_summary: impl Into<String>) -> Self {
        self.history_summary = history_summary.into();
        self
    }
}
