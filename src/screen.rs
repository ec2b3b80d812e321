// Screen descriptions: a pure function from (route, catalog) to what is shown
//
// Front ends (TUI, HTML, JSON) only ever draw a Screen; they never look at
// the catalog directly.

use crate::catalog::Catalog;
use crate::pet::{Pet, PetId};
use crate::route::Route;
use serde::Serialize;

/// One row of the overview list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetRow {
    pub id: PetId,
    pub icon: String,
    pub name: String,
    pub species: String,
    pub gender: String,
    /// Route opened when the row is activated
    pub route: String,
}

impl From<&Pet> for PetRow {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id,
            icon: pet.icon.clone(),
            name: pet.name.clone(),
            species: pet.species.display_label(),
            gender: pet.gender.as_str().to_string(),
            route: Route::Detail(pet.id).path(),
        }
    }
}

/// Everything the detail screen shows about one pet
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PetDetail {
    pub id: PetId,
    pub icon: String,
    pub name: String,
    /// "Cat" or "Dog"
    pub species: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    /// "Cat" or "Dog (Breed)"
    pub species_label: String,
    pub gender: String,
    pub year_of_birth: u16,
    pub history: String,
}

impl From<&Pet> for PetDetail {
    fn from(pet: &Pet) -> Self {
        Self {
            id: pet.id,
            icon: pet.icon.clone(),
            name: pet.name.clone(),
            species: pet.species.label().to_string(),
            breed: pet.species.breed().map(str::to_string),
            species_label: pet.species.display_label(),
            gender: pet.gender.as_str().to_string(),
            year_of_birth: pet.year_of_birth,
            history: pet.history_summary.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", rename_all = "snake_case")]
pub enum Screen {
    Overview { rows: Vec<PetRow> },
    Detail(PetDetail),
    NotFound { pet_id: PetId },
}

impl Screen {
    pub fn title(&self) -> String {
        match self {
            Screen::Overview { .. } => "Pets".to_string(),
            Screen::Detail(detail) => detail.name.clone(),
            Screen::NotFound { .. } => "Pet not found".to_string(),
        }
    }

    /// Where the back action leads, if the screen has one
    pub fn back_route(&self) -> Option<Route> {
        match self {
            Screen::Overview { .. } => None,
            Screen::Detail(_) | Screen::NotFound { .. } => Some(Route::Overview),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Screen::NotFound { .. })
    }
}

pub fn overview_rows(catalog: &Catalog) -> Vec<PetRow> {
    catalog.into_iter().map(PetRow::from).collect()
}

/// Render a route against the catalog
pub fn render(route: &Route, catalog: &Catalog) -> Screen {
    match route {
        Route::Overview => Screen::Overview {
            rows: overview_rows(catalog),
        },
        Route::Detail(id) => match catalog.by_id(*id) {
            Ok(pet) => Screen::Detail(PetDetail::from(pet)),
            Err(e) => {
                tracing::warn!(pet_id = id, "{}", e);
                Screen::NotFound { pet_id: *id }
            }
        },
    }
}
