// 📚 Pet Catalog - fixed, ordered list of pets plus an id index
//
// Built once at startup and never written again. Lookups of unknown ids
// return CatalogError::NotFound instead of panicking.

use crate::data::sample_pets;
use crate::error::CatalogError;
use crate::pet::{Pet, PetId};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct Catalog {
    /// Pets in insertion order
    pets: Vec<Pet>,

    /// id -> position in `pets`
    index: HashMap<PetId, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn from_pets(pets: Vec<Pet>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(pets.len());

        for (position, pet) in pets.iter().enumerate() {
            if index.insert(pet.id, position).is_some() {
                return Err(CatalogError::DuplicateId(pet.id));
            }
        }

        Ok(Catalog { pets, index })
    }

    /// Catalog over the built-in sample dataset
    pub fn builtin() -> Self {
        Self::from_pets(sample_pets()).expect("built-in pet ids are unique")
    }

    /// Parse a JSON array of pets
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let pets: Vec<Pet> = serde_json::from_str(json)?;
        Self::from_pets(pets)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), pets = catalog.len(), "loaded pet dataset");
        Ok(catalog)
    }

    /// All pets in insertion order
    pub fn list(&self) -> &[Pet] {
        &self.pets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Pet> {
        self.pets.iter()
    }

    pub fn by_id(&self, id: PetId) -> Result<&Pet, CatalogError> {
        self.index
            .get(&id)
            .map(|&position| &self.pets[position])
            .ok_or(CatalogError::NotFound(id))
    }

    pub fn contains(&self, id: PetId) -> bool {
        self.index.contains_key(&id)
    }

    /// Position of a pet in list order
    pub fn position(&self, id: PetId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    pub fn len(&self) -> usize {
        self.pets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pets.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Pet;
    type IntoIter = std::slice::Iter<'a, Pet>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
