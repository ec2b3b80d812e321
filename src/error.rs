// Error types for catalog lookups and route parsing

use crate::pet::PetId;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("pet #{0} not found")]
    NotFound(PetId),

    #[error("duplicate pet id {0}")]
    DuplicateId(PetId),

    #[error("invalid pet dataset: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read pet dataset {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("unknown route: {0}")]
    UnknownPath(String),

    #[error("invalid pet id in route: {0:?}")]
    InvalidPetId(String),
}
