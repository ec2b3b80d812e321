// Pet Adoption - Core Library
// Exposes the catalog, navigation and rendering for the TUI, web server and tests

pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod navigator;
pub mod pet;
pub mod route;
pub mod screen;

#[cfg(feature = "server")]
pub mod html;

#[cfg(feature = "server")]
pub mod server;

#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::Config;
pub use error::{CatalogError, RouteError};
pub use navigator::Navigator;
pub use pet::{Gender, Pet, PetId, Species};
pub use route::Route;
pub use screen::{render, PetDetail, PetRow, Screen};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
