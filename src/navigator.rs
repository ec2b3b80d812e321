// 🧭 Navigator - two-state navigation over the catalog
//
// Overview --open(id)--> Detail(id) --back()--> Overview
//
// The catalog is handed in at construction; every transition re-renders
// the current route into a Screen.

use crate::catalog::Catalog;
use crate::pet::PetId;
use crate::route::Route;
use crate::screen::{render, Screen};
use std::sync::Arc;

pub struct Navigator {
    catalog: Arc<Catalog>,
    current: Route,
    screen: Screen,
}

impl Navigator {
    /// Start on the Overview route
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::at(catalog, Route::Overview)
    }

    /// Start on a given route
    pub fn at(catalog: Arc<Catalog>, route: Route) -> Self {
        let screen = render(&route, &catalog);
        Self {
            catalog,
            current: route,
            screen,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn route(&self) -> Route {
        self.current
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Activate the row for `id`. Only valid from Overview; a missing id
    /// lands on the NotFound screen.
    pub fn open(&mut self, id: PetId) -> &Screen {
        match self.current {
            Route::Overview => self.navigate(Route::Detail(id)),
            Route::Detail(current) => {
                tracing::debug!(current, requested = id, "open ignored outside overview");
                &self.screen
            }
        }
    }

    /// Return to Overview. No-op when already there.
    pub fn back(&mut self) -> &Screen {
        match self.current {
            Route::Overview => &self.screen,
            Route::Detail(_) => self.navigate(Route::Overview),
        }
    }

    /// Jump straight to a route
    pub fn navigate(&mut self, route: Route) -> &Screen {
        tracing::debug!(from = %self.current, to = %route, "navigate");
        self.current = route;
        self.screen = render(&route, &self.catalog);
        &self.screen
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pet::{Gender, Pet, Species};

    fn example_catalog() -> Arc<Catalog> {
        Arc::new(
            Catalog::from_pets(vec![
                Pet::new(0, "Aaliyah", Species::Cat, Gender::Female, 2001),
                Pet::new(1, "Max", Species::dog("Beagle"), Gender::Male, 1988),
            ])
            .unwrap(),
        )
    }

    #[test]
    fn test_starts_on_overview() {
        let nav = Navigator::new(example_catalog());

        assert_eq!(nav.route(), Route::Overview);
        assert!(matches!(nav.screen(), Screen::Overview { rows } if rows.len() == 2));
    }

    #[test]
    fn test_open_detail() {
        let mut nav = Navigator::new(example_catalog());

        let screen = nav.open(1).clone();
        assert_eq!(nav.route(), Route::Detail(1));

        let Screen::Detail(detail) = screen else {
            panic!("expected detail screen");
        };
        assert_eq!(detail.name, "Max");
        assert_eq!(detail.species, "Dog");
        assert_eq!(detail.breed.as_deref(), Some("Beagle"));
        assert_eq!(detail.gender, "Male");
        assert_eq!(detail.year_of_birth, 1988);
    }

    #[test]
    fn test_open_missing_pet_is_recoverable() {
        let mut nav = Navigator::new(example_catalog());

        assert_eq!(nav.open(99), &Screen::NotFound { pet_id: 99 });
        assert_eq!(nav.route(), Route::Detail(99));

        nav.back();
        assert_eq!(nav.route(), Route::Overview);
    }

    #[test]
    fn test_back_is_idempotent() {
        let mut nav = Navigator::new(example_catalog());
        let initial = nav.screen().clone();

        nav.open(0);
        assert_eq!(nav.back(), &initial);
        assert_eq!(nav.back(), &initial);
        assert_eq!(nav.route(), Route::Overview);
    }

    #[test]
    fn test_open_ignored_on_detail() {
        let mut nav = Navigator::new(example_catalog());

        nav.open(0);
        nav.open(1);
        assert_eq!(nav.route(), Route::Detail(0));
    }

    #[test]
    fn test_navigate_directly() {
        let catalog = example_catalog();
        let mut nav = Navigator::at(catalog.clone(), Route::Detail(1));
        assert!(matches!(nav.screen(), Screen::Detail(d) if d.name == "Max"));

        nav.navigate(Route::Detail(0));
        assert!(matches!(nav.screen(), Screen::Detail(d) if d.name == "Aaliyah"));
        assert_eq!(nav.catalog().len(), 2);
    }
}
