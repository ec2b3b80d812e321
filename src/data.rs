// Built-in sample dataset

use crate::pet::{Gender, Pet, Species};

const HISTORY_PLACEHOLDER: &str = "Lorem ipsum dolor sit amet, consetetur sadipscing elitr, sed diam nonumy eirmod tempor invidunt ut labore et dolore magna aliquyam erat, sed diam voluptua. At vero eos et accusam et justo duo dolores et ea rebum. Stet clita kasd gubergren, no sea takimata sanctus est Lorem ipsum dolor sit amet. Lorem ipsum dolor sit amet, consetetur sadipscing elitr, sed diam nonumy eirmod tempor invidunt ut labore et dolore magna aliquyam erat, sed diam voluptua. At vero eos et accusam et justo duo dolores et ea rebum. Stet clita kasd gubergren, no sea takimata sanctus est Lorem ipsum dolor sit amet.";

/// The six pets shipped with the application, ids 0..=5 in display order
pub fn sample_pets() -> Vec<Pet> {
    vec![
        Pet::new(0, "Aaliyah", Species::Cat, Gender::Female, 2001)
            .with_icon("😻")
            .with_history(HISTORY_PLACEHOLDER),
        Pet::new(1, "Max", Species::dog("Beagle"), Gender::Male, 1988)
            .with_icon("🐕")
            .with_history(HISTORY_PLACEHOLDER),
        Pet::new(2, "Rocky", Species::Cat, Gender::Male, 1998)
            .with_icon("🐱")
            .with_history(HISTORY_PLACEHOLDER),
        Pet::new(3, "Tigger", Species::Cat, Gender::Male, 2004)
            .with_icon("🐆")
            .with_history(HISTORY_PLACEHOLDER),
        Pet::new(4, "Mirko", Species::Cat, Gender::Male, 1986)
            .with_icon("🐈")
            .with_history(HISTORY_PLACEHOLDER),
        Pet::new(5, "Maja", Species::dog("Labrador"), Gender::Female, 1996)
            .with_icon("🦮")
            .with_history(HISTORY_PLACEHOLDER),
    ]
}
