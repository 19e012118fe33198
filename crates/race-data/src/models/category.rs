use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed classification of a race event, used for filtering and display.
///
/// Every provider event-type token maps to exactly one category; see
/// [`crate::taxonomy::classify`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Runs,
    Walks,
    Obstacle,
    Bike,
    Swim,
    Triathlon,
    #[default]
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Runs,
        Category::Walks,
        Category::Obstacle,
        Category::Bike,
        Category::Swim,
        Category::Triathlon,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Runs => "Runs",
            Category::Walks => "Walks",
            Category::Obstacle => "Obstacle",
            Category::Bike => "Bike",
            Category::Swim => "Swim",
            Category::Triathlon => "Triathlon",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
