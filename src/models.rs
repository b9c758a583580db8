//! Frontend Models
//!
//! Data structures matching the film database API.

use std::fmt;

use serde::Deserialize;

/// Searchable entity category, one per form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Starship,
    Person,
    Vehicle,
}

impl Category {
    /// Fixed enumeration order; submit walks fields in this order
    pub const ALL: [Category; 3] = [Category::Starship, Category::Person, Category::Vehicle];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Starship => "starship",
            Category::Person => "person",
            Category::Vehicle => "vehicle",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Starship => "Starship",
            Category::Person => "Person",
            Category::Vehicle => "Vehicle",
        }
    }

    /// Plural endpoint segment ("person" is irregular)
    pub fn path_segment(&self) -> &'static str {
        match self {
            Category::Starship => "starships",
            Category::Person => "people",
            Category::Vehicle => "vehicles",
        }
    }

    /// Position in `Category::ALL`
    pub(crate) fn index(&self) -> usize {
        match self {
            Category::Starship => 0,
            Category::Person => 1,
            Category::Vehicle => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Film record from the `/films` feed
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Film {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub episode_id: u32,
    #[serde(default)]
    pub opening_crawl: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub producer: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub starships: Vec<String>,
    #[serde(default)]
    pub characters: Vec<String>,
    #[serde(default)]
    pub vehicles: Vec<String>,
    /// Stable identifier, matched against cross-references
    pub url: String,
    /// Highlight flag, local only
    #[serde(skip_deserializing, default)]
    pub marked: bool,
}

/// Paged list envelope: `{ "results": [...] }`
#[derive(Debug, Clone, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

/// A searched entity; only its film cross-references matter here
#[derive(Debug, Clone, Deserialize)]
pub struct CrossReferences {
    #[serde(default)]
    pub films: Vec<String>,
}
