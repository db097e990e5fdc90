//! Normalized records produced by the processors

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Start and end hour, in the game's `600`..`2600` clock
pub type TimeRange = (u32, u32);

/// Gift preferences of a fish: preference -> characters
pub type Gifts = BTreeMap<PreferenceType, Vec<Character>>;

/// A catchable fish with its cross-referenced relations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fish {
    pub id: String,
    pub en_name: String,
    pub name: String,
    pub time_ranges: Vec<TimeRange>,
    pub weather: Vec<Weather>,
    pub min_level: u32,
    pub max_depth: u32,
    pub spawn_multi: f64,
    pub depth_multi: f64,
    pub behavior: String,
    pub difficulty: u32,
    pub size_range: (u32, u32),
    /// Filled by the location extension
    pub locations: Option<Vec<Location>>,
    /// Filled by the bundle extension
    pub bundles: Option<Vec<Bundle>>,
    /// Filled by the gift extension
    pub gifts: Option<Gifts>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weather {
    Sunny,
    Rainy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub const ALL: [Season; 4] = [Season::Spring, Season::Summer, Season::Fall, Season::Winter];
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Fall => "fall",
            Season::Winter => "winter",
        };
        write!(f, "{}", s)
    }
}

/// A place and season where a fish can be caught
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub key: String,
    /// Concrete variation this record describes
    pub variation: i32,
    /// Variation as encoded in the source (`-1` for any)
    pub variation_orig: i32,
    pub name: String,
    pub season: Season,
}

/// A community bundle that asks for a fish
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bundle {
    pub en_name: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferenceType {
    Loves,
    Likes,
}

/// A villager who loves or likes a fish as a gift
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub key: String,
    pub name: String,
}

/// The per-locale output document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleDocument {
    pub version: String,
    pub lang_code: Option<String>,
    pub language: String,
    /// Fish in source table order
    pub fish: IndexMap<String, Fish>,
}
