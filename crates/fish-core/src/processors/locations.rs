//! Where and when each fish spawns

use super::{chunks, FishExtension, LocationNames, Record};
use crate::collect::group;
use crate::error::Result;
use crate::model::{Fish, Location, Season};
use crate::source::{RawTable, RunContext, SourceTable};
use indexmap::IndexMap;
use std::collections::BTreeMap;
use tracing::debug;

pub const LOCATIONS_TABLE: &str = "Data/Locations";

/// The fishing minigame and the scratch location carry no real spawns
pub const EXCLUDED_LOCATIONS: &[&str] = &["fishingGame", "Temp"];

/// Position of the spring field; summer, fall and winter follow it
const FIRST_SEASON: usize = 4;

const NO_FISH: &str = "-1";

/// Fish id -> every location and season it spawns in
#[derive(Debug)]
pub struct LocationProcessor {
    by_fish: BTreeMap<String, Vec<Location>>,
}

impl LocationProcessor {
    pub fn new(ctx: &RunContext, names: &LocationNames) -> Result<Self> {
        let table: SourceTable = SourceTable::shared(ctx, LOCATIONS_TABLE);
        Self::from_raw(table.get()?, names)
    }

    pub fn from_raw(raw: &RawTable, names: &LocationNames) -> Result<Self> {
        let mut pairs = Vec::new();
        for (key, value) in raw {
            if EXCLUDED_LOCATIONS.contains(&key.as_str()) {
                continue;
            }
            for (season, spawns) in parse_location_value(key, value)? {
                for (fish_id, variation_orig) in spawns {
                    for (variation, name) in names.expand(key, variation_orig)? {
                        pairs.push((
                            fish_id.clone(),
                            Location {
                                key: key.clone(),
                                variation,
                                variation_orig,
                                name,
                                season,
                            },
                        ));
                    }
                }
            }
        }

        let by_fish = group(pairs);
        debug!(fish = by_fish.len(), "indexed fish locations");
        Ok(Self { by_fish })
    }

    pub fn locations(&self, fish_id: &str) -> Option<&[Location]> {
        self.by_fish.get(fish_id).map(Vec::as_slice)
    }
}

impl FishExtension for LocationProcessor {
    fn name(&self) -> &'static str {
        "locations"
    }

    fn extend(&self, fish: &mut Fish) {
        if let Some(locations) = self.locations(&fish.id) {
            if !locations.is_empty() {
                fish.locations = Some(locations.to_vec());
            }
        }
    }
}

/// Season -> `(fish id, encoded variation)` spawns of one location record
///
/// Seasons without fish are left out. A fish listed twice in one season keeps
/// its first position and its last variation.
pub fn parse_location_value(key: &str, value: &str) -> Result<Vec<(Season, Vec<(String, i32)>)>> {
    let record = Record::new(LOCATIONS_TABLE, key, value);
    record.require(FIRST_SEASON + Season::ALL.len())?;

    let mut seasons = Vec::new();
    for (offset, season) in Season::ALL.into_iter().enumerate() {
        let raw = record.field(FIRST_SEASON + offset)?;
        if raw.trim() == NO_FISH {
            continue;
        }

        let mut spawns: IndexMap<String, i32> = IndexMap::new();
        for pair in chunks(raw, 2).map_err(|e| record.malformed(e))? {
            let variation = pair[1]
                .parse()
                .map_err(|_| record.malformed(format!("invalid variation '{}'", pair[1])))?;
            spawns.insert(pair[0].to_string(), variation);
        }

        if !spawns.is_empty() {
            seasons.push((season, spawns.into_iter().collect()));
        }
    }
    Ok(seasons)
}
