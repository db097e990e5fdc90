//! Villagers who love or like a fish as a gift

use super::{FishExtension, FishProcessor, Record};
use crate::collect::group_nested;
use crate::error::Result;
use crate::model::{Character, Fish, Gifts, PreferenceType};
use crate::source::{RawTable, RunContext, SourceTable};
use std::collections::BTreeMap;
use tracing::{debug, warn};

pub const GIFT_TASTES_TABLE: &str = "Data/NPCGiftTastes";
pub const DISPOSITIONS_TABLE: &str = "Data/NPCDispositions";

/// Gift taste keys that are not villagers
pub const SKIP_PREFIXES: &[&str] = &["Universal_"];

/// Field holding the item ids of each preference
const PREFERENCE_FIELDS: [(PreferenceType, usize); 2] =
    [(PreferenceType::Loves, 1), (PreferenceType::Likes, 3)];

/// Fish id -> preference -> characters
#[derive(Debug)]
pub struct GiftProcessor {
    by_fish: BTreeMap<String, Gifts>,
}

impl GiftProcessor {
    pub fn new(ctx: &RunContext, fish: &FishProcessor) -> Result<Self> {
        let tastes: SourceTable = SourceTable::localized(ctx, GIFT_TASTES_TABLE);
        let dispositions: SourceTable = SourceTable::localized(ctx, DISPOSITIONS_TABLE);
        Self::from_raw(tastes.get()?, dispositions.get()?, fish)
    }

    pub fn from_raw(tastes: &RawTable, dispositions: &RawTable, fish: &FishProcessor) -> Result<Self> {
        let mut triples = Vec::new();
        for (key, value) in tastes {
            if should_skip(key) {
                continue;
            }
            let preferences = parse_character_value(key, value, fish)?;
            if preferences.is_empty() {
                continue;
            }

            let character = Character {
                key: key.clone(),
                name: character_name(dispositions, key),
            };
            for (preference, fish_ids) in preferences {
                for fish_id in fish_ids {
                    triples.push((fish_id, (preference, character.clone())));
                }
            }
        }

        let by_fish = group_nested(triples);
        debug!(fish = by_fish.len(), "indexed fish gift tastes");
        Ok(Self { by_fish })
    }

    pub fn gifts(&self, fish_id: &str) -> Option<&Gifts> {
        self.by_fish.get(fish_id)
    }
}

impl FishExtension for GiftProcessor {
    fn name(&self) -> &'static str {
        "gifts"
    }

    fn extend(&self, fish: &mut Fish) {
        if let Some(gifts) = self.gifts(&fish.id) {
            if !gifts.is_empty() {
                fish.gifts = Some(gifts.clone());
            }
        }
    }
}

fn should_skip(character_key: &str) -> bool {
    SKIP_PREFIXES
        .iter()
        .any(|prefix| character_key.starts_with(prefix))
}

/// Display name of a villager: the last field of its disposition record
fn character_name(dispositions: &RawTable, character_key: &str) -> String {
    match dispositions.get(character_key) {
        Some(value) => value.rsplit('/').next().unwrap_or(character_key).to_string(),
        None => {
            warn!(character = character_key, "no disposition record, using the key as name");
            character_key.to_string()
        }
    }
}

/// Fish a villager loves and likes, leaving out empty preferences
pub fn parse_character_value(
    key: &str,
    value: &str,
    fish: &FishProcessor,
) -> Result<Vec<(PreferenceType, Vec<String>)>> {
    let record = Record::new(GIFT_TASTES_TABLE, key, value);
    record.require(PREFERENCE_FIELDS[1].1 + 1)?;

    let mut preferences = Vec::new();
    for (preference, index) in PREFERENCE_FIELDS {
        let fish_ids: Vec<String> = record
            .field(index)?
            .split_whitespace()
            .filter(|id| fish.contains(id))
            .map(str::to_string)
            .collect();
        if !fish_ids.is_empty() {
            preferences.push((preference, fish_ids));
        }
    }
    Ok(preferences)
}
