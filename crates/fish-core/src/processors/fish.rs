//! Fish table: the entry point of every run

use super::{chunks, FishExtension, Record};
use crate::error::Result;
use crate::locale::Locale;
use crate::model::{Fish, Weather};
use crate::source::{RawTable, RunContext, SourceTable};
use indexmap::IndexMap;
use std::collections::BTreeMap;
use tracing::debug;

pub const FISH_TABLE: &str = "Data/Fish";

/// Aquatic plants that share the fish table but cannot be fished for
pub const EXCLUDED_FISH_IDS: &[&str] = &["152", "153"];

/// Difficulty value of crab pot catches
const TRAP: &str = "trap";

// Field positions
const NAME: usize = 0;
const DIFFICULTY: usize = 1;
const BEHAVIOR: usize = 2;
const MIN_SIZE: usize = 3;
const MAX_SIZE: usize = 4;
const TIME_RANGES: usize = 5;
const WEATHER: usize = 7;
const MAX_DEPTH: usize = 9;
const SPAWN_MULTI: usize = 10;
const DEPTH_MULTI: usize = 11;
const MIN_LEVEL: usize = 12;
const LOCALIZED_NAME: usize = 13;

/// Parsed fish of one run plus the English name index
#[derive(Debug)]
pub struct FishProcessor {
    fish: IndexMap<String, Fish>,
    ids_by_en_name: BTreeMap<String, String>,
}

impl FishProcessor {
    pub fn new(ctx: &RunContext) -> Result<Self> {
        let table: SourceTable = SourceTable::localized(ctx, FISH_TABLE);
        Self::from_raw(table.get()?, ctx.locale)
    }

    /// Build from an already loaded table
    pub fn from_raw(raw: &RawTable, locale: Locale) -> Result<Self> {
        let mut fish = IndexMap::new();
        for (id, value) in raw {
            if let Some(parsed) = parse_fish_value(id, value, locale)? {
                fish.insert(id.clone(), parsed);
            }
        }

        let mut ids_by_en_name = BTreeMap::new();
        for f in fish.values() {
            ids_by_en_name
                .entry(f.en_name.clone())
                .or_insert_with(|| f.id.clone());
        }

        debug!(count = fish.len(), skipped = raw.len() - fish.len(), "parsed fish");
        Ok(Self {
            fish,
            ids_by_en_name,
        })
    }

    /// Whether `id` is a catchable fish of this run
    pub fn contains(&self, id: &str) -> bool {
        self.fish.contains_key(id)
    }

    /// Id of the fish with English name `en_name`
    pub fn id_by_en_name(&self, en_name: &str) -> Option<&str> {
        self.ids_by_en_name.get(en_name).map(String::as_str)
    }

    pub fn get(&self, id: &str) -> Option<&Fish> {
        self.fish.get(id)
    }

    pub fn len(&self) -> usize {
        self.fish.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fish.is_empty()
    }

    /// Run every extension over every fish and hand out the final records
    pub fn extend(mut self, extensions: &[&dyn FishExtension]) -> IndexMap<String, Fish> {
        for fish in self.fish.values_mut() {
            for extension in extensions {
                extension.extend(fish);
            }
        }
        for extension in extensions {
            debug!(relation = extension.name(), "extended fish");
        }
        self.fish
    }
}

/// Parse one fish record; `None` for traps and excluded ids
pub fn parse_fish_value(id: &str, value: &str, locale: Locale) -> Result<Option<Fish>> {
    let record = Record::new(FISH_TABLE, id, value);
    if record.get(DIFFICULTY) == Some(TRAP) || EXCLUDED_FISH_IDS.contains(&id) {
        return Ok(None);
    }
    record.require(MIN_LEVEL + 1)?;

    let en_name = record.field(NAME)?.to_string();
    let name = match record.get(LOCALIZED_NAME) {
        Some(localized) if !locale.is_default() && !localized.is_empty() => localized.to_string(),
        _ => en_name.clone(),
    };

    let time_ranges = chunks(record.field(TIME_RANGES)?, 2)
        .map_err(|e| record.malformed(e))?
        .into_iter()
        .map(|pair| -> Result<(u32, u32)> {
            let start = pair[0].parse().map_err(|_| record.malformed(format!("invalid hour '{}'", pair[0])))?;
            let end = pair[1].parse().map_err(|_| record.malformed(format!("invalid hour '{}'", pair[1])))?;
            Ok((start, end))
        })
        .collect::<Result<Vec<_>>>()?;

    let weather = match record.field(WEATHER)? {
        "both" => vec![Weather::Sunny, Weather::Rainy],
        "sunny" => vec![Weather::Sunny],
        "rainy" => vec![Weather::Rainy],
        other => return Err(record.malformed(format!("invalid weather '{}'", other))),
    };

    Ok(Some(Fish {
        id: id.to_string(),
        en_name,
        name,
        time_ranges,
        weather,
        min_level: record.parse(MIN_LEVEL, "min level")?,
        max_depth: record.parse(MAX_DEPTH, "max depth")?,
        spawn_multi: record.parse(SPAWN_MULTI, "spawn multiplier")?,
        depth_multi: record.parse(DEPTH_MULTI, "depth multiplier")?,
        behavior: record.field(BEHAVIOR)?.to_string(),
        difficulty: record.parse(DIFFICULTY, "difficulty")?,
        size_range: (
            record.parse(MIN_SIZE, "min size")?,
            record.parse(MAX_SIZE, "max size")?,
        ),
        locations: None,
        bundles: None,
        gifts: None,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const SQUID: &str = "Squid/75/sinker/12/48/1800 2600/winter/both/688 .1/3/.35/.1/3";
    const SQUID_RU: &str = "Squid/75/sinker/12/48/1800 2600/winter/both/688 .1/3/.35/.1/3/Кальмар";
    const CATFISH: &str = "Catfish/75/mixed/12/73/600 2400/spring fall/rainy/689 .4 680 .1/4/.4/.1/3";
    const CRAB: &str = "Crab/trap/.1/688 .45 689 .35 690 .35/ocean/1/20";

    fn raw(entries: &[(&str, &str)]) -> RawTable {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_squid() {
        let fish = parse_fish_value("151", SQUID, Locale::English).unwrap().unwrap();

        assert_eq!(fish.en_name, "Squid");
        assert_eq!(fish.name, "Squid");
        assert_eq!(fish.difficulty, 75);
        assert_eq!(fish.behavior, "sinker");
        assert_eq!(fish.size_range, (12, 48));
        assert_eq!(fish.time_ranges, vec![(1800, 2600)]);
        assert_eq!(fish.weather, vec![Weather::Sunny, Weather::Rainy]);
        assert_eq!(fish.max_depth, 3);
        assert_eq!(fish.spawn_multi, 0.35);
        assert_eq!(fish.depth_multi, 0.1);
        assert_eq!(fish.min_level, 3);
    }

    #[test]
    fn test_weather_values() {
        let value = "Sunfish/30/mixed/5/15/600 1900/spring summer/sunny/690 .2 687 .1/3/.45/.1/0";
        let fish = parse_fish_value("145", value, Locale::English).unwrap().unwrap();
        assert_eq!(fish.weather, vec![Weather::Sunny]);

        let value = "Sunfish/30/mixed/5/15/600 1900/spring summer/both/690 .2 687 .1/3/.45/.1/0";
        let fish = parse_fish_value("145", value, Locale::English).unwrap().unwrap();
        assert_eq!(fish.weather, vec![Weather::Sunny, Weather::Rainy]);
    }

    #[test]
    fn test_multiple_time_ranges() {
        let value = "Eel/70/smooth/12/80/1600 2600 600 900/spring fall/rainy/689 .35/3/.55/.1/3";
        let fish = parse_fish_value("148", value, Locale::English).unwrap().unwrap();
        assert_eq!(fish.time_ranges, vec![(1600, 2600), (600, 900)]);
    }

    #[test]
    fn test_localized_name() {
        let fish = parse_fish_value("151", SQUID_RU, Locale::Russian).unwrap().unwrap();
        assert_eq!(fish.name, "Кальмар");
        assert_eq!(fish.en_name, "Squid");
    }

    #[test]
    fn test_missing_localized_name_falls_back() {
        let fish = parse_fish_value("151", SQUID, Locale::Russian).unwrap().unwrap();
        assert_eq!(fish.name, "Squid");
    }

    #[test]
    fn test_default_locale_ignores_extra_field() {
        let fish = parse_fish_value("151", SQUID_RU, Locale::English).unwrap().unwrap();
        assert_eq!(fish.name, "Squid");
    }

    #[test]
    fn test_trap_dropped() {
        assert!(parse_fish_value("717", CRAB, Locale::English).unwrap().is_none());
    }

    #[test]
    fn test_excluded_id_dropped() {
        let seaweed = "Seaweed/5/floater/1/1/600 2600/spring summer fall winter/both/-1/0/.1/0/0";
        assert!(parse_fish_value("152", seaweed, Locale::English).unwrap().is_none());
    }

    #[test]
    fn test_too_few_fields() {
        let err = parse_fish_value("151", "Squid/75/sinker", Locale::English).unwrap_err();
        assert!(matches!(err, Error::MalformedRecord { .. }));
    }

    #[test]
    fn test_invalid_weather() {
        let value = "Squid/75/sinker/12/48/1800 2600/winter/snowy/688 .1/3/.35/.1/3";
        assert!(parse_fish_value("151", value, Locale::English).is_err());
    }

    #[test]
    fn test_odd_time_ranges() {
        let value = "Squid/75/sinker/12/48/1800/winter/both/688 .1/3/.35/.1/3";
        assert!(parse_fish_value("151", value, Locale::English).is_err());
    }

    #[test]
    fn test_processor_index() {
        let table = raw(&[("151", SQUID), ("143", CATFISH), ("717", CRAB)]);
        let processor = FishProcessor::from_raw(&table, Locale::English).unwrap();

        assert_eq!(processor.len(), 2);
        assert!(processor.contains("151"));
        assert!(!processor.contains("717"));
        assert_eq!(processor.id_by_en_name("Catfish"), Some("143"));
        assert_eq!(processor.id_by_en_name("Crab"), None);
    }

    struct Tag;

    impl FishExtension for Tag {
        fn name(&self) -> &'static str {
            "tag"
        }

        fn extend(&self, fish: &mut Fish) {
            fish.behavior = format!("{}!", fish.behavior);
        }
    }

    #[test]
    fn test_extend_runs_every_extension() {
        let table = raw(&[("151", SQUID), ("143", CATFISH)]);
        let processor = FishProcessor::from_raw(&table, Locale::English).unwrap();

        let fish = processor.extend(&[&Tag, &Tag]);
        assert_eq!(fish["151"].behavior, "sinker!!");
        assert_eq!(fish["143"].behavior, "mixed!!");
    }
}
