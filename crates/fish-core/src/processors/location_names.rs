//! Display names of fishing locations and their sub-areas

use crate::error::{Error, Result};
use crate::locale::{Locale, Translatable};
use crate::source::{RunContext, SourceTable};
use tracing::warn;

pub const STRINGS_TABLE: &str = "Strings/StringsFromCSFiles";

/// Encoded variation meaning "every variation of the location"
pub const ANY_VARIATION: i32 = -1;

/// Location key -> (strings table key, extra text appended to it)
///
/// Without a strings key the extra text is the whole name.
const LOCATION_NAMES: &[(&str, Option<&str>, Translatable)] = &[
    ("UndergroundMine", Some("MapPage.cs.11098"), Translatable::Absent),
    ("Desert", Some("MapPage.cs.11062"), Translatable::Absent),
    ("Forest", Some("MapPage.cs.11186"), Translatable::Absent),
    ("Town", Some("MapPage.cs.11190"), Translatable::Absent),
    ("Mountain", Some("MapPage.cs.11177"), Translatable::Absent),
    ("Backwoods", Some("MapPage.cs.11180"), Translatable::Absent),
    ("Beach", Some("MapPage.cs.11174"), Translatable::Absent),
    ("Woods", Some("MapPage.cs.11114"), Translatable::Absent),
    ("Sewer", Some("MapPage.cs.11089"), Translatable::Absent),
    ("BugLand", None, BUG_LAIR),
    ("WitchSwamp", None, WITCH_SWAMP),
    ("IslandNorth", Some("IslandName"), NORTH),
    ("IslandSouth", Some("IslandName"), SOUTH),
    ("IslandWest", Some("IslandName"), WEST),
    ("IslandSouthEast", Some("IslandName"), SOUTHEAST),
    ("IslandSouthEastCave", None, PIRATE_COVE),
    ("IslandSecret", Some("IslandName"), SECRET),
];

/// Location key -> numbered sub-areas
const VARIATIONS: &[(&str, &[(i32, Translatable)])] = &[
    ("Forest", &[(0, RIVER), (1, POND)]),
    ("IslandWest", &[(1, OCEAN), (2, FRESHWATER)]),
];

const BUG_LAIR: Translatable = Translatable::Localized(&[
    (Locale::English, "Mutant Bug Lair"),
    (Locale::Russian, "Логово жуков-мутантов"),
    (Locale::German, "Mutantenkäfer-Höhle"),
]);
const WITCH_SWAMP: Translatable = Translatable::Localized(&[
    (Locale::English, "Witch's Swamp"),
    (Locale::Russian, "Болото ведьмы"),
    (Locale::German, "Hexensumpf"),
]);
const PIRATE_COVE: Translatable = Translatable::Localized(&[
    (Locale::English, "Pirate Cove"),
    (Locale::Russian, "Пиратская бухта"),
    (Locale::German, "Piratenbucht"),
]);
const NORTH: Translatable = Translatable::Localized(&[
    (Locale::English, "north"),
    (Locale::Russian, "север"),
    (Locale::German, "Nord"),
]);
const SOUTH: Translatable = Translatable::Localized(&[
    (Locale::English, "south"),
    (Locale::Russian, "юг"),
    (Locale::German, "Süd"),
]);
const WEST: Translatable = Translatable::Localized(&[
    (Locale::English, "west"),
    (Locale::Russian, "запад"),
    (Locale::German, "West"),
]);
const SOUTHEAST: Translatable = Translatable::Localized(&[
    (Locale::English, "southeast"),
    (Locale::Russian, "юго-восток"),
    (Locale::German, "Südost"),
]);
const SECRET: Translatable = Translatable::Localized(&[
    (Locale::English, "secret location"),
    (Locale::Russian, "тайное место"),
    (Locale::German, "geheimer Ort"),
]);
const RIVER: Translatable = Translatable::Localized(&[
    (Locale::English, "river"),
    (Locale::Russian, "река"),
    (Locale::German, "Fluss"),
]);
const POND: Translatable = Translatable::Localized(&[
    (Locale::English, "pond"),
    (Locale::Russian, "пруд"),
    (Locale::German, "Teich"),
]);
const OCEAN: Translatable = Translatable::Localized(&[
    (Locale::English, "ocean"),
    (Locale::Russian, "океан"),
    (Locale::German, "Meer"),
]);
const FRESHWATER: Translatable = Translatable::Localized(&[
    (Locale::English, "freshwater"),
    (Locale::Russian, "пресная вода"),
    (Locale::German, "Süßwasser"),
]);

/// Resolves `(location key, variation)` pairs into display names
#[derive(Debug)]
pub struct LocationNames {
    locale: Locale,
    strings: SourceTable,
}

impl LocationNames {
    pub fn new(ctx: &RunContext) -> Self {
        Self {
            locale: ctx.locale,
            strings: SourceTable::localized(ctx, STRINGS_TABLE),
        }
    }

    /// Declared sub-areas of a location, empty if it has none
    pub fn variations(location_key: &str) -> &'static [(i32, Translatable)] {
        VARIATIONS
            .iter()
            .find(|(key, _)| *key == location_key)
            .map(|(_, variations)| *variations)
            .unwrap_or(&[])
    }

    /// Name of the location as a whole
    pub fn base_name(&self, location_key: &str) -> Result<String> {
        let Some((_, string_key, extra)) = LOCATION_NAMES
            .iter()
            .find(|(key, _, _)| *key == location_key)
        else {
            warn!(location = location_key, "no display name for location, using its key");
            return Ok(location_key.to_string());
        };
        let extra = extra.translate(self.locale);

        let Some(string_key) = string_key else {
            return Ok(extra.unwrap_or(location_key).to_string());
        };
        let base = self.strings.get()?.get(*string_key).ok_or_else(|| {
            Error::malformed(
                STRINGS_TABLE,
                *string_key,
                format!("missing name of location '{}'", location_key),
            )
        })?;

        Ok(match extra {
            Some(extra) => format!("{} {}", base, extra),
            None => base.clone(),
        })
    }

    /// Name of one concrete variation; the variation is ignored for
    /// locations without sub-areas
    pub fn name(&self, location_key: &str, variation: i32) -> Result<String> {
        let base = self.base_name(location_key)?;
        let variations = Self::variations(location_key);
        if variations.is_empty() {
            return Ok(base);
        }

        let variation_name = variations
            .iter()
            .find(|(v, _)| *v == variation)
            .and_then(|(_, name)| name.translate(self.locale))
            .ok_or_else(|| {
                Error::malformed(
                    super::locations::LOCATIONS_TABLE,
                    location_key,
                    format!("unknown variation {}", variation),
                )
            })?;
        Ok(format!("{} ({})", base, variation_name))
    }

    /// Concrete `(variation, name)` pairs an encoded variation stands for
    pub fn expand(&self, location_key: &str, variation_orig: i32) -> Result<Vec<(i32, String)>> {
        let variations = Self::variations(location_key);
        if variation_orig != ANY_VARIATION || variations.is_empty() {
            return Ok(vec![(variation_orig, self.name(location_key, variation_orig)?)]);
        }

        variations
            .iter()
            .map(|(variation, _)| Ok((*variation, self.name(location_key, *variation)?)))
            .collect()
    }
}
