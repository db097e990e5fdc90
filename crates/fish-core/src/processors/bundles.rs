//! Community bundles that ask for fish
//!
//! Two tables describe bundles: the base `Data/Bundles` table and the
//! `Data/RandomBundles` table used by remixed bundles. Bundles are identified
//! by English name; when both tables define the same bundle, the base one is
//! kept and the remixed one is discarded along with its item list.

use super::{chunks, FishExtension, FishProcessor, Record};
use crate::collect::{dedup_by, group_dedup};
use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::model::{Bundle, Fish};
use crate::source::{RawTable, RunContext, SourceTable};
use serde::Deserialize;
use std::collections::BTreeMap;
use tracing::debug;

pub const BUNDLES_TABLE: &str = "Data/Bundles";
pub const REMIXED_BUNDLES_TABLE: &str = "Data/RandomBundles";
pub const BUNDLE_NAMES_TABLE: &str = "Strings/BundleNames";

const NAME: usize = 0;
const ITEMS: usize = 2;
/// Name, reward, items and color; a localized name comes after them
const BASE_FIELDS: usize = 4;

/// One area of the remixed bundle table
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemixedArea {
    #[serde(default)]
    pub bundle_sets: Vec<RemixedBundleSet>,
    #[serde(default)]
    pub bundles: Vec<RemixedBundle>,
}

impl RemixedArea {
    /// Bundles of every set, then the area's own bundles
    pub fn all_bundles(&self) -> impl Iterator<Item = &RemixedBundle> {
        self.bundle_sets
            .iter()
            .flat_map(|set| set.bundles.iter())
            .chain(self.bundles.iter())
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemixedBundleSet {
    #[serde(default)]
    pub bundles: Vec<RemixedBundle>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RemixedBundle {
    pub name: String,
    /// `"<count> <English name>"` entries separated by commas
    #[serde(default)]
    pub items: String,
}

/// A bundle together with the fish it asks for
#[derive(Debug, Clone, PartialEq)]
pub struct BundleEntry {
    pub bundle: Bundle,
    pub fish_ids: Vec<String>,
}

/// Fish id -> bundles asking for it
#[derive(Debug)]
pub struct BundleProcessor {
    by_fish: BTreeMap<String, Vec<Bundle>>,
}

impl BundleProcessor {
    pub fn new(ctx: &RunContext, fish: &FishProcessor) -> Result<Self> {
        let base_table: SourceTable = SourceTable::localized(ctx, BUNDLES_TABLE);
        let remixed_table: SourceTable<Vec<RemixedArea>> =
            SourceTable::shared(ctx, REMIXED_BUNDLES_TABLE);
        let names_table: SourceTable = SourceTable::localized(ctx, BUNDLE_NAMES_TABLE);

        let base = parse_base_bundles(base_table.get()?, ctx.locale, fish)?;
        let remixed = parse_remixed_bundles(remixed_table.get()?, names_table.get()?, fish)?;
        Ok(Self::from_entries(base, remixed))
    }

    /// Combine base and remixed bundles; the first bundle with a given
    /// English name wins
    pub fn from_entries(base: Vec<BundleEntry>, remixed: Vec<BundleEntry>) -> Self {
        let entries = dedup_by(base.into_iter().chain(remixed), |e| {
            e.bundle.en_name.clone()
        });

        let pairs = entries.iter().flat_map(|entry| {
            entry
                .fish_ids
                .iter()
                .map(move |id| (id.clone(), entry.bundle.clone()))
        });
        let by_fish = group_dedup(pairs, |b| b.en_name.clone());

        debug!(bundles = entries.len(), fish = by_fish.len(), "indexed fish bundles");
        Self { by_fish }
    }

    pub fn bundles(&self, fish_id: &str) -> Option<&[Bundle]> {
        self.by_fish.get(fish_id).map(Vec::as_slice)
    }
}

impl FishExtension for BundleProcessor {
    fn name(&self) -> &'static str {
        "bundles"
    }

    fn extend(&self, fish: &mut Fish) {
        if let Some(bundles) = self.bundles(&fish.id) {
            if !bundles.is_empty() {
                fish.bundles = Some(bundles.to_vec());
            }
        }
    }
}

pub fn parse_base_bundles(
    raw: &RawTable,
    locale: Locale,
    fish: &FishProcessor,
) -> Result<Vec<BundleEntry>> {
    raw.iter()
        .map(|(key, value)| parse_base_bundle_value(key, value, locale, fish))
        .collect()
}

/// Parse one `area/index` -> `name/reward/items/color/.../localized name` record
pub fn parse_base_bundle_value(
    key: &str,
    value: &str,
    locale: Locale,
    fish: &FishProcessor,
) -> Result<BundleEntry> {
    let record = Record::new(BUNDLES_TABLE, key, value);
    if key.split('/').count() != 2 {
        return Err(record.malformed("expected an 'area/index' key"));
    }
    record.require(BASE_FIELDS)?;

    let en_name = record.field(NAME)?.to_string();
    let localized = record.last();
    let name = if !locale.is_default() && record.len() > BASE_FIELDS && !localized.is_empty() {
        localized.to_string()
    } else {
        en_name.clone()
    };

    // id, quantity, quality
    let fish_ids = chunks(record.field(ITEMS)?, 3)
        .map_err(|e| record.malformed(e))?
        .into_iter()
        .map(|item| item[0])
        .filter(|id| fish.contains(id))
        .map(str::to_string)
        .collect();

    Ok(BundleEntry {
        bundle: Bundle {
            en_name,
            name: Some(name),
        },
        fish_ids,
    })
}

pub fn parse_remixed_bundles(
    areas: &[RemixedArea],
    names: &RawTable,
    fish: &FishProcessor,
) -> Result<Vec<BundleEntry>> {
    let mut entries = Vec::new();
    for area in areas {
        for bundle in area.all_bundles() {
            entries.push(BundleEntry {
                bundle: Bundle {
                    en_name: bundle.name.clone(),
                    name: names.get(&bundle.name).cloned(),
                },
                fish_ids: parse_remixed_items(&bundle.name, &bundle.items, fish)?,
            });
        }
    }
    Ok(entries)
}

/// Resolve `"<count> <English name>"` items to fish ids, skipping non-fish
pub fn parse_remixed_items(bundle: &str, items: &str, fish: &FishProcessor) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    for item in items.split(',').map(str::trim).filter(|i| !i.is_empty()) {
        let (_count, en_name) = item.split_once(' ').ok_or_else(|| {
            Error::malformed(
                REMIXED_BUNDLES_TABLE,
                bundle,
                format!("item '{}' has no count", item),
            )
        })?;
        match fish.id_by_en_name(en_name.trim()) {
            Some(id) => ids.push(id.to_string()),
            None => debug!(bundle, item = en_name, "bundle item is not a fish"),
        }
    }
    Ok(ids)
}
