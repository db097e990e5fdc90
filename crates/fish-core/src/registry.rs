//! Per-run set of processors

use crate::error::Result;
use crate::model::Fish;
use crate::processors::{
    BundleProcessor, FishExtension, FishProcessor, GiftProcessor, LocationNames, LocationProcessor,
};
use crate::source::RunContext;
use indexmap::IndexMap;
use tracing::debug;

/// One instance of every processor for a single locale run
///
/// Built in dependency order: the fish index first, then the processors
/// that resolve their references through it.
#[derive(Debug)]
pub struct Registry {
    pub fish: FishProcessor,
    pub locations: LocationProcessor,
    pub bundles: BundleProcessor,
    pub gifts: GiftProcessor,
}

impl Registry {
    pub fn build(ctx: &RunContext) -> Result<Self> {
        let fish = FishProcessor::new(ctx)?;
        debug!(locale = %ctx.locale, fish = fish.len(), "built fish index");

        let location_names = LocationNames::new(ctx);
        let locations = LocationProcessor::new(ctx, &location_names)?;
        let bundles = BundleProcessor::new(ctx, &fish)?;
        let gifts = GiftProcessor::new(ctx, &fish)?;

        Ok(Self {
            fish,
            locations,
            bundles,
            gifts,
        })
    }

    /// Enrich every fish with every relation and return the final records
    pub fn into_fish(self) -> IndexMap<String, Fish> {
        let Registry {
            fish,
            locations,
            bundles,
            gifts,
        } = self;
        let extensions: [&dyn FishExtension; 3] = [&locations, &bundles, &gifts];
        fish.extend(&extensions)
    }
}
