//! Entity processors
//!
//! Each processor reads one or more source tables for the active locale and
//! builds typed records from the `/`-delimited encoded strings. Processors
//! that contribute a relation to fish records implement [`FishExtension`].

pub mod bundles;
pub mod fish;
pub mod gifts;
pub mod location_names;
pub mod locations;

use crate::error::{Error, Result};
use crate::model::Fish;
use std::str::FromStr;

pub use bundles::BundleProcessor;
pub use fish::FishProcessor;
pub use gifts::GiftProcessor;
pub use location_names::LocationNames;
pub use locations::LocationProcessor;

/// A processor that attaches a derived relation to fish records
pub trait FishExtension {
    /// Name of the relation, for logging
    fn name(&self) -> &'static str;

    /// Attach this processor's relation to `fish`, if it has one
    fn extend(&self, fish: &mut Fish);
}

/// A `/`-delimited record from a source table
pub(crate) struct Record<'a> {
    table: &'static str,
    key: &'a str,
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    pub(crate) fn new(table: &'static str, key: &'a str, value: &'a str) -> Self {
        Self {
            table,
            key,
            fields: value.split('/').collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.fields.len()
    }

    pub(crate) fn get(&self, index: usize) -> Option<&'a str> {
        self.fields.get(index).copied()
    }

    pub(crate) fn last(&self) -> &'a str {
        self.fields.last().copied().unwrap_or_default()
    }

    /// Fail unless the record has at least `count` fields
    pub(crate) fn require(&self, count: usize) -> Result<()> {
        if self.fields.len() < count {
            return Err(self.malformed(format!(
                "expected at least {} fields, found {}",
                count,
                self.fields.len()
            )));
        }
        Ok(())
    }

    pub(crate) fn field(&self, index: usize) -> Result<&'a str> {
        self.get(index)
            .ok_or_else(|| self.malformed(format!("missing field {}", index)))
    }

    /// Parse field `index` as a number
    pub(crate) fn parse<T: FromStr>(&self, index: usize, what: &str) -> Result<T> {
        let raw = self.field(index)?;
        raw.trim()
            .parse()
            .map_err(|_| self.malformed(format!("invalid {} '{}'", what, raw)))
    }

    pub(crate) fn malformed(&self, message: impl Into<String>) -> Error {
        Error::malformed(self.table, self.key, message)
    }
}

/// Split a space-separated list into fixed-size groups
pub(crate) fn chunks<'a>(value: &'a str, size: usize) -> std::result::Result<Vec<Vec<&'a str>>, String> {
    let items: Vec<&str> = value.split_whitespace().collect();
    if items.len() % size != 0 {
        return Err(format!(
            "'{}' does not split into groups of {}",
            value, size
        ));
    }
    Ok(items.chunks(size).map(|c| c.to_vec()).collect())
}
