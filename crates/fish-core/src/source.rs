//! Locale-aware loading of JSON source tables

use crate::error::{Error, Result};
use crate::locale::Locale;
use indexmap::IndexMap;
use once_cell::unsync::OnceCell;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Extension of every source table
pub const EXT: &str = "json";

/// The common table shape: record key -> `/`-delimited encoded string, in file order
pub type RawTable = IndexMap<String, String>;

/// Everything a processor needs to know about the run it belongs to
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Directory holding the unpacked game content
    pub source_dir: PathBuf,
    /// Locale of this run
    pub locale: Locale,
}

impl RunContext {
    pub fn new(source_dir: impl Into<PathBuf>, locale: Locale) -> Self {
        Self {
            source_dir: source_dir.into(),
            locale,
        }
    }
}

/// One source table, loaded at most once
///
/// `name` is the table path relative to the source directory without the
/// extension, e.g. `Data/Fish`. Locale-sensitive tables read
/// `Data/Fish.<code>.json` for non-default locales and fall back to the bare
/// file if the translation is not shipped.
#[derive(Debug)]
pub struct SourceTable<T = RawTable> {
    name: &'static str,
    use_locale: bool,
    source_dir: PathBuf,
    locale: Locale,
    cache: OnceCell<T>,
}

impl<T: DeserializeOwned> SourceTable<T> {
    /// A table that has one file per locale
    pub fn localized(ctx: &RunContext, name: &'static str) -> Self {
        Self::new(ctx, name, true)
    }

    /// A table that is the same for every locale
    pub fn shared(ctx: &RunContext, name: &'static str) -> Self {
        Self::new(ctx, name, false)
    }

    fn new(ctx: &RunContext, name: &'static str, use_locale: bool) -> Self {
        Self {
            name,
            use_locale,
            source_dir: ctx.source_dir.clone(),
            locale: ctx.locale,
            cache: OnceCell::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Files to try, most specific first
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut paths = Vec::with_capacity(2);
        if self.use_locale {
            if let Some(code) = self.locale.code() {
                paths.push(table_path(&self.source_dir, self.name, Some(code)));
            }
        }
        paths.push(table_path(&self.source_dir, self.name, None));
        paths
    }

    /// Parsed content of the table, read from disk on first access only
    pub fn get(&self) -> Result<&T> {
        if let Some(data) = self.cache.get() {
            return Ok(data);
        }
        let data = self.read()?;
        Ok(self.cache.get_or_init(|| data))
    }

    fn read(&self) -> Result<T> {
        let candidates = self.candidates();
        for (i, path) in candidates.iter().enumerate() {
            let content = match fs::read_to_string(path) {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => {
                    return Err(Error::FileRead {
                        path: path.clone(),
                        source: e,
                    })
                }
            };

            if i > 0 {
                warn!(
                    table = self.name,
                    locale = %self.locale,
                    "no localized table, using {}",
                    path.display()
                );
            }
            debug!(table = self.name, "loading {}", path.display());

            return serde_json::from_str(&content).map_err(|e| Error::Json {
                path: path.clone(),
                source: e,
            });
        }

        Err(Error::SourceMissing {
            table: self.name.to_string(),
            path: candidates.into_iter().next().unwrap_or_default(),
        })
    }
}

/// Path of a table file for an optional locale code
pub fn table_path(source_dir: &Path, name: &str, code: Option<&str>) -> PathBuf {
    let file_name = match code {
        Some(code) => format!("{}.{}.{}", name, code, EXT),
        None => format!("{}.{}", name, EXT),
    };
    source_dir.join(file_name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, rel: &str, content: &str) {
        let path = dir.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_default_locale_reads_bare_file_only() {
        let dir = TempDir::new().unwrap();
        let ctx = RunContext::new(dir.path(), Locale::English);
        let table: SourceTable = SourceTable::localized(&ctx, "Data/Fish");

        assert_eq!(table.candidates(), vec![dir.path().join("Data/Fish.json")]);
    }

    #[test]
    fn test_localized_file_preferred() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Data/Fish.json", r#"{"128": "Pufferfish"}"#);
        write(dir.path(), "Data/Fish.de-DE.json", r#"{"128": "Kugelfisch"}"#);

        let ctx = RunContext::new(dir.path(), Locale::German);
        let table: SourceTable = SourceTable::localized(&ctx, "Data/Fish");

        assert_eq!(table.get().unwrap()["128"], "Kugelfisch");
    }

    #[test]
    fn test_falls_back_to_bare_file() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Data/Fish.json", r#"{"128": "Pufferfish"}"#);

        let ctx = RunContext::new(dir.path(), Locale::Korean);
        let table: SourceTable = SourceTable::localized(&ctx, "Data/Fish");

        assert_eq!(table.get().unwrap()["128"], "Pufferfish");
    }

    #[test]
    fn test_shared_table_ignores_locale() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Data/Locations.json", r#"{"Beach": "x"}"#);
        write(dir.path(), "Data/Locations.ru-RU.json", r#"{"Beach": "y"}"#);

        let ctx = RunContext::new(dir.path(), Locale::Russian);
        let table: SourceTable = SourceTable::shared(&ctx, "Data/Locations");

        assert_eq!(table.get().unwrap()["Beach"], "x");
    }

    #[test]
    fn test_missing_table() {
        let dir = TempDir::new().unwrap();
        let ctx = RunContext::new(dir.path(), Locale::English);
        let table: SourceTable = SourceTable::localized(&ctx, "Data/Fish");

        match table.get() {
            Err(Error::SourceMissing { table, .. }) => assert_eq!(table, "Data/Fish"),
            other => panic!("expected SourceMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_table_is_read_once() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Data/Fish.json", r#"{"128": "Pufferfish"}"#);

        let ctx = RunContext::new(dir.path(), Locale::English);
        let table: SourceTable = SourceTable::localized(&ctx, "Data/Fish");
        assert_eq!(table.get().unwrap().len(), 1);

        // Changes on disk are not observed once the table is cached
        write(dir.path(), "Data/Fish.json", r#"{}"#);
        assert_eq!(table.get().unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_json() {
        let dir = TempDir::new().unwrap();
        write(dir.path(), "Data/Fish.json", "not json");

        let ctx = RunContext::new(dir.path(), Locale::English);
        let table: SourceTable = SourceTable::localized(&ctx, "Data/Fish");

        assert!(matches!(table.get(), Err(Error::Json { .. })));
    }
}
