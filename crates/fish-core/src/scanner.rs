//! Source directory scanner for discovering tables and their translations

use crate::error::Result;
use crate::locale::Locale;
use crate::source::EXT;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// All files of one table: the default file and its translations
#[derive(Debug, Clone)]
pub struct SourceFamily {
    /// Table name relative to the root, e.g. "Data/Fish"
    pub name: String,
    /// Members, default locale first, then by locale
    pub members: Vec<SourceMember>,
}

impl SourceFamily {
    pub fn has_locale(&self, locale: Locale) -> bool {
        self.members.iter().any(|m| m.locale == locale)
    }

    /// Supported locales without a file of their own
    pub fn missing_locales(&self) -> Vec<Locale> {
        Locale::ALL
            .into_iter()
            .filter(|l| !self.has_locale(*l))
            .collect()
    }
}

/// A single table file
#[derive(Debug, Clone)]
pub struct SourceMember {
    pub path: PathBuf,
    pub locale: Locale,
}

/// Result of scanning a source directory
#[derive(Debug, Clone)]
pub struct ScanResult {
    pub root: PathBuf,
    /// Discovered tables, sorted by name
    pub families: Vec<SourceFamily>,
    pub total_files: usize,
}

impl ScanResult {
    pub fn find_family(&self, name: &str) -> Option<&SourceFamily> {
        self.families.iter().find(|f| f.name == name)
    }
}

/// Scan a directory for JSON tables and group them by table name
pub fn scan_source<P: AsRef<Path>>(root: P) -> Result<ScanResult> {
    let root = root.as_ref();
    let mut file_map: BTreeMap<String, Vec<SourceMember>> = BTreeMap::new();
    let mut total_files = 0;

    for entry in WalkDir::new(root).follow_links(true) {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type().is_file() || path.extension().map_or(true, |ext| ext != EXT) {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path).with_extension("");
        let relative = relative.to_string_lossy().replace('\\', "/");
        let (name, locale) = extract_table_info(&relative);

        file_map.entry(name).or_default().push(SourceMember {
            path: path.to_path_buf(),
            locale,
        });
        total_files += 1;
    }

    let families = file_map
        .into_iter()
        .map(|(name, mut members)| {
            members.sort_by_key(|m| m.locale);
            SourceFamily { name, members }
        })
        .collect();

    Ok(ScanResult {
        root: root.to_path_buf(),
        families,
        total_files,
    })
}

/// Split a table file stem into table name and locale
///
/// Examples:
/// - "Data/Fish" -> ("Data/Fish", English)
/// - "Data/Fish.ru-RU" -> ("Data/Fish", Russian)
/// - "Data/Fish.backup" -> ("Data/Fish.backup", English)
fn extract_table_info(stem: &str) -> (String, Locale) {
    if let Some((name, code)) = stem.rsplit_once('.') {
        if let Some(locale) = Locale::from_code(code) {
            return (name.to_string(), locale);
        }
    }
    (stem.to_string(), Locale::DEFAULT)
}
