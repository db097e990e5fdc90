//! Per-locale runs and output documents

use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::locale::Locale;
use crate::model::LocaleDocument;
use crate::registry::Registry;
use crate::source::RunContext;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Build the enriched document of one locale
pub fn run_locale(source_dir: &Path, version: &str, locale: Locale) -> Result<LocaleDocument> {
    info!(locale = %locale, "processing {}", locale.language());

    let ctx = RunContext::new(source_dir, locale);
    let fish = Registry::build(&ctx)?.into_fish();

    Ok(LocaleDocument {
        version: version.to_string(),
        lang_code: locale.code().map(str::to_string),
        language: locale.language().to_string(),
        fish,
    })
}

/// File name of a locale's document, e.g. `1.5.6 (Deutsch).json`
pub fn output_file_name(version: &str, locale: Locale) -> String {
    format!("{} ({}).json", version, locale.language())
}

/// Build one locale's document and write it to `output_dir`
///
/// The document is fully serialized before anything is written, so a failed
/// locale leaves no file behind.
pub fn write_locale(
    source_dir: &Path,
    output_dir: &Path,
    version: &str,
    locale: Locale,
) -> Result<PathBuf> {
    let document = run_locale(source_dir, version, locale)?;
    let json = serde_json::to_string(&document)?;

    fs::create_dir_all(output_dir)?;
    let path = output_dir.join(output_file_name(version, locale));
    fs::write(&path, json)?;

    info!(locale = %locale, fish = document.fish.len(), "wrote {}", path.display());
    Ok(path)
}

/// Outcome of a run over several locales
#[derive(Debug, Default)]
pub struct RunReport {
    /// Documents written, in run order
    pub written: Vec<(Locale, PathBuf)>,
    /// Locales that failed and why
    pub failed: Vec<(Locale, Error)>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run every configured locale, one after another
///
/// Each locale gets its own registry; a failing locale is recorded and the
/// remaining ones still run.
pub fn run_all(config: &PipelineConfig) -> Result<RunReport> {
    let locales = config.locales()?;
    let mut report = RunReport::default();

    for locale in locales {
        match write_locale(&config.source, &config.output, &config.version, locale) {
            Ok(path) => report.written.push((locale, path)),
            Err(e) => {
                error!(locale = %locale, "{}", e);
                report.failed.push((locale, e));
            }
        }
    }

    Ok(report)
}
