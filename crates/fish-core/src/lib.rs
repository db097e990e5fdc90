//! fish-core: Core library for preparing per-locale fish data documents
//!
//! This library provides functionality to:
//! - Load `/`-delimited game data tables for a locale, falling back to the
//!   default language when a translation is missing
//! - Parse fish, location, bundle and gift taste records into typed records
//! - Cross-reference them into one enriched record per fish
//! - Write one JSON document per supported locale

pub mod collect;
pub mod config;
pub mod error;
pub mod locale;
pub mod model;
pub mod pipeline;
pub mod processors;
pub mod registry;
pub mod scanner;
pub mod source;

pub use config::PipelineConfig;
pub use error::{Error, Result};
pub use locale::{Locale, Translatable};
pub use model::{Bundle, Character, Fish, LocaleDocument, Location, PreferenceType, Season, Weather};
pub use pipeline::{output_file_name, run_all, run_locale, write_locale, RunReport};
pub use processors::FishExtension;
pub use registry::Registry;
pub use scanner::{scan_source, ScanResult, SourceFamily, SourceMember};
pub use source::{RunContext, SourceTable};
