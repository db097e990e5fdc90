//! Run configuration

use crate::error::{Error, Result};
use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Parameters of a pipeline run, loadable from a JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Directory holding the unpacked game content
    pub source: PathBuf,
    /// Directory the per-locale documents are written to
    pub output: PathBuf,
    /// Game version embedded in every document and its file name
    pub version: String,
    /// Locale codes to run; every supported locale when absent
    pub locales: Option<Vec<String>>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("/source"),
            output: PathBuf::from("/data"),
            version: "Latest".to_string(),
            locales: None,
        }
    }
}

impl PipelineConfig {
    /// Load a config file from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| Error::FileRead {
            path: path.as_ref().to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| Error::Json {
            path: path.as_ref().to_path_buf(),
            source: e,
        })
    }

    /// Save the config file to JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Locales to run, in the configured order
    pub fn locales(&self) -> Result<Vec<Locale>> {
        match &self.locales {
            Some(codes) => codes.iter().map(|code| code.parse()).collect(),
            None => Ok(Locale::ALL.to_vec()),
        }
    }
}
