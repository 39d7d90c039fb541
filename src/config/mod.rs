
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::input::KeyReader;

/// Key-viewer settings, read from an optional JSON file. Every field has a
/// default so a partial (or absent) file is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input grammar override ("ansi" or "console"); absent means the
    /// platform default.
    pub grammar: Option<String>,
    /// Whether key events are also written to a session log file.
    pub file_logging_enabled: bool,
    /// Sleep between input polls, in milliseconds.
    pub poll_interval_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grammar: None,
            file_logging_enabled: true,
            poll_interval_ms: 10,
        }
    }
}

impl Config {
    /// Load from `path`. A missing file yields the defaults; a present but
    /// malformed file is an error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        serde_json::from_str(&raw)
            .map_err(|err| Error::config(format!("{}: {err}", path.display())))
    }

    /// Build the key reader this config asks for.
    pub fn key_reader(&self) -> Result<KeyReader> {
        match &self.grammar {
            Some(name) => KeyReader::with_grammar_name(name),
            None => Ok(KeyReader::platform_default()),
        }
    }
}
