//! Text sources.
//!
//! [`BuiltinText`] has no overrides, so every lookup falls back to the
//! English strings compiled into the catalog.  [`TextTable`] is a flat JSON
//! object of key → text, typically one file per language:
//!
//! ```json
//! { "header.noEntry": "Commandes indisponibles", "doorOpen.2": "Porte ouverte" }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::app::ports::TextSource;

/// No overrides.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinText;

impl TextSource for BuiltinText {
    fn text(&self, _key: &str) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TextTable {
    entries: HashMap<String, String>,
}

impl TextTable {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading language file {}", path.display()))?;
        let table = Self::from_json(&raw)
            .with_context(|| format!("parsing language file {}", path.display()))?;
        log::info!("loaded {} texts from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn insert(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.insert(key.into(), text.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl TextSource for TextTable {
    fn text(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}
