//! JSON catalog documents.
//!
//! An authoritative alternative to the built-in table:
//!
//! ```json
//! { "events": {
//!     "doorOpen": {
//!       "noEntry":     { "alert": { "text1": "Controls Unavailable", "text2": "Door Open",
//!                                   "status": "normal", "size": "mid", "priority": "low",
//!                                   "audible": "refuse", "duration_ms": 3000 } },
//!       "softDisable": { "factory": { "name": "userSoftDisable", "args": ["Door Open"] } }
//!     },
//!     "stockFcw": {}
//! } }
//! ```
//!
//! Durations are milliseconds and go through the catalog's cycle period.
//! Because the document is authoritative, unknown names and bad factory
//! arity are load errors rather than being skipped.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::alert::builder::ms;
use crate::alert::{AlertBuilder, AlertSize, AlertStatus, AudibleAlert, Priority, VisualAlert};
use crate::category::EventCategory;
use crate::error::CatalogError;
use crate::ids::EventName;

use super::{AlertSource, Catalog, DynamicAlert, FactoryId};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// event name → category name → source
    pub events: BTreeMap<String, BTreeMap<String, SourceDoc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SourceDoc {
    Alert(AlertDoc),
    Factory(FactoryRef),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertDoc {
    pub text1: String,
    #[serde(default)]
    pub text2: String,
    pub status: AlertStatus,
    pub size: AlertSize,
    pub priority: Priority,
    #[serde(default = "no_visual")]
    pub visual: VisualAlert,
    #[serde(default = "no_audible")]
    pub audible: AudibleAlert,
    pub duration_ms: u64,
    #[serde(default)]
    pub repeat_ms: u64,
    #[serde(default)]
    pub creation_delay_ms: u64,
}

fn no_visual() -> VisualAlert {
    VisualAlert::None
}

fn no_audible() -> AudibleAlert {
    AudibleAlert::None
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactoryRef {
    pub name: String,
    #[serde(default)]
    pub args: Vec<String>,
}

impl CatalogDocument {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading catalog {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("parsing catalog {}", path.display()))
    }
}

impl AlertDoc {
    fn build(&self, b: &AlertBuilder) -> AlertSource {
        let spec = b.alert(
            self.text1.clone(),
            self.text2.clone(),
            self.status,
            self.size,
            self.priority,
            self.visual,
            self.audible,
            ms(self.duration_ms),
        );
        let spec = b.repeating(spec, ms(self.repeat_ms));
        AlertSource::Fixed(b.delayed(spec, ms(self.creation_delay_ms)))
    }
}

impl FactoryRef {
    fn resolve(&self) -> Result<AlertSource, CatalogError> {
        let factory = FactoryId::from_name(&self.name)
            .ok_or_else(|| CatalogError::UnknownFactory(self.name.clone()))?;
        if self.args.len() != factory.arity() {
            return Err(CatalogError::FactoryArity {
                factory,
                expected: factory.arity(),
                found: self.args.len(),
            });
        }
        Ok(AlertSource::Dynamic(DynamicAlert {
            factory,
            args: self.args.clone(),
        }))
    }
}

impl Catalog {
    /// Build a catalog from an authoritative document.
    pub fn from_document(doc: &CatalogDocument, builder: AlertBuilder) -> Result<Self, CatalogError> {
        let mut cat = Catalog::new(builder);
        for (event_name, slots) in &doc.events {
            let event = EventName::from_name(event_name)
                .ok_or_else(|| CatalogError::UnknownEvent(event_name.clone()))?;
            cat.declare(event);
            for (category_name, source) in slots {
                let category = EventCategory::from_name(category_name)
                    .ok_or_else(|| CatalogError::UnknownCategory(category_name.clone()))?;
                let source = match source {
                    SourceDoc::Alert(alert) => alert.build(cat.builder()),
                    SourceDoc::Factory(factory) => factory.resolve()?,
                };
                cat.insert(event, category, source);
            }
        }
        Ok(cat)
    }
}
