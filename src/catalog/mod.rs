//! Immutable event catalog.
//!
//! Maps every known event to the alert it raises under each category.  An
//! entry is either a fixed [`AlertSpec`] or a reference to a dynamic
//! factory ([`AlertSource`]).  Built once at startup (from the built-in
//! table or a JSON document) and then shared read-only, typically behind an
//! `Arc`.

mod builtin;
pub mod document;
pub mod factories;

use std::collections::BTreeMap;

use crate::alert::builder::ms;
use crate::alert::{AlertBuilder, AlertHeaders, AlertSpec};
use crate::app::ports::TextSource;
use crate::category::{CategoryFlags, EventCategory};
use crate::config::EngineConfig;
use crate::error::{CatalogError, FactoryError};
use crate::ids::EventId;
use crate::snapshot::FactoryArgs;

pub use document::CatalogDocument;
pub use factories::{FactoryContext, FactoryDescriptor, FactoryId, FACTORY_TABLE};

/// Default soft-disable escalation threshold.
const ESCALATE_BELOW: core::time::Duration = ms(500);

// ---------------------------------------------------------------------------
// Entries
// ---------------------------------------------------------------------------

/// Factory reference plus the text arguments bound at catalog load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DynamicAlert {
    pub factory: FactoryId,
    pub args: Vec<String>,
}

/// Where a catalog slot gets its alert from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AlertSource {
    Fixed(AlertSpec),
    Dynamic(DynamicAlert),
}

impl AlertSource {
    pub fn dynamic<const N: usize>(factory: FactoryId, args: [String; N]) -> Self {
        Self::Dynamic(DynamicAlert {
            factory,
            args: args.into(),
        })
    }
}

impl From<AlertSpec> for AlertSource {
    fn from(spec: AlertSpec) -> Self {
        Self::Fixed(spec)
    }
}

/// One event's slots, indexed by [`EventCategory::index`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventEntry {
    slots: [Option<AlertSource>; EventCategory::COUNT],
}

impl EventEntry {
    pub fn get(&self, category: EventCategory) -> Option<&AlertSource> {
        self.slots[category.index()].as_ref()
    }

    fn set(&mut self, category: EventCategory, source: AlertSource) {
        self.slots[category.index()] = Some(source);
    }

    /// Categories this entry carries an alert for.
    pub fn flags(&self) -> CategoryFlags {
        EventCategory::ALL
            .into_iter()
            .filter(|c| self.slots[c.index()].is_some())
            .collect()
    }

    /// True for state-signalling-only events with no alert at all.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct Catalog {
    builder: AlertBuilder,
    /// Soft-disable countdowns shorter than this escalate (cycles).
    escalate_below: u32,
    entries: BTreeMap<EventId, EventEntry>,
}

impl Catalog {
    /// Empty catalog.  Use [`insert`](Self::insert) / [`declare`](Self::declare)
    /// to populate it before sharing.
    pub fn new(builder: AlertBuilder) -> Self {
        let escalate_below = builder.cycles(ESCALATE_BELOW);
        Self {
            builder,
            escalate_below,
            entries: BTreeMap::new(),
        }
    }

    /// Built-in catalog timed and localised for `config`.
    pub fn for_config(config: &EngineConfig, texts: &dyn TextSource) -> Self {
        let builder = AlertBuilder::new(config.period(), AlertHeaders::from_texts(texts));
        Self::builtin(builder, texts).with_escalation_cycles(config.soft_disable_immediate_cycles())
    }

    #[must_use]
    pub fn with_escalation_cycles(mut self, cycles: u32) -> Self {
        self.escalate_below = cycles;
        self
    }

    pub fn builder(&self) -> &AlertBuilder {
        &self.builder
    }

    pub fn escalation_cycles(&self) -> u32 {
        self.escalate_below
    }

    /// Register an event with no alerts.  No-op if already present.
    pub fn declare(&mut self, event: impl Into<EventId>) {
        self.entries.entry(event.into()).or_default();
    }

    /// Set (or replace) one slot.
    pub fn insert(
        &mut self,
        event: impl Into<EventId>,
        category: EventCategory,
        source: impl Into<AlertSource>,
    ) {
        self.entries
            .entry(event.into())
            .or_default()
            .set(category, source.into());
    }

    pub fn entry(&self, event: EventId) -> Option<&EventEntry> {
        self.entries.get(&event)
    }

    pub fn contains(&self, event: EventId) -> bool {
        self.entries.contains_key(&event)
    }

    pub fn get(&self, event: EventId, category: EventCategory) -> Option<&AlertSource> {
        self.entries.get(&event).and_then(|e| e.get(category))
    }

    /// Like [`get`](Self::get), for callers that treat absence as a defect.
    pub fn require(
        &self,
        event: EventId,
        category: EventCategory,
    ) -> Result<&AlertSource, CatalogError> {
        self.get(event, category)
            .ok_or(CatalogError::MissingEntry { event, category })
    }

    /// Category flags for `event`; empty for unknown ids.
    pub fn flags(&self, event: EventId) -> CategoryFlags {
        self.entries
            .get(&event)
            .map(EventEntry::flags)
            .unwrap_or_default()
    }

    /// The fixed identifier universe, ascending.
    pub fn ids(&self) -> impl Iterator<Item = EventId> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Concrete spec for `source`, running its factory if dynamic.
    pub fn build(
        &self,
        source: &AlertSource,
        args: &FactoryArgs<'_>,
    ) -> Result<AlertSpec, FactoryError> {
        match source {
            AlertSource::Fixed(spec) => Ok(spec.clone()),
            AlertSource::Dynamic(dynamic) => {
                let ctx = FactoryContext {
                    factory: dynamic.factory,
                    builder: &self.builder,
                    bound: &dynamic.args,
                    escalate_below: self.escalate_below,
                };
                factories::dispatch(&ctx, args)
            }
        }
    }
}
