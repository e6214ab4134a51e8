//! Application service: the engine's per-cycle entry point.
//!
//! [`AlertService`] owns the active event set and the shared catalog.  It
//! exposes a small cycle API; everything it decides leaves through the
//! [`EventSink`] port, so the whole service is testable with a recording
//! sink.
//!
//! ```text
//!  upstream ──assert_event()──▶ ┌──────────────────────────┐ ──▶ EventSink
//!  peer     ──ingest_frame()──▶ │       AlertService        │
//!                               │ ActiveEventSet · Catalog  │
//!                               └──────────────────────────┘
//! ```
//!
//! Per cycle: `begin_cycle()`, any number of `assert_event()`, then one
//! `evaluate()`.

use std::sync::Arc;

use anyhow::Context;
use log::{debug, info, warn};

use crate::adapters::text::{BuiltinText, TextTable};
use crate::catalog::Catalog;
use crate::category::EventCategory;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::events::ActiveEventSet;
use crate::ids::EventId;
use crate::select::select_highest;
use crate::snapshot::{CarParams, FactoryArgs, VehicleSnapshot};
use crate::wire;

use super::events::{CycleReport, EngineEvent};
use super::ports::EventSink;

// ───────────────────────────────────────────────────────────────
// CycleRequest
// ───────────────────────────────────────────────────────────────

/// Categories to resolve this cycle, in the order alerts should be listed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleRequest {
    pub categories: Vec<EventCategory>,
}

impl CycleRequest {
    pub fn new(categories: impl IntoIterator<Item = EventCategory>) -> Self {
        Self {
            categories: categories.into_iter().collect(),
        }
    }

    /// Every category, in declaration order.
    pub fn all() -> Self {
        Self::new(EventCategory::ALL)
    }

    /// Parse category symbols.  Unknown names are dropped: a newer peer may
    /// ask for categories this build does not have.
    pub fn from_names<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let categories = names
            .into_iter()
            .filter_map(|name| {
                let parsed = EventCategory::from_name(name);
                if parsed.is_none() {
                    debug!("ignoring unknown category '{name}'");
                }
                parsed
            })
            .collect();
        Self { categories }
    }
}

// ───────────────────────────────────────────────────────────────
// AlertService
// ───────────────────────────────────────────────────────────────

pub struct AlertService {
    config: EngineConfig,
    events: ActiveEventSet,
    cycle: u64,
    /// (event, category) pairs resolved last cycle, for edge detection.
    previous: Vec<(EventId, EventCategory)>,
}

impl AlertService {
    /// Construct the service around an already-built catalog.
    pub fn new(config: EngineConfig, catalog: Arc<Catalog>) -> Result<Self> {
        config.validate()?;
        info!(
            "AlertService ready: {} events, {} ms cycle",
            catalog.len(),
            config.cycle_period_ms
        );
        Ok(Self {
            config,
            events: ActiveEventSet::new(catalog),
            cycle: 0,
            previous: Vec::new(),
        })
    }

    /// Build the built-in catalog for `config`, loading its language file
    /// if one is configured.
    pub fn from_config(config: EngineConfig) -> anyhow::Result<Self> {
        let catalog = match &config.language_file {
            Some(path) => {
                let table = TextTable::from_json_file(path)?;
                Catalog::for_config(&config, &table)
            }
            None => Catalog::for_config(&config, &BuiltinText),
        };
        Self::new(config, Arc::new(catalog)).context("invalid engine configuration")
    }

    // ── Cycle API ─────────────────────────────────────────────

    /// Start a new control cycle.
    pub fn begin_cycle(&mut self) {
        self.cycle += 1;
        self.events.clear();
    }

    pub fn assert_event(&mut self, event: impl Into<EventId>, sticky: bool) {
        self.events.add(event, sticky);
    }

    /// Replace this cycle's events with a relayed frame payload.
    pub fn ingest_frame(&mut self, payload: &[u8]) -> Result<()> {
        self.events.ingest_frame(payload)
    }

    /// Factory arguments using the configured units.
    pub fn factory_args<'a>(
        &self,
        car: &'a CarParams,
        state: &'a VehicleSnapshot,
    ) -> FactoryArgs<'a> {
        FactoryArgs::new(car, state, self.config.metric)
    }

    /// Resolve the requested categories and report the outcome to `sink`.
    ///
    /// A factory failure is emitted as [`EngineEvent::ResolutionFailed`]
    /// and returned; no alerts are reported for that cycle.
    pub fn evaluate(
        &mut self,
        request: &CycleRequest,
        args: &FactoryArgs<'_>,
        sink: &mut impl EventSink,
    ) -> Result<CycleReport> {
        let alerts = match self.events.resolve(&request.categories, args) {
            Ok(alerts) => alerts,
            Err(error) => {
                warn!("cycle {}: resolution failed: {error}", self.cycle);
                // nothing was shown this cycle
                self.previous.clear();
                sink.emit(&EngineEvent::ResolutionFailed {
                    cycle: self.cycle,
                    error: error.clone(),
                });
                return Err(error);
            }
        };

        let current: Vec<(EventId, EventCategory)> =
            alerts.iter().map(|a| (a.event, a.category)).collect();
        for alert in &alerts {
            if !self.previous.contains(&(alert.event, alert.category)) {
                sink.emit(&EngineEvent::AlertRaised {
                    cycle: self.cycle,
                    alert: alert.clone(),
                });
            }
        }
        self.previous = current;

        let report = CycleReport {
            cycle: self.cycle,
            selected: select_highest(&alerts).cloned(),
            alerts,
            transitions: self.events.transitions(),
            wire: self.events.to_wire(),
        };
        sink.emit(&EngineEvent::Cycle(report.clone()));
        Ok(report)
    }

    /// Current active set as a length-prefixed wire frame.
    pub fn wire_frame(&self) -> Result<Vec<u8>> {
        let frame = wire::encode_event_frame(&self.events.to_wire(), self.config.max_frame_bytes)?;
        Ok(frame)
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn events(&self) -> &ActiveEventSet {
        &self.events
    }

    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
