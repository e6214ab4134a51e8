//! Recording event sink for integration tests.
//!
//! Keeps every emitted engine event so tests can assert on the full
//! history of a run.

use drive_alerts::app::events::EngineEvent;
use drive_alerts::app::ports::EventSink;
use drive_alerts::{Alert, Error};

pub struct RecordingSink {
    pub events: Vec<EngineEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn raised(&self) -> Vec<&Alert> {
        self.events
            .iter()
            .filter_map(|e| match e {
                EngineEvent::AlertRaised { alert, .. } => Some(alert),
                _ => None,
            })
            .collect()
    }

    pub fn failures(&self) -> Vec<&Error> {
        self.events
            .iter()
            .filter_map(|e| match e {
                EngineEvent::ResolutionFailed { error, .. } => Some(error),
                _ => None,
            })
            .collect()
    }

    pub fn cycles(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, EngineEvent::Cycle(_)))
            .count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &EngineEvent) {
        self.events.push(event.clone());
    }
}
