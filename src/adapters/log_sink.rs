//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing one line per engine event through
//! the `log` facade.  An IPC adapter relaying the wire snapshot would
//! implement the same trait.

use log::{debug, error, info};

use crate::app::events::EngineEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`EngineEvent`].
#[derive(Debug, Default)]
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &EngineEvent) {
        match event {
            EngineEvent::Cycle(report) => {
                debug!(
                    "WIRE | cycle={} | events={} | alerts={} | selected={} | transitions={:?}",
                    report.cycle,
                    report.wire.len(),
                    report.alerts.len(),
                    report
                        .selected
                        .as_ref()
                        .map_or_else(|| "-".to_owned(), |a| a.alert_type()),
                    report.transitions,
                );
            }
            EngineEvent::AlertRaised { cycle, alert } => {
                info!("ALERT | cycle={cycle} | {alert}");
            }
            EngineEvent::ResolutionFailed { cycle, error: e } => {
                error!("FAIL | cycle={cycle} | {e}");
            }
        }
    }
}
