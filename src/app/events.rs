//! Outbound engine events.
//!
//! The [`AlertService`](super::service::AlertService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them: log, render, or relay the wire
//! snapshot to another process.

use crate::alert::Alert;
use crate::category::Transition;
use crate::error::Error;
use crate::wire::WireEvent;

/// Structured events emitted by the engine.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// Resolution finished for a cycle.
    Cycle(CycleReport),

    /// An alert started firing (first cycle it was resolved after having
    /// been absent).
    AlertRaised { cycle: u64, alert: Alert },

    /// Resolution failed; the cycle produced no alerts.
    ResolutionFailed { cycle: u64, error: Error },
}

/// Everything a consumer needs from one control cycle.
#[derive(Debug, Clone, Default)]
pub struct CycleReport {
    pub cycle: u64,
    /// Resolved alerts in resolution order.
    pub alerts: Vec<Alert>,
    /// Highest-priority alert, earliest on ties.
    pub selected: Option<Alert>,
    /// Transitions justified by the active events, most severe first.
    pub transitions: Vec<Transition>,
    /// Wire form of the active event set.
    pub wire: Vec<WireEvent>,
}
