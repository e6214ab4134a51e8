//! Port traits: the boundary between the engine and its collaborators.
//!
//! ```text
//!   TextSource ──▶ AlertService ──▶ EventSink
//! ```
//!
//! Localised text comes in through [`TextSource`]; resolved alerts and wire
//! snapshots leave through [`EventSink`].  The service consumes both via
//! generics or trait objects, so the core never touches files, UI or
//! transport directly.

use super::events::EngineEvent;

// ───────────────────────────────────────────────────────────────
// Text port (driven adapter: localisation → engine)
// ───────────────────────────────────────────────────────────────

/// Localised text lookup.  Must be a pure function of `key`.
pub trait TextSource {
    /// Text for `key`, or `None` when this source has no override.
    fn text(&self, key: &str) -> Option<String>;

    /// Text for `key`, falling back to the built-in English string.
    fn text_or(&self, key: &str, fallback: &str) -> String {
        self.text(key).unwrap_or_else(|| fallback.to_owned())
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: engine → UI / logging / IPC)
// ───────────────────────────────────────────────────────────────

/// One-way, non-blocking hand-off of what the engine decided this cycle.
///
/// Implementations must not block the control loop; anything slow belongs
/// on the far side of a queue.
pub trait EventSink {
    fn emit(&mut self, event: &EngineEvent);
}
