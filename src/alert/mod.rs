//! Alert presentation and timing.
//!
//! An [`AlertSpec`] is the immutable description of one alert: what to
//! show, how loud, and for how many cycles.  Once the engine resolves it
//! for an active event it becomes an [`Alert`], stamped with the event and
//! category it came from.
//!
//! All timings are stored as whole control cycles, converted once through
//! [`CyclePeriod`](crate::config::CyclePeriod) when the spec is built.

pub mod builder;

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::category::EventCategory;
use crate::ids::EventId;

pub use builder::{AlertBuilder, AlertHeaders};

// ---------------------------------------------------------------------------
// Presentation vocabulary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertStatus {
    Normal,
    UserPrompt,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlertSize {
    None,
    Small,
    Mid,
    Full,
}

/// Alert priority.  Higher wins a contested display slot.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
#[repr(u8)]
pub enum Priority {
    Lowest = 0,
    Lower = 1,
    Low = 2,
    Mid = 3,
    High = 4,
    Highest = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VisualAlert {
    None,
    Fcw,
    SteerRequired,
    BrakePressed,
    WrongGear,
    SeatbeltUnbuckled,
    SpeedTooHigh,
    Ldw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AudibleAlert {
    None,
    Engage,
    Disengage,
    Refuse,
    WarningSoft,
    WarningImmediate,
    Prompt,
    PromptRepeat,
    PromptDistracted,
    Warning,
    #[serde(rename = "dingdong")]
    DingDong,
}

// ---------------------------------------------------------------------------
// AlertSpec
// ---------------------------------------------------------------------------

/// Immutable description of one alert's presentation and timing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSpec {
    pub text1: String,
    pub text2: String,
    pub status: AlertStatus,
    pub size: AlertSize,
    pub priority: Priority,
    pub visual: VisualAlert,
    pub audible: AudibleAlert,
    /// Display duration (cycles).
    pub duration: u32,
    /// Cycles between re-triggers of the visual/audible cue; 0 = no repeat.
    pub repeat: u32,
    /// Cycles an event must be continuously asserted before this alert may
    /// fire.
    pub creation_delay: u32,
}

impl AlertSpec {
    #[must_use]
    pub fn with_repeat(mut self, cycles: u32) -> Self {
        self.repeat = cycles;
        self
    }

    #[must_use]
    pub fn with_creation_delay(mut self, cycles: u32) -> Self {
        self.creation_delay = cycles;
        self
    }

    /// Creation-delay gate: true once an event asserted for `streak`
    /// previous consecutive cycles (plus the current one) has been active
    /// long enough.
    pub fn ready(&self, streak: u32) -> bool {
        streak.saturating_add(1) >= self.creation_delay
    }
}

impl fmt::Display for AlertSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} {:?} {:?} {:?}",
            self.text1, self.text2, self.priority, self.visual, self.audible
        )
    }
}

// ---------------------------------------------------------------------------
// Resolved alert
// ---------------------------------------------------------------------------

/// An alert resolved for one active event under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub spec: AlertSpec,
    /// Originating event.
    pub event: EventId,
    /// Category the alert was resolved under.
    pub category: EventCategory,
}

impl Alert {
    pub fn new(spec: AlertSpec, event: EventId, category: EventCategory) -> Self {
        Self {
            spec,
            event,
            category,
        }
    }

    pub fn priority(&self) -> Priority {
        self.spec.priority
    }

    /// Strict priority comparison.  Equal priorities never outrank each
    /// other; see [`select_highest`](crate::select::select_highest) for the
    /// tie-break.
    pub fn outranks(&self, other: &Alert) -> bool {
        self.spec.priority > other.spec.priority
    }

    /// `"<event>/<category>"`, e.g. `doorOpen/softDisable`.
    pub fn alert_type(&self) -> String {
        format!("{}/{}", self.event, self.category)
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.alert_type(), self.spec)
    }
}
